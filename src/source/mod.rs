//! Document sources: where the text of a document comes from.

pub mod adapter;
pub mod fs;
pub mod memory;

pub use adapter::DocumentSource;
pub use fs::FsSource;
pub use memory::MemorySource;

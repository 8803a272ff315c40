pub mod source;
pub mod store;

pub use source::{directory_sources, FileSource, MemorySource, RecordSource};
pub use store::{ingest, ingest_dir, load_series};

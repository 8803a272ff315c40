//! Named record sources
//!
//! Ingestion reads from an injected list of named sources instead of
//! scanning the filesystem directly, so the engine is testable without a
//! real directory. `directory_sources` is the thin filesystem layer that
//! derives symbol names from file stems.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Named source of raw per-symbol price rows
pub trait RecordSource {
    /// Symbol key this source contributes to the ingested mapping
    fn symbol(&self) -> &str;

    /// Open the underlying delimited text for reading
    fn open(&self) -> Result<Box<dyn Read>>;
}

/// Source backed by a delimited text file on disk
///
/// The symbol is the file name without its extension, so `data/ADI.csv`
/// ingests as `"ADI"`.
#[derive(Debug, Clone)]
pub struct FileSource {
    symbol: String,
    path: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let symbol = path
            .file_stem()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::Io(format!("Invalid source file name: {}", path.display())))?
            .to_string();
        Ok(Self { symbol, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for FileSource {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn open(&self) -> Result<Box<dyn Read>> {
        let file = File::open(&self.path)
            .map_err(|e| Error::Io(format!("Failed to open {}: {}", self.path.display(), e)))?;
        Ok(Box::new(file))
    }
}

/// Source holding its rows in memory, for tests and embedded data
#[derive(Debug, Clone)]
pub struct MemorySource {
    symbol: String,
    body: String,
}

impl MemorySource {
    pub fn new(symbol: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            body: body.into(),
        }
    }
}

impl RecordSource for MemorySource {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn open(&self) -> Result<Box<dyn Read>> {
        Ok(Box::new(std::io::Cursor::new(self.body.clone().into_bytes())))
    }
}

/// List one `FileSource` per regular file in `dir`
///
/// Subdirectories are skipped. Sources are sorted by symbol so batch
/// ingestion order does not depend on directory iteration order.
pub fn directory_sources<P: AsRef<Path>>(dir: P) -> Result<Vec<FileSource>> {
    let entries = std::fs::read_dir(dir.as_ref())
        .map_err(|e| Error::Io(format!("Failed to read source dir: {}", e)))?;

    let mut sources = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::Io(format!("Failed to read entry: {}", e)))?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        sources.push(FileSource::new(&path)?);
    }

    sources.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    Ok(sources)
}

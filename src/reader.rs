use anyhow::{bail, Context, Result};
use memmap2::Mmap;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::normalization::flatten_line_breaks;

/// Configuration for file reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            buffer_size: 8192, // WHY: 8KB is optimal for most filesystems and network storage
        }
    }
}

/// Statistics for one document read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub bytes_read: u64,
    pub duration_ms: u64,
}

/// A loaded document with line breaks already flattened
#[derive(Debug, Clone)]
pub struct Document {
    pub text: String,
    pub stats: ReadStats,
}

/// Read a whole document with async buffered I/O
///
/// Fails when the file is missing, empty, or not valid UTF-8.
pub async fn read_document<P: AsRef<Path>>(file_path: P, config: &ReaderConfig) -> Result<Document> {
    let path = file_path.as_ref();
    let start_time = Instant::now();

    debug!("Starting async read of file: {}", path.display());

    let file = match File::open(path).await {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("File not found: {}", path.display());
            bail!("File not found: {}", path.display());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open file {}", path.display()));
        }
    };

    let metadata = file
        .metadata()
        .await
        .with_context(|| format!("Failed to stat file {}", path.display()))?;
    if metadata.len() == 0 {
        bail!("File is empty: {}", path.display());
    }

    // WHY: BufReader with custom buffer size reduces syscalls and improves throughput
    let mut reader = BufReader::with_capacity(config.buffer_size, file);
    let mut raw = String::with_capacity(metadata.len() as usize);
    reader
        .read_to_string(&mut raw)
        .await
        .with_context(|| format!("Failed to read {} as UTF-8 text", path.display()))?;

    Ok(finish(path, &raw, start_time))
}

/// Read a whole document through a memory map
///
/// Same failure modes as [`read_document`].
pub fn read_document_mmap<P: AsRef<Path>>(file_path: P) -> Result<Document> {
    let path = file_path.as_ref();
    let start_time = Instant::now();

    debug!("Starting mmap read of file: {}", path.display());

    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("File not found: {}", path.display());
            bail!("File not found: {}", path.display());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open file {}", path.display()));
        }
    };

    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to stat file {}", path.display()))?;
    // WHY: mapping a zero-length file fails on some platforms, so check first
    if metadata.len() == 0 {
        bail!("File is empty: {}", path.display());
    }

    // SAFETY: the map is read-only and dropped before this function returns
    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("Failed to memory-map {}", path.display()))?;
    let raw = std::str::from_utf8(&mmap)
        .with_context(|| format!("Failed to read {} as UTF-8 text", path.display()))?;

    Ok(finish(path, raw, start_time))
}

fn finish(path: &Path, raw: &str, start_time: Instant) -> Document {
    let stats = ReadStats {
        file_path: path.display().to_string(),
        bytes_read: raw.len() as u64,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };

    info!(
        "Successfully read {}: {} bytes in {}ms",
        stats.file_path, stats.bytes_read, stats.duration_ms
    );

    Document {
        text: flatten_line_breaks(raw),
        stats,
    }
}

//! Documents read from and normalized text written to the file system.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use neardup::{Document, DocumentSource, NeardupError, NormalizedSink};

/// Format of the timestamped output directory.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Reads documents from file paths, labeling them by the given path.
pub struct FileSource;

impl DocumentSource for FileSource {
    fn fetch(&self, id: &str) -> neardup::Result<Document> {
        fs::read(id)
            .map(|content| Document::new(id, content))
            .map_err(|source| NeardupError::SourceUnavailable {
                id: id.to_string(),
                source,
            })
    }
}

/// Writes normalized text into files of a directory.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Creates the directory if it does not exist.
    pub fn create<P>(dir: P) -> io::Result<Self>
    where
        P: Into<PathBuf>,
    {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Gets the path storing the document labeled `label`.
    pub fn path_of(&self, label: &str) -> PathBuf {
        self.dir.join(file_name(label))
    }
}

impl NormalizedSink for DirectorySink {
    fn store(&self, label: &str, normalized: &[u8]) -> io::Result<()> {
        let path = self.path_of(label);
        log::debug!("Writing {}", path.display());
        fs::write(path, normalized)
    }
}

/// Flattens a label into a single file name, e.g., `https://a.com/x/` into `https:__a.com_x_`.
pub fn file_name(label: &str) -> String {
    let name: String = label
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    if name.is_empty() || name == "." || name == ".." {
        format!("_{name}")
    } else {
        name
    }
}

/// Resolves the output directory, nesting a directory named after `now` if `timestamped`.
pub fn output_dir<Tz>(base: &Path, timestamped: bool, now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if timestamped {
        base.join(now.format(TIMESTAMP_FORMAT).to_string())
    } else {
        base.to_path_buf()
    }
}

//! Where command output goes besides stdout.

use crate::error::HasagiError;

use common::to_pretty_json;
use models::HttpMethod;

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tokio::fs::{File, OpenOptions, create_dir_all, write};
use tokio::io::AsyncWriteExt;

/// File `listen` appends to inside an output directory.
pub const EVENTS_FILE_NAME: &str = "events.json";

/// `--out` value turned into a path. An empty value means the current directory.
pub fn target_path(option: Option<&str>) -> Option<PathBuf> {
    option.map(|value| {
        if value.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(value)
        }
    })
}

/// A resolved `--out` target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// An existing directory; the command picks the file name.
    Directory(PathBuf),
    /// Anything else, used verbatim.
    File(PathBuf),
}

impl OutputTarget {
    /// Resolve an `--out` option. `None` means no file output.
    ///
    /// The target is stat-ed once; if that fails it is a file path.
    pub fn resolve(option: Option<&str>) -> Option<Self> {
        let path = target_path(option)?;

        let target = match std::fs::metadata(&path) {
            Ok(metadata) if metadata.is_dir() => OutputTarget::Directory(path),
            _ => OutputTarget::File(path),
        };

        Some(target)
    }

    /// The file to write, using `file_name` inside a directory target.
    pub fn file_path(&self, file_name: &str) -> PathBuf {
        match self {
            OutputTarget::Directory(dir) => dir.join(file_name),
            OutputTarget::File(path) => path.clone(),
        }
    }
}

/// `{METHOD}-{path with '/' as '_'}-{epoch millis}.json`
pub fn request_file_name(method: HttpMethod, path: &str, timestamp_millis: u128) -> String {
    format!(
        "{}-{}-{timestamp_millis}.json",
        method.as_str(),
        path.replace('/', "_")
    )
}

pub fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default()
}

/// Write `text` and a newline, then flush.
pub fn write_line<W>(writer: &mut W, text: &str) -> Result<(), HasagiError>
where
    W: Write + ?Sized,
{
    writeln!(writer, "{text}")
        .and_then(|()| writer.flush())
        .map_err(|e| HasagiError::stdout(e))
}

/// Print `text` on stdout. A closed pipe is an error, not a panic.
pub fn print_line(text: &str) -> Result<(), HasagiError> {
    write_line(&mut std::io::stdout().lock(), text)
}

/// Write `value` as four-space pretty JSON, replacing any existing file.
pub async fn write_pretty_json<T>(path: &Path, value: &T) -> Result<(), HasagiError>
where
    T: Serialize + ?Sized,
{
    let contents = to_pretty_json(value)?;
    write_text(path, &contents).await
}

pub async fn write_text(path: &Path, contents: &str) -> Result<(), HasagiError> {
    write(path, contents)
        .await
        .map_err(|e| HasagiError::output(path, e))
}

pub async fn ensure_directory(path: &Path) -> Result<(), HasagiError> {
    create_dir_all(path)
        .await
        .map_err(|e| HasagiError::output(path, e))
}

/// Append-only event log: pretty JSON blobs, each followed by a newline.
#[derive(Debug)]
pub struct EventSink {
    file: File,
    path: PathBuf,
}

impl EventSink {
    pub async fn open(path: PathBuf) -> Result<Self, HasagiError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| HasagiError::output(&path, e))?;

        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `blob` and a newline in a single write.
    pub async fn append(&mut self, blob: &str) -> Result<(), HasagiError> {
        let mut record = String::with_capacity(blob.len() + 1);
        record.push_str(blob);
        record.push('\n');

        self.file
            .write_all(record.as_bytes())
            .await
            .map_err(|e| HasagiError::output(&self.path, e))?;
        self.file
            .flush()
            .await
            .map_err(|e| HasagiError::output(&self.path, e))
    }
}

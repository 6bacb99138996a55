// File: src/persistence.rs
use chrono::{DateTime, Utc};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

const MAX_NAME_ATTEMPTS: usize = 16;
const MAX_EXTENSION_LEN: usize = 16;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("transcript I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("no free transcript name for {0} after repeated collisions")]
    NameExhausted(String),
}

/// Writes conversion results into a single designated directory.
///
/// File names are derived only from the save time and a sanitized extension,
/// so nothing a client uploads can steer a write outside `dir`.
#[derive(Debug, Clone)]
pub struct TranscriptStore {
    dir: PathBuf,
}

impl TranscriptStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Atomically writes `contents` and returns the final path. Existing
    /// files are never overwritten.
    pub fn save(
        &self,
        contents: &str,
        upload_name: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<PathBuf, StoreError> {
        let label = ts_label(now);
        let extension = upload_name.and_then(safe_extension);

        let mut temp_file = NamedTempFile::new_in(&self.dir)?;
        temp_file.write_all(contents.as_bytes())?;
        temp_file.flush()?;

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let path = self.dir.join(file_name(&label, attempt, extension));
            match temp_file.persist_noclobber(&path) {
                Ok(_) => return Ok(path),
                Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => temp_file = e.file,
                Err(e) => return Err(e.error.into()),
            }
        }

        Err(StoreError::NameExhausted(label))
    }
}

/// UTC time label free of spaces and colons, nanosecond precision.
pub fn ts_label(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d_%H-%M-%S%.9f_UTC").to_string()
}

/// Extension of the uploaded file name, kept only when it is short plain
/// ASCII alphanumerics.
pub fn safe_extension(upload_name: &str) -> Option<&str> {
    let ext = Path::new(upload_name).extension()?.to_str()?;
    let valid = !ext.is_empty()
        && ext.len() <= MAX_EXTENSION_LEN
        && ext.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then_some(ext)
}

fn file_name(label: &str, attempt: usize, extension: Option<&str>) -> String {
    let mut name = label.to_string();
    if attempt > 0 {
        name.push_str(&format!("-{attempt}"));
    }
    if let Some(ext) = extension {
        name.push('.');
        name.push_str(ext);
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn label_has_no_spaces_or_colons() {
        let label = ts_label(fixed_time());
        assert_eq!(label, "2024-03-09_14-05-07.000000000_UTC");
    }

    #[test]
    fn extension_sanitizing() {
        assert_eq!(safe_extension("notes.txt"), Some("txt"));
        assert_eq!(safe_extension("archive.tar.gz"), Some("gz"));
        assert_eq!(safe_extension("noext"), None);
        assert_eq!(safe_extension("../../etc/passwd"), None);
        assert_eq!(safe_extension("x./../evil"), None);
        assert_eq!(safe_extension("weird.t-x"), None);
        assert_eq!(safe_extension("long.abcdefghijklmnopq"), None);
    }

    #[test]
    fn saves_inside_store_dir() {
        let tmp = TempDir::new().unwrap();
        let store = TranscriptStore::open(tmp.path().join("out")).unwrap();

        let path = store.save("... --- ...", Some("msg.txt"), fixed_time()).unwrap();

        assert_eq!(path.parent(), Some(store.dir()));
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("2024-03-09_14-05-07.000000000_UTC.txt")
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "... --- ...");
    }

    #[test]
    fn hostile_upload_name_cannot_escape() {
        let tmp = TempDir::new().unwrap();
        let store = TranscriptStore::open(tmp.path()).unwrap();

        let path = store.save("SOS", Some("../../../tmp/pwn.sh/.."), fixed_time()).unwrap();

        assert_eq!(path.parent(), Some(store.dir()));
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("2024-03-09_14-05-07.000000000_UTC")
        );
    }

    #[test]
    fn collisions_get_a_suffix() {
        let tmp = TempDir::new().unwrap();
        let store = TranscriptStore::open(tmp.path()).unwrap();

        let first = store.save("one", Some("a.txt"), fixed_time()).unwrap();
        let second = store.save("two", Some("a.txt"), fixed_time()).unwrap();

        assert_ne!(first, second);
        assert!(second.to_string_lossy().ends_with("_UTC-1.txt"));
        assert_eq!(fs::read_to_string(&first).unwrap(), "one");
        assert_eq!(fs::read_to_string(&second).unwrap(), "two");
    }
}

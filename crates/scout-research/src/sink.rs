//! Append-only dated research notes.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::ResearchError;

/// A directory of `YYYY-MM-DD.md` notes. Citations are only ever appended.
#[derive(Debug, Clone)]
pub struct DailyNote {
    dir: PathBuf,
}

impl DailyNote {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("{}.md", date.format("%Y-%m-%d")))
    }

    /// Header written once when a day's note is created.
    #[must_use]
    pub fn header(date: NaiveDate) -> String {
        format!(
            "# Daily Research Notes - {}\n\n**Auto-generated research findings**\n\n---\n\n",
            date.format("%Y-%m-%d")
        )
    }

    /// Append `payload` to the note for `date`, creating the directory and
    /// the headed file as needed. Returns the note path.
    ///
    /// No locking: concurrent runs on the same day interleave.
    ///
    /// # Errors
    ///
    /// Returns [`ResearchError::Io`] when the directory or file cannot be
    /// created or written.
    pub fn append(&self, date: NaiveDate, payload: &str) -> Result<PathBuf, ResearchError> {
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source: std::io::Error| ResearchError::Io { path, source }
        };

        std::fs::create_dir_all(&self.dir).map_err(io_err(&self.dir))?;

        let path = self.path_for(date);
        let is_new = !path.exists();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(io_err(&path))?;

        if is_new {
            file.write_all(Self::header(date).as_bytes())
                .map_err(io_err(&path))?;
        }
        file.write_all(payload.as_bytes()).map_err(io_err(&path))?;

        tracing::info!(path = %path.display(), bytes = payload.len(), "saved citations");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn new_note_gets_header_then_payload() {
        let temp = tempfile::tempdir().unwrap();
        let note = DailyNote::new(temp.path().join("notes"));

        let path = note.append(day(), "## First\n\n").unwrap();

        assert_eq!(path, temp.path().join("notes").join("2025-03-14.md"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "# Daily Research Notes - 2025-03-14\n\n**Auto-generated research findings**\n\n---\n\n## First\n\n"
        );
    }

    #[test]
    fn existing_note_is_appended_without_second_header() {
        let temp = tempfile::tempdir().unwrap();
        let note = DailyNote::new(temp.path());

        note.append(day(), "one\n").unwrap();
        let path = note.append(day(), "two\n").unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.matches("# Daily Research Notes").count(), 1);
        assert!(text.ends_with("one\ntwo\n"));
    }

    #[test]
    fn empty_payload_still_creates_headed_note() {
        let temp = tempfile::tempdir().unwrap();
        let path = DailyNote::new(temp.path()).append(day(), "").unwrap();
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            DailyNote::header(day())
        );
    }

    #[test]
    fn unwritable_directory_is_io_error() {
        let temp = tempfile::tempdir().unwrap();
        let blocker = temp.path().join("file");
        std::fs::write(&blocker, "x").unwrap();

        let err = DailyNote::new(blocker.join("notes"))
            .append(day(), "x")
            .unwrap_err();
        assert!(matches!(err, ResearchError::Io { .. }));
    }
}

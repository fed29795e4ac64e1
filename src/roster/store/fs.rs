use super::{apply_rewrite, excluding, transforming, Rewrite, StudentStore};
use crate::codec;
use crate::error::{Result, RosterError};
use crate::model::Student;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Student store backed by a single delimited text file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn ensure_dir(&self) -> Result<()> {
        let dir = self.dir();
        if !dir.exists() {
            fs::create_dir_all(dir).map_err(|source| RosterError::StoreUnavailable {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("students");
        self.dir().join(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }

    /// Raw store bytes. Missing or unreadable stores read as empty; encoding
    /// is checked per line by the scan.
    fn read_raw(&self) -> Option<Vec<u8>> {
        match fs::read(&self.path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "student store unreadable, treating as empty"
                );
                None
            }
        }
    }

    fn write_temp(&self, temp: &Path, students: &[Student]) -> Result<()> {
        let file = File::create(temp).map_err(|source| RosterError::StoreUnavailable {
            path: temp.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        for student in students {
            writer.write_all(codec::encode(student).as_bytes())?;
            writer.write_all(LINE_ENDING.as_bytes())?;
        }
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(())
    }

    /// Full rewrite through a temporary file.
    ///
    /// The temp file is written and synced in the store's directory, then
    /// renamed over the store. If nothing matched, or anything fails before
    /// the rename, the temp file is removed and the store is untouched.
    fn rewrite<F>(&mut self, step: F) -> Result<bool>
    where
        F: FnMut(Student) -> Rewrite,
    {
        let students = self.scan_all()?;
        let (kept, matched) = apply_rewrite(students, step);

        if !matched {
            tracing::debug!(path = %self.path.display(), "rewrite matched nothing");
            return Ok(false);
        }

        self.ensure_dir()?;
        let temp = self.temp_path();
        let swapped = self
            .write_temp(&temp, &kept)
            .and_then(|()| fs::rename(&temp, &self.path).map_err(RosterError::Io));

        if let Err(e) = swapped {
            if let Err(cleanup) = fs::remove_file(&temp) {
                if cleanup.kind() != ErrorKind::NotFound {
                    tracing::warn!(path = %temp.display(), error = %cleanup, "failed to remove temp file");
                }
            }
            return Err(e);
        }

        tracing::debug!(path = %self.path.display(), records = kept.len(), "store rewritten");
        Ok(true)
    }
}

impl StudentStore for FileStore {
    fn scan_all(&self) -> Result<Vec<Student>> {
        let Some(content) = self.read_raw() else {
            return Ok(Vec::new());
        };

        let mut students = Vec::new();
        for (idx, raw) in content.split(|b| *b == b'\n').enumerate() {
            let line = std::str::from_utf8(raw).map_err(|e| RosterError::MalformedRecord {
                line: idx + 1,
                reason: format!("not valid UTF-8: {}", e),
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let student = codec::decode(line).map_err(|e| RosterError::MalformedRecord {
                line: idx + 1,
                reason: e.0,
            })?;
            students.push(student);
        }

        tracing::debug!(path = %self.path.display(), records = students.len(), "scanned store");
        Ok(students)
    }

    fn append(&mut self, student: &Student) -> Result<()> {
        self.ensure_dir()?;

        // A hand-edited store may be missing its final newline.
        let needs_separator = fs::read(&self.path)
            .map(|bytes| bytes.last().is_some_and(|b| *b != b'\n'))
            .unwrap_or(false);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| RosterError::StoreUnavailable {
                path: self.path.clone(),
                source,
            })?;

        let mut line = String::new();
        if needs_separator {
            line.push_str(LINE_ENDING);
        }
        line.push_str(&codec::encode(student));
        line.push_str(LINE_ENDING);
        file.write_all(line.as_bytes())?;

        tracing::debug!(id = %student.id, "appended record");
        Ok(())
    }

    fn rewrite_excluding<P>(&mut self, predicate: P) -> Result<bool>
    where
        P: FnMut(&Student) -> bool,
    {
        self.rewrite(excluding(predicate))
    }

    fn rewrite_transform<F>(&mut self, match_id: &str, transform: F) -> Result<bool>
    where
        F: FnMut(Student) -> Student,
    {
        self.rewrite(transforming(match_id, transform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("students.csv"));
        (dir, store)
    }

    fn student(id: &str, name: &str) -> Student {
        Student::new(id, name, vec!["Math".into()], "2024-01-15")
    }

    fn leftover_temp_files(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect()
    }

    #[test]
    fn missing_store_scans_empty() {
        let (_dir, store) = setup();
        assert!(store.scan_all().unwrap().is_empty());
    }

    #[test]
    fn append_then_scan() {
        let (_dir, mut store) = setup();
        let ann = student("1", "Ann");
        store.append(&ann).unwrap();
        assert_eq!(store.scan_all().unwrap(), vec![ann]);
    }

    #[test]
    fn append_writes_one_line_per_record() {
        let (_dir, mut store) = setup();
        store.append(&student("1", "Ann")).unwrap();
        store.append(&student("2", "Bob")).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            raw,
            format!("1,Ann,Math,2024-01-15{LINE_ENDING}2,Bob,Math,2024-01-15{LINE_ENDING}")
        );
    }

    #[test]
    fn append_repairs_missing_final_newline() {
        let (_dir, mut store) = setup();
        fs::write(store.path(), "1,Ann,Math,2024-01-15").unwrap();
        store.append(&student("2", "Bob")).unwrap();

        let ids: Vec<_> = store.scan_all().unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn append_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("data").join("students.csv"));
        store.append(&student("1", "Ann")).unwrap();
        assert_eq!(store.scan_all().unwrap().len(), 1);
    }

    #[test]
    fn scan_skips_blank_lines() {
        let (_dir, store) = setup();
        fs::write(store.path(), "1,Ann,Math,2024-01-15\n\n2,Bob,CS,2024-02-01\n").unwrap();
        assert_eq!(store.scan_all().unwrap().len(), 2);
    }

    #[test]
    fn scan_reports_malformed_line_number() {
        let (_dir, store) = setup();
        fs::write(store.path(), "1,Ann,Math,2024-01-15\n2,Bob\n").unwrap();

        match store.scan_all() {
            Err(RosterError::MalformedRecord { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("found 2"));
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn scan_accepts_crlf_and_unicode() {
        let (_dir, store) = setup();
        fs::write(store.path(), "1,José,Math,2024-01-15\r\n2,Zoë,CS,2024-02-01\r\n").unwrap();

        let students = store.scan_all().unwrap();
        assert_eq!(students[0].name, "José");
        assert_eq!(students[1].registration_date, "2024-02-01");
    }

    #[test]
    fn scan_reports_non_utf8_line_instead_of_reading_empty() {
        let (_dir, store) = setup();
        fs::write(
            store.path(),
            b"2,Bob,CS,2024-02-01\n1,Jos\xe9,Math,2024-01-15\n".as_slice(),
        )
        .unwrap();

        match store.scan_all() {
            Err(RosterError::MalformedRecord { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("UTF-8"));
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn rewrite_excluding_drops_matches_and_keeps_order() {
        let (dir, mut store) = setup();
        for (id, name) in [("1", "Cid"), ("2", "Ann"), ("3", "Bob")] {
            store.append(&student(id, name)).unwrap();
        }

        let matched = store.rewrite_excluding(|s| s.id == "2").unwrap();
        assert!(matched);

        let ids: Vec<_> = store.scan_all().unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert!(leftover_temp_files(dir.path()).is_empty());
    }

    #[test]
    fn rewrite_without_match_leaves_store_untouched() {
        let (dir, mut store) = setup();
        fs::write(store.path(), "1,Ann,Math,2024-01-15").unwrap();

        let matched = store.rewrite_excluding(|s| s.id == "9").unwrap();
        assert!(!matched);

        // Byte-for-byte, including the missing final newline.
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "1,Ann,Math,2024-01-15"
        );
        assert!(leftover_temp_files(dir.path()).is_empty());
    }

    #[test]
    fn rewrite_on_missing_store_does_not_create_it() {
        let (dir, mut store) = setup();
        assert!(!store.rewrite_excluding(|_| true).unwrap());
        assert!(!store.path().exists());
        assert!(leftover_temp_files(dir.path()).is_empty());
    }

    #[test]
    fn rewrite_transform_replaces_in_place() {
        let (dir, mut store) = setup();
        for (id, name) in [("1", "Ann"), ("2", "Bob"), ("3", "Cid")] {
            store.append(&student(id, name)).unwrap();
        }

        let matched = store
            .rewrite_transform("2", |s| s.with_id("20"))
            .unwrap();
        assert!(matched);

        let students = store.scan_all().unwrap();
        let ids: Vec<_> = students.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "20", "3"]);
        assert_eq!(students[1].name, "Bob");
        assert!(leftover_temp_files(dir.path()).is_empty());
    }

    #[test]
    fn rewrite_refuses_malformed_store() {
        let (_dir, mut store) = setup();
        fs::write(store.path(), "garbage\n1,Ann,Math,2024-01-15\n").unwrap();

        let result = store.rewrite_excluding(|s| s.id == "1");
        assert!(matches!(
            result,
            Err(RosterError::MalformedRecord { line: 1, .. })
        ));
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "garbage\n1,Ann,Math,2024-01-15\n"
        );
    }
}

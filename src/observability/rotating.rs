//! Append-only line file with size-based rotation.
//!
//! When the file grows past its limit it becomes `<name>.1`, the previous
//! `<name>.1` becomes `<name>.2`, and so on; the oldest generation beyond the
//! retention count is deleted.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;
const DEFAULT_GENERATIONS: usize = 3;

pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    generations: usize,
    file: Option<File>,
}

impl RotatingFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_limits(path, DEFAULT_MAX_BYTES, DEFAULT_GENERATIONS)
    }

    /// File rotated once it exceeds `max_bytes`, keeping `generations` old files.
    #[must_use]
    pub fn with_limits(path: impl Into<PathBuf>, max_bytes: u64, generations: usize) -> Self {
        Self {
            path: path.into(),
            max_bytes,
            generations,
            file: None,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` and a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be rotated, opened or written.
    pub fn append_line(&mut self, line: &str) -> io::Result<()> {
        if fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.max_bytes) {
            self.file = None;
            self.rotate()?;
        }

        let file = match self.file.take() {
            Some(file) => file,
            None => OpenOptions::new().create(true).append(true).open(&self.path)?,
        };
        let file = self.file.insert(file);

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn generation(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.generations == 0 {
            return fs::remove_file(&self.path);
        }

        let oldest = self.generation(self.generations);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.generations).rev() {
            let from = self.generation(n);
            if from.exists() {
                fs::rename(&from, self.generation(n + 1))?;
            }
        }
        fs::rename(&self.path, self.generation(1))
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("generations", &self.generations)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn appends_lines() {
        let temp = TempDir::new().unwrap();
        let mut file = RotatingFile::new(temp.path().join("trace.json"));
        file.append_line("one").unwrap();
        file.append_line("two").unwrap();

        assert_eq!(fs::read_to_string(file.path()).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn rotates_and_keeps_bounded_generations() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("trace.json");
        let mut file = RotatingFile::with_limits(&path, 4, 2);

        for line in ["first", "second", "third", "fourth"] {
            file.append_line(line).unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "fourth\n");
        assert_eq!(fs::read_to_string(temp.path().join("trace.json.1")).unwrap(), "third\n");
        assert_eq!(fs::read_to_string(temp.path().join("trace.json.2")).unwrap(), "second\n");
        assert!(!temp.path().join("trace.json.3").exists());
    }
}

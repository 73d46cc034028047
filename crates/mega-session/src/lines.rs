//! Line-oriented file format
//!
//! UTF-8, one value per line, `\n` terminated, no header and no escaping.
//! A missing file reads as empty. Blank lines are skipped; every other
//! value is written and read back exactly as given.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::SessionError;
use crate::Result;

pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(SessionError::io("read", path, e)),
    };

    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Overwrite `path` with the given values, skipping blank ones
pub fn write_lines<'a, I>(path: &Path, values: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut content = String::new();
    let mut count = 0;
    for value in values.into_iter().filter(|v| !v.trim().is_empty()) {
        content.push_str(value);
        content.push('\n');
        count += 1;
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SessionError::io("create directory for", path, e))?;
    }

    fs::write(path, content).map_err(|e| SessionError::io("write", path, e))?;
    Ok(count)
}

/// Delete `path`; an already missing file counts as deleted
pub fn remove(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SessionError::io("delete", path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let lines = read_lines(&dir.path().join("nope.txt")).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_blank_lines_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tabs.txt");
        fs::write(&path, "https://a.example\n\n https://b.example").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["https://a.example", " https://b.example"]);
    }

    #[test]
    fn test_values_not_rewritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tabs.txt");
        let values = [" https://a.example", "https://b.example\t"];

        write_lines(&path, values).unwrap();

        assert_eq!(read_lines(&path).unwrap(), values);
    }

    #[test]
    fn test_write_creates_parent_and_skips_blanks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/history.txt");

        let written = write_lines(&path, ["https://a.example", "  ", "https://b.example"]).unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "https://a.example\nhttps://b.example\n"
        );
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.txt");
        fs::write(&path, "https://a.example\n").unwrap();

        remove(&path).unwrap();
        assert!(!path.exists());
        remove(&path).unwrap();
    }
}

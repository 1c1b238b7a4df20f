//! File persistence for rendered diagrams.

use std::fs;
use std::io;
use std::path::Path;

/// Write `contents` as the complete contents of `dir/filename`, creating
/// `dir` and any missing parents first. An existing file is overwritten.
pub fn save(dir: &Path, filename: &str, contents: &str) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join(filename), contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("images").join("2026");
        save(&dir, "fig.svg", "<svg/>").unwrap();
        assert_eq!(fs::read_to_string(dir.join("fig.svg")).unwrap(), "<svg/>");
    }

    #[test]
    fn overwrites_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        save(tmp.path(), "fig.svg", "old").unwrap();
        save(tmp.path(), "fig.svg", "new").unwrap();
        assert_eq!(
            fs::read_to_string(tmp.path().join("fig.svg")).unwrap(),
            "new"
        );
    }
}

//! Re-run drawing scripts whenever a watched directory changes.
//!
//! The watcher polls modification times, and on every observed change runs
//! each script in the directory whose name matches the pattern, one at a
//! time in sorted order. It aggregates pass/fail from exit statuses into a
//! one-line summary. No retries, no cause analysis, no early halt: every
//! matching script runs on every change.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::thread;
use std::time::{Duration, SystemTime};

lazy_static! {
    /// Scripts are shell files unless the caller overrides the pattern.
    pub static ref DEFAULT_SCRIPT_PATTERN: Regex = Regex::new(r"\.sh$").unwrap();
}

const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Watch `dir` until an I/O error occurs, re-running matching scripts on
/// every change and printing the aggregate summary. The scripts also run
/// once on startup.
pub fn watch(dir: &Path, pattern: &Regex) -> io::Result<()> {
    let mut seen = snapshot(dir)?;
    println!("{}", summary(&run_scripts(dir, pattern)?));
    loop {
        thread::sleep(POLL_INTERVAL);
        let current = snapshot(dir)?;
        if current != seen {
            seen = current;
            println!("{}", summary(&run_scripts(dir, pattern)?));
        }
    }
}

/// Execute every matching script in `dir` synchronously, in sorted order.
/// Returns `(script name, passed)` per script; a script that cannot be
/// spawned counts as failed.
pub fn run_scripts(dir: &Path, pattern: &Regex) -> io::Result<Vec<(String, bool)>> {
    let mut results = Vec::new();
    for path in script_files(dir, pattern)? {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let passed = Command::new(&path)
            .status()
            .map(|status| status.success())
            .unwrap_or(false);
        results.push((name, passed));
    }
    Ok(results)
}

/// Regular files in `dir` whose names match `pattern`, sorted by name.
pub fn script_files(dir: &Path, pattern: &Regex) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if pattern.is_match(&entry.file_name().to_string_lossy()) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Format the aggregate result: `OK`, or `FAILED: [a.sh, b.sh]`.
pub fn summary(results: &[(String, bool)]) -> String {
    let failed: Vec<&str> = results
        .iter()
        .filter(|(_, passed)| !passed)
        .map(|(name, _)| name.as_str())
        .collect();
    if failed.is_empty() {
        "OK".to_string()
    } else {
        format!("FAILED: [{}]", failed.join(", "))
    }
}

fn snapshot(dir: &Path) -> io::Result<BTreeMap<PathBuf, SystemTime>> {
    let mut state = BTreeMap::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let modified = entry.metadata()?.modified()?;
        state.insert(entry.path(), modified);
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn summary_all_passed() {
        let results = vec![("a.sh".to_string(), true), ("b.sh".to_string(), true)];
        assert_eq!(summary(&results), "OK");
    }

    #[test]
    fn summary_lists_failures() {
        let results = vec![
            ("a.sh".to_string(), true),
            ("b.sh".to_string(), false),
            ("c.sh".to_string(), false),
        ];
        assert_eq!(summary(&results), "FAILED: [b.sh, c.sh]");
    }

    #[test]
    fn summary_of_empty_run_is_ok() {
        assert_eq!(summary(&[]), "OK");
    }

    #[test]
    fn script_files_filters_and_sorts() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("z.sh"), "").unwrap();
        fs::write(tmp.path().join("notes.md"), "").unwrap();
        fs::write(tmp.path().join("a.sh"), "").unwrap();
        fs::create_dir(tmp.path().join("nested.sh")).unwrap();

        let files = script_files(tmp.path(), &DEFAULT_SCRIPT_PATTERN).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.sh", "z.sh"]);
    }
}

// Corpus loading: reading known-author and unknown texts from disk.
//
// The known corpus is a directory of `.txt` files, one per author. The file
// stem names the author, with underscores read as spaces, so
// `mark_twain.txt` becomes "mark twain". Subdirectories are not searched.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Read a whole UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read text file {}", path.display()))
}

/// Derive the author id from a file name.
pub fn author_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    let author = stem.replace('_', " ").trim().to_string();
    if author.is_empty() {
        None
    } else {
        Some(author)
    }
}

/// Load every `*.txt` file in `dir` as author id → text.
pub fn load_known_dir(dir: &Path) -> Result<BTreeMap<String, String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read known-author directory {}", dir.display()))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_txt = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("txt"));
        if path.is_file() && is_txt {
            paths.push(path);
        }
    }
    paths.sort();

    let mut corpus = BTreeMap::new();
    for path in paths {
        let Some(author) = author_from_path(&path) else {
            warn!(path = %path.display(), "Skipping file with no usable author name");
            continue;
        };
        let text = read_text(&path)?;
        debug!(author = author.as_str(), bytes = text.len(), "Loaded known-author text");
        if corpus.insert(author.clone(), text).is_some() {
            anyhow::bail!(
                "Two files in {} map to the same author \"{author}\"",
                dir.display()
            );
        }
    }

    if corpus.is_empty() {
        warn!(dir = %dir.display(), "No .txt files found in known-author directory");
    }

    Ok(corpus)
}

/// Read several unknown texts, keeping their paths for reporting.
pub fn load_texts(paths: &[PathBuf]) -> Result<Vec<(PathBuf, String)>> {
    paths
        .iter()
        .map(|p| -> Result<(PathBuf, String)> { Ok((p.clone(), read_text(p)?)) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_from_path() {
        assert_eq!(
            author_from_path(Path::new("/books/mark_twain.txt")).as_deref(),
            Some("mark twain")
        );
        assert_eq!(
            author_from_path(Path::new("Arthur_Conan_Doyle.txt")).as_deref(),
            Some("Arthur Conan Doyle")
        );
        assert_eq!(author_from_path(Path::new("_.txt")), None);
    }

    #[test]
    fn test_load_known_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("jane_austen.txt"), "It is a truth universally acknowledged").unwrap();
        fs::write(dir.path().join("dickens.TXT"), "It was the best of times").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let corpus = load_known_dir(dir.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus["dickens"], "It was the best of times");
        assert!(corpus.contains_key("jane austen"));
    }

    #[test]
    fn test_load_known_dir_missing_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_known_dir(&dir.path().join("absent")).is_err());
    }

    #[test]
    fn test_duplicate_author_names_fail() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("mark_twain.txt"), "one").unwrap();
        fs::write(dir.path().join("mark twain.txt"), "two").unwrap();
        assert!(load_known_dir(dir.path()).is_err());
    }

    #[test]
    fn test_load_texts_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("unknown1.txt");
        fs::write(&good, "some words").unwrap();
        let loaded = load_texts(&[good.clone()]).unwrap();
        assert_eq!(loaded[0].1, "some words");

        let err = load_texts(&[good, dir.path().join("missing.txt")]).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }
}

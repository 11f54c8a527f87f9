//! Vault access: finding notes, reading their tag block, writing them back
//!
//! A vault is a directory tree of markdown notes. Hidden entries (`.obsidian`, `.git`,
//! `.trash`) and anything ignored by `.gitignore`/`.ignore` files are skipped.

use ignore::WalkBuilder;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

static TAG_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[\w\-/]+$").unwrap());

/// Errors that can occur while reading or writing vault files
#[derive(Debug)]
pub enum VaultError {
    /// The vault root does not exist or is not a directory
    NotADirectory(PathBuf),
    /// Walking the directory tree failed
    Walk(String),
    Read { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::NotADirectory(path) => {
                write!(f, "Vault path '{}' is not a directory", path.display())
            }
            VaultError::Walk(msg) => write!(f, "Failed to walk vault: {msg}"),
            VaultError::Read { path, source } => {
                write!(f, "Error reading file '{}': {source}", path.display())
            }
            VaultError::Write { path, source } => {
                write!(f, "Error writing file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for VaultError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VaultError::Read { source, .. } | VaultError::Write { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// All files under `root` whose extension is one of `extensions`, sorted by path.
pub fn discover(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, VaultError> {
    if !root.is_dir() {
        return Err(VaultError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkBuilder::new(root).hidden(true).require_git(false).build() {
        let entry = entry.map_err(|err| VaultError::Walk(err.to_string()))?;
        if !entry.file_type().is_some_and(|kind| kind.is_file()) {
            continue;
        }
        let path = entry.into_path();
        if has_extension(&path, extensions) {
            files.push(path);
        } else {
            log::debug!("skipping {}", path.display());
        }
    }
    files.sort();
    Ok(files)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
}

pub fn read(path: &Path) -> Result<String, VaultError> {
    fs::read_to_string(path).map_err(|source| VaultError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the contents of `path` through a temp file in the same directory, so a
/// crash never leaves a half-written note behind.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), VaultError> {
    let wrap = |source: io::Error| VaultError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(wrap)?;
    tmp.write_all(contents.as_bytes()).map_err(wrap)?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions()).map_err(wrap)?;
    }
    tmp.persist(path).map_err(|err| wrap(err.error))?;
    Ok(())
}

/// Whether the note's leading tag block carries `tag`.
///
/// The tag block is the run of `#tag` tokens at the top of the note, after the
/// frontmatter and any blank lines; it may span several lines. The first token that
/// is not a tag ends it. Subtags count: `#todo/work` carries `todo`.
pub fn has_tag(text: &str, tag: &str) -> bool {
    let body = skip_frontmatter(text);
    for token in body.split_whitespace() {
        if !TAG_TOKEN.is_match(token) {
            return false;
        }
        let name = &token[1..];
        if name == tag || name.strip_prefix(tag).is_some_and(|rest| rest.starts_with('/')) {
            return true;
        }
    }
    false
}

fn skip_frontmatter(text: &str) -> &str {
    let mut lines = text.split_inclusive('\n');
    match lines.next() {
        Some(first) if first.trim_end() == "---" => {}
        _ => return text,
    }
    let mut offset = text.find('\n').map_or(text.len(), |i| i + 1);
    for line in lines {
        offset += line.len();
        if line.trim_end() == "---" {
            return &text[offset..];
        }
    }
    // unclosed, so it was never frontmatter
    text
}

//! Value-based identity for registry keys
//!
//! A [`ResourceKey`] is the canonical string form of a path or URI. Two keys
//! are equal exactly when their canonical forms are equal, so repeated lookups
//! of the "same" resource spelled differently land on the same logger.
//!
//! Canonicalization:
//! - the scheme and authority of a URI are lowercased
//! - backslashes become forward slashes
//! - empty and `.` segments are dropped, `..` removes the preceding segment
//! - trailing slashes are dropped (the root stays `/`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ResourceKey(String);

impl ResourceKey {
    pub fn new(raw: &str) -> Self {
        Self(canonicalize(raw))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::new(&path.as_ref().to_string_lossy())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URI scheme, if the key was built from a URI
    pub fn scheme(&self) -> Option<&str> {
        split_scheme(&self.0).map(|(scheme, _)| scheme)
    }

    /// Local file path for plain paths and `file://` URIs
    pub fn to_file_path(&self) -> Option<PathBuf> {
        match split_scheme(&self.0) {
            None => Some(PathBuf::from(&self.0)),
            Some(("file", rest)) => {
                let path = rest.find('/').map_or("", |idx| &rest[idx..]);
                (!path.is_empty()).then(|| PathBuf::from(path))
            }
            Some(_) => None,
        }
    }
}

fn split_scheme(raw: &str) -> Option<(&str, &str)> {
    let idx = raw.find("://")?;
    let scheme = &raw[..idx];
    let valid = !scheme.is_empty()
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then(|| (scheme, &raw[idx + 3..]))
}

fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if *last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

fn canonicalize(raw: &str) -> String {
    let raw = raw.trim();

    match split_scheme(raw) {
        Some((scheme, rest)) => {
            let (authority, path) = match rest.find('/') {
                Some(idx) => rest.split_at(idx),
                None => (rest, ""),
            };
            let path = if path.is_empty() {
                String::new()
            } else {
                normalize_path(path)
            };
            format!(
                "{}://{}{}",
                scheme.to_ascii_lowercase(),
                authority.to_ascii_lowercase(),
                path
            )
        }
        None => normalize_path(raw),
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ResourceKey {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<&String> for ResourceKey {
    fn from(s: &String) -> Self {
        Self::new(s)
    }
}

impl From<&Path> for ResourceKey {
    fn from(path: &Path) -> Self {
        Self::from_path(path)
    }
}

impl From<PathBuf> for ResourceKey {
    fn from(path: PathBuf) -> Self {
        Self::from_path(path)
    }
}

impl From<&ResourceKey> for ResourceKey {
    fn from(key: &ResourceKey) -> Self {
        key.clone()
    }
}

impl From<ResourceKey> for String {
    fn from(key: ResourceKey) -> Self {
        key.0
    }
}

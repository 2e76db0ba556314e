//! Path resolution and SPA fallback policy
//!
//! Maps a request path onto the Asset Root. Anything that does not land on a
//! regular file (or a directory holding an index document) inside the root
//! resolves to the root index document, so client-side routes survive a reload.

use percent_encoding::percent_decode_str;
use std::path::{Path, PathBuf};

/// What a request path resolved to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A regular file matching the path
    File(PathBuf),
    /// The index document inside the directory matching the path
    DirectoryIndex(PathBuf),
    /// No match; the root index document
    Fallback(PathBuf),
}

impl Resolution {
    pub fn path(&self) -> &Path {
        match self {
            Self::File(p) | Self::DirectoryIndex(p) | Self::Fallback(p) => p,
        }
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Resolve `request_path` against `root`.
///
/// `root` must be canonical: candidates are canonicalized and must stay under it,
/// which also rejects symlinks pointing outside the Asset Root.
pub fn resolve(root: &Path, request_path: &str, index_file: &str) -> Resolution {
    let fallback = || Resolution::Fallback(root.join(index_file));

    let Some(target) = RequestTarget::parse(request_path) else {
        return fallback();
    };
    let candidate = root.join(&target.normalized);

    // Existence is checked on the path as sent, so `app.js/` or `app.js/..` is not a hit
    match std::fs::metadata(root.join(&target.literal)) {
        Ok(meta) if meta.is_file() && !target.directory_only => {
            if is_within(root, &candidate) {
                return Resolution::File(candidate);
            }
        }
        Ok(meta) if meta.is_dir() => {
            let index = candidate.join(index_file);
            if index.is_file() && is_within(root, &index) {
                return Resolution::DirectoryIndex(index);
            }
        }
        _ => {}
    }

    fallback()
}

/// A decoded request path, split into the forms resolution needs
#[derive(Debug, PartialEq, Eq)]
struct RequestTarget {
    /// Lexically normalized path below the root
    normalized: PathBuf,
    /// Non-empty segments as sent, `.` and `..` included
    literal: PathBuf,
    /// Ends in `/`, `/.` or `/..`: only a directory can match
    directory_only: bool,
}

impl RequestTarget {
    /// Returns `None` when the path cannot be decoded or would climb above the root.
    fn parse(request_path: &str) -> Option<Self> {
        let path = request_path.split(['?', '#']).next().unwrap_or_default();
        let decoded = percent_decode_str(path).decode_utf8().ok()?;

        let mut normalized: Vec<&str> = Vec::new();
        let mut literal: Vec<&str> = Vec::new();
        for segment in decoded.split('/') {
            match segment {
                "" => continue,
                "." => {}
                ".." => {
                    normalized.pop()?;
                }
                s if s.contains(['\\', '\0']) => return None,
                s => normalized.push(s),
            }
            literal.push(segment);
        }

        let last = decoded.rsplit('/').next().unwrap_or_default();
        Some(Self {
            normalized: normalized.iter().collect(),
            literal: literal.iter().collect(),
            directory_only: matches!(last, "" | "." | ".."),
        })
    }
}

fn is_within(root: &Path, candidate: &Path) -> bool {
    candidate
        .canonicalize()
        .is_ok_and(|canonical| canonical.starts_with(root))
}

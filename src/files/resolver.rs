use std::path::{Path, PathBuf};

/// Classification of a request path against the document root.
///
/// Produced fresh for every request; never cached. `Forbidden` marks a
/// traversal attempt and must be answered exactly like `NotFound` so the
/// client cannot learn whether anything exists outside the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    RegularFile(PathBuf),
    Directory(PathBuf),
    NotFound,
    Forbidden,
}

/// Maps a request path onto the filesystem beneath `root`.
///
/// `root` must already be canonical; the candidate is canonicalized (so
/// `.`, `..` and symlinks are resolved against the real filesystem) and
/// then checked for containment. The containment check is component-wise:
/// `Path::starts_with` never lets `/wwwfoo` pass for a root of `/www`.
pub async fn resolve(root: &Path, request_path: &str) -> ResolvedTarget {
    let candidate = root.join(request_path.trim_start_matches('/'));

    let canonical = match tokio::fs::canonicalize(&candidate).await {
        Ok(p) => p,
        // Nonexistent paths cannot be canonicalized. A traversal that
        // points at nothing lands here too, which is fine: both answers
        // look the same on the wire.
        Err(_) => return ResolvedTarget::NotFound,
    };

    if !canonical.starts_with(root) {
        return ResolvedTarget::Forbidden;
    }

    match tokio::fs::metadata(&canonical).await {
        Ok(meta) if meta.is_dir() => ResolvedTarget::Directory(canonical),
        Ok(_) => ResolvedTarget::RegularFile(canonical),
        Err(_) => ResolvedTarget::NotFound,
    }
}

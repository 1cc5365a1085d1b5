//! Request dispatch against the document root
//!
//! This module decides, per request, which of the four terminal outcomes
//! applies: serve the file (200), redirect a slashless directory (301),
//! not found (404), or method not allowed (405).

use crate::config::StaticFilesConfig;
use crate::files::resolver::{ResolvedTarget, resolve};
use crate::http::mime::content_type_for;
use crate::http::request::Request;
use crate::http::response::Response;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Serves files from a single canonicalized document root.
///
/// The root is canonicalized once at construction and never changes; every
/// connection task holds a clone and only ever reads it, so no
/// synchronization is needed.
#[derive(Clone)]
pub struct StaticHandler {
    root: PathBuf,
}

impl StaticHandler {
    /// Create a handler for the configured document root.
    ///
    /// Fails if the root does not exist: resolving against a missing root
    /// would classify every request as a traversal.
    pub fn new(cfg: &StaticFilesConfig) -> anyhow::Result<Self> {
        let root = cfg
            .root
            .canonicalize()
            .with_context(|| format!("document root {} not accessible", cfg.root.display()))?;

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Produce the response for one request.
    ///
    /// Every parse-level failure was already handled upstream (the
    /// connection drops silently); here each request always settles into
    /// exactly one of the four outcomes. Filesystem errors never escape.
    pub async fn handle(&self, req: &Request) -> Response {
        if !req.is_get() {
            tracing::debug!(method = %req.method, "method not allowed");
            return Response::method_not_allowed();
        }

        match resolve(&self.root, &req.path).await {
            ResolvedTarget::Forbidden => {
                // Logged, but answered exactly like a missing file.
                tracing::warn!(path = %req.path, "request escaped document root");
                Response::not_found()
            }

            ResolvedTarget::NotFound => {
                tracing::debug!(path = %req.path, "not found");
                Response::not_found()
            }

            ResolvedTarget::Directory(dir) => {
                if req.path.ends_with('/') {
                    self.serve_file(dir.join("index.html")).await
                } else {
                    // Canonical directory URLs carry a trailing slash; the
                    // client re-requests and reaches index resolution.
                    let location = format!("{}/", req.path);
                    tracing::debug!(path = %req.path, location = %location, "redirecting");
                    Response::moved_permanently(&location)
                }
            }

            ResolvedTarget::RegularFile(file) => self.serve_file(file).await,
        }
    }

    async fn serve_file(&self, path: PathBuf) -> Response {
        match tokio::fs::read(&path).await {
            Ok(contents) => Response::ok(content_type_for(&path), contents),

            // The file can vanish between resolve and open, and a directory
            // may simply have no index.html. Both degrade to 404.
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "read failed");
                Response::not_found()
            }
        }
    }
}

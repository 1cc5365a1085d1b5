//! Static file serving
//!
//! This module implements the document-root side of the server: resolving
//! request paths to filesystem targets without letting them escape the
//! root, and dispatching each request to one of the four response outcomes.

pub mod handler;
pub mod resolver;

pub use handler::StaticHandler;
pub use resolver::{ResolvedTarget, resolve};

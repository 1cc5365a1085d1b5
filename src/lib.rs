//! Atrium - Minimal Static File Server
//!
//! Core library for HTTP parsing and document-root file serving.

pub mod config;
pub mod files;
pub mod http;
pub mod server;

use std::path::Path;

/// Picks a Content-Type from the file extension.
///
/// The table is deliberately small: this server only distinguishes HTML and
/// CSS, and everything else is served as opaque bytes. An unknown extension
/// never produces an empty Content-Type.
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html",
        Some("css") => "text/css",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions() {
        assert_eq!(content_type_for(Path::new("/www/index.html")), "text/html");
        assert_eq!(content_type_for(Path::new("style.css")), "text/css");
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        assert_eq!(
            content_type_for(Path::new("photo.png")),
            "application/octet-stream"
        );
        assert_eq!(
            content_type_for(Path::new("no_extension")),
            "application/octet-stream"
        );
    }
}

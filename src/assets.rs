//! Embedded asset tree
//!
//! A read-only snapshot of the frontend build output, embedded into the
//! binary at compile time. Lookups resolve directory paths to their index
//! document the way an ordinary static file server would; nothing is ever
//! written or invalidated after startup.

use crate::http::mime;
use rust_embed::RustEmbed;
use std::path::Path;

/// Bundle output directory captured at compile time
#[derive(RustEmbed)]
#[folder = "dist/"]
struct Bundle;

/// Path of the application shell inside the bundle
pub const ROOT_DOCUMENT: &str = "index.html";

/// Look up a request path in the embedded tree.
///
/// Returns the file bytes and the content type derived from the resolved
/// entry's extension, or `None` when no entry matches.
pub fn lookup(request_path: &str) -> Option<(Vec<u8>, &'static str)> {
    let relative = request_path.trim_start_matches('/');

    // Exact file match first
    if !relative.is_empty() && !relative.ends_with('/') {
        if let Some(file) = Bundle::get(relative) {
            return Some((file.data.into_owned(), content_type_for(relative)));
        }
    }

    // Directory paths resolve to their index document
    let index_path = index_candidate(relative)?;
    let file = Bundle::get(&index_path)?;
    Some((file.data.into_owned(), content_type_for(&index_path)))
}

/// Read the root HTML document from the bundle.
///
/// Read fresh on every call; the fallback layer treats its absence as an
/// unrecoverable per-request error.
pub fn root_document() -> Option<Vec<u8>> {
    Bundle::get(ROOT_DOCUMENT).map(|file| file.data.into_owned())
}

/// Map a directory-shaped request path to its index document.
///
/// The bundle root always resolves to [`ROOT_DOCUMENT`]; a subdirectory
/// resolves only if the tree actually contains entries under it.
fn index_candidate(relative: &str) -> Option<String> {
    let dir = relative.trim_end_matches('/');
    if dir.is_empty() {
        return Some(ROOT_DOCUMENT.to_string());
    }

    let prefix = format!("{dir}/");
    if Bundle::iter().any(|entry| entry.starts_with(prefix.as_str())) {
        return Some(format!("{prefix}{ROOT_DOCUMENT}"));
    }
    None
}

fn content_type_for(path: &str) -> &'static str {
    mime::get_content_type(Path::new(path).extension().and_then(|e| e.to_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_file_lookup() {
        let (content, content_type) = lookup("/assets/app.js").unwrap();
        assert_eq!(content, include_bytes!("../dist/assets/app.js"));
        assert_eq!(content_type, "application/javascript");
    }

    #[test]
    fn test_root_resolves_to_index() {
        let (content, content_type) = lookup("/").unwrap();
        assert_eq!(content, include_bytes!("../dist/index.html"));
        assert_eq!(content_type, "text/html; charset=utf-8");
    }

    #[test]
    fn test_missing_path_is_absent() {
        assert!(lookup("/dashboard/settings").is_none());
        assert!(lookup("/assets/missing.js").is_none());
    }

    #[test]
    fn test_directory_without_index_is_absent() {
        // assets/ exists in the tree but carries no index.html
        assert!(lookup("/assets/").is_none());
    }

    #[test]
    fn test_traversal_cannot_escape_the_tree() {
        assert!(lookup("/../Cargo.toml").is_none());
        assert!(lookup("/assets/../../Cargo.toml").is_none());
    }

    #[test]
    fn test_root_document_bytes() {
        let content = root_document().unwrap();
        assert_eq!(content, include_bytes!("../dist/index.html"));
    }
}

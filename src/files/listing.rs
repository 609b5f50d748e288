//! HTML directory listings.
//!
//! Used as the `ServeDir` fallback: it only runs when no file (or
//! `index.html`) matched, so the only successful outcome is a directory
//! index. Everything else is a plain 404.

use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

/// State shared by every listing request.
#[derive(Debug, Clone)]
pub struct ListingState {
    root: Arc<PathBuf>,
}

impl ListingState {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }
}

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
    pub is_symlink: bool,
}

impl Entry {
    fn display_name(&self) -> String {
        if self.is_symlink {
            format!("{}@", self.name)
        } else if self.is_dir {
            format!("{}/", self.name)
        } else {
            self.name.clone()
        }
    }

    fn href(&self) -> String {
        let encoded = urlencoding::encode(&self.name);
        if self.is_dir {
            format!("{encoded}/")
        } else {
            encoded.into_owned()
        }
    }
}

/// Fallback handler: list the requested directory or answer 404.
pub async fn list_directory(State(state): State<ListingState>, uri: Uri) -> Response {
    let Some(request_path) = decode_path(uri.path()) else {
        return not_found();
    };
    let Some(dir) = resolve(&state.root, &request_path) else {
        tracing::debug!(path = %uri.path(), "Rejected path outside root");
        return not_found();
    };

    match tokio::fs::metadata(&dir).await {
        Ok(meta) if meta.is_dir() => {}
        _ => return not_found(),
    }

    match read_entries(&dir).await {
        Ok(entries) => Html(render(&request_path, &entries)).into_response(),
        Err(e) => {
            tracing::debug!(path = %dir.display(), error = %e, "Directory not readable");
            (StatusCode::NOT_FOUND, "No permission to list directory").into_response()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "File not found").into_response()
}

/// Percent-decode a request path. Invalid UTF-8 is treated as a miss.
pub fn decode_path(path: &str) -> Option<String> {
    urlencoding::decode(path).ok().map(|p| p.into_owned())
}

/// Map a decoded request path onto `root`, refusing anything that could
/// leave it.
pub fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let mut resolved = root.to_path_buf();
    for component in Path::new(request_path.trim_start_matches('/')).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(resolved)
}

/// Read a directory, sorted case-insensitively by name.
pub async fn read_entries(dir: &Path) -> std::io::Result<Vec<Entry>> {
    let mut reader = tokio::fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        let file_type = entry.file_type().await?;
        // Follows symlinks, so a link to a directory still gets a trailing slash.
        let is_dir = tokio::fs::metadata(entry.path())
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);

        entries.push(Entry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir,
            is_symlink: file_type.is_symlink(),
        });
    }

    entries.sort_by_key(|e| e.name.to_lowercase());
    Ok(entries)
}

/// Render the listing page for `request_path`.
pub fn render(request_path: &str, entries: &[Entry]) -> String {
    let title = format!("Directory listing for {}", escape_html(request_path));

    let mut html = String::new();
    html.push_str("<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{title}</h1>\n"));
    html.push_str("<hr>\n<ul>\n");

    for entry in entries {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            escape_html(&entry.href()),
            escape_html(&entry.display_name())
        ));
    }

    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> Entry {
        Entry {
            name: name.into(),
            is_dir: false,
            is_symlink: false,
        }
    }

    #[test]
    fn resolve_stays_under_root() {
        let root = Path::new("/srv/www");
        assert_eq!(resolve(root, "/"), Some(PathBuf::from("/srv/www")));
        assert_eq!(
            resolve(root, "/assets/./img/"),
            Some(PathBuf::from("/srv/www/assets/img"))
        );
    }

    #[test]
    fn resolve_rejects_traversal() {
        let root = Path::new("/srv/www");
        assert_eq!(resolve(root, "/../etc/passwd"), None);
        assert_eq!(resolve(root, "/assets/../../etc/"), None);
        assert_eq!(resolve(root, "//etc"), Some(PathBuf::from("/srv/www/etc")));
    }

    #[test]
    fn decode_handles_escapes() {
        assert_eq!(decode_path("/my%20dir/").as_deref(), Some("/my dir/"));
        assert_eq!(decode_path("/%2e%2e/").as_deref(), Some("/../"));
        assert_eq!(decode_path("/%ff/"), None);
    }

    #[test]
    fn render_marks_directories_and_links() {
        let entries = vec![
            Entry {
                name: "assets".into(),
                is_dir: true,
                is_symlink: false,
            },
            Entry {
                name: "latest".into(),
                is_dir: true,
                is_symlink: true,
            },
            file("read me.txt"),
        ];

        let html = render("/", &entries);
        assert!(html.contains("<title>Directory listing for /</title>"));
        assert!(html.contains("<li><a href=\"assets/\">assets/</a></li>"));
        assert!(html.contains("<li><a href=\"latest/\">latest@</a></li>"));
        assert!(html.contains("<li><a href=\"read%20me.txt\">read me.txt</a></li>"));
    }

    #[test]
    fn render_escapes_names() {
        let html = render("/<x>/", &[file("a&b<c>.html")]);
        assert!(html.contains("Directory listing for /&lt;x&gt;/"));
        assert!(html.contains(">a&amp;b&lt;c&gt;.html</a>"));
        assert!(!html.contains("<c>"));
    }

    #[tokio::test]
    async fn read_entries_sorts_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("beta.js"), "").unwrap();
        std::fs::write(dir.path().join("Alpha.css"), "").unwrap();
        std::fs::create_dir(dir.path().join("gamma")).unwrap();

        let entries = read_entries(dir.path()).await.unwrap();
        let names: Vec<_> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Alpha.css", "beta.js", "gamma"]);
        assert!(entries[2].is_dir);
        assert!(!entries[0].is_dir);
    }
}

//! Static asset serving.
//!
//! Any path that isn't an API route is looked up under the static
//! directory. `/` serves `index.html`.

use std::path::{Component, Path, PathBuf};

use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use tracing::debug;

use super::state::AppState;

/// Serve a file from the static directory.
pub async fn static_asset(State(state): State<AppState>, uri: Uri) -> Response {
    let Some(path) = resolve_asset_path(&state.static_dir, uri.path()) else {
        return not_found();
    };

    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(&path))], bytes).into_response(),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Static asset not served");
            not_found()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not found").into_response()
}

/// Map a request path onto a file under `root`.
///
/// Returns `None` for paths that would leave `root` (`..`, absolute
/// components).
pub fn resolve_asset_path(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = match request_path.trim_start_matches('/') {
        "" => "index.html",
        other => other,
    };

    let mut path = root.to_path_buf();
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => path.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(path)
}

/// Content type by file extension. Unknown extensions are plain text.
pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => "text/html",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "text/plain",
    }
}

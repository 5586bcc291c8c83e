use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use rust_embed::Embed;

#[derive(Embed)]
#[folder = "static/"]
struct StaticAssets;

/// GET / — send browsers to the static landing page.
pub async fn landing_redirect() -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, "/static/index.html")],
    )
        .into_response()
}

/// Serve embedded frontend assets under /static.
pub async fn static_handler(Path(path): Path<String>) -> Response {
    match <StaticAssets as Embed>::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.as_ref())],
                content.data.to_vec(),
            )
                .into_response()
        }
        None => (StatusCode::NOT_FOUND, "asset not found").into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_page_is_embedded() {
        assert!(<StaticAssets as Embed>::get("index.html").is_some());
        assert!(<StaticAssets as Embed>::get("app.js").is_some());
        assert!(<StaticAssets as Embed>::get("styles.css").is_some());
    }
}

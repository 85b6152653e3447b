pub mod api_routes;

use std::path::Path;

use axum::http::{header, HeaderValue, Method};
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::service::chat_service::ChatService;
use api_routes::chat_handler;

/// Builds the application router.
///
/// With `static_dir` set, every non-API path is served from it and unknown paths
/// fall back to its `index.html`.
pub fn router(
    chat_service: ChatService,
    static_dir: Option<&Path>,
    allowed_origin: Option<HeaderValue>,
) -> Router {
    let mut app = Router::new().route("/api/chat", post(chat_handler));

    if let Some(dir) = static_dir {
        let site = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
        app = app.fallback_service(site);
    }

    if let Some(origin) = allowed_origin {
        app = app.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        );
    }

    app.layer(TraceLayer::new_for_http()).with_state(chat_service)
}

/// HTTP router
use crate::{api, config::HttpSettings, state::AppState};
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Router wrapped so trailing slashes are trimmed before routing
pub type App = NormalizePath<Router>;

/// Build the application router
///
/// `/` greets, `/api` carries the user routes and the health check, and
/// everything else falls through to a JSON 404. `/api/users/` routes the
/// same as `/api/users`.
pub fn create_router(app_state: AppState, http: &HttpSettings) -> App {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        // Users
        .route(
            "/users",
            get(api::users::list_users).post(api::users::create_user),
        )
        .route(
            "/users/:id",
            get(api::users::get_user)
                .put(api::users::update_user)
                .patch(api::users::update_user)
                .delete(api::users::delete_user),
        );

    let mut app = Router::new()
        .route("/", get(api::index::index))
        .nest("/api", api_routes)
        .fallback(api::index::not_found)
        .layer(DefaultBodyLimit::max(http.max_body_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        );

    if http.permissive_cors {
        app = app.layer(CorsLayer::permissive());
    }

    NormalizePathLayer::trim_trailing_slash().layer(app.with_state(app_state))
}

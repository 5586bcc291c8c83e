pub mod embed;
pub mod error;
pub mod routes;
pub mod state;

use activities_core::ActivityDirectory;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(directory: ActivityDirectory) -> Router {
    let app_state = state::AppState::new(directory);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(embed::landing_redirect))
        .route("/activities", get(routes::activities::list_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(routes::activities::signup),
        )
        .route("/static/{*path}", get(embed::static_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Start the activities API server.
///
/// The directory is seeded fresh on every start; signups live in memory only
/// and a restart resets them.
pub async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let app = build_router(ActivityDirectory::seeded());

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Mergington activities API listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

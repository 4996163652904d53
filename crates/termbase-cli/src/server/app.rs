//! Axum application setup.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use super::handlers;
use super::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Vocabulary
        .route(
            "/vocabulary",
            get(handlers::list_vocabulary).post(handlers::create_vocabulary_item),
        )
        .route("/vocabulary/:id", get(handlers::get_vocabulary_item))
        .route(
            "/vocabulary/:id/suggestions",
            get(handlers::list_suggestions_for_item),
        )
        .route(
            "/vocabulary/category/:category",
            get(handlers::get_vocabulary_by_category),
        )
        .route("/categories", get(handlers::list_categories))
        .route("/search", get(handlers::search_vocabulary))
        // Suggestions
        .route("/suggestions", get(handlers::list_suggestions))
        .route("/suggestions/new-word", post(handlers::submit_new_word))
        .route(
            "/suggestions/vocabulary",
            post(handlers::submit_vocabulary_suggestion),
        )
        .route(
            "/suggestions/new-word/:id/approve",
            post(handlers::approve_new_word),
        )
        .route(
            "/suggestions/vocabulary/:id/approve",
            post(handlers::approve_vocabulary_suggestion),
        )
        .route("/suggestions/:id/reject", post(handlers::reject_suggestion))
        // Engagement
        .route("/suggestions/:id/like", post(handlers::like_suggestion))
        .route("/profiles", post(handlers::ensure_profile))
        .route(
            "/profiles/:user/saved",
            get(handlers::list_saved).post(handlers::save_vocabulary),
        )
        .route(
            "/profiles/:user/saved/remove",
            post(handlers::unsave_vocabulary),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state)
}

/// Start the web server.
pub async fn run_server(state: AppState, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));

    info!(%addr, "server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

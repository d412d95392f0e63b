pub mod games;
pub mod pages;

use crate::config::Config;
use crate::db::Repository;
use axum::{handler::Handler, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Config,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, config: Config) -> Self {
        Self { repo, config }
    }
}

/// Build the route table.
///
/// Static paths win over `/:id`, so `/add`, `/games` and friends never reach
/// the detail handler. Every route falls back to the 404 page for methods it
/// does not handle.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = ServeDir::new(&state.config.public_dir)
        .not_found_service(pages::not_found.with_state(()));

    Router::new()
        .route(
            "/",
            get(games::list_games)
                .post(games::create_game)
                .fallback(pages::not_found),
        )
        .route("/add", get(pages::add).fallback(pages::not_found))
        .route("/yearmade", get(pages::year_made).fallback(pages::not_found))
        .route("/genre", get(pages::genre).fallback(pages::not_found))
        .route("/studio", get(pages::studio).fallback(pages::not_found))
        .route("/country", get(pages::country).fallback(pages::not_found))
        .route(
            "/launchprice",
            get(pages::launch_price).fallback(pages::not_found),
        )
        .route(
            "/new-game",
            get(games::insert_sample_game).fallback(pages::not_found),
        )
        .route(
            "/games",
            get(games::list_games_json).fallback(pages::not_found),
        )
        .route(
            "/:id",
            get(games::show_game)
                .post(games::update_game)
                .delete(games::delete_game)
                .fallback(pages::not_found),
        )
        .route(
            "/game/:id",
            get(games::show_game).fallback(pages::not_found),
        )
        .nest_service("/public", assets)
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

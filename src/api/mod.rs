use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, patch},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;
use crate::entities;
use crate::services::{CatalogService, SeaOrmCatalogService};
use metrics_exporter_prometheus::PrometheusHandle;

mod error;
mod observability;
pub mod params;
mod seed;
mod shows;
mod types;
mod users;
mod validation;

pub use error::ApiError;
pub use types::*;

use self::params::{validate_genre, validate_id};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,

    pub store: Store,

    pub catalog: Arc<dyn CatalogService>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

pub async fn create_app_state(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let catalog = Arc::new(SeaOrmCatalogService::new(store.clone())) as Arc<dyn CatalogService>;

    Ok(Arc::new(AppState {
        config,
        store,
        catalog,
        prometheus_handle,
    }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    create_routes(&state)
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::track_requests))
}

fn create_routes(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    let show_id = || {
        middleware::from_fn_with_state(state.clone(), validate_id::<entities::shows::Model>)
    };
    let user_id = || {
        middleware::from_fn_with_state(state.clone(), validate_id::<entities::users::Model>)
    };

    Router::new()
        .route("/shows", get(shows::list_shows))
        .route("/shows/genres", get(shows::list_genres))
        .route(
            "/shows/genres/{genre}",
            get(shows::list_shows_by_genre).route_layer(middleware::from_fn(validate_genre)),
        )
        .route(
            "/shows/{show_id}",
            get(shows::get_show)
                .patch(shows::update_show)
                .delete(shows::delete_show)
                .route_layer(show_id()),
        )
        .route("/users", get(users::list_users))
        .route(
            "/users/{user_id}",
            get(users::get_user)
                .delete(users::delete_user)
                .route_layer(user_id()),
        )
        .route(
            "/users/{user_id}/shows",
            get(users::list_user_shows).route_layer(user_id()),
        )
        // Outermost layer runs first: the user is checked before the show
        .route(
            "/users/{user_id}/shows/{show_id}",
            patch(users::add_show_to_user)
                .route_layer(show_id())
                .route_layer(user_id()),
        )
        .route("/seed", get(seed::reseed))
        .route("/metrics", get(observability::get_metrics))
}

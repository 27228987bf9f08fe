pub mod health;
pub mod profiles;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        // Directory
        .route(
            "/profiles",
            get(profiles::list_profiles).post(profiles::create_profile),
        )
        .route("/profiles/cities", get(profiles::list_cities))
        .route(
            "/profiles/:profile_id",
            get(profiles::get_profile)
                .put(profiles::replace_profile)
                .patch(profiles::edit_profile)
                .delete(profiles::delete_profile),
        )
        // Map view
        .route(
            "/profiles/:profile_id/location",
            get(profiles::get_profile_location),
        )
}

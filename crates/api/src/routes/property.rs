//! Route definitions for the `/properties` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::property;
use crate::state::AppState;

/// Routes mounted at `/properties`.
///
/// ```text
/// GET    /               -> search
/// POST   /               -> create
/// PUT    /{id}           -> update
/// PUT    /{id}/price     -> change_price
/// POST   /{id}/images    -> add_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(property::search).post(property::create))
        .route("/{id}", put(property::update))
        .route("/{id}/price", put(property::change_price))
        .route("/{id}/images", post(property::add_image))
}

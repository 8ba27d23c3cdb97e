pub mod health;
pub mod property;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /properties                 GET (criteria search), POST (create)
/// /properties/{id}            PUT (full replacement + child merge)
/// /properties/{id}/price      PUT (change price, bare decimal body)
/// /properties/{id}/images     POST (attach image)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/properties", property::router())
}

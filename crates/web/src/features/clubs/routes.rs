use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use storage::Database;

use super::handlers::{
    add_coach, create_club, delete_club, get_club, get_club_detailed, list_clubs, update_club,
};
use crate::middleware::auth::{require_auth, ApiKeys};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_club))
        .route("/:id", put(update_club))
        .route("/:id", delete(delete_club))
        .route("/:id/coaches", post(add_coach))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_clubs))
        .route("/:id", get(get_club))
        .route("/:id/detailed", get(get_club_detailed))
        .merge(protected)
}

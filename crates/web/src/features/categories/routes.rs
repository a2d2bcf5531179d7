use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use storage::Database;

use super::handlers::{
    create_category, delete_category, get_category, list_categories, update_category,
};
use crate::middleware::auth::{require_auth, ApiKeys};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_category))
        .route("/:id", put(update_category))
        .route("/:id", delete(delete_category))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_categories))
        .route("/:id", get(get_category))
        .merge(protected)
}

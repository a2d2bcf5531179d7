use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use storage::Database;

use super::handlers::{check_eligibility, get_round, list_rounds, submit_round};
use crate::middleware::auth::{require_auth, ApiKeys};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(submit_round))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_rounds))
        .route("/:id", get(get_round))
        .route("/eligibility", post(check_eligibility))
        .merge(protected)
}

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use storage::Database;

use super::handlers::{
    add_athletes, create_tournament, delete_tournament, get_tournament, get_tournament_detailed,
    list_tournaments, remove_athlete, update_tournament,
};
use crate::middleware::auth::{require_auth, ApiKeys};

pub fn routes(api_keys: ApiKeys) -> Router<Database> {
    let protected = Router::new()
        .route("/", post(create_tournament))
        .route("/:id", put(update_tournament))
        .route("/:id", delete(delete_tournament))
        .route("/:id/athletes", post(add_athletes))
        .route("/:id/athletes/:athlete_id", delete(remove_athlete))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/", get(list_tournaments))
        .route("/:id", get(get_tournament))
        .route("/:id/detailed", get(get_tournament_detailed))
        .merge(protected)
}

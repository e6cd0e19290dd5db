/**
 * API Routes
 *
 * # Authentication
 *
 * Protected routes sit behind `auth_middleware`, which accepts a bearer
 * header or a `?token=` parameter. `/ws` is public at the router level
 * because the upgrade handler verifies its own token before upgrading.
 */

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::{get_user_id, login, refresh, register, search};
use crate::backend::friends::{add_friend, list_friends, remove_friend};
use crate::backend::history::get_history;
use crate::backend::middleware::auth_middleware;
use crate::backend::relay::ws_upgrade;
use crate::backend::rooms::{create_room, delete_room, list_rooms};
use crate::backend::server::state::AppState;

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/api/auth/refresh", post(refresh))
        .route("/api/user/id", get(get_user_id))
        .route("/api/users/search", get(search))
        .route("/api/friends", get(list_friends))
        .route("/api/friends/add", post(add_friend))
        .route("/api/friends/{user_id}", delete(remove_friend))
        .route("/api/chat/history", get(get_history))
        .route("/api/rooms", get(list_rooms))
        .route("/api/rooms/create", post(create_room))
        .route("/api/rooms/{id}", delete(delete_room))
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/ws", get(ws_upgrade))
        .merge(protected)
}

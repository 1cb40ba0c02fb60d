use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn schedule_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/day", get(handlers::get_day_schedule))
        .route("/appointments", get(handlers::list_day_appointments))
        .with_state(state)
}

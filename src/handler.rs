use std::sync::Arc;

use axum::response::IntoResponse;
use tracing::info;

use crate::db::Database;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db: Arc::new(db) }
    }
}

pub async fn healthcheck() -> impl IntoResponse {
    info!("got healthcheck request");
    "Hi there!"
}

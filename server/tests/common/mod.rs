#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::SqlitePool;
use std::sync::Arc;
use trip_server::core::AppState;

/// Crea un AppState per i test
///
/// # Arguments
/// * `pool` - Connection pool SQLite preparato da `#[sqlx::test]`
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    Arc::new(AppState::new(pool))
}

/// Crea un TestServer per i test
///
/// # Returns
/// TestServer configurato e pronto per eseguire richieste
pub fn create_test_server(pool: SqlitePool) -> TestServer {
    let app = trip_server::create_router(create_test_state(pool));
    TestServer::new(app).expect("Failed to create test server")
}

/// Conta le righe di una tabella, per verificare gli effetti collaterali
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}

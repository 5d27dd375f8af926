mod app_state;
mod db;
mod error;
mod geo;
mod handlers;
mod middlewares;
mod models;
mod queries;
mod routes;

use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::PostgresStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let pool = match db::connect_to_db().await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Error connecting to database: {}", e);
            std::process::exit(1);
        }
    };

    // Sessions live in Postgres; the auth service writes them at login,
    // this service only reads the authenticated user id back out.
    let session_store = PostgresStore::new(pool.clone());
    if let Err(e) = session_store.migrate().await {
        tracing::error!("Error preparing session store: {}", e);
        std::process::exit(1);
    }
    let session_layer = SessionManagerLayer::new(session_store);

    let state = app_state::AppState { db_pool: pool };
    let app = routes::create_routes()
        .with_state(state)
        .layer(session_layer);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await.unwrap();
}

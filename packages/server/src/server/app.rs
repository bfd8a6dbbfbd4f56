//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::students::{PgStudentStore, StudentStore};
use crate::server::routes::{
    create_student, delete_student, get_all_students, get_student_by_id, health_handler,
    hello_handler, update_student,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub store: Arc<dyn StudentStore>,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool) -> Router {
    let store: Arc<dyn StudentStore> = Arc::new(PgStudentStore::new(pool.clone()));

    let app_state = AppState {
        db_pool: pool,
        store,
    };

    // CORS configuration - allow any origin for development
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // Smoke-test endpoint
        .route("/hello", get(hello_handler))
        // Student CRUD
        .route("/students", get(get_all_students))
        .route("/student", post(create_student))
        .route(
            "/student/:id",
            get(get_student_by_id)
                .put(update_student)
                .delete(delete_student),
        )
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

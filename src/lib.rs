// Docsort - document intake and classification service

pub mod config;
pub mod intake;
pub mod middleware;
pub mod models;
pub mod pipeline;
pub mod routes;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;
pub use routes::create_router;

pub mod config;
pub mod contact;
pub mod email;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod server;
pub mod template;

pub use config::Config;
pub use routes::AppState;

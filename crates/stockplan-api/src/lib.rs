mod config;
mod handlers;
mod server;
mod state;

pub use config::ServiceConfig;
pub use server::create_app;
pub use state::AppState;

pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod relay;
pub mod tracker;
pub mod ui;
pub mod state;

pub use app::router;
pub use relay::Relay;
pub use state::AppState;

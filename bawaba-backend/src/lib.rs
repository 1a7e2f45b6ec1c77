pub mod app;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod messages;
pub mod state;

pub use app::build_router;

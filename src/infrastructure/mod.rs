pub mod api;

pub use api::{AppState, build_router};

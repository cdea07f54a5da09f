//! HTTP surface for plancal: the planning page, its form and card actions,
//! the CSV download and a read-only JSON API.

pub mod render;
pub mod routes;
pub mod singleton;
pub mod state;

pub use routes::app;
pub use state::AppState;

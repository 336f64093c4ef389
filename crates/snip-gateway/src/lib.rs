//! HTTP front end for the Snip link registry.
//!
//! Exposes link creation, redirection and click statistics over HTTP and
//! translates registry results into status codes and JSON bodies.

pub mod app;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::{AppError, Result};
pub use state::AppState;

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod translate;

pub use error::AppError;
pub use translate::{translate_errors, with_error_translation};

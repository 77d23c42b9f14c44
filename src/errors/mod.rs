//! Translation of known database request errors into HTTP error bodies

pub mod codes;
pub mod exception;
pub mod locale;
pub mod messages;
pub mod responder;
pub mod response;

pub use codes::{KnownErrorCode, UnknownErrorCode};
pub use exception::KnownRequestError;
pub use locale::{Locale, LocaleError};
pub use responder::{CatalogEntry, ErrorDescriptor, ErrorResponder};
pub use response::ErrorResponse;

//! Identity v2 `/tokens` resource: request building, deferred extraction, and catalog models.

pub mod catalog;
pub mod request;
pub mod result;
pub mod token;

pub use catalog::*;
pub use request::*;
pub use result::*;
pub use token::*;

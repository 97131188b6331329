//! Credential options and secret handling for Identity v2 authentication.

pub mod options;
pub mod secret;

pub use options::*;
pub use secret::*;

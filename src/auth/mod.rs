//! Authentication system
//!
//! Holds the credential record type, the known-user table and the field validator.

pub mod credentials;
pub mod validator;

pub use credentials::{Credential, KnownUsers};
pub use validator::CredentialValidator;

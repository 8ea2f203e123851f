//! Error types
//!
//! Defines domain-specific error types for each stage of a sign-in request,
//! plus the startup errors of the server itself.

use std::fmt;
use std::io;

/// Failures while turning the request body into a credential record
#[derive(Debug)]
pub enum BindingError {
    /// Body is empty
    EmptyBody,
    /// Body is not a JSON object. Only the category and position are kept
    /// so submitted values never reach the logs.
    MalformedBody {
        category: serde_json::error::Category,
        line: usize,
        column: usize,
    },
    /// A required field is absent
    MissingField(&'static str),
    /// A field is present but is not a string
    WrongType(&'static str),
    /// A field's length falls outside its configured bounds
    FieldLength {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingError::EmptyBody => write!(f, "Empty body"),
            BindingError::MalformedBody {
                category,
                line,
                column,
            } => write!(
                f,
                "Malformed body ({:?}) at line {}, column {}",
                category, line, column
            ),
            BindingError::MissingField(field) => write!(f, "Missing field '{}'", field),
            BindingError::WrongType(field) => write!(f, "Field '{}' must be a string", field),
            BindingError::FieldLength {
                field,
                min,
                max,
                actual,
            } => write!(
                f,
                "Field '{}' has length {}, expected {}..={}",
                field, actual, min, max
            ),
        }
    }
}

impl std::error::Error for BindingError {}

impl From<serde_json::Error> for BindingError {
    fn from(error: serde_json::Error) -> Self {
        BindingError::MalformedBody {
            category: error.classify(),
            line: error.line(),
            column: error.column(),
        }
    }
}

/// Field-rule violations found by the credential validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidName,
    PasswordCharset,
    PasswordMissingUppercase,
    PasswordMissingDigit,
    PasswordMissingSpecial,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidName => write!(f, "Name must contain ASCII letters only"),
            ValidationError::PasswordCharset => {
                write!(f, "Password contains a disallowed character")
            }
            ValidationError::PasswordMissingUppercase => {
                write!(f, "Password needs an uppercase letter")
            }
            ValidationError::PasswordMissingDigit => write!(f, "Password needs a digit"),
            ValidationError::PasswordMissingSpecial => {
                write!(f, "Password needs one of @$!%*?&")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Membership check errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    InvalidCredentials(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials(name) => {
                write!(f, "No known user matches the credentials for: {}", name)
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// Any failure of a sign-in request
#[derive(Debug)]
pub enum SignInError {
    Binding(BindingError),
    Validation(ValidationError),
    Auth(AuthError),
}

impl fmt::Display for SignInError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignInError::Binding(e) => write!(f, "Binding error: {}", e),
            SignInError::Validation(e) => write!(f, "Validation error: {}", e),
            SignInError::Auth(e) => write!(f, "Authentication error: {}", e),
        }
    }
}

impl std::error::Error for SignInError {}

impl From<BindingError> for SignInError {
    fn from(error: BindingError) -> Self {
        SignInError::Binding(error)
    }
}

impl From<ValidationError> for SignInError {
    fn from(error: ValidationError) -> Self {
        SignInError::Validation(error)
    }
}

impl From<AuthError> for SignInError {
    fn from(error: AuthError) -> Self {
        SignInError::Auth(error)
    }
}

/// Errors that stop the server from starting or serving
#[derive(Debug)]
pub enum ServerError {
    Config(config::ConfigError),
    Regex(regex::Error),
    IoError(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Config(e) => write!(f, "Configuration error: {}", e),
            ServerError::Regex(e) => write!(f, "Rule compilation error: {}", e),
            ServerError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<config::ConfigError> for ServerError {
    fn from(error: config::ConfigError) -> Self {
        ServerError::Config(error)
    }
}

impl From<regex::Error> for ServerError {
    fn from(error: regex::Error) -> Self {
        ServerError::Regex(error)
    }
}

impl From<io::Error> for ServerError {
    fn from(error: io::Error) -> Self {
        ServerError::IoError(error)
    }
}

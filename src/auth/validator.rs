//! Credential validator
//!
//! Implements the field rules applied to a submitted credential record:
//! length bounds during binding, then character rules for name and password.
//! Rules are compiled once and the validator is shared read-only.

use regex::Regex;

use super::credentials::Credential;
use crate::config::FieldLimits;
use crate::error::{BindingError, ValidationError};

const NAME_PATTERN: &str = r"^[A-Za-z]+$";
const PASSWORD_CHARSET_PATTERN: &str = r"^[A-Za-z0-9@$!%*?&]+$";
const UPPERCASE_PATTERN: &str = r"[A-Z]";
const DIGIT_PATTERN: &str = r"[0-9]";
const SPECIAL_PATTERN: &str = r"[@$!%*?&]";

#[derive(Debug)]
pub struct CredentialValidator {
    limits: FieldLimits,
    name: Regex,
    password_charset: Regex,
    uppercase: Regex,
    digit: Regex,
    special: Regex,
}

impl CredentialValidator {
    pub fn new(limits: FieldLimits) -> Result<Self, regex::Error> {
        Ok(Self {
            limits,
            name: Regex::new(NAME_PATTERN)?,
            password_charset: Regex::new(PASSWORD_CHARSET_PATTERN)?,
            uppercase: Regex::new(UPPERCASE_PATTERN)?,
            digit: Regex::new(DIGIT_PATTERN)?,
            special: Regex::new(SPECIAL_PATTERN)?,
        })
    }

    /// Checks required fields and length bounds, counted in characters.
    pub fn check_bounds(&self, record: &Credential) -> Result<(), BindingError> {
        let l = &self.limits;
        check_length("name", &record.name, l.name_min, l.name_max)?;
        check_length("password", &record.password, l.password_min, l.password_max)?;
        check_length("phone", &record.phone, l.phone_min, l.phone_max)?;
        Ok(())
    }

    /// ASCII letters only, at least one.
    pub fn validate_name(&self, name: &str) -> Result<(), ValidationError> {
        if self.name.is_match(name) {
            Ok(())
        } else {
            Err(ValidationError::InvalidName)
        }
    }

    /// Allowed characters only, with an uppercase letter, a digit and a special character.
    pub fn validate_password(&self, password: &str) -> Result<(), ValidationError> {
        if !self.password_charset.is_match(password) {
            return Err(ValidationError::PasswordCharset);
        }
        if !self.uppercase.is_match(password) {
            return Err(ValidationError::PasswordMissingUppercase);
        }
        if !self.digit.is_match(password) {
            return Err(ValidationError::PasswordMissingDigit);
        }
        if !self.special.is_match(password) {
            return Err(ValidationError::PasswordMissingSpecial);
        }
        Ok(())
    }

    /// Applies the character rules. The phone has none beyond its length.
    pub fn validate(&self, record: &Credential) -> Result<(), ValidationError> {
        self.validate_name(&record.name)?;
        self.validate_password(&record.password)
    }
}

fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), BindingError> {
    let actual = value.chars().count();
    if actual < min || actual > max {
        return Err(BindingError::FieldLength {
            field,
            min,
            max,
            actual,
        });
    }
    Ok(())
}

//! Request body binding
//!
//! Decodes a `/signIn` body into a credential record and enforces the
//! required-field and length constraints.
//!
//! Binding is lenient in the same places common JSON binders are: only the
//! first JSON value in the body is read, field names match regardless of
//! case, and when a field appears more than once the last occurrence wins.

use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::Value;

use crate::auth::{Credential, CredentialValidator};
use crate::error::BindingError;

/// Top-level object members in document order, duplicates included
struct BodyFields(Vec<(String, Value)>);

impl<'de> Deserialize<'de> for BodyFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = BodyFields;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = Vec::new();
                while let Some(entry) = map.next_entry::<String, Value>()? {
                    fields.push(entry);
                }
                Ok(BodyFields(fields))
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

impl BodyFields {
    /// Resolve a required string field.
    ///
    /// `null` leaves the field unset. Any other non-string value is an error.
    fn bind(&self, field: &'static str) -> Result<String, BindingError> {
        let mut bound = None;

        for (key, value) in &self.0 {
            if key.to_lowercase() != field {
                continue;
            }
            match value {
                Value::String(s) => bound = Some(s.clone()),
                Value::Null => {}
                _ => return Err(BindingError::WrongType(field)),
            }
        }

        bound.ok_or(BindingError::MissingField(field))
    }
}

/// Decode the first JSON value of the body; anything after it is ignored.
fn first_object(body: &[u8]) -> Result<BodyFields, BindingError> {
    let mut stream = serde_json::Deserializer::from_slice(body).into_iter::<BodyFields>();
    match stream.next() {
        Some(fields) => Ok(fields?),
        None => Err(BindingError::EmptyBody),
    }
}

/// Parse a raw request body into a bound credential record.
///
/// Unknown fields are ignored. Missing fields, non-string values and
/// out-of-bounds lengths are binding errors.
pub fn parse_sign_in(body: &[u8], validator: &CredentialValidator) -> Result<Credential, BindingError> {
    let fields = first_object(body)?;
    let record = Credential {
        name: fields.bind("name")?,
        password: fields.bind("password")?,
        phone: fields.bind("phone")?,
    };
    validator.check_bounds(&record)?;
    Ok(record)
}

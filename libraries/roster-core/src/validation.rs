//! Request payload validation
//!
//! Validators inspect the loosely-typed request body and either produce the
//! typed request for the matching operation or reject it with a
//! [`ValidationError`]. They never touch the store, so a rejected request
//! cannot cause a partial mutation.
//!
//! A field counts as *given* when it is present and not `null`, `false`,
//! `0` or `""`. A body that is not a JSON object has no fields.

use crate::error::ValidationError;
use crate::types::{CreateUser, UpdateUser};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// Whitespace as browser clients see it, as the body of a regex class
///
/// Differs from Unicode `White_Space`: U+0085 is left out and U+FEFF is added.
const CLIENT_WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"^[^{ws}@]+@[^{ws}@]+\.[^{ws}@]+$",
        ws = CLIENT_WHITESPACE
    );
    Regex::new(&pattern).expect("valid email regex")
});

/// Check that `email` looks like `local@domain.tld`
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a create payload
pub fn validate_create(body: &Value) -> Result<CreateUser, ValidationError> {
    let name = field(body, "name");
    let email = field(body, "email");

    let name = match name {
        Some(Value::String(s)) if !is_blank(s) => s.clone(),
        _ => return Err(ValidationError::NameRequired),
    };

    let email = match email {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => return Err(ValidationError::EmailRequired),
    };

    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    Ok(CreateUser { name, email })
}

/// Validate an update payload
///
/// Both fields are optional, but at least one must be given. A field that is
/// present with an unusable value (including `null`) is rejected rather than
/// ignored.
pub fn validate_update(body: &Value) -> Result<UpdateUser, ValidationError> {
    let name = field(body, "name");
    let email = field(body, "email");

    if !is_given(name) && !is_given(email) {
        return Err(ValidationError::NoFieldsProvided);
    }

    let name = match name {
        None => None,
        Some(Value::String(s)) if !is_blank(s) => Some(s.clone()),
        Some(_) => return Err(ValidationError::InvalidName),
    };

    let email = match email {
        None => None,
        Some(Value::String(s)) if is_valid_email(s) => Some(s.clone()),
        Some(Value::String(_)) => return Err(ValidationError::InvalidEmailFormat),
        Some(_) => return Err(ValidationError::EmailNotString),
    };

    Ok(UpdateUser { name, email })
}

fn field<'a>(body: &'a Value, key: &str) -> Option<&'a Value> {
    body.as_object().and_then(|fields| fields.get(key))
}

fn is_given(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

fn is_blank(s: &str) -> bool {
    s.trim_matches(is_client_whitespace).is_empty()
}

// Same set as CLIENT_WHITESPACE
fn is_client_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

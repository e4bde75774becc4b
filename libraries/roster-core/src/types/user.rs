/// User domain type
use super::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier, assigned on creation
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Email address, unique across the store
    pub email: String,

    /// Creation timestamp
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with a generated id, stamped at `now`
    pub fn new(name: impl Into<String>, email: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Validated create request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    /// Display name, stored as supplied
    pub name: String,
    /// Email address
    pub email: String,
}

/// Validated update request
///
/// `None` means the field was not supplied and stays as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUser {
    /// Replacement display name
    pub name: Option<String>,
    /// Replacement email address
    pub email: Option<String>,
}

/// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T12:00:00.000Z`
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::consts::consts::EntityId;

/// Closed set of department codes a record can be filed under
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
pub enum Department {
    #[serde(rename = "IT")]
    #[strum(serialize = "IT")]
    It,
    #[serde(rename = "RH")]
    #[strum(serialize = "RH")]
    Rh,
    Commercial,
    Marketing,
    Finance,
    Operations,
}

impl Department {
    /// Human readable label, the directory only ships the fr-FR locale
    pub fn display_name(&self) -> &'static str {
        match self {
            Department::It => "Informatique",
            Department::Rh => "Ressources Humaines",
            Department::Commercial => "Commercial",
            Department::Marketing => "Marketing",
            Department::Finance => "Finance",
            Department::Operations => "Opérations",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EntityId,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub position: String,
    #[serde(default, with = "empty_string_as_none")]
    pub phone: Option<String>,
    #[serde(default, with = "empty_string_as_none")]
    pub department: Option<Department>,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

impl Employee {
    /// Builds a record from an already validated input, assigning the id and creation time.
    /// Text fields are trimmed and the email is lower-cased.
    pub fn new(input: EmployeeInput) -> Self {
        let phone = input
            .phone
            .map(|phone| phone.trim().to_string())
            .filter(|phone| !phone.is_empty());

        Employee {
            id: EntityId::new(),
            last_name: input.last_name.trim().to_string(),
            first_name: input.first_name.trim().to_string(),
            email: normalize_email(&input.email),
            position: input.position.trim().to_string(),
            phone,
            department: input.department,
            // Stored timestamps carry millisecond precision
            created_at: Utc::now().trunc_subsecs(3),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Candidate record as submitted by the view layer, before validation
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct EmployeeInput {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub position: String,
    pub phone: Option<String>,
    pub department: Option<Department>,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl EmployeeInput {
    pub fn new(
        last_name: impl Into<String>,
        first_name: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            last_name: last_name.into(),
            first_name: first_name.into(),
            email: email.into(),
            position: position.into(),
            phone: None,
            department: None,
        }
    }

    pub fn set_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn set_department(mut self, department: Department) -> Self {
        self.department = Some(department);
        self
    }
}

/// Timestamps are persisted as ISO-8601 UTC with exactly three fractional digits
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

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
        let value = String::deserialize(deserializer)?;

        DateTime::parse_from_rfc3339(&value)
            .map(|date| date.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }
}

/// Optional fields are persisted as an empty string when absent
mod empty_string_as_none {
    use std::{fmt::Display, str::FromStr};

    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: AsRef<str>,
    {
        serializer.serialize_str(value.as_ref().map(|v| v.as_ref()).unwrap_or(""))
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;

        match value.as_deref() {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some).map_err(de::Error::custom),
        }
    }
}

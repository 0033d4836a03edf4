//! Survey record and field selector definitions.
//!
//! A record is one synthetic student. Column names match the CSV header
//! written to `Study_Data.csv`.

use crate::utils::error::TabulateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One synthetic student's categorical attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 1-based position in the generated sequence
    #[serde(rename = "Serial_Number")]
    pub serial_number: u64,

    /// Age bracket (e.g. "18-20")
    #[serde(rename = "Age")]
    pub age: String,

    #[serde(rename = "Gender")]
    pub gender: String,

    /// Preferred social-media platform
    #[serde(rename = "Platform")]
    pub platform: String,

    /// Daily usage bracket (e.g. "1-2 hours")
    #[serde(rename = "Hours")]
    pub hours: String,
}

impl Record {
    pub fn new(
        serial_number: u64,
        age: impl Into<String>,
        gender: impl Into<String>,
        platform: impl Into<String>,
        hours: impl Into<String>,
    ) -> Self {
        Self {
            serial_number,
            age: age.into(),
            gender: gender.into(),
            platform: platform.into(),
            hours: hours.into(),
        }
    }

    /// Value of the selected categorical field
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::Platform => &self.platform,
            Field::Hours => &self.hours,
        }
    }
}

/// Selects one of the four categorical attributes of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Age,
    Gender,
    Platform,
    Hours,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Age, Field::Gender, Field::Platform, Field::Hours];

    /// Column name as written in the CSV header
    pub fn column_name(&self) -> &'static str {
        match self {
            Field::Age => "Age",
            Field::Gender => "Gender",
            Field::Platform => "Platform",
            Field::Hours => "Hours",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Field {
    type Err = TabulateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "age" => Ok(Field::Age),
            "gender" => Ok(Field::Gender),
            "platform" => Ok(Field::Platform),
            "hours" => Ok(Field::Hours),
            other => Err(TabulateError::UnknownField(other.to_string())),
        }
    }
}

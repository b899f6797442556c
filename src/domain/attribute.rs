//! Exist attribute types

use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// Exist value types. The numbering follows Exist's API, which has no 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Quantity,
    Decimal,
    String,
    Duration,
    TimeOfDay,
    Percentage,
    Boolean,
    Scale,
}

impl ValueType {
    /// Numeric code sent to Exist
    pub fn code(self) -> u8 {
        match self {
            ValueType::Quantity => 0,
            ValueType::Decimal => 1,
            ValueType::String => 2,
            ValueType::Duration => 3,
            ValueType::TimeOfDay => 4,
            ValueType::Percentage => 5,
            ValueType::Boolean => 7,
            ValueType::Scale => 8,
        }
    }
}

impl Serialize for ValueType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Value written for one attribute on one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Boolean(bool),
    Integer(i64),
    Number(f64),
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Boolean(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Integer(i64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

/// A single date/value update for a named attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeUpdate {
    pub name: String,
    pub date: NaiveDate,
    pub value: AttributeValue,
}

impl AttributeUpdate {
    pub fn new(name: impl Into<String>, date: NaiveDate, value: impl Into<AttributeValue>) -> Self {
        AttributeUpdate {
            name: name.into(),
            date,
            value: value.into(),
        }
    }
}

impl fmt::Display for AttributeUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self.value {
            AttributeValue::Boolean(v) => v.to_string(),
            AttributeValue::Integer(v) => v.to_string(),
            AttributeValue::Number(v) => v.to_string(),
        };
        write!(f, "{}  {} = {}", self.date.format("%Y-%m-%d"), self.name, value)
    }
}

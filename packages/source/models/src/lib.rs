#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Raw collision row representation and decoded field names.
//!
//! A [`RawRow`] is one CSV row from the national collision dataset, keyed by
//! the agency column names (`C_YEAR`, `V_TYPE`, ...). Cells are typed on read
//! into a [`RawValue`] so that decoding can dispatch on whether a code is
//! numeric or a letter code.
//!
//! [`Field`] names the decoded attributes a record exposes and [`FieldValue`]
//! is the value of one such attribute after decoding.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString, IntoStaticStr};

/// A single raw cell value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Empty cell.
    #[default]
    Missing,
    /// Cell that parsed as an integer.
    Int(i64),
    /// Cell that parsed as a finite float but not an integer.
    Float(f64),
    /// Anything else, such as the `UU`/`XX` letter codes.
    Text(String),
}

impl RawValue {
    /// Types a CSV cell: empty → [`Self::Missing`], then integer, then
    /// float, then text. Surrounding whitespace is ignored.
    #[must_use]
    pub fn from_cell(cell: &str) -> Self {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            return Self::Missing;
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return Self::Int(value);
        }
        if let Ok(value) = trimmed.parse::<f64>()
            && value.is_finite()
        {
            return Self::Float(value);
        }
        Self::Text(trimmed.to_owned())
    }

    /// Coerces the value to an integer code.
    ///
    /// Integral floats and numeric text coerce; fractional floats, letter
    /// codes and missing cells do not.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Float(value) if value.fract() == 0.0 && value.abs() < 9.0e15 => {
                Some(*value as i64)
            }
            Self::Text(text) => text.trim().parse().ok(),
            Self::Float(_) | Self::Missing => None,
        }
    }

    /// Returns the text of a [`Self::Text`] value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One row of the source dataset, keyed by agency column name.
///
/// The dataset is denormalized: each row is one person in one vehicle in one
/// collision.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow {
    columns: BTreeMap<String, RawValue>,
}

impl RawRow {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: BTreeMap::new(),
        }
    }

    /// Builder-style [`Self::insert`].
    #[must_use]
    pub fn with(mut self, column: &str, value: impl Into<RawValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Sets a column, replacing any previous value.
    pub fn insert(&mut self, column: &str, value: impl Into<RawValue>) {
        self.columns.insert(column.to_owned(), value.into());
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&RawValue> {
        self.columns.get(column)
    }

    /// Removes and returns a column.
    pub fn remove(&mut self, column: &str) -> Option<RawValue> {
        self.columns.remove(column)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.columns
            .iter()
            .map(|(column, value)| (column.as_str(), value))
    }
}

impl FromIterator<(String, RawValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, RawValue)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

/// The denormalized entity a field describes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Facet {
    Collision,
    Vehicle,
    Person,
}

/// Public, decoded attribute of a collision record.
///
/// Parses from and displays as its lower-case name (`c_weather`). Ordering
/// follows declaration order, which is also the export column order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    IntoStaticStr,
)]
pub enum Field {
    #[serde(rename = "c_year")]
    #[strum(serialize = "c_year")]
    CYear,
    #[serde(rename = "c_month")]
    #[strum(serialize = "c_month")]
    CMonth,
    #[serde(rename = "c_weekday")]
    #[strum(serialize = "c_weekday")]
    CWeekday,
    #[serde(rename = "c_hour")]
    #[strum(serialize = "c_hour")]
    CHour,
    #[serde(rename = "c_severity")]
    #[strum(serialize = "c_severity")]
    CSeverity,
    #[serde(rename = "c_vehicles")]
    #[strum(serialize = "c_vehicles")]
    CVehicles,
    #[serde(rename = "c_configuration")]
    #[strum(serialize = "c_configuration")]
    CConfiguration,
    #[serde(rename = "c_road_configuration")]
    #[strum(serialize = "c_road_configuration")]
    CRoadConfiguration,
    #[serde(rename = "c_weather")]
    #[strum(serialize = "c_weather")]
    CWeather,
    #[serde(rename = "c_road_surface")]
    #[strum(serialize = "c_road_surface")]
    CRoadSurface,
    #[serde(rename = "c_road_alignment")]
    #[strum(serialize = "c_road_alignment")]
    CRoadAlignment,
    #[serde(rename = "c_traffic")]
    #[strum(serialize = "c_traffic")]
    CTraffic,
    #[serde(rename = "v_id")]
    #[strum(serialize = "v_id")]
    VId,
    #[serde(rename = "v_type")]
    #[strum(serialize = "v_type")]
    VType,
    #[serde(rename = "v_year")]
    #[strum(serialize = "v_year")]
    VYear,
    #[serde(rename = "p_id")]
    #[strum(serialize = "p_id")]
    PId,
    #[serde(rename = "p_sex")]
    #[strum(serialize = "p_sex")]
    PSex,
    #[serde(rename = "p_age")]
    #[strum(serialize = "p_age")]
    PAge,
    #[serde(rename = "p_position")]
    #[strum(serialize = "p_position")]
    PPosition,
    #[serde(rename = "p_isev")]
    #[strum(serialize = "p_isev")]
    PIsev,
    #[serde(rename = "p_safety_device")]
    #[strum(serialize = "p_safety_device")]
    PSafetyDevice,
    #[serde(rename = "p_user")]
    #[strum(serialize = "p_user")]
    PUser,
    #[serde(rename = "c_case")]
    #[strum(serialize = "c_case")]
    CCase,
}

impl Field {
    /// Every field, in export order.
    pub const ALL: [Self; 23] = [
        Self::CYear,
        Self::CMonth,
        Self::CWeekday,
        Self::CHour,
        Self::CSeverity,
        Self::CVehicles,
        Self::CConfiguration,
        Self::CRoadConfiguration,
        Self::CWeather,
        Self::CRoadSurface,
        Self::CRoadAlignment,
        Self::CTraffic,
        Self::VId,
        Self::VType,
        Self::VYear,
        Self::PId,
        Self::PSex,
        Self::PAge,
        Self::PPosition,
        Self::PIsev,
        Self::PSafetyDevice,
        Self::PUser,
        Self::CCase,
    ];

    /// Returns the source CSV column this field decodes from.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::CYear => "C_YEAR",
            Self::CMonth => "C_MNTH",
            Self::CWeekday => "C_WDAY",
            Self::CHour => "C_HOUR",
            Self::CSeverity => "C_SEV",
            Self::CVehicles => "C_VEHS",
            Self::CConfiguration => "C_CONF",
            Self::CRoadConfiguration => "C_RCFG",
            Self::CWeather => "C_WTHR",
            Self::CRoadSurface => "C_RSUR",
            Self::CRoadAlignment => "C_RALN",
            Self::CTraffic => "C_TRAF",
            Self::VId => "V_ID",
            Self::VType => "V_TYPE",
            Self::VYear => "V_YEAR",
            Self::PId => "P_ID",
            Self::PSex => "P_SEX",
            Self::PAge => "P_AGE",
            Self::PPosition => "P_PSN",
            Self::PIsev => "P_ISEV",
            Self::PSafetyDevice => "P_SAFE",
            Self::PUser => "P_USER",
            Self::CCase => "C_CASE",
        }
    }

    #[must_use]
    pub const fn facet(self) -> Facet {
        match self {
            Self::VId | Self::VType | Self::VYear => Facet::Vehicle,
            Self::PId
            | Self::PSex
            | Self::PAge
            | Self::PPosition
            | Self::PIsev
            | Self::PSafetyDevice
            | Self::PUser => Facet::Person,
            _ => Facet::Collision,
        }
    }
}

/// Decoded value of a single [`Field`].
///
/// Categorical fields decode to their label text; numeric fields to
/// [`Self::Int`]; opaque fields keep whatever the raw cell held.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Types a user-supplied value the same way a CSV cell is typed, so that
    /// `"2017"` compares equal to a decoded year.
    #[must_use]
    pub fn from_cell(cell: &str) -> Self {
        Self::from(RawValue::from_cell(cell))
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<RawValue> for FieldValue {
    fn from(value: RawValue) -> Self {
        match value {
            RawValue::Missing => Self::Null,
            RawValue::Int(value) => Self::Int(value),
            RawValue::Float(value) => Self::Float(value),
            RawValue::Text(text) => Self::Text(text),
        }
    }
}

impl From<&RawValue> for FieldValue {
    fn from(value: &RawValue) -> Self {
        Self::from(value.clone())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

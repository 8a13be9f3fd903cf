#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Collision record decoding, collections and attribute filtering.
//!
//! [`Record`] wraps one raw dataset row and exposes every coded column as a
//! decoded, human-readable attribute. [`Collection`] holds decoded records in
//! load order and supports equality filtering through [`Criteria`].

pub mod collection;
pub mod criteria;
pub mod decode;
pub mod record;

pub use collection::Collection;
pub use criteria::{Criteria, CriteriaError};
pub use record::{IntoRecord, Record};

use road_collisions_source_models::{Field, RawValue};

/// Errors that can occur while decoding a raw row.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    /// A required source column is absent from the row.
    #[error("Missing column {column}")]
    MissingField {
        /// Source column name (e.g. `C_SEV`).
        column: &'static str,
    },

    /// A strictly decoded field held a code outside its table.
    #[error("Unrecognized {field} code: {value:?}")]
    UnknownCode {
        /// Field being decoded.
        field: Field,
        /// Raw value that failed to decode.
        value: RawValue,
    },
}

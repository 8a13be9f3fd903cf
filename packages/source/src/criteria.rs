//! Attribute equality constraints used by [`crate::Collection::filter`].

use std::collections::BTreeMap;

use road_collisions_collision_models::{
    CodedCategory, CollisionConfiguration, Month, RoadAlignment, RoadConfiguration, RoadSurface,
    SafetyDevice, SeatingPosition, Severity, TrafficControl, VehicleType, Weather, Weekday,
};
use road_collisions_source_models::{Field, FieldValue};

use crate::Record;

/// Errors from parsing `name=value` filter pairs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaError {
    /// The name is not a known record field.
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    /// The pair has no `=` separator.
    #[error("Expected name=value, got '{0}'")]
    MalformedPair(String),
}

/// A set of `field == value` constraints. A record matches when every
/// constraint holds; fields without a constraint are not checked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    constraints: BTreeMap<Field, FieldValue>,
}

impl Criteria {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            constraints: BTreeMap::new(),
        }
    }

    /// Adds a constraint, replacing any previous one on the same field.
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<FieldValue>) -> Self {
        self.constraints.insert(field, value.into());
        self
    }

    /// Parses a single `name=value` pair, e.g. `c_weather=raining`.
    ///
    /// The value is typed like a CSV cell, so `c_year=2017` constrains to
    /// the integer 2017 and an empty value constrains to null.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError`] if the pair is malformed or names an
    /// unknown field.
    pub fn parse_pair(pair: &str) -> Result<(Field, FieldValue), CriteriaError> {
        let (name, value) = pair
            .split_once('=')
            .ok_or_else(|| CriteriaError::MalformedPair(pair.to_owned()))?;
        let name = name.trim();
        let field = name
            .parse::<Field>()
            .map_err(|_| CriteriaError::UnknownField(name.to_owned()))?;
        let value = match FieldValue::from_cell(value) {
            FieldValue::Text(text) => canonical_label(field, &text)
                .map_or(FieldValue::Text(text), FieldValue::from),
            other => other,
        };
        Ok((field, value))
    }

    /// Builds criteria from a list of `name=value` pairs.
    ///
    /// # Errors
    ///
    /// Returns the first [`CriteriaError`] encountered.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self, CriteriaError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        pairs
            .into_iter()
            .map(|pair| Self::parse_pair(pair.as_ref()))
            .collect::<Result<BTreeMap<_, _>, _>>()
            .map(|constraints| Self { constraints })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldValue)> {
        self.constraints.iter().map(|(field, value)| (*field, value))
    }

    /// Returns `true` if every constraint equals the record's decoded value.
    #[must_use]
    pub fn matches(&self, record: &Record) -> bool {
        self.constraints
            .iter()
            .all(|(field, expected)| record.get(*field) == *expected)
    }
}

/// Maps any accepted spelling of a category label to the label records
/// decode to.
fn canonical_label(field: Field, text: &str) -> Option<&'static str> {
    fn label<T: CodedCategory + std::str::FromStr>(text: &str) -> Option<&'static str> {
        text.parse::<T>().ok().map(CodedCategory::label)
    }

    match field {
        Field::CMonth => label::<Month>(text),
        Field::CWeekday => label::<Weekday>(text),
        Field::CSeverity => label::<Severity>(text),
        Field::CConfiguration => label::<CollisionConfiguration>(text),
        Field::CRoadConfiguration => label::<RoadConfiguration>(text),
        Field::CWeather => label::<Weather>(text),
        Field::CRoadSurface => label::<RoadSurface>(text),
        Field::CRoadAlignment => label::<RoadAlignment>(text),
        Field::CTraffic => label::<TrafficControl>(text),
        Field::VType => label::<VehicleType>(text),
        Field::PPosition => label::<SeatingPosition>(text),
        Field::PSafetyDevice => label::<SafetyDevice>(text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::sample_row;

    #[test]
    fn parses_pairs() {
        assert_eq!(
            Criteria::parse_pair("c_weather=raining"),
            Ok((Field::CWeather, FieldValue::from("raining")))
        );
        assert_eq!(
            Criteria::parse_pair("c_year=2017"),
            Ok((Field::CYear, FieldValue::Int(2017)))
        );
        assert_eq!(
            Criteria::parse_pair("c_month="),
            Ok((Field::CMonth, FieldValue::Null))
        );
        assert_eq!(
            Criteria::parse_pair("c_configuration=other_2_vehicle-same_direction_of_travel"),
            Ok((
                Field::CConfiguration,
                FieldValue::from("other_2_vehicle-same_direction_of_travel")
            ))
        );
    }

    #[test]
    fn legacy_label_spelling_matches_decoded_records() {
        assert_eq!(
            Criteria::parse_pair("c_configuration=right_turn_oncluding_turning_conflicts"),
            Ok((
                Field::CConfiguration,
                FieldValue::from("right_turn_including_turning_conflicts")
            ))
        );

        let record = Record::decode(sample_row().with("C_CONF", 34)).unwrap();
        let legacy =
            Criteria::from_pairs(["c_configuration=right_turn_oncluding_turning_conflicts"])
                .unwrap();
        assert!(legacy.matches(&record));
    }

    #[test]
    fn rejects_bad_pairs() {
        assert_eq!(
            Criteria::parse_pair("weather=raining"),
            Err(CriteriaError::UnknownField("weather".to_owned()))
        );
        assert_eq!(
            Criteria::parse_pair("c_weather"),
            Err(CriteriaError::MalformedPair("c_weather".to_owned()))
        );
        assert!(Criteria::from_pairs(["c_year=2017", "nope=1"]).is_err());
    }

    #[test]
    fn later_pairs_override_earlier_ones() {
        let criteria = Criteria::from_pairs(["c_year=2016", "c_year=2017"]).unwrap();
        assert_eq!(criteria.len(), 1);
        assert_eq!(
            criteria.iter().next(),
            Some((Field::CYear, &FieldValue::Int(2017)))
        );
    }

    #[test]
    fn letter_coded_counts_are_filterable() {
        let unknown_year = Record::decode(sample_row().with("V_YEAR", "UUUU")).unwrap();
        let missing_year = Record::decode(sample_row().with("V_YEAR", "XXXX")).unwrap();
        let criteria = Criteria::from_pairs(["v_year=UUUU"]).unwrap();

        assert!(criteria.matches(&unknown_year));
        assert!(!criteria.matches(&missing_year));
        let model_year = Criteria::from_pairs(["v_year=2012"]).unwrap();
        assert!(model_year.matches(&Record::decode(sample_row()).unwrap()));
    }

    #[test]
    fn matches_on_every_constraint() {
        let record = Record::decode(sample_row()).unwrap();

        assert!(Criteria::new().matches(&record));
        assert!(
            Criteria::new()
                .with(Field::CWeather, "raining")
                .with(Field::CYear, 2017)
                .matches(&record)
        );
        assert!(
            !Criteria::new()
                .with(Field::CWeather, "raining")
                .with(Field::CSeverity, "fatality")
                .matches(&record)
        );
        assert!(
            Criteria::new()
                .with(Field::PSex, "F")
                .with(Field::CCase, 2_890_716)
                .matches(&record)
        );
    }
}

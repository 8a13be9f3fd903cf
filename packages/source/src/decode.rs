//! Table lookups from raw cells to decoded categories.
//!
//! Lenient decoders return `None` when the cell cannot be coerced to an
//! integer or the integer is not in the table. [`severity`] and
//! [`vehicle_type`] are strict and report a [`DecodeError`] instead.

use road_collisions_collision_models::{
    CodedCategory, CollisionConfiguration, Month, RoadAlignment, RoadConfiguration, RoadSurface,
    SafetyDevice, SeatingPosition, Severity, TrafficControl, VehicleType, Weather, Weekday,
};
use road_collisions_source_models::{Field, RawValue};

use crate::DecodeError;

/// Coerces `raw` to an integer and looks it up in `T`'s code table.
#[must_use]
pub fn coded<T: CodedCategory>(raw: &RawValue) -> Option<T> {
    raw.as_int().and_then(T::from_code)
}

#[must_use]
pub fn month(raw: &RawValue) -> Option<Month> {
    coded(raw)
}

#[must_use]
pub fn weekday(raw: &RawValue) -> Option<Weekday> {
    coded(raw)
}

#[must_use]
pub fn configuration(raw: &RawValue) -> Option<CollisionConfiguration> {
    coded(raw)
}

#[must_use]
pub fn road_configuration(raw: &RawValue) -> Option<RoadConfiguration> {
    coded(raw)
}

#[must_use]
pub fn weather(raw: &RawValue) -> Option<Weather> {
    coded(raw)
}

#[must_use]
pub fn road_surface(raw: &RawValue) -> Option<RoadSurface> {
    coded(raw)
}

#[must_use]
pub fn road_alignment(raw: &RawValue) -> Option<RoadAlignment> {
    coded(raw)
}

#[must_use]
pub fn traffic_control(raw: &RawValue) -> Option<TrafficControl> {
    coded(raw)
}

#[must_use]
pub fn seating_position(raw: &RawValue) -> Option<SeatingPosition> {
    coded(raw)
}

#[must_use]
pub fn safety_device(raw: &RawValue) -> Option<SafetyDevice> {
    coded(raw)
}

/// Decodes `C_SEV`.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownCode`] for anything other than codes 1-3.
pub fn severity(raw: &RawValue) -> Result<Severity, DecodeError> {
    coded(raw).ok_or_else(|| DecodeError::UnknownCode {
        field: Field::CSeverity,
        value: raw.clone(),
    })
}

/// Decodes `V_TYPE`.
///
/// Numeric codes go through the numeric table. Values that do not coerce to
/// an integer fall back to the letter-code table (`N`, `QQ`, `U`, ...).
///
/// # Errors
///
/// Returns [`DecodeError::UnknownCode`] when the value is in neither table,
/// including a numeric code missing from the numeric table.
pub fn vehicle_type(raw: &RawValue) -> Result<VehicleType, DecodeError> {
    let decoded = raw.as_int().map_or_else(
        || raw.as_text().and_then(VehicleType::from_letter_code),
        VehicleType::from_code,
    );

    decoded.ok_or_else(|| DecodeError::UnknownCode {
        field: Field::VType,
        value: raw.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_decodes_numeric_text_and_rejects_the_rest() {
        assert_eq!(month(&RawValue::from("3")), Some(Month::Mar));
        assert_eq!(month(&RawValue::Int(12)), Some(Month::Dec));
        assert_eq!(month(&RawValue::Int(0)), None);
        assert_eq!(month(&RawValue::Int(13)), None);
        assert_eq!(month(&RawValue::from("UU")), None);
        assert_eq!(month(&RawValue::Missing), None);
    }

    #[test]
    fn weekday_decodes() {
        assert_eq!(weekday(&RawValue::from("5")), Some(Weekday::Fri));
        assert_eq!(weekday(&RawValue::Int(7)), Some(Weekday::Sun));
        assert_eq!(weekday(&RawValue::Int(8)), None);
        assert_eq!(weekday(&RawValue::from("XX")), None);
    }

    #[test]
    fn severity_is_strict() {
        assert_eq!(severity(&RawValue::Int(1)), Ok(Severity::NoInjury));
        assert_eq!(severity(&RawValue::Int(2)), Ok(Severity::Injury));
        assert_eq!(severity(&RawValue::from("3")), Ok(Severity::Fatality));
        assert_eq!(
            severity(&RawValue::Int(9)),
            Err(DecodeError::UnknownCode {
                field: Field::CSeverity,
                value: RawValue::Int(9),
            })
        );
        assert!(severity(&RawValue::Missing).is_err());
    }

    #[test]
    fn vehicle_type_numeric_and_letter_codes() {
        assert_eq!(vehicle_type(&RawValue::from("1")), Ok(VehicleType::LightDuty));
        assert_eq!(vehicle_type(&RawValue::Int(23)), Ok(VehicleType::StreetCar));
        assert_eq!(vehicle_type(&RawValue::from("N")), Ok(VehicleType::NotVehicle));
        assert_eq!(vehicle_type(&RawValue::from("NN")), Ok(VehicleType::NotVehicle));
        assert_eq!(vehicle_type(&RawValue::from("Q")), Ok(VehicleType::Other));
        assert_eq!(vehicle_type(&RawValue::from("QQ")), Ok(VehicleType::Other));
        assert_eq!(vehicle_type(&RawValue::from("U")), Ok(VehicleType::Unknown));
        assert_eq!(vehicle_type(&RawValue::from("UU")), Ok(VehicleType::Unknown));
    }

    #[test]
    fn vehicle_type_misses_are_errors() {
        assert!(vehicle_type(&RawValue::Int(2)).is_err());
        assert!(vehicle_type(&RawValue::from("XX")).is_err());
        assert!(vehicle_type(&RawValue::Missing).is_err());
    }

    #[test]
    fn lenient_tables() {
        assert_eq!(weather(&RawValue::Int(3)), Some(Weather::Raining));
        assert_eq!(road_surface(&RawValue::Int(5)), Some(RoadSurface::Icy));
        assert_eq!(road_alignment(&RawValue::Int(0)), None);
        assert_eq!(
            traffic_control(&RawValue::from("18")),
            None,
            "past the end of the positional table"
        );
        assert_eq!(
            configuration(&RawValue::from("21")),
            Some(CollisionConfiguration::RearEndCollision)
        );
        assert_eq!(configuration(&RawValue::from("QQ")), None);
        assert_eq!(
            road_configuration(&RawValue::Int(2)),
            Some(RoadConfiguration::AtAnIntersection)
        );
        assert_eq!(
            seating_position(&RawValue::from("11")),
            Some(SeatingPosition::Driver)
        );
        assert_eq!(
            safety_device(&RawValue::Float(13.0)),
            Some(SafetyDevice::NoSafetyDeviceEquipped)
        );
        assert_eq!(safety_device(&RawValue::from("NN")), None);
    }
}

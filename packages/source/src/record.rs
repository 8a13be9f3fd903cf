//! Decoded view over a single raw dataset row.

use std::collections::BTreeMap;

use road_collisions_collision_models::{
    CodedCategory, CollisionConfiguration, Month, RoadAlignment, RoadConfiguration, RoadSurface,
    SafetyDevice, SeatingPosition, Severity, TrafficControl, VehicleType, Weather, Weekday,
};
use road_collisions_source_models::{Field, FieldValue, RawRow, RawValue};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{DecodeError, decode};

/// One person-vehicle-collision row with decoded attributes.
///
/// Lenient attributes are decoded from the retained raw cell each time they
/// are read. Severity and vehicle type are resolved when the record is
/// built, so a `Record` never carries an unrecognized primary category.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    c_year: RawValue,
    c_mnth: RawValue,
    c_wday: RawValue,
    c_hour: RawValue,
    c_sev: Severity,
    c_vehs: RawValue,
    c_conf: RawValue,
    c_rcfg: RawValue,
    c_wthr: RawValue,
    c_rsur: RawValue,
    c_raln: RawValue,
    c_traf: RawValue,
    c_case: RawValue,
    v_id: RawValue,
    v_type: VehicleType,
    v_year: RawValue,
    p_id: RawValue,
    p_sex: RawValue,
    p_age: RawValue,
    p_psn: RawValue,
    p_isev: RawValue,
    p_safe: RawValue,
    p_user: RawValue,
}

impl Record {
    /// Builds a record from a raw row. Columns other than the 23 known
    /// source columns are ignored.
    ///
    /// # Errors
    ///
    /// * [`DecodeError::MissingField`] if a source column is absent
    /// * [`DecodeError::UnknownCode`] if `C_SEV` or `V_TYPE` is unrecognized
    pub fn decode(mut raw: RawRow) -> Result<Self, DecodeError> {
        let mut take = |field: Field| {
            raw.remove(field.column())
                .ok_or(DecodeError::MissingField {
                    column: field.column(),
                })
        };

        Ok(Self {
            c_year: take(Field::CYear)?,
            c_mnth: take(Field::CMonth)?,
            c_wday: take(Field::CWeekday)?,
            c_hour: take(Field::CHour)?,
            c_sev: decode::severity(&take(Field::CSeverity)?)?,
            c_vehs: take(Field::CVehicles)?,
            c_conf: take(Field::CConfiguration)?,
            c_rcfg: take(Field::CRoadConfiguration)?,
            c_wthr: take(Field::CWeather)?,
            c_rsur: take(Field::CRoadSurface)?,
            c_raln: take(Field::CRoadAlignment)?,
            c_traf: take(Field::CTraffic)?,
            c_case: take(Field::CCase)?,
            v_id: take(Field::VId)?,
            v_type: decode::vehicle_type(&take(Field::VType)?)?,
            v_year: take(Field::VYear)?,
            p_id: take(Field::PId)?,
            p_sex: take(Field::PSex)?,
            p_age: take(Field::PAge)?,
            p_psn: take(Field::PPosition)?,
            p_isev: take(Field::PIsev)?,
            p_safe: take(Field::PSafetyDevice)?,
            p_user: take(Field::PUser)?,
        })
    }

    /// Accepts either a raw row or an already decoded record. A record is
    /// handed back unchanged.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::decode`] failures for raw rows.
    pub fn parse(input: impl IntoRecord) -> Result<Self, DecodeError> {
        input.into_record()
    }

    #[must_use]
    pub fn c_year(&self) -> Option<i64> {
        self.c_year.as_int()
    }

    #[must_use]
    pub fn c_month(&self) -> Option<Month> {
        decode::month(&self.c_mnth)
    }

    #[must_use]
    pub fn c_weekday(&self) -> Option<Weekday> {
        decode::weekday(&self.c_wday)
    }

    /// Hour of day, 0-23, or a letter code (`UU`, `XX`) passed through as-is.
    #[must_use]
    pub const fn c_hour(&self) -> &RawValue {
        &self.c_hour
    }

    #[must_use]
    pub const fn c_severity(&self) -> Severity {
        self.c_sev
    }

    /// Number of vehicles involved in the collision, passed through as-is.
    #[must_use]
    pub const fn c_vehicles(&self) -> &RawValue {
        &self.c_vehs
    }

    #[must_use]
    pub fn c_configuration(&self) -> Option<CollisionConfiguration> {
        decode::configuration(&self.c_conf)
    }

    #[must_use]
    pub fn c_road_configuration(&self) -> Option<RoadConfiguration> {
        decode::road_configuration(&self.c_rcfg)
    }

    #[must_use]
    pub fn c_weather(&self) -> Option<Weather> {
        decode::weather(&self.c_wthr)
    }

    #[must_use]
    pub fn c_road_surface(&self) -> Option<RoadSurface> {
        decode::road_surface(&self.c_rsur)
    }

    #[must_use]
    pub fn c_road_alignment(&self) -> Option<RoadAlignment> {
        decode::road_alignment(&self.c_raln)
    }

    #[must_use]
    pub fn c_traffic(&self) -> Option<TrafficControl> {
        decode::traffic_control(&self.c_traf)
    }

    /// Collision case number, passed through as-is.
    #[must_use]
    pub const fn c_case(&self) -> &RawValue {
        &self.c_case
    }

    /// Vehicle sequence number within the collision.
    #[must_use]
    pub const fn v_id(&self) -> &RawValue {
        &self.v_id
    }

    #[must_use]
    pub const fn v_type(&self) -> VehicleType {
        self.v_type
    }

    /// Model year of the vehicle. `UUUU` (unknown) and `XXXX` (not provided)
    /// are kept distinct.
    #[must_use]
    pub const fn v_year(&self) -> &RawValue {
        &self.v_year
    }

    /// Person sequence number within the vehicle.
    #[must_use]
    pub const fn p_id(&self) -> &RawValue {
        &self.p_id
    }

    #[must_use]
    pub const fn p_sex(&self) -> &RawValue {
        &self.p_sex
    }

    #[must_use]
    pub const fn p_age(&self) -> &RawValue {
        &self.p_age
    }

    #[must_use]
    pub fn p_position(&self) -> Option<SeatingPosition> {
        decode::seating_position(&self.p_psn)
    }

    /// Medical treatment code for the person, passed through as-is.
    #[must_use]
    pub const fn p_isev(&self) -> &RawValue {
        &self.p_isev
    }

    #[must_use]
    pub fn p_safety_device(&self) -> Option<SafetyDevice> {
        decode::safety_device(&self.p_safe)
    }

    /// Road user class code, passed through as-is.
    #[must_use]
    pub const fn p_user(&self) -> &RawValue {
        &self.p_user
    }

    /// Returns the decoded value of a single field.
    #[must_use]
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::CYear => self.c_year().into(),
            Field::CMonth => self.c_month().map(CodedCategory::label).into(),
            Field::CWeekday => self.c_weekday().map(CodedCategory::label).into(),
            Field::CHour => self.c_hour().into(),
            Field::CSeverity => self.c_severity().label().into(),
            Field::CVehicles => self.c_vehicles().into(),
            Field::CConfiguration => self.c_configuration().map(CodedCategory::label).into(),
            Field::CRoadConfiguration => self
                .c_road_configuration()
                .map(CodedCategory::label)
                .into(),
            Field::CWeather => self.c_weather().map(CodedCategory::label).into(),
            Field::CRoadSurface => self.c_road_surface().map(CodedCategory::label).into(),
            Field::CRoadAlignment => self.c_road_alignment().map(CodedCategory::label).into(),
            Field::CTraffic => self.c_traffic().map(CodedCategory::label).into(),
            Field::VId => self.v_id().into(),
            Field::VType => self.v_type().label().into(),
            Field::VYear => self.v_year().into(),
            Field::PId => self.p_id().into(),
            Field::PSex => self.p_sex().into(),
            Field::PAge => self.p_age().into(),
            Field::PPosition => self.p_position().map(CodedCategory::label).into(),
            Field::PIsev => self.p_isev().into(),
            Field::PSafetyDevice => self.p_safety_device().map(CodedCategory::label).into(),
            Field::PUser => self.p_user().into(),
            Field::CCase => self.c_case().into(),
        }
    }

    /// Flattens the record into `field name → decoded value`, one entry per
    /// public attribute.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<Field, FieldValue> {
        Field::ALL
            .into_iter()
            .map(|field| (field, self.get(field)))
            .collect()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Field::ALL.len()))?;
        for field in Field::ALL {
            map.serialize_entry(field.as_ref(), &self.get(field))?;
        }
        map.end()
    }
}

/// Input accepted by [`Record::parse`].
pub trait IntoRecord {
    /// Converts `self` into a decoded record.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if a raw row cannot be decoded.
    fn into_record(self) -> Result<Record, DecodeError>;
}

impl IntoRecord for Record {
    fn into_record(self) -> Result<Record, DecodeError> {
        Ok(self)
    }
}

impl IntoRecord for RawRow {
    fn into_record(self) -> Result<Record, DecodeError> {
        Record::decode(self)
    }
}

impl TryFrom<RawRow> for Record {
    type Error = DecodeError;

    fn try_from(raw: RawRow) -> Result<Self, Self::Error> {
        Self::decode(raw)
    }
}

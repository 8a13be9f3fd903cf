#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Collision attribute enumerations and agency code tables.
//!
//! The national collision dataset encodes every categorical attribute as a
//! small integer (and, for vehicle type, a handful of letter codes). This
//! crate defines the human-readable enumerations those codes decode into,
//! together with the static lookup tables that map one to the other.
//!
//! Tables come in two shapes:
//!
//! * positional: indexed directly by the code, with `None` at index 0
//!   meaning "unspecified"
//! * sparse: `(code, variant)` pairs for code sets with gaps

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString, IntoStaticStr};

/// A categorical attribute decodable from an integer agency code.
pub trait CodedCategory: Copy + Into<&'static str> + 'static {
    /// Looks up the variant for an agency code, `None` if the code is not in
    /// the table.
    fn from_code(code: i64) -> Option<Self>;

    /// Returns the snake-case label for this variant.
    fn label(self) -> &'static str {
        self.into()
    }
}

fn positional<T: Copy>(table: &[Option<T>], code: i64) -> Option<T> {
    usize::try_from(code)
        .ok()
        .and_then(|index| table.get(index))
        .copied()
        .flatten()
}

fn sparse<T: Copy>(table: &[(i64, T)], code: i64) -> Option<T> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|&(_, variant)| variant)
}

/// Month of the collision (`C_MNTH`).
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// Positional table, code `1` is January.
    pub const TABLE: [Option<Self>; 13] = [
        None,
        Some(Self::Jan),
        Some(Self::Feb),
        Some(Self::Mar),
        Some(Self::Apr),
        Some(Self::May),
        Some(Self::Jun),
        Some(Self::Jul),
        Some(Self::Aug),
        Some(Self::Sep),
        Some(Self::Oct),
        Some(Self::Nov),
        Some(Self::Dec),
    ];
}

impl CodedCategory for Month {
    fn from_code(code: i64) -> Option<Self> {
        positional(&Self::TABLE, code)
    }
}

/// Day of the week of the collision (`C_WDAY`).
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// Positional table, code `1` is Monday.
    pub const TABLE: [Option<Self>; 8] = [
        None,
        Some(Self::Mon),
        Some(Self::Tue),
        Some(Self::Wed),
        Some(Self::Thu),
        Some(Self::Fri),
        Some(Self::Sat),
        Some(Self::Sun),
    ];
}

impl CodedCategory for Weekday {
    fn from_code(code: i64) -> Option<Self> {
        positional(&Self::TABLE, code)
    }
}

/// Worst outcome of the collision (`C_SEV`).
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    /// Property damage only
    NoInjury,
    /// At least one person injured, nobody killed
    Injury,
    /// At least one person killed within 30 days
    Fatality,
}

impl Severity {
    pub const CODES: &'static [(i64, Self)] = &[
        (1, Self::NoInjury),
        (2, Self::Injury),
        (3, Self::Fatality),
    ];
}

impl CodedCategory for Severity {
    fn from_code(code: i64) -> Option<Self> {
        sparse(Self::CODES, code)
    }
}

/// Manner in which the vehicles collided (`C_CONF`).
///
/// Codes 1-6 are single-vehicle events, 21-25 two vehicles travelling in the
/// same direction, 31-36 two vehicles in different directions, 41 a parked
/// vehicle.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CollisionConfiguration {
    // ── Single vehicle ──────────────────────────────────
    HitMovingObject,
    HitStationaryObject,
    RanOffLeftShoulder,
    RanOffRightShoulder,
    RolloverOnRoadway,
    OtherSingleVehicleCollision,

    // ── Two vehicles, same direction ────────────────────
    RearEndCollision,
    SideSwipe,
    #[serde(rename = "1_vehicle_passing_to_the_left_of_the_other/left_turn_conflict")]
    #[strum(serialize = "1_vehicle_passing_to_the_left_of_the_other/left_turn_conflict")]
    PassingLeftOrLeftTurnConflict,
    #[serde(rename = "1_vehicle_passing_to_the_right_of_the_other/or_right_turn_conflict")]
    #[strum(serialize = "1_vehicle_passing_to_the_right_of_the_other/or_right_turn_conflict")]
    PassingRightOrRightTurnConflict,
    #[serde(rename = "other_2_vehicle-same_direction_of_travel")]
    #[strum(serialize = "other_2_vehicle-same_direction_of_travel")]
    OtherTwoVehicleSameDirection,

    // ── Two vehicles, different direction ───────────────
    #[serde(rename = "head_on_collisions")]
    #[strum(serialize = "head_on_collisions")]
    HeadOnCollision,
    ApproachingSideSwipe,
    LeftTurnAcrossOpposingTraffic,
    #[serde(
        rename = "right_turn_including_turning_conflicts",
        alias = "right_turn_oncluding_turning_conflicts"
    )]
    #[strum(
        to_string = "right_turn_including_turning_conflicts",
        serialize = "right_turn_oncluding_turning_conflicts"
    )]
    RightTurnIncludingTurningConflicts,
    RightAngleCollision,
    AnyOtherTwoVehicle,

    // ── Parked ──────────────────────────────────────────
    #[serde(rename = "hit_a_parked_motor_vehicle")]
    #[strum(serialize = "hit_a_parked_motor_vehicle")]
    HitParkedMotorVehicle,
}

impl CollisionConfiguration {
    pub const CODES: &'static [(i64, Self)] = &[
        (1, Self::HitMovingObject),
        (2, Self::HitStationaryObject),
        (3, Self::RanOffLeftShoulder),
        (4, Self::RanOffRightShoulder),
        (5, Self::RolloverOnRoadway),
        (6, Self::OtherSingleVehicleCollision),
        (21, Self::RearEndCollision),
        (22, Self::SideSwipe),
        (23, Self::PassingLeftOrLeftTurnConflict),
        (24, Self::PassingRightOrRightTurnConflict),
        (25, Self::OtherTwoVehicleSameDirection),
        (31, Self::HeadOnCollision),
        (32, Self::ApproachingSideSwipe),
        (33, Self::LeftTurnAcrossOpposingTraffic),
        (34, Self::RightTurnIncludingTurningConflicts),
        (35, Self::RightAngleCollision),
        (36, Self::AnyOtherTwoVehicle),
        (41, Self::HitParkedMotorVehicle),
    ];
}

impl CodedCategory for CollisionConfiguration {
    fn from_code(code: i64) -> Option<Self> {
        sparse(Self::CODES, code)
    }
}

/// Type of site where the collision happened (`C_RCFG`).
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RoadConfiguration {
    MidBlock,
    AtAnIntersection,
    #[serde(rename = "intersection_with_parking_lot_entrance/exit")]
    #[strum(serialize = "intersection_with_parking_lot_entrance/exit")]
    ParkingLotEntrance,
    RailroadCrossing,
    Bridge,
    Tunnel,
    PassingOrClimbingLane,
    Ramp,
    TrafficCircle,
    HighwayExpressLane,
    HighwayCollectorLane,
    HighwayTransferLane,
}

impl RoadConfiguration {
    pub const TABLE: [Option<Self>; 13] = [
        None,
        Some(Self::MidBlock),
        Some(Self::AtAnIntersection),
        Some(Self::ParkingLotEntrance),
        Some(Self::RailroadCrossing),
        Some(Self::Bridge),
        Some(Self::Tunnel),
        Some(Self::PassingOrClimbingLane),
        Some(Self::Ramp),
        Some(Self::TrafficCircle),
        Some(Self::HighwayExpressLane),
        Some(Self::HighwayCollectorLane),
        Some(Self::HighwayTransferLane),
    ];
}

impl CodedCategory for RoadConfiguration {
    fn from_code(code: i64) -> Option<Self> {
        positional(&Self::TABLE, code)
    }
}

/// Weather at the time of the collision (`C_WTHR`).
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Weather {
    ClearAndSunny,
    Overcast,
    Raining,
    Snowing,
    FreezingRainHail,
    FogSmogMist,
    StrongWind,
}

impl Weather {
    pub const TABLE: [Option<Self>; 8] = [
        None,
        Some(Self::ClearAndSunny),
        Some(Self::Overcast),
        Some(Self::Raining),
        Some(Self::Snowing),
        Some(Self::FreezingRainHail),
        Some(Self::FogSmogMist),
        Some(Self::StrongWind),
    ];
}

impl CodedCategory for Weather {
    fn from_code(code: i64) -> Option<Self> {
        positional(&Self::TABLE, code)
    }
}

/// Condition of the road surface (`C_RSUR`).
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RoadSurface {
    DryNormal,
    Wet,
    Snow,
    SlushWetSnow,
    Icy,
    SandGravelDirt,
    Muddy,
    Oil,
    Flooded,
}

impl RoadSurface {
    pub const TABLE: [Option<Self>; 10] = [
        None,
        Some(Self::DryNormal),
        Some(Self::Wet),
        Some(Self::Snow),
        Some(Self::SlushWetSnow),
        Some(Self::Icy),
        Some(Self::SandGravelDirt),
        Some(Self::Muddy),
        Some(Self::Oil),
        Some(Self::Flooded),
    ];
}

impl CodedCategory for RoadSurface {
    fn from_code(code: i64) -> Option<Self> {
        positional(&Self::TABLE, code)
    }
}

/// Road geometry at the collision site (`C_RALN`).
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RoadAlignment {
    LevelStraight,
    GradientStraight,
    LevelCurved,
    GradientCurved,
    TopHill,
    BottomHill,
}

impl RoadAlignment {
    pub const CODES: &'static [(i64, Self)] = &[
        (1, Self::LevelStraight),
        (2, Self::GradientStraight),
        (3, Self::LevelCurved),
        (4, Self::GradientCurved),
        (5, Self::TopHill),
        (6, Self::BottomHill),
    ];
}

impl CodedCategory for RoadAlignment {
    fn from_code(code: i64) -> Option<Self> {
        sparse(Self::CODES, code)
    }
}

/// Traffic control device present at the site (`C_TRAF`).
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TrafficControl {
    TrafficSignalsFullyOperational,
    TrafficSignalsInFlashingMode,
    StopSign,
    YieldSign,
    WarningSign,
    PedestrianCrosswalk,
    PoliceOfficer,
    SchoolGuard,
    SchoolCrossing,
    ReducedSpeedZone,
    NoPassingZoneSign,
    MarkingsOnTheRoad,
    SchoolBusStoppedSignalLightsFlashing,
    RailwayCrossingWithSignalsAndGates,
    RailwayCrossingWithSignsOnly,
    ControlDeviceNotSpecified,
    NoControlPresent,
}

impl TrafficControl {
    pub const TABLE: [Option<Self>; 18] = [
        None,
        Some(Self::TrafficSignalsFullyOperational),
        Some(Self::TrafficSignalsInFlashingMode),
        Some(Self::StopSign),
        Some(Self::YieldSign),
        Some(Self::WarningSign),
        Some(Self::PedestrianCrosswalk),
        Some(Self::PoliceOfficer),
        Some(Self::SchoolGuard),
        Some(Self::SchoolCrossing),
        Some(Self::ReducedSpeedZone),
        Some(Self::NoPassingZoneSign),
        Some(Self::MarkingsOnTheRoad),
        Some(Self::SchoolBusStoppedSignalLightsFlashing),
        Some(Self::RailwayCrossingWithSignalsAndGates),
        Some(Self::RailwayCrossingWithSignsOnly),
        Some(Self::ControlDeviceNotSpecified),
        Some(Self::NoControlPresent),
    ];
}

impl CodedCategory for TrafficControl {
    fn from_code(code: i64) -> Option<Self> {
        positional(&Self::TABLE, code)
    }
}

/// Vehicle category (`V_TYPE`).
///
/// Most categories are numeric; pedestrians, "other" and "unknown" are
/// carried as one- or two-letter codes instead.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum VehicleType {
    /// Passenger car, SUV, van or light pickup
    LightDuty,
    #[serde(rename = "cargo_less_than_4.5_t")]
    #[strum(serialize = "cargo_less_than_4.5_t")]
    CargoUnder4_5T,
    #[serde(rename = "truck_less_than_4.5_t")]
    #[strum(serialize = "truck_less_than_4.5_t")]
    TruckUnder4_5T,
    #[serde(rename = "truck_greater_than_4.5_t")]
    #[strum(serialize = "truck_greater_than_4.5_t")]
    TruckOver4_5T,
    RoadTractor,
    SchoolBus,
    SmallSchoolBus,
    UrbanBus,
    Motorcycle,
    OffRoad,
    Bicycle,
    Motorhome,
    FarmEquipment,
    Construction,
    FireEngine,
    Snowmobile,
    StreetCar,
    /// Pedestrian or other non-vehicle road user
    NotVehicle,
    Other,
    Unknown,
}

impl VehicleType {
    pub const CODES: &'static [(i64, Self)] = &[
        (1, Self::LightDuty),
        (5, Self::CargoUnder4_5T),
        (6, Self::TruckUnder4_5T),
        (7, Self::TruckOver4_5T),
        (8, Self::RoadTractor),
        (9, Self::SchoolBus),
        (10, Self::SmallSchoolBus),
        (11, Self::UrbanBus),
        (14, Self::Motorcycle),
        (16, Self::OffRoad),
        (17, Self::Bicycle),
        (18, Self::Motorhome),
        (19, Self::FarmEquipment),
        (20, Self::Construction),
        (21, Self::FireEngine),
        (22, Self::Snowmobile),
        (23, Self::StreetCar),
    ];

    /// Letter codes used when the vehicle type is not numeric.
    pub const LETTER_CODES: &'static [(&'static str, Self)] = &[
        ("N", Self::NotVehicle),
        ("NN", Self::NotVehicle),
        ("Q", Self::Other),
        ("QQ", Self::Other),
        ("U", Self::Unknown),
        ("UU", Self::Unknown),
    ];

    /// Looks up a letter code (`N`, `QQ`, `U`, ...). Matching is exact.
    #[must_use]
    pub fn from_letter_code(code: &str) -> Option<Self> {
        Self::LETTER_CODES
            .iter()
            .find(|(candidate, _)| *candidate == code)
            .map(|&(_, variant)| variant)
    }
}

impl CodedCategory for VehicleType {
    fn from_code(code: i64) -> Option<Self> {
        sparse(Self::CODES, code)
    }
}

/// Where the person was seated (`P_PSN`).
///
/// Two-digit codes are row then column, e.g. `11` is the driver.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SeatingPosition {
    Driver,
    FrontRowCenter,
    FrontRowRightOutboard,
    SecondRowLeftOutboard,
    SecondRowCenter,
    SecondRowRightOutboard,
    ThirdRowLeftOutboard,
    ThirdRowCenter,
    ThirdRowRightOutboard,
    UnknownOccupant,
    SittingOnSomeonesLap,
    OutsidePassengerCompartment,
    Pedestrian,
}

impl SeatingPosition {
    pub const CODES: &'static [(i64, Self)] = &[
        (11, Self::Driver),
        (12, Self::FrontRowCenter),
        (13, Self::FrontRowRightOutboard),
        (21, Self::SecondRowLeftOutboard),
        (22, Self::SecondRowCenter),
        (23, Self::SecondRowRightOutboard),
        (31, Self::ThirdRowLeftOutboard),
        (32, Self::ThirdRowCenter),
        (33, Self::ThirdRowRightOutboard),
        (96, Self::UnknownOccupant),
        (97, Self::SittingOnSomeonesLap),
        (98, Self::OutsidePassengerCompartment),
        (99, Self::Pedestrian),
    ];
}

impl CodedCategory for SeatingPosition {
    fn from_code(code: i64) -> Option<Self> {
        sparse(Self::CODES, code)
    }
}

/// Safety device used by the person (`P_SAFE`).
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SafetyDevice {
    NoSafetyDeviceUsed,
    SafetyDeviceUsed,
    Helmet,
    ReflectiveClothing,
    HelmetAndReflectiveClothing,
    OtherSafetyDeviceUsed,
    NoSafetyDeviceEquipped,
}

impl SafetyDevice {
    pub const CODES: &'static [(i64, Self)] = &[
        (1, Self::NoSafetyDeviceUsed),
        (2, Self::SafetyDeviceUsed),
        (9, Self::Helmet),
        (10, Self::ReflectiveClothing),
        (11, Self::HelmetAndReflectiveClothing),
        (12, Self::OtherSafetyDeviceUsed),
        (13, Self::NoSafetyDeviceEquipped),
    ];
}

impl CodedCategory for SafetyDevice {
    fn from_code(code: i64) -> Option<Self> {
        sparse(Self::CODES, code)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::str::FromStr;

    use super::*;

    #[test]
    fn month_codes_cover_calendar() {
        let labels: Vec<&str> = (1..=12)
            .map(|code| Month::from_code(code).unwrap().label())
            .collect();
        assert_eq!(
            labels,
            [
                "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec"
            ]
        );
    }

    #[test]
    fn positional_tables_reserve_zero_and_reject_out_of_range() {
        assert_eq!(Month::from_code(0), None);
        assert_eq!(Month::from_code(13), None);
        assert_eq!(Month::from_code(-1), None);
        assert_eq!(Weekday::from_code(0), None);
        assert_eq!(Weekday::from_code(8), None);
        assert_eq!(Weather::from_code(0), None);
        assert_eq!(TrafficControl::from_code(18), None);
    }

    #[test]
    fn weekday_codes_start_on_monday() {
        assert_eq!(Weekday::from_code(1), Some(Weekday::Mon));
        assert_eq!(Weekday::from_code(5), Some(Weekday::Fri));
        assert_eq!(Weekday::from_code(7), Some(Weekday::Sun));
    }

    #[test]
    fn severity_codes() {
        assert_eq!(Severity::from_code(1), Some(Severity::NoInjury));
        assert_eq!(Severity::from_code(2), Some(Severity::Injury));
        assert_eq!(Severity::from_code(3), Some(Severity::Fatality));
        assert_eq!(Severity::from_code(4), None);
        assert_eq!(Severity::Injury.label(), "injury");
    }

    #[test]
    fn sparse_tables_have_gaps() {
        assert_eq!(
            CollisionConfiguration::from_code(21),
            Some(CollisionConfiguration::RearEndCollision)
        );
        assert_eq!(CollisionConfiguration::from_code(7), None);
        assert_eq!(VehicleType::from_code(2), None);
        assert_eq!(SeatingPosition::from_code(11), Some(SeatingPosition::Driver));
        assert_eq!(SeatingPosition::from_code(14), None);
        assert_eq!(SafetyDevice::from_code(9), Some(SafetyDevice::Helmet));
        assert_eq!(SafetyDevice::from_code(3), None);
    }

    #[test]
    fn vehicle_letter_codes() {
        assert_eq!(
            VehicleType::from_letter_code("N"),
            Some(VehicleType::NotVehicle)
        );
        assert_eq!(
            VehicleType::from_letter_code("NN"),
            Some(VehicleType::NotVehicle)
        );
        assert_eq!(VehicleType::from_letter_code("QQ"), Some(VehicleType::Other));
        assert_eq!(VehicleType::from_letter_code("U"), Some(VehicleType::Unknown));
        assert_eq!(VehicleType::from_letter_code("X"), None);
        assert_eq!(VehicleType::from_letter_code("uu"), None);
    }

    #[test]
    fn irregular_labels_survive_serialization() {
        assert_eq!(VehicleType::CargoUnder4_5T.label(), "cargo_less_than_4.5_t");
        assert_eq!(
            CollisionConfiguration::PassingLeftOrLeftTurnConflict.to_string(),
            "1_vehicle_passing_to_the_left_of_the_other/left_turn_conflict"
        );
        assert_eq!(
            RoadConfiguration::from_str("intersection_with_parking_lot_entrance/exit"),
            Ok(RoadConfiguration::ParkingLotEntrance)
        );
        assert_eq!(
            CollisionConfiguration::HitParkedMotorVehicle.as_ref(),
            "hit_a_parked_motor_vehicle"
        );
    }

    #[test]
    fn right_turn_label_accepts_the_legacy_spelling() {
        let variant = CollisionConfiguration::RightTurnIncludingTurningConflicts;
        assert_eq!(variant.label(), "right_turn_including_turning_conflicts");
        assert_eq!(
            CollisionConfiguration::from_str("right_turn_including_turning_conflicts"),
            Ok(variant)
        );
        assert_eq!(
            CollisionConfiguration::from_str("right_turn_oncluding_turning_conflicts"),
            Ok(variant)
        );
        assert_eq!(
            serde_json::from_str::<CollisionConfiguration>(
                "\"right_turn_oncluding_turning_conflicts\""
            )
            .unwrap(),
            variant
        );
        assert_eq!(
            serde_json::to_string(&variant).unwrap(),
            "\"right_turn_including_turning_conflicts\""
        );
    }

    #[test]
    fn table_sizes_match_code_books() {
        let count = |table: &[Option<RoadSurface>]| table.iter().flatten().count();
        assert_eq!(count(&RoadSurface::TABLE), 9);
        assert_eq!(RoadConfiguration::TABLE.iter().flatten().count(), 12);
        assert_eq!(Weather::TABLE.iter().flatten().count(), 7);
        assert_eq!(TrafficControl::TABLE.iter().flatten().count(), 17);
        assert_eq!(RoadAlignment::CODES.len(), 6);
        assert_eq!(CollisionConfiguration::CODES.len(), 18);
        assert_eq!(VehicleType::CODES.len(), 17);
        assert_eq!(SeatingPosition::CODES.len(), 13);
        assert_eq!(SafetyDevice::CODES.len(), 7);
    }

    #[test]
    fn codes_are_unique_within_each_table() {
        fn unique<T>(table: &[(i64, T)]) -> bool {
            let codes: BTreeSet<i64> = table.iter().map(|(code, _)| *code).collect();
            codes.len() == table.len()
        }
        assert!(unique(Severity::CODES));
        assert!(unique(CollisionConfiguration::CODES));
        assert!(unique(RoadAlignment::CODES));
        assert!(unique(VehicleType::CODES));
        assert!(unique(SeatingPosition::CODES));
        assert!(unique(SafetyDevice::CODES));
    }
}

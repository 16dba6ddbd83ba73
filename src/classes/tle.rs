//! `tle` - two-line element sets.

use chrono::{DateTime, TimeDelta, Utc};

define_class! {
    /// One element set.
    Tle, TleField, "tle" {
        Comment => comment: String = "COMMENT",
        Originator => originator: String = "ORIGINATOR",
        CatalogNumber => catalog_number: u32 = "NORAD_CAT_ID",
        ObjectName => object_name: String = "OBJECT_NAME",
        ObjectType => object_type: String = "OBJECT_TYPE",
        ClassificationType => classification_type: String = "CLASSIFICATION_TYPE",
        IntlDesignator => intl_designator: String = "INTLDES",
        /// Epoch truncated to whole seconds; see [`Tle::epoch`].
        EpochSeconds => epoch_seconds: DateTime<Utc> = "EPOCH",
        EpochMicroseconds => epoch_microseconds: u32 = "EPOCH_MICROSECONDS",
        /// Revolutions per day.
        MeanMotion => mean_motion: f64 = "MEAN_MOTION",
        Eccentricity => eccentricity: f64 = "ECCENTRICITY",
        Inclination => inclination: f64 = "INCLINATION",
        RaOfAscNode => ra_of_asc_node: f64 = "RA_OF_ASC_NODE",
        ArgOfPericenter => arg_of_pericenter: f64 = "ARG_OF_PERICENTER",
        MeanAnomaly => mean_anomaly: f64 = "MEAN_ANOMALY",
        EphemerisType => ephemeris_type: i32 = "EPHEMERIS_TYPE",
        ElementSetNumber => element_set_number: u32 = "ELEMENT_SET_NO",
        RevAtEpoch => rev_at_epoch: f64 = "REV_AT_EPOCH",
        Bstar => bstar: f64 = "BSTAR",
        MeanMotionDot => mean_motion_dot: f64 = "MEAN_MOTION_DOT",
        MeanMotionDdot => mean_motion_ddot: f64 = "MEAN_MOTION_DDOT",
        File => file: u32 = "FILE",
        TleLine0 => tle_line0: String = "TLE_LINE0",
        TleLine1 => tle_line1: String = "TLE_LINE1",
        TleLine2 => tle_line2: String = "TLE_LINE2",
        ObjectId => object_id: String = "OBJECT_ID",
        ObjectNumber => object_number: u32 = "OBJECT_NUMBER",
        /// Kilometers.
        SemiMajorAxis => semi_major_axis: f64 = "SEMIMAJOR_AXIS",
        /// Minutes.
        Period => period: f64 = "PERIOD",
        /// Kilometers.
        Apogee => apogee: f64 = "APOGEE",
        /// Kilometers.
        Perigee => perigee: f64 = "PERIGEE",
    }
}

impl Tle {
    /// Full-precision epoch: `EPOCH` plus `EPOCH_MICROSECONDS`.
    ///
    /// Absent when `EPOCH` is absent; a missing microsecond part counts as zero.
    pub fn epoch(&self) -> Option<DateTime<Utc>> {
        let micros = i64::from(self.epoch_microseconds.unwrap_or(0));
        self.epoch_seconds
            .map(|seconds| seconds + TimeDelta::microseconds(micros))
    }
}

//! `omm` - orbit mean-elements messages (CCSDS OMM keywords).

use chrono::{DateTime, Utc};

define_class! {
    /// One mean-elements message.
    OrbitMeanElements, OrbitMeanElementsField, "omm" {
        CcsdsOmmVersion => ccsds_omm_version: String = "CCSDS_OMM_VERS",
        Comment => comment: String = "COMMENT",
        CreationDate => creation_date: DateTime<Utc> = "CREATION_DATE",
        Originator => originator: String = "ORIGINATOR",
        ObjectName => object_name: String = "OBJECT_NAME",
        ObjectId => object_id: String = "OBJECT_ID",
        CenterName => center_name: String = "CENTER_NAME",
        ReferenceFrame => reference_frame: String = "REF_FRAME",
        TimeSystem => time_system: String = "TIME_SYSTEM",
        MeanElementTheory => mean_element_theory: String = "MEAN_ELEMENT_THEORY",
        /// Microsecond precision.
        Epoch => epoch: DateTime<Utc> = "EPOCH",
        /// Revolutions per day.
        MeanMotion => mean_motion: f64 = "MEAN_MOTION",
        Eccentricity => eccentricity: f64 = "ECCENTRICITY",
        Inclination => inclination: f64 = "INCLINATION",
        RaOfAscNode => ra_of_asc_node: f64 = "RA_OF_ASC_NODE",
        ArgOfPericenter => arg_of_pericenter: f64 = "ARG_OF_PERICENTER",
        MeanAnomaly => mean_anomaly: f64 = "MEAN_ANOMALY",
        EphemerisType => ephemeris_type: i32 = "EPHEMERIS_TYPE",
        ClassificationType => classification_type: String = "CLASSIFICATION_TYPE",
        CatalogNumber => catalog_number: u32 = "NORAD_CAT_ID",
        ElementSetNumber => element_set_number: u32 = "ELEMENT_SET_NO",
        RevAtEpoch => rev_at_epoch: f64 = "REV_AT_EPOCH",
        Bstar => bstar: f64 = "BSTAR",
        MeanMotionDot => mean_motion_dot: f64 = "MEAN_MOTION_DOT",
        MeanMotionDdot => mean_motion_ddot: f64 = "MEAN_MOTION_DDOT",
        TleLine0 => tle_line0: String = "USER_DEFINED_TLE_LINE0",
        TleLine1 => tle_line1: String = "USER_DEFINED_TLE_LINE1",
        TleLine2 => tle_line2: String = "USER_DEFINED_TLE_LINE2",
    }
}

//! `satcat` - the satellite catalog.

use chrono::NaiveDate;

define_class! {
    /// One catalog entry.
    SatCat, SatCatField, "satcat" {
        IntlDesignator => intl_designator: String = "INTLDES",
        CatalogNumber => catalog_number: u32 = "NORAD_CAT_ID",
        ObjectType => object_type: String = "OBJECT_TYPE",
        SatelliteName => satellite_name: String = "SATNAME",
        Country => country: String = "COUNTRY",
        Launch => launch: NaiveDate = "LAUNCH",
        Site => site: String = "SITE",
        Decay => decay: NaiveDate = "DECAY",
        /// Orbital period in minutes.
        Period => period: f64 = "PERIOD",
        /// Degrees.
        Inclination => inclination: f64 = "INCLINATION",
        /// Kilometers.
        Apogee => apogee: f64 = "APOGEE",
        /// Kilometers.
        Perigee => perigee: f64 = "PERIGEE",
        Comment => comment: String = "COMMENT",
        CommentCode => comment_code: u32 = "COMMENTCODE",
        RcsValue => rcs_value: i32 = "RCSVALUE",
        RcsSize => rcs_size: String = "RCS_SIZE",
        File => file: u32 = "FILE",
        LaunchYear => launch_year: u32 = "LAUNCH_YEAR",
        LaunchNumber => launch_number: u32 = "LAUNCH_NUM",
        LaunchPiece => launch_piece: String = "LAUNCH_PIECE",
        /// `Y` for the current entry of an object, `N` for superseded ones.
        Current => current: String = "CURRENT",
        ObjectName => object_name: String = "OBJECT_NAME",
        ObjectId => object_id: String = "OBJECT_ID",
        ObjectNumber => object_number: u32 = "OBJECT_NUMBER",
    }
}

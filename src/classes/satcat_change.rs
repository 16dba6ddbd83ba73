//! `satcat_change` - history of catalog entry changes.

use chrono::{DateTime, NaiveDate, Utc};

define_class! {
    /// One change to a catalog entry. `previous_*` attributes are absent
    /// when the corresponding value did not change.
    SatCatChange, SatCatChangeField, "satcat_change" {
        CatalogNumber => catalog_number: u32 = "NORAD_CAT_ID",
        ObjectNumber => object_number: u32 = "OBJECT_NUMBER",
        CurrentName => current_name: String = "CURRENT_NAME",
        PreviousName => previous_name: String = "PREVIOUS_NAME",
        CurrentIntlDesignator => current_intl_designator: String = "CURRENT_INTLDES",
        PreviousIntlDesignator => previous_intl_designator: String = "PREVIOUS_INTLDES",
        CurrentCountry => current_country: String = "CURRENT_COUNTRY",
        PreviousCountry => previous_country: String = "PREVIOUS_COUNTRY",
        CurrentLaunch => current_launch: NaiveDate = "CURRENT_LAUNCH",
        PreviousLaunch => previous_launch: NaiveDate = "PREVIOUS_LAUNCH",
        CurrentDecay => current_decay: NaiveDate = "CURRENT_DECAY",
        PreviousDecay => previous_decay: NaiveDate = "PREVIOUS_DECAY",
        /// When the change was recorded.
        ChangeMade => change_made: DateTime<Utc> = "CHANGE_MADE",
    }
}

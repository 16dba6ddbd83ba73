//! `tip` - tracking and impact prediction messages for decaying objects.

use chrono::{DateTime, Utc};

define_class! {
    /// One reentry prediction.
    TipMessage, TipMessageField, "tip" {
        CatalogNumber => catalog_number: u32 = "NORAD_CAT_ID",
        MessageEpoch => message_epoch: DateTime<Utc> = "MSG_EPOCH",
        InsertEpoch => insert_epoch: DateTime<Utc> = "INSERT_EPOCH",
        /// Predicted reentry time.
        DecayEpoch => decay_epoch: DateTime<Utc> = "DECAY_EPOCH",
        /// Uncertainty window around the decay epoch, in minutes.
        Window => window: u32 = "WINDOW",
        Revolution => revolution: u32 = "REV",
        Direction => direction: String = "DIRECTION",
        Latitude => latitude: f64 = "LAT",
        Longitude => longitude: f64 = "LON",
        Inclination => inclination: f64 = "INCL",
        /// Hours until the next message.
        NextReport => next_report: u32 = "NEXT_REPORT",
        Id => id: u32 = "ID",
        HighInterest => high_interest: String = "HIGH_INTEREST",
        ObjectNumber => object_number: u32 = "OBJECT_NUMBER",
    }
}

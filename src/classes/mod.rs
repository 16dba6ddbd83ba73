//! Per-class configuration tables.
//!
//! Each class is declared once as a table of `Variant => field: Type = "WIRE"`
//! rows. [`define_class!`] expands the table into:
//!
//! - the field enum, implementing [`QueryField`](crate::query::QueryField)
//! - the record struct, one `Option` attribute per row, decoded leniently
//!   through [`crate::wire::optional`]
//! - the [`SpaceTrackClass`](crate::query::SpaceTrackClass) impl tying the two
//!   to the class name
//!
//! Query fields and record attributes come from the same rows, so every
//! field maps to exactly one attribute by construction.

macro_rules! define_class {
    (
        $(#[$meta:meta])*
        $record:ident, $field:ident, $class:literal {
            $( $(#[$row_meta:meta])* $variant:ident => $attr:ident : $ty:ty = $wire:literal ),+ $(,)?
        }
    ) => {
        #[doc = concat!("Filterable and sortable fields of the `", $class, "` class.")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $field {
            $( $(#[$row_meta])* $variant, )+
        }

        impl $crate::query::QueryField for $field {
            const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            fn wire_name(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $record {
            $(
                $(#[$row_meta])*
                #[serde(
                    rename = $wire,
                    default,
                    deserialize_with = "crate::wire::optional",
                    skip_serializing_if = "Option::is_none"
                )]
                pub $attr: Option<$ty>,
            )+
        }

        impl $crate::query::SpaceTrackClass for $record {
            type Field = $field;
            const CLASS: &'static str = $class;
            const RECORD_FIELDS: &'static [&'static str] = &[ $( $wire, )+ ];
        }
    };
}

mod boxscore;
mod launch_site;
mod omm;
mod satcat;
mod satcat_change;
mod tip;
mod tle;

pub use boxscore::{CountryBoxScore, CountryBoxScoreField};
pub use launch_site::{LaunchSite, LaunchSiteField};
pub use omm::{OrbitMeanElements, OrbitMeanElementsField};
pub use satcat::{SatCat, SatCatField};
pub use satcat_change::{SatCatChange, SatCatChangeField};
pub use tip::{TipMessage, TipMessageField};
pub use tle::{Tle, TleField};

use crate::query::SpaceTrackClass;

/// Class names with a record type in this crate, in alphabetical order.
pub const CLASS_NAMES: &[&str] = &[
    CountryBoxScore::CLASS,
    LaunchSite::CLASS,
    OrbitMeanElements::CLASS,
    SatCat::CLASS,
    SatCatChange::CLASS,
    TipMessage::CLASS,
    Tle::CLASS,
];

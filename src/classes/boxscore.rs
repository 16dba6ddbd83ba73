//! `boxscore` - per-country counts of catalogued objects.

define_class! {
    /// Object counts for one country or organization.
    CountryBoxScore, CountryBoxScoreField, "boxscore" {
        Country => country: String = "COUNTRY",
        SpadocCode => spadoc_code: String = "SPADOC_CD",
        OrbitalTba => orbital_tba: u32 = "ORBITAL_TBA",
        OrbitalPayloadCount => orbital_payload_count: u32 = "ORBITAL_PAYLOAD_COUNT",
        OrbitalRocketBodyCount => orbital_rocket_body_count: u32 = "ORBITAL_ROCKET_BODY_COUNT",
        OrbitalDebrisCount => orbital_debris_count: u32 = "ORBITAL_DEBRIS_COUNT",
        OrbitalTotalCount => orbital_total_count: u32 = "ORBITAL_TOTAL_COUNT",
        DecayedPayloadCount => decayed_payload_count: u32 = "DECAYED_PAYLOAD_COUNT",
        DecayedRocketBodyCount => decayed_rocket_body_count: u32 = "DECAYED_ROCKET_BODY_COUNT",
        DecayedDebrisCount => decayed_debris_count: u32 = "DECAYED_DEBRIS_COUNT",
        DecayedTotalCount => decayed_total_count: u32 = "DECAYED_TOTAL_COUNT",
        CountryTotal => country_total: u32 = "COUNTRY_TOTAL",
    }
}

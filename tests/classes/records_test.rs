use chrono::{NaiveDate, TimeZone, Timelike, Utc};

use spacetrack::classes::{
    CountryBoxScore, LaunchSite, OrbitMeanElements, SatCat, SatCatChange, TipMessage, Tle,
};
use spacetrack::engine::decode_records;
use spacetrack::query::SpaceTrackClass;

#[test]
fn test_tle_record() {
    let body = r#"[{
        "ORDINAL":"1","COMMENT":"GENERATED VIA SPACETRACK.ORG API","ORIGINATOR":"JSPOC",
        "NORAD_CAT_ID":"25544","OBJECT_NAME":"ISS (ZARYA)","OBJECT_TYPE":"PAYLOAD",
        "CLASSIFICATION_TYPE":"U","INTLDES":"98067A","EPOCH":"2018-12-14 06:26:28",
        "EPOCH_MICROSECONDS":"123456","MEAN_MOTION":"15.53970768","ECCENTRICITY":"0.0004867",
        "INCLINATION":"51.6414","RA_OF_ASC_NODE":"196.2519","ARG_OF_PERICENTER":"87.2264",
        "MEAN_ANOMALY":"75.0214","EPHEMERIS_TYPE":"0","ELEMENT_SET_NO":"999",
        "REV_AT_EPOCH":"15148","BSTAR":"3.2081e-5","MEAN_MOTION_DOT":"1.62e-5",
        "MEAN_MOTION_DDOT":"0","FILE":"2448185",
        "TLE_LINE0":"0 ISS (ZARYA)",
        "TLE_LINE1":"1 25544U 98067A   18348.26838106  .00001620  00000-0  32081-4 0  9995",
        "TLE_LINE2":"2 25544  51.6414 196.2519 0004867  87.2264  75.0214 15.53970768148157",
        "OBJECT_ID":"1998-067A","OBJECT_NUMBER":"25544","SEMIMAJOR_AXIS":"6786.025",
        "PERIOD":"92.665","APOGEE":"411.193","PERIGEE":"404.588"
    }]"#;

    let tle = &decode_records::<Tle>(body).unwrap()[0];
    assert_eq!(tle.catalog_number, Some(25544));
    assert_eq!(tle.intl_designator.as_deref(), Some("98067A"));
    assert_eq!(tle.ephemeris_type, Some(0));
    assert_eq!(tle.bstar, Some(3.2081e-5));
    assert_eq!(tle.mean_motion_ddot, Some(0.0));
    assert_eq!(tle.file, Some(2448185));
    assert_eq!(tle.object_id.as_deref(), Some("1998-067A"));

    let epoch = tle.epoch().unwrap();
    assert_eq!(epoch.date_naive(), NaiveDate::from_ymd_opt(2018, 12, 14).unwrap());
    assert_eq!(epoch.nanosecond(), 123_456_000);
}

#[test]
fn test_omm_record_with_microsecond_epoch() {
    let body = r#"[{
        "CCSDS_OMM_VERS":"2.0","CREATION_DATE":"2020-06-01T04:05:06","ORIGINATOR":"18 SPCS",
        "OBJECT_NAME":"VANGUARD 1","OBJECT_ID":"1958-002B","CENTER_NAME":"EARTH",
        "REF_FRAME":"TEME","TIME_SYSTEM":"UTC","MEAN_ELEMENT_THEORY":"SGP4",
        "EPOCH":"2020-05-31T21:17:35.263200","MEAN_MOTION":"10.84862","NORAD_CAT_ID":"5",
        "REV_AT_EPOCH":"20366","USER_DEFINED_TLE_LINE0":"0 VANGUARD 1"
    }]"#;

    let omm = &decode_records::<OrbitMeanElements>(body).unwrap()[0];
    assert_eq!(omm.reference_frame.as_deref(), Some("TEME"));
    assert_eq!(
        omm.creation_date,
        Some(Utc.with_ymd_and_hms(2020, 6, 1, 4, 5, 6).unwrap())
    );
    assert_eq!(omm.epoch.unwrap().nanosecond(), 263_200_000);
    assert_eq!(omm.catalog_number, Some(5));
    assert_eq!(omm.tle_line0.as_deref(), Some("0 VANGUARD 1"));
    assert!(omm.tle_line1.is_none());
}

#[test]
fn test_satcat_record_with_absent_decay() {
    let body = r#"[{
        "INTLDES":"1998-067A","NORAD_CAT_ID":"25544","OBJECT_TYPE":"PAYLOAD",
        "SATNAME":"ISS (ZARYA)","COUNTRY":"ISS","LAUNCH":"1998-11-20","SITE":"TTMTR",
        "DECAY":null,"PERIOD":"92.65","INCLINATION":"51.64","APOGEE":"420","PERIGEE":"416",
        "COMMENT":null,"COMMENTCODE":null,"RCSVALUE":"0","RCS_SIZE":"LARGE","FILE":"7094",
        "LAUNCH_YEAR":"1998","LAUNCH_NUM":"67","LAUNCH_PIECE":"A","CURRENT":"Y",
        "OBJECT_NAME":"ISS (ZARYA)","OBJECT_ID":"1998-067A","OBJECT_NUMBER":"25544"
    }]"#;

    let sat = &decode_records::<SatCat>(body).unwrap()[0];
    assert_eq!(sat.launch, NaiveDate::from_ymd_opt(1998, 11, 20));
    assert_eq!(sat.decay, None);
    assert_eq!(sat.apogee, Some(420.0));
    assert_eq!(sat.rcs_value, Some(0));
    assert_eq!(sat.comment_code, None);
    assert_eq!(sat.current.as_deref(), Some("Y"));
}

#[test]
fn test_satcat_change_previous_values_optional() {
    let body = r#"[{
        "NORAD_CAT_ID":"44235","OBJECT_NUMBER":"44235","CURRENT_NAME":"STARLINK-31",
        "PREVIOUS_NAME":"TBA - TO BE ASSIGNED","CURRENT_INTLDES":"2019-029A",
        "PREVIOUS_INTLDES":"","CURRENT_COUNTRY":"US","PREVIOUS_COUNTRY":null,
        "CURRENT_LAUNCH":"2019-05-24","PREVIOUS_LAUNCH":null,
        "CURRENT_DECAY":"2020-10-13","PREVIOUS_DECAY":null,
        "CHANGE_MADE":"2020-10-14 09:12:45"
    }]"#;

    let change = &decode_records::<SatCatChange>(body).unwrap()[0];
    assert_eq!(change.previous_name.as_deref(), Some("TBA - TO BE ASSIGNED"));
    assert_eq!(change.previous_intl_designator, None);
    assert_eq!(change.previous_country, None);
    assert_eq!(change.current_decay, NaiveDate::from_ymd_opt(2020, 10, 13));
    assert_eq!(
        change.change_made,
        Some(Utc.with_ymd_and_hms(2020, 10, 14, 9, 12, 45).unwrap())
    );
}

#[test]
fn test_boxscore_counts() {
    let body = r#"[
        {"COUNTRY":"UNITED STATES","SPADOC_CD":"US","ORBITAL_TBA":"0","ORBITAL_PAYLOAD_COUNT":"3312",
         "ORBITAL_ROCKET_BODY_COUNT":"737","ORBITAL_DEBRIS_COUNT":"3961","ORBITAL_TOTAL_COUNT":"8010",
         "DECAYED_PAYLOAD_COUNT":"1080","DECAYED_ROCKET_BODY_COUNT":"1077","DECAYED_DEBRIS_COUNT":"4538",
         "DECAYED_TOTAL_COUNT":"6695","COUNTRY_TOTAL":"14705"},
        {"COUNTRY":"ALL","SPADOC_CD":null}
    ]"#;

    let rows = decode_records::<CountryBoxScore>(body).unwrap();
    assert_eq!(rows[0].orbital_total_count, Some(8010));
    assert_eq!(rows[0].country_total, Some(14705));
    assert_eq!(rows[1].country.as_deref(), Some("ALL"));
    assert_eq!(rows[1].spadoc_code, None);
    assert_eq!(rows[1].country_total, None);
}

#[test]
fn test_tip_message() {
    let body = r#"[{
        "NORAD_CAT_ID":"39227","MSG_EPOCH":"2014-05-04 13:41:00","INSERT_EPOCH":"2014-05-04 13:46:23",
        "DECAY_EPOCH":"2014-05-04 16:07:00","WINDOW":"30","REV":"3857","DIRECTION":"descending",
        "LAT":"-46.2","LON":"188.5","INCL":"48.1","NEXT_REPORT":"0","ID":"7352",
        "HIGH_INTEREST":"N","OBJECT_NUMBER":"39227"
    }]"#;

    let tip = &decode_records::<TipMessage>(body).unwrap()[0];
    assert_eq!(tip.latitude, Some(-46.2));
    assert_eq!(tip.window, Some(30));
    assert_eq!(tip.direction.as_deref(), Some("descending"));
    assert_eq!(tip.decay_epoch.unwrap().hour(), 16);
}

#[test]
fn test_launch_site_serializes_wire_names() {
    let sites =
        decode_records::<LaunchSite>(r#"[{"SITE_CODE":"KYMSC","LAUNCH_SITE":"Kapustin Yar"}]"#)
            .unwrap();
    let json = serde_json::to_value(&sites[0]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"SITE_CODE": "KYMSC", "LAUNCH_SITE": "Kapustin Yar"})
    );

    let empty = serde_json::to_string(&LaunchSite::default()).unwrap();
    assert_eq!(empty, "{}");
}

#[test]
fn test_class_names() {
    assert_eq!(Tle::CLASS, "tle");
    assert_eq!(OrbitMeanElements::CLASS, "omm");
    assert_eq!(SatCat::CLASS, "satcat");
    assert_eq!(SatCatChange::CLASS, "satcat_change");
    assert_eq!(CountryBoxScore::CLASS, "boxscore");
    assert_eq!(TipMessage::CLASS, "tip");
    assert_eq!(LaunchSite::CLASS, "launch_site");
}

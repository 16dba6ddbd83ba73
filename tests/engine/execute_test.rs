#[path = "../common/mod.rs"]
mod common;

use common::FakeProvider;
use spacetrack::classes::{SatCat, SatCatField, Tle, TleField};
use spacetrack::engine::decode_records;
use spacetrack::query::{Limit, Predicate, Query, Sort};
use spacetrack::{ClientError, ErrorKind};

const TWO_TLES: &str = r#"[
  {"NORAD_CAT_ID":"25544","OBJECT_NAME":"ISS (ZARYA)","EPOCH":"2018-12-14 06:26:28","EPOCH_MICROSECONDS":"123456","MEAN_MOTION":"15.5397","TLE_LINE1":"1 25544U 98067A   18348.26838106  .00001620  00000-0  32081-4 0  9995"},
  {"NORAD_CAT_ID":"25544","OBJECT_NAME":"ISS (ZARYA)","EPOCH":"2018-12-13 12:00:00","MEAN_MOTION":"15.5396","EXTRA_COLUMN":"ignored"}
]"#;

fn tle_query(provider: &FakeProvider) -> Query<Tle> {
    Query::<Tle>::builder()
        .credentials(provider.clone().into_arc())
        .predicate(Predicate::equal(TleField::CatalogNumber, 25544).unwrap())
        .sort(Sort::desc(TleField::EpochSeconds))
        .limit(Limit::rows(2).unwrap())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_execute_returns_records_in_server_order() {
    let provider = FakeProvider::responding(200, TWO_TLES);
    let records = tle_query(&provider).execute().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].catalog_number, Some(25544));
    assert_eq!(records[0].epoch_microseconds, Some(123456));
    assert_eq!(records[1].epoch_microseconds, None);
    assert!(records[0].epoch_seconds > records[1].epoch_seconds);
    assert!(records[1].tle_line1.is_none());
}

#[tokio::test]
async fn test_execute_issues_one_get_with_rendered_path() {
    let provider = FakeProvider::responding(200, "[]");
    let records = tle_query(&provider).execute().await.unwrap();

    assert!(records.is_empty());
    assert_eq!(provider.logins(), 1);
    assert_eq!(
        provider.requests(),
        vec![
            "https://www.space-track.org/basicspacedata/query/class/tle/NORAD_CAT_ID/25544/orderby/EPOCH%20desc/limit/2/format/json"
        ]
    );
}

#[tokio::test]
async fn test_each_execution_logs_in_again() {
    let provider = FakeProvider::responding(200, "[]");
    let query = tle_query(&provider);

    query.execute().await.unwrap();
    query.execute().await.unwrap();

    assert_eq!(provider.logins(), 2);
    assert_eq!(provider.requests().len(), 2);
}

#[tokio::test]
async fn test_non_success_status_is_transport_error() {
    let provider = FakeProvider::responding(500, "Internal Server Error");
    let err = tle_query(&provider).execute().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), Some(500));
    match err {
        ClientError::Http { body, .. } => assert_eq!(body, "Internal Server Error"),
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_data_request_is_not_auth_error() {
    let provider = FakeProvider::responding(401, r#"{"error":"You must be logged in"}"#);
    let err = tle_query(&provider).execute().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(!err.is_authentication());
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_rejected_login_skips_request() {
    let provider = FakeProvider::rejecting_login();
    let err = tle_query(&provider).execute().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert!(err.is_authentication());
    assert!(provider.requests().is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    for body in ["<html>maintenance</html>", r#"{"error":"oops"}"#, "[{\"NORAD_CAT_ID\":\"x\"}]"] {
        let provider = FakeProvider::responding(200, body);
        let err = tle_query(&provider).execute().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse, "{body}");
    }
}

#[tokio::test]
async fn test_execute_in_existing_session() {
    let provider = FakeProvider::responding(200, r#"[{"SATNAME":"VANGUARD 1","NORAD_CAT_ID":5}]"#);
    let query = Query::<SatCat>::builder()
        .credentials(provider.clone().into_arc())
        .predicate(Predicate::equal(SatCatField::CatalogNumber, 5).unwrap())
        .build()
        .unwrap();

    let session = provider.session();
    let records = query.execute_in(&session).await.unwrap();

    assert_eq!(provider.logins(), 0);
    assert_eq!(records[0].satellite_name.as_deref(), Some("VANGUARD 1"));
    assert_eq!(records[0].catalog_number, Some(5));
}

#[test]
fn test_decode_empty_objects() {
    let records = decode_records::<SatCat>("[{}, {}]").unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], SatCat::default());
}

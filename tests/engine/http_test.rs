//! End-to-end tests of the password login and cookie session against a
//! canned HTTP/1.1 responder on a local port.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use spacetrack::auth::{CredentialProvider, PasswordCredentials};
use spacetrack::classes::{LaunchSite, LaunchSiteField};
use spacetrack::query::{Predicate, Query};
use spacetrack::schema::fetch_modeldef;
use spacetrack::ErrorKind;

const IDENTITY: &str = "user@example.com";
const PASSWORD: &str = "correct horse";
const COOKIE: &str = "chocolatechip=abc123";

const SITES: &str = r#"[{"SITE_CODE":"AFETR","LAUNCH_SITE":"Air Force Eastern Test Range"}]"#;
const MODELDEF: &str = r#"{"controller":"basicspacedata","data":[
  {"Field":"SITE_CODE","Type":"char(5)","Null":"YES","Key":"","Default":null,"Extra":""},
  {"Field":"LAUNCH_SITE","Type":"char(64)","Null":"NO","Key":"","Default":"","Extra":""}
]}"#;

struct Request {
    method: String,
    path: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl Request {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

async fn read_request(stream: &mut TcpStream) -> Option<Request> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let head_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split(' ');
    let method = request_line.next()?.to_string();
    let path = request_line.next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let length: usize = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse().ok())
        .unwrap_or(0);
    while buf.len() < head_end + length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body = String::from_utf8_lossy(&buf[head_end..]).to_string();

    Some(Request {
        method,
        path,
        headers,
        body,
    })
}

fn route(request: &Request) -> (u16, Vec<(&'static str, String)>, String) {
    if request.method == "POST" && request.path.ends_with("/ajaxauth/login") {
        let expected = format!(
            "identity={}&password={}",
            IDENTITY.replace('@', "%40"),
            PASSWORD.replace(' ', "+")
        );
        if request.body == expected {
            return (
                200,
                vec![("Set-Cookie", format!("{COOKIE}; Path=/"))],
                "\"\"".to_string(),
            );
        }
        return (200, vec![], r#"{"Login":"Failed"}"#.to_string());
    }

    let logged_in = request
        .header("cookie")
        .is_some_and(|cookies| cookies.contains(COOKIE));
    if !logged_in {
        return (401, vec![], r#"{"error":"You must be logged in"}"#.to_string());
    }

    if request.path.contains("/basicspacedata/modeldef/class/launch_site/") {
        return (200, vec![], MODELDEF.to_string());
    }
    if request.path.contains("/basicspacedata/query/class/launch_site/") {
        return (200, vec![], SITES.to_string());
    }
    (404, vec![], "not found".to_string())
}

/// Start the responder and return its base URL.
async fn start_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            tokio::spawn(async move {
                let Some(request) = read_request(&mut stream).await else {
                    return;
                };
                let (status, headers, body) = route(&request);
                let mut response = format!(
                    "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
                    body.len()
                );
                for (name, value) in headers {
                    response.push_str(&format!("{name}: {value}\r\n"));
                }
                response.push_str("\r\n");
                response.push_str(&body);
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    format!("http://{addr}/")
}

fn credentials(base_url: &str, password: &str) -> PasswordCredentials {
    PasswordCredentials::new(IDENTITY, password)
        .with_base_url(base_url)
        .unwrap()
        .with_timeout(Duration::from_secs(5))
}

#[tokio::test]
async fn test_login_and_query() {
    let base_url = start_server().await;
    let query = Query::<LaunchSite>::builder()
        .credentials(Arc::new(credentials(&base_url, PASSWORD)))
        .predicate(Predicate::equal(LaunchSiteField::SiteCode, "AFETR").unwrap())
        .build()
        .unwrap();

    let sites = query.execute().await.unwrap();
    assert_eq!(sites.len(), 1);
    assert_eq!(sites[0].site_code.as_deref(), Some("AFETR"));
    assert_eq!(
        sites[0].site_name.as_deref(),
        Some("Air Force Eastern Test Range")
    );
}

#[tokio::test]
async fn test_wrong_password_is_authentication_error() {
    let base_url = start_server().await;
    let query = Query::<LaunchSite>::builder()
        .credentials(Arc::new(credentials(&base_url, "wrong")))
        .build()
        .unwrap();

    let err = query.execute().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);
}

#[tokio::test]
async fn test_unreachable_server_is_authentication_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = credentials(&format!("http://{addr}/"), PASSWORD);
    let err = provider.authenticate().await.err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Authentication);
}

#[tokio::test]
async fn test_fetch_modeldef_over_session() {
    let base_url = start_server().await;
    let session = credentials(&base_url, PASSWORD)
        .authenticate()
        .await
        .unwrap();

    let model = fetch_modeldef(session.as_ref(), "launch_site").await.unwrap();
    assert!(model.contains("SITE_CODE"));
    assert!(model.contains("LAUNCH_SITE"));

    let err = fetch_modeldef(session.as_ref(), "tle").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(err.status(), Some(404));
}

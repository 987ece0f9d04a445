use mockito::Matcher;

use iiko_api::{CloudCredentials, CloudMode, CloudSession, SessionToken};

use crate::common::endpoint;

#[test]
fn test_cloud_session_access_token() {
    let mut server = mockito::Server::new();
    let auth = server
        .mock("GET", "/api/0/auth/access_token")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("user_id".into(), "bob".into()),
            Matcher::UrlEncoded("user_secret".into(), "s3cr3t".into()),
        ]))
        .with_status(200)
        .with_body("\"abc-123\"")
        .create();
    let organizations = server
        .mock("GET", "/api/0/organization/list")
        .match_query(Matcher::UrlEncoded("access_token".into(), "abc-123".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":"org-1","name":"Cafe"}]"#)
        .create();

    let mut session = CloudSession::new(
        &endpoint(&server),
        CloudCredentials::new("bob", "s3cr3t"),
        CloudMode::access_token(),
    )
    .unwrap();

    session.authenticate().unwrap();
    assert_eq!(session.token().map(SessionToken::as_str), Some("abc-123"));

    let orgs = session.organizations().unwrap();
    assert_eq!(orgs[0]["name"], "Cafe");

    auth.assert();
    organizations.assert();
}

#[test]
fn test_cloud_failed_login_keeps_token() {
    let mut server = mockito::Server::new();
    let _auth = server
        .mock("GET", "/api/0/auth/access_token")
        .match_query(Matcher::Any)
        .with_status(403)
        .create();

    let mut session = CloudSession::new(
        &endpoint(&server),
        CloudCredentials::new("bob", "bad"),
        CloudMode::legacy_key(),
    )
    .unwrap()
    .with_token("previous");

    let err = session.authenticate().unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(session.token().map(SessionToken::as_str), Some("previous"));
}

use mockito::Matcher;

use iiko_api::{hash_password, ErrorKind, Params, ServerCredentials, ServerSession};

use crate::common::endpoint;

#[test]
fn test_server_session_end_to_end() {
    let mut server = mockito::Server::new();

    let auth = server
        .mock("GET", "/resto/api/auth")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("login".into(), "u".into()),
            Matcher::UrlEncoded("pass".into(), hash_password("p")),
        ]))
        .with_status(200)
        .with_body("tok123")
        .expect(1)
        .create();
    let employees = server
        .mock("GET", "/resto/api/employees")
        .match_query(Matcher::UrlEncoded("key".into(), "tok123".into()))
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body("<employees><employee><name>Anna</name></employee></employees>")
        .expect(1)
        .create();
    let logout = server
        .mock("GET", "/resto/api/logout")
        .match_query(Matcher::UrlEncoded("key".into(), "tok123".into()))
        .with_status(200)
        .expect(1)
        .create();

    {
        let mut session = ServerSession::new(
            &endpoint(&server),
            ServerCredentials::from_plaintext("u", "p"),
        )
        .unwrap();

        assert_eq!(session.authenticate().unwrap().as_str(), "tok123");

        let response = session.employees().unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.content_type(), Some("application/xml"));
        assert!(response.text().unwrap().contains("Anna"));
    }

    auth.assert();
    employees.assert();
    logout.assert();
}

#[test]
fn test_server_version_lookup() {
    let mut server = mockito::Server::new();
    let info = server
        .mock("GET", "/resto/get_server_info.jsp")
        .match_query(Matcher::UrlEncoded("encoding".into(), "UTF-8".into()))
        .with_status(200)
        .with_body(
            r#"<?xml version="1.0" encoding="UTF-8"?><r><edition>default</edition><version>7.4.6017.0</version></r>"#,
        )
        .create();

    let session = ServerSession::new(
        &endpoint(&server),
        ServerCredentials::from_plaintext("u", "p"),
    )
    .unwrap();

    assert_eq!(session.version().unwrap(), "7.4.6017.0");
    info.assert();
}

#[test]
fn test_server_rejected_login() {
    let mut server = mockito::Server::new();
    let _auth = server
        .mock("GET", "/resto/api/auth")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("Wrong login or password")
        .create();
    let logout = server
        .mock("GET", "/resto/api/logout")
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    {
        let mut session = ServerSession::new(
            &endpoint(&server),
            ServerCredentials::from_plaintext("u", "wrong"),
        )
        .unwrap();

        let err = session.authenticate().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Authentication { status: 401, .. }));
        assert!(err.is_error_response());
        assert!(!session.is_authenticated());

        let err = session.employees().unwrap_err();
        assert!(err.is_not_authenticated());
    }

    logout.assert();
}

#[test]
fn test_server_error_response_is_typed() {
    let mut server = mockito::Server::new();
    let _stores = server
        .mock("GET", "/resto/api/corporation/stores")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("Internal error")
        .create();
    let _logout = server
        .mock("GET", "/resto/api/logout")
        .match_query(Matcher::Any)
        .create();

    let session = ServerSession::new(
        &endpoint(&server),
        ServerCredentials::from_plaintext("u", "p"),
    )
    .unwrap()
    .with_token("tok");

    let response = session.stores().unwrap();
    assert_eq!(response.status(), 500);

    let err = session
        .get_text("api/corporation/stores", &Params::new())
        .unwrap_err();
    assert!(err.is_error_response());
    assert_eq!(err.status(), Some(500));
    assert!(!err.to_string().contains("tok"));
}

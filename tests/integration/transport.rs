use std::net::TcpListener;
use std::time::Duration;

use iiko_api::{Endpoint, ServerCredentials, ServerSession};

use crate::common::closed_port;

#[test]
fn test_connection_refused_is_no_response() {
    let session = ServerSession::new(
        &Endpoint::new("127.0.0.1", closed_port()),
        ServerCredentials::from_plaintext("u", "p"),
    )
    .unwrap()
    .with_token("secret-token");

    let err = session.employees().unwrap_err();
    assert!(err.is_no_response(), "unexpected error: {err:?}");
    assert!(!err.to_string().contains("secret-token"));

    // the drop-time logout fails the same way and must not panic
    drop(session);
}

#[test]
fn test_silent_server_times_out() {
    // accepts connections but never answers
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let mut session = ServerSession::new(
        &Endpoint::new("127.0.0.1", port),
        ServerCredentials::from_plaintext("u", "p"),
    )
    .unwrap()
    .with_timeout(Duration::from_millis(300));

    let err = session.authenticate().unwrap_err();
    assert!(err.is_timeout(), "unexpected error: {err:?}");
    assert!(err.is_no_response());
    assert!(!session.is_authenticated());

    drop(listener);
}

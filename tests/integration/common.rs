use std::net::TcpListener;

use iiko_api::Endpoint;

/// Endpoint pointing at a mockito server.
pub fn endpoint(server: &mockito::ServerGuard) -> Endpoint {
    let host_with_port = server.host_with_port();
    let (host, port) = host_with_port
        .rsplit_once(':')
        .expect("mockito address has a port");
    Endpoint::new(host, port.parse::<u16>().expect("numeric port"))
}

/// A port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    listener.local_addr().expect("local addr").port()
}

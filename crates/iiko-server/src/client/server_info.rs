use tracing::instrument;

use iiko_client::{ApiClient, Method, Params, Response, Result};

use crate::version::parse_version;
use crate::SERVER_INFO_PATH;

/// Fetch `get_server_info.jsp` through a client whose base URL ends in
/// `resto/`. No credentials or token are involved.
pub fn server_info(client: &ApiClient) -> Result<Response> {
    let params = Params::new().with("encoding", "UTF-8");
    let request = client.public_request(Method::Get, SERVER_INFO_PATH, &params);
    client.send(&request)
}

/// Server version through a bare client, e.g. `7.4.6017.0`.
pub fn server_version(client: &ApiClient) -> Result<String> {
    let body = server_info(client)?.error_for_status()?.text()?;
    parse_version(&body)
}

impl super::ServerSession {
    /// Server description and license status document. Needs no token.
    #[instrument(skip(self))]
    pub fn server_info(&self) -> Result<Response> {
        server_info(&self.client)
    }

    /// Server version, e.g. `7.4.6017.0`.
    #[instrument(skip(self))]
    pub fn version(&self) -> Result<String> {
        server_version(&self.client)
    }
}

//! Print the version of an iikoServer and, when credentials are available,
//! check that they can log in.
//!
//! ```sh
//! export IIKO_SERVER_HOST=192.168.0.10 IIKO_SERVER_PORT=8080
//! export IIKO_SERVER_LOGIN=admin IIKO_SERVER_PASSWORD=secret   # optional
//! RUST_LOG=iiko_server=debug cargo run --bin iiko-server-info
//! ```

use anyhow::{Context, Result};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use iiko_api::client::{ApiClient, TokenParam, SERVER_PATH_PREFIX};
use iiko_api::server::server_version;
use iiko_api::{Endpoint, ServerCredentials, ServerSession};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let endpoint = Endpoint::from_env("IIKO_SERVER").context("server address")?;

    let client = ApiClient::new(endpoint.base_url(SERVER_PATH_PREFIX), TokenParam::Key)?;
    println!("server:  {}", client.base_url());

    let version = server_version(&client).context("reading server version")?;
    println!("version: {version}");

    let credentials = match ServerCredentials::from_env() {
        Ok(credentials) => credentials,
        Err(err) => {
            debug!(error = %err, "No server credentials, skipping login");
            return Ok(());
        }
    };

    let mut session = ServerSession::from_client(client, credentials);
    session.authenticate().context("logging in")?;
    let employees = session.employees()?;
    println!("login:   ok (employees: HTTP {})", employees.status());
    session.close().context("releasing license seat")?;

    Ok(())
}

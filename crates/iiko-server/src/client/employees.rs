use tracing::instrument;

use iiko_client::{Params, Response, Result};

impl super::ServerSession {
    /// Employee list.
    #[instrument(skip(self))]
    pub fn employees(&self) -> Result<Response> {
        self.get("api/employees", &Params::new())
    }
}

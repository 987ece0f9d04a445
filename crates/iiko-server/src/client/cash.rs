use tracing::instrument;

use iiko_client::{Response, Result};

use crate::dates::DateRange;

impl super::ServerSession {
    /// Closed cash sessions.
    #[instrument(skip(self))]
    pub fn close_sessions(&self, period: &DateRange) -> Result<Response> {
        self.get("api/closeSession/list", &period.to_params())
    }
}

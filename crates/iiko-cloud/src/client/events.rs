use std::time::Duration;

use tracing::instrument;

use iiko_client::{Params, Result};

use crate::query::format_request_timeout;

impl super::CloudSession {
    /// Event journal.
    #[instrument(skip(self))]
    pub fn events(&self, request_timeout: Duration) -> Result<serde_json::Value> {
        self.get_json("api/0/events/events", &timeout_params(request_timeout))
    }

    /// Description of the data returned by the event journal.
    #[instrument(skip(self, body))]
    pub fn events_metadata(
        &self,
        body: &serde_json::Value,
        request_timeout: Duration,
    ) -> Result<serde_json::Value> {
        self.post_json(
            "api/0/events/eventsMetadata",
            &timeout_params(request_timeout),
            body,
        )
    }

    /// Cash session information.
    #[instrument(skip(self, body))]
    pub fn events_sessions(
        &self,
        body: &serde_json::Value,
        request_timeout: Duration,
    ) -> Result<serde_json::Value> {
        self.post_json(
            "api/0/events/sessions",
            &timeout_params(request_timeout),
            body,
        )
    }
}

fn timeout_params(request_timeout: Duration) -> Params {
    Params::new().with("request_timeout", format_request_timeout(request_timeout))
}

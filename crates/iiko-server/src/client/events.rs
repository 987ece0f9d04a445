use tracing::instrument;

use iiko_client::{Params, RequestBody, Response, Result};

use crate::dates::TimeRange;
use crate::events::{EventsFilter, EventsQuery};

impl super::ServerSession {
    /// Event list.
    #[instrument(skip(self))]
    pub fn events(&self, query: &EventsQuery) -> Result<Response> {
        self.get("api/events", &query.to_params())
    }

    /// Events filtered by type and order number.
    #[instrument(skip(self))]
    pub fn events_filter(&self, filter: &EventsFilter) -> Result<Response> {
        self.post(
            "api/events",
            &Params::new(),
            RequestBody::Xml(filter.to_xml()),
        )
    }

    /// Event type tree.
    #[instrument(skip(self))]
    pub fn events_metadata(&self) -> Result<Response> {
        self.get("api/events/metadata", &Params::new())
    }

    /// Cash session events.
    #[instrument(skip(self))]
    pub fn cash_sessions(&self, range: &TimeRange) -> Result<Response> {
        self.get("api/events/sessions", &range.to_params())
    }
}

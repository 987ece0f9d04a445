use tracing::instrument;

use iiko_client::{Params, Response, Result};

use crate::corporation::{GroupSearch, TerminalSearch};

impl super::ServerSession {
    /// Department hierarchy.
    #[instrument(skip(self))]
    pub fn departments(&self) -> Result<Response> {
        self.get("api/corporation/departments", &Params::new())
    }

    /// Store list.
    #[instrument(skip(self))]
    pub fn stores(&self) -> Result<Response> {
        self.get("api/corporation/stores", &Params::new())
    }

    /// Groups and sections.
    #[instrument(skip(self))]
    pub fn groups(&self) -> Result<Response> {
        self.get("api/corporation/groups", &Params::new())
    }

    #[instrument(skip(self))]
    pub fn terminals(&self) -> Result<Response> {
        self.get("api/corporation/terminals", &Params::new())
    }

    /// Departments whose code matches `code` (a case-sensitive regular expression).
    #[instrument(skip(self))]
    pub fn departments_search(&self, code: &str) -> Result<Response> {
        self.get(
            "api/corporation/departments/search",
            &Params::new().with("code", code),
        )
    }

    /// Stores whose code matches `code` (a case-sensitive regular expression).
    #[instrument(skip(self))]
    pub fn stores_search(&self, code: &str) -> Result<Response> {
        self.get(
            "api/corporation/stores/search",
            &Params::new().with("code", code),
        )
    }

    #[instrument(skip(self))]
    pub fn groups_search(&self, search: &GroupSearch) -> Result<Response> {
        self.get("api/corporation/groups/search", &search.to_params())
    }

    #[instrument(skip(self))]
    pub fn terminals_search(&self, search: &TerminalSearch) -> Result<Response> {
        self.get("api/corporation/terminal/search", &search.to_params())
    }
}

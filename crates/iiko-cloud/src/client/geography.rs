use tracing::instrument;

use iiko_client::{Params, Result};

impl super::CloudSession {
    /// Cities of an organization.
    #[instrument(skip(self))]
    pub fn cities(&self, organization: &str) -> Result<serde_json::Value> {
        self.get_json(
            "api/0/cities/cities",
            &Params::new().with("organization", organization),
        )
    }

    /// Flat list of every city of an organization.
    #[instrument(skip(self))]
    pub fn cities_list(&self, organization: &str) -> Result<serde_json::Value> {
        self.get_json(
            "api/0/citiesList/cities",
            &Params::new().with("organization", organization),
        )
    }

    /// Streets of a city.
    #[instrument(skip(self))]
    pub fn streets(&self, organization: &str, city: &str) -> Result<serde_json::Value> {
        self.get_json(
            "api/0/citiesList/streets",
            &Params::new()
                .with("organization", organization)
                .with("city", city),
        )
    }
}

use tracing::instrument;

use iiko_client::security::url;
use iiko_client::{Error, ErrorKind, Params, Result};

impl super::CloudSession {
    /// Organizations visible to the user.
    #[instrument(skip(self))]
    pub fn organizations(&self) -> Result<serde_json::Value> {
        self.get_json("api/0/organization/list", &Params::new())
    }

    /// Nomenclature tree of an organization.
    #[instrument(skip(self))]
    pub fn nomenclature(&self, organization: &str) -> Result<serde_json::Value> {
        if !url::is_safe_segment(organization) {
            return Err(Error::new(ErrorKind::Config(
                "invalid organization id".to_string(),
            )));
        }
        self.get_json(
            &format!("api/0/nomenclature/{}", url::encode_param(organization)),
            &Params::new(),
        )
    }

    /// Delivery stop list across the restaurant network.
    #[instrument(skip(self))]
    pub fn delivery_stop_list(&self, organization: &str) -> Result<serde_json::Value> {
        self.get_json(
            "api/0/stopLists/getDeliveryStopList",
            &Params::new().with("organization", organization),
        )
    }
}

use chrono::NaiveDate;
use tracing::instrument;

use iiko_client::security::url;
use iiko_client::{Params, Response, Result};

use crate::dates::day_month_year;
use crate::suppliers::SupplierSearch;

impl super::ServerSession {
    #[instrument(skip(self))]
    pub fn suppliers(&self) -> Result<Response> {
        self.get("api/suppliers", &Params::new())
    }

    #[instrument(skip(self))]
    pub fn suppliers_search(&self, search: &SupplierSearch) -> Result<Response> {
        self.get("api/suppliers/search", &search.to_params())
    }

    /// Price list of a supplier. Without `date` the latest one is returned.
    #[instrument(skip(self))]
    pub fn supplier_price_list(&self, code: &str, date: Option<NaiveDate>) -> Result<Response> {
        let path = format!("api/suppliers/{}/pricelist", url::encode_param(code));
        self.get(
            &path,
            &Params::new().with_opt("date", date.map(day_month_year)),
        )
    }
}

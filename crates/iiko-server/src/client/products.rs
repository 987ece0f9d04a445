use tracing::instrument;

use iiko_client::{Params, Response, Result};

use crate::products::ProductSearch;

impl super::ServerSession {
    /// Nomenclature. `include_deleted` needs server 5.0 or newer.
    #[instrument(skip(self))]
    pub fn products(&self, include_deleted: bool) -> Result<Response> {
        self.get(
            "api/products",
            &Params::new().with("includeDeleted", include_deleted),
        )
    }

    /// Nomenclature search, supplier products included.
    #[instrument(skip(self))]
    pub fn products_search(&self, search: &ProductSearch) -> Result<Response> {
        self.get("api/products/search", &search.to_params())
    }
}

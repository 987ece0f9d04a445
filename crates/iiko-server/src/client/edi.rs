use tracing::instrument;

use iiko_client::security::url;
use iiko_client::{Error, ErrorKind, Response, Result};

use crate::edi::EdiSeller;

impl super::ServerSession {
    /// Orders of `seller` for the EDI participant `edi_system` (a GUID).
    #[instrument(skip(self))]
    pub fn edi_orders_by_seller(&self, edi_system: &str, seller: &EdiSeller) -> Result<Response> {
        if !url::is_safe_segment(edi_system) {
            return Err(Error::new(ErrorKind::Config(
                "invalid EDI system id".to_string(),
            )));
        }
        let params = seller.to_params()?;
        self.get(&format!("edi/{edi_system}/orders/bySeller"), &params)
    }
}

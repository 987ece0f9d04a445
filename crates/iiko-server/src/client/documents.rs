use tracing::instrument;

use iiko_client::{Params, RequestBody, Response, Result};

use crate::documents::{InvoiceNumberQuery, InvoiceQuery};

impl super::ServerSession {
    /// Incoming invoices over a date range.
    #[instrument(skip(self))]
    pub fn incoming_invoices(&self, query: &InvoiceQuery) -> Result<Response> {
        self.get("api/documents/export/incomingInvoice", &query.to_params())
    }

    /// Outgoing invoices over a date range.
    #[instrument(skip(self))]
    pub fn outgoing_invoices(&self, query: &InvoiceQuery) -> Result<Response> {
        self.get("api/documents/export/outgoingInvoice", &query.to_params())
    }

    /// Incoming invoice by document number.
    #[instrument(skip(self))]
    pub fn incoming_invoice_by_number(&self, query: &InvoiceNumberQuery) -> Result<Response> {
        self.get(
            "api/documents/export/incomingInvoice/byNumber",
            &query.to_params()?,
        )
    }

    /// Outgoing invoice by document number.
    #[instrument(skip(self))]
    pub fn outgoing_invoice_by_number(&self, query: &InvoiceNumberQuery) -> Result<Response> {
        self.get(
            "api/documents/export/outgoingInvoice/byNumber",
            &query.to_params()?,
        )
    }

    /// Upload a production act (`xml` is the document body).
    #[instrument(skip(self, xml))]
    pub fn import_production_document(&self, xml: impl Into<String>) -> Result<Response> {
        self.post(
            "api/documents/import/productionDocument",
            &Params::new(),
            RequestBody::Xml(xml.into()),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use iiko_auth::ServerCredentials;
    use iiko_client::mock::MockTransport;
    use iiko_client::{Endpoint, ErrorKind};

    use super::super::ServerSession;
    use crate::documents::InvoiceNumberQuery;

    #[test]
    fn test_invalid_number_query_sends_nothing() {
        let transport = Arc::new(MockTransport::new());
        let session = ServerSession::with_transport(
            &Endpoint::new("h", 8080),
            ServerCredentials::from_plaintext("u", "p"),
            transport.clone(),
        )
        .with_token("t");

        let mut query = InvoiceNumberQuery::current_year("17");
        query.to = NaiveDate::from_ymd_opt(2024, 1, 1);
        let err = session.incoming_invoice_by_number(&query).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Config(_)));
        assert!(transport.requests().is_empty());

        session
            .outgoing_invoice_by_number(&InvoiceNumberQuery::current_year("17"))
            .unwrap();
        assert_eq!(
            transport.urls()[0],
            "http://h:8080/resto/api/documents/export/outgoingInvoice/byNumber\
             ?key=t&number=17&currentYear=true"
        );
    }

    #[test]
    fn test_import_production_document() {
        let transport = Arc::new(MockTransport::new());
        let session = ServerSession::with_transport(
            &Endpoint::new("h", 8080),
            ServerCredentials::from_plaintext("u", "p"),
            transport.clone(),
        )
        .with_token("t");

        session
            .import_production_document("<document><items/></document>")
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(
            request.url,
            "http://h:8080/resto/api/documents/import/productionDocument?key=t"
        );
        assert_eq!(
            request.header_value("content-type"),
            Some("text/xml; charset=UTF-8")
        );
    }
}

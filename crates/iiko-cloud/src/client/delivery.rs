use tracing::instrument;

use iiko_client::{Params, Result};

use crate::query::{format_request_timeout, DeliveryOrdersQuery, DEFAULT_REQUEST_TIMEOUT};

impl super::CloudSession {
    /// Couriers of an organization.
    #[instrument(skip(self))]
    pub fn couriers(&self, organization: &str) -> Result<serde_json::Value> {
        self.get_json(
            "api/0/rmsSettings/getCouriers",
            &Params::new().with("organization", organization),
        )
    }

    /// Orders assigned to a courier.
    #[instrument(skip(self))]
    pub fn courier_orders(&self, organization: &str, courier: &str) -> Result<serde_json::Value> {
        self.get_json(
            "api/0/orders/get_courier_orders",
            &Params::new()
                .with("organization", organization)
                .with("courier", courier)
                .with("request_timeout", format_request_timeout(DEFAULT_REQUEST_TIMEOUT)),
        )
    }

    /// Delivery orders.
    #[instrument(skip(self))]
    pub fn delivery_orders(&self, query: &DeliveryOrdersQuery) -> Result<serde_json::Value> {
        self.get_json("api/0/orders/deliveryOrders", &query.to_params())
    }

    /// Delivery history of a customer.
    #[instrument(skip(self))]
    pub fn customer_history(&self, organization: &str, customer: &str) -> Result<serde_json::Value> {
        self.get_json(
            "api/0/orders/deliveryHistoryByCustomerId",
            &Params::new()
                .with("organization", organization)
                .with("customerId", customer)
                .with("request_timeout", format_request_timeout(DEFAULT_REQUEST_TIMEOUT)),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use iiko_client::mock::{MockReply, MockTransport};
    use iiko_client::Endpoint;

    use super::super::CloudSession;
    use crate::{CloudCredentials, CloudMode, DeliveryOrdersQuery};

    #[test]
    fn test_delivery_urls() {
        let transport = Arc::new(
            MockTransport::new()
                .route("api/0/orders/", MockReply::ok(r#"{"deliveryOrders":[]}"#))
                .route("api/0/rmsSettings/getCouriers", MockReply::ok("[]")),
        );
        let session = CloudSession::with_transport(
            &Endpoint::iiko_biz(),
            CloudCredentials::new("bob", "s"),
            CloudMode::access_token(),
            transport.clone(),
        )
        .with_token("t");

        session.couriers("org").unwrap();
        session.courier_orders("org", "c1").unwrap();
        session.delivery_orders(&DeliveryOrdersQuery::new("org")).unwrap();
        session.customer_history("org", "cust").unwrap();

        assert_eq!(
            transport.urls(),
            vec![
                "https://iiko.biz:9900/api/0/rmsSettings/getCouriers?access_token=t&organization=org",
                "https://iiko.biz:9900/api/0/orders/get_courier_orders?access_token=t\
                 &organization=org&courier=c1&request_timeout=00%3A02%3A00",
                "https://iiko.biz:9900/api/0/orders/deliveryOrders?access_token=t\
                 &organization=org&request_timeout=00%3A02%3A00",
                "https://iiko.biz:9900/api/0/orders/deliveryHistoryByCustomerId?access_token=t\
                 &organization=org&customerId=cust&request_timeout=00%3A02%3A00",
            ]
        );
    }
}

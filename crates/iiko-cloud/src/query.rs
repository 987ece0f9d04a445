//! Cloud query parameters.

use std::time::Duration;

use chrono::NaiveDate;

use iiko_client::Params;

/// Server-side wait for long calls (`request_timeout=00:02:00`).
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// `HH:MM:SS`, the format of `request_timeout`.
///
/// ```rust
/// use std::time::Duration;
/// use iiko_cloud::format_request_timeout;
///
/// assert_eq!(format_request_timeout(Duration::from_secs(120)), "00:02:00");
/// ```
pub fn format_request_timeout(timeout: Duration) -> String {
    let secs = timeout.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Delivery orders of an organization (`api/0/orders/deliveryOrders`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOrdersQuery {
    pub organization: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    /// e.g. `NEW`, `ON_WAY`, `DELIVERED`.
    pub delivery_status: Option<String>,
    pub delivery_terminal_id: Option<String>,
    pub request_timeout: Duration,
}

impl DeliveryOrdersQuery {
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            date_from: None,
            date_to: None,
            delivery_status: None,
            delivery_terminal_id: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    pub fn to_params(&self) -> Params {
        let date = |d: NaiveDate| d.format("%Y-%m-%d").to_string();
        Params::new()
            .with("organization", &self.organization)
            .with_opt("dateFrom", self.date_from.map(date))
            .with_opt("dateTo", self.date_to.map(date))
            .with_opt("deliveryStatus", self.delivery_status.as_deref())
            .with_opt("deliveryTerminalId", self.delivery_terminal_id.as_deref())
            .with("request_timeout", format_request_timeout(self.request_timeout))
    }
}

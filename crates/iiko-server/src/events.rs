//! Event log query parameters.

use chrono::NaiveDateTime;

use iiko_client::security::xml;
use iiko_client::Params;

use crate::dates::iso_millis;

/// Event list query (`GET api/events`).
///
/// Each response carries a `revision`; pass `revision + 1` as `from_rev`
/// on the next call to receive only new events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventsQuery {
    pub from_time: Option<NaiveDateTime>,
    pub to_time: Option<NaiveDateTime>,
    pub from_rev: Option<i64>,
}

impl EventsQuery {
    /// Events newer than `revision`.
    pub fn since_revision(revision: i64) -> Self {
        Self {
            from_rev: Some(revision.saturating_add(1)),
            ..Default::default()
        }
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .with_opt("from_time", self.from_time.map(iso_millis))
            .with_opt("to_time", self.to_time.map(iso_millis))
            .with_opt("from_rev", self.from_rev)
    }
}

/// Event filter by event type and order number (`POST api/events`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventsFilter {
    /// Event type ids, e.g. `orderPaid`.
    pub events: Vec<String>,
    pub order_nums: Vec<String>,
}

impl EventsFilter {
    /// The `eventsRequestData` document sent as the request body.
    pub fn to_xml(&self) -> String {
        let mut body = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        body.push_str("<eventsRequestData>");
        if !self.events.is_empty() {
            body.push_str("<events>");
            for event in &self.events {
                body.push_str(&format!("<event>{}</event>", xml::escape(event)));
            }
            body.push_str("</events>");
        }
        if !self.order_nums.is_empty() {
            body.push_str("<orderNums>");
            for num in &self.order_nums {
                body.push_str(&format!("<orderNum>{}</orderNum>", xml::escape(num)));
            }
            body.push_str("</orderNums>");
        }
        body.push_str("</eventsRequestData>");
        body
    }
}

//! Document export parameters.

use chrono::NaiveDate;

use iiko_client::{Error, ErrorKind, Params, Result};

use crate::dates::iso_date;

/// Invoice export over a date range (`api/documents/export/*Invoice`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceQuery {
    /// First day, inclusive.
    pub from: NaiveDate,
    /// Last day, inclusive.
    pub to: NaiveDate,
    /// Supplier filter; without it every invoice in the range is returned.
    pub supplier_id: Option<String>,
}

impl InvoiceQuery {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from,
            to,
            supplier_id: None,
        }
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .with("from", iso_date(self.from))
            .with("to", iso_date(self.to))
            .with_opt("supplierId", self.supplier_id.as_deref())
    }
}

/// Invoice export by document number (`.../byNumber`).
///
/// With `current_year` the server searches the current year and `from` /
/// `to` must be absent. Without it both bounds are required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceNumberQuery {
    pub number: String,
    pub current_year: bool,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl InvoiceNumberQuery {
    /// Search the current year.
    pub fn current_year(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            current_year: true,
            from: None,
            to: None,
        }
    }

    /// Search an explicit date range.
    pub fn in_range(number: impl Into<String>, from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            number: number.into(),
            current_year: false,
            from: Some(from),
            to: Some(to),
        }
    }

    pub fn to_params(&self) -> Result<Params> {
        let params = Params::new()
            .with("number", &self.number)
            .with("currentYear", self.current_year);

        match (self.current_year, self.from, self.to) {
            (true, None, None) => Ok(params),
            (true, _, _) => Err(Error::new(ErrorKind::Config(
                "from/to must be absent when currentYear is true".to_string(),
            ))),
            (false, Some(from), Some(to)) => Ok(params
                .with("from", iso_date(from))
                .with("to", iso_date(to))),
            (false, _, _) => Err(Error::new(ErrorKind::Config(
                "from and to are required when currentYear is false".to_string(),
            ))),
        }
    }
}

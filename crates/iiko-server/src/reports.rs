//! Report parameters.
//!
//! Every report takes a named-field struct; list-valued filters are sent
//! as one repeated query parameter per value.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use iiko_client::Params;

use crate::dates::{day_month_year, iso_seconds, DateRange};

/// OLAP report type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OlapReportType {
    Sales,
    Transactions,
    Deliveries,
    /// Storage control. Only the v1 OLAP endpoint accepts it.
    Stock,
}

impl OlapReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OlapReportType::Sales => "SALES",
            OlapReportType::Transactions => "TRANSACTIONS",
            OlapReportType::Deliveries => "DELIVERIES",
            OlapReportType::Stock => "STOCK",
        }
    }
}

impl fmt::Display for OlapReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OLAP report, v1 (`api/reports/olap`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OlapRequest {
    pub report: OlapReportType,
    pub from: NaiveDate,
    pub to: NaiveDate,
    /// Grouping fields, e.g. `WaiterName`, `OpenTime`.
    pub group_rows: Vec<String>,
    pub group_cols: Vec<String>,
    /// Aggregation fields, e.g. `DishDiscountSum`.
    pub aggregates: Vec<String>,
}

impl OlapRequest {
    pub fn new(report: OlapReportType, from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            report,
            from,
            to,
            group_rows: Vec::new(),
            group_cols: Vec::new(),
            aggregates: Vec::new(),
        }
    }

    pub fn group_row(mut self, field: impl Into<String>) -> Self {
        self.group_rows.push(field.into());
        self
    }

    pub fn group_col(mut self, field: impl Into<String>) -> Self {
        self.group_cols.push(field.into());
        self
    }

    pub fn aggregate(mut self, field: impl Into<String>) -> Self {
        self.aggregates.push(field.into());
        self
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .with("report", self.report.as_str())
            .with("from", day_month_year(self.from))
            .with("to", day_month_year(self.to))
            .with_all("groupRow", &self.group_rows)
            .with_all("groupCol", &self.group_cols)
            .with_all("agr", &self.aggregates)
    }
}

/// Store operations report (`api/reports/storeOperations`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOperationsQuery {
    pub period: DateRange,
    /// Store ids; empty means every store.
    pub stores: Vec<String>,
    /// Document types; empty means every type.
    pub document_types: Vec<String>,
    /// Per-product rows without dates (`true`) or one row per document (`false`).
    pub product_detalization: bool,
    /// Only honored when `document_types` is not empty.
    pub show_cost_corrections: bool,
    /// Preset id; when set the server ignores everything except the dates.
    pub preset_id: Option<String>,
}

impl StoreOperationsQuery {
    pub fn new(period: DateRange) -> Self {
        Self {
            period,
            stores: Vec::new(),
            document_types: Vec::new(),
            product_detalization: true,
            show_cost_corrections: true,
            preset_id: None,
        }
    }

    pub fn to_params(&self) -> Params {
        let mut params = self.period.to_params();
        params.extend(
            Params::new()
                .with_all("stores", &self.stores)
                .with_all("documentTypes", &self.document_types)
                .with("productDetalization", self.product_detalization)
                .with("showCostCorrections", self.show_cost_corrections)
                .with_opt("presetId", self.preset_id.as_deref()),
        );
        params
    }
}

/// Department report over a date range with an optional hour window.
///
/// Used by `api/reports/productExpense`. Hours default to `-1` (all day)
/// on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentReport {
    pub department: String,
    pub period: DateRange,
    pub hour_from: Option<i32>,
    pub hour_to: Option<i32>,
}

impl DepartmentReport {
    pub fn new(department: impl Into<String>, period: DateRange) -> Self {
        Self {
            department: department.into(),
            period,
            hour_from: None,
            hour_to: None,
        }
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::new().with("department", &self.department);
        params.extend(self.period.to_params());
        params
            .with_opt("hourFrom", self.hour_from)
            .with_opt("hourTo", self.hour_to)
    }
}

/// Revenue report (`api/reports/sales`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesReport {
    pub report: DepartmentReport,
    /// Break revenue down by dish.
    pub dish_details: bool,
    /// Every payment type (`true`) or revenue only (`false`).
    pub all_revenue: bool,
}

impl SalesReport {
    pub fn new(department: impl Into<String>, period: DateRange) -> Self {
        Self {
            report: DepartmentReport::new(department, period),
            dish_details: false,
            all_revenue: true,
        }
    }

    pub fn to_params(&self) -> Params {
        self.report
            .to_params()
            .with("dishDetails", self.dish_details)
            .with("allRevenue", self.all_revenue)
    }
}

/// Department and date range (`api/reports/monthlyIncomePlan`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentPeriod {
    pub department: String,
    pub period: DateRange,
}

impl DepartmentPeriod {
    pub fn new(department: impl Into<String>, period: DateRange) -> Self {
        Self {
            department: department.into(),
            period,
        }
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::new().with("department", &self.department);
        params.extend(self.period.to_params());
        params
    }
}

/// Product-in-dish report (`api/reports/ingredientEntry`).
///
/// The server looks the product up by `product_article` first, then by
/// `product` id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientEntryQuery {
    pub department: String,
    pub period: DateRange,
    pub product_article: Option<String>,
    pub product: Option<String>,
    pub include_subtree: bool,
}

impl IngredientEntryQuery {
    pub fn new(department: impl Into<String>, period: DateRange) -> Self {
        Self {
            department: department.into(),
            period,
            product_article: None,
            product: None,
            include_subtree: false,
        }
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::new().with("department", &self.department);
        params.extend(self.period.to_params());
        params
            .with_opt("productArticle", self.product_article.as_deref())
            .with_opt("product", self.product.as_deref())
            .with("includeSubtree", self.include_subtree)
    }
}

/// Balances by account, counteragent and department
/// (`api/v2/reports/balance/counteragents`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceQuery {
    /// Accounting timestamp of the report.
    pub timestamp: NaiveDateTime,
    pub accounts: Vec<String>,
    pub counteragents: Vec<String>,
    pub departments: Vec<String>,
}

impl BalanceQuery {
    pub fn new(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            accounts: Vec::new(),
            counteragents: Vec::new(),
            departments: Vec::new(),
        }
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .with("timestamp", iso_seconds(self.timestamp))
            .with_all("account", &self.accounts)
            .with_all("counteragent", &self.counteragents)
            .with_all("department", &self.departments)
    }
}

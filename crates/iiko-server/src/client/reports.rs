use tracing::instrument;

use iiko_client::{Params, RequestBody, Response, Result};

use crate::reports::{
    BalanceQuery, DepartmentPeriod, DepartmentReport, IngredientEntryQuery, OlapReportType,
    OlapRequest, SalesReport, StoreOperationsQuery,
};

impl super::ServerSession {
    /// OLAP report (v1).
    #[instrument(skip(self))]
    pub fn olap(&self, request: &OlapRequest) -> Result<Response> {
        self.get("api/reports/olap", &request.to_params())
    }

    /// OLAP report (v2). `request` is the JSON report definition.
    #[instrument(skip(self, request))]
    pub fn olap_v2(&self, request: &serde_json::Value) -> Result<Response> {
        self.post(
            "api/v2/reports/olap",
            &Params::new(),
            RequestBody::Json(request.clone()),
        )
    }

    /// Fields available to a v2 OLAP report.
    #[instrument(skip(self))]
    pub fn olap_v2_columns(&self, report_type: OlapReportType) -> Result<Response> {
        self.get(
            "api/v2/reports/olap/columns",
            &Params::new().with("reportType", report_type.as_str()),
        )
    }

    #[instrument(skip(self))]
    pub fn store_operations(&self, query: &StoreOperationsQuery) -> Result<Response> {
        self.get("api/reports/storeOperations", &query.to_params())
    }

    /// Store operations report presets.
    #[instrument(skip(self))]
    pub fn store_report_presets(&self) -> Result<Response> {
        self.get("api/reports/storeReportPresets", &Params::new())
    }

    /// Product consumption by sales.
    #[instrument(skip(self))]
    pub fn product_expense(&self, report: &DepartmentReport) -> Result<Response> {
        self.get("api/reports/productExpense", &report.to_params())
    }

    /// Revenue report.
    #[instrument(skip(self))]
    pub fn sales(&self, report: &SalesReport) -> Result<Response> {
        self.get("api/reports/sales", &report.to_params())
    }

    /// Daily revenue plan.
    #[instrument(skip(self))]
    pub fn monthly_income_plan(&self, query: &DepartmentPeriod) -> Result<Response> {
        self.get("api/reports/monthlyIncomePlan", &query.to_params())
    }

    /// Dishes a product goes into.
    #[instrument(skip(self))]
    pub fn ingredient_entry(&self, query: &IngredientEntryQuery) -> Result<Response> {
        self.get("api/reports/ingredientEntry", &query.to_params())
    }

    /// Balances by account, counteragent and department.
    #[instrument(skip(self))]
    pub fn balance_counteragents(&self, query: &BalanceQuery) -> Result<Response> {
        self.get("api/v2/reports/balance/counteragents", &query.to_params())
    }
}

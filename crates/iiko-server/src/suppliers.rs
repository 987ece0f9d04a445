//! Supplier search parameters.

use iiko_client::Params;

/// Supplier search (`api/suppliers/search`). Both fields are regular expressions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierSearch {
    pub name: Option<String>,
    pub code: Option<String>,
}

impl SupplierSearch {
    pub fn to_params(&self) -> Params {
        Params::new()
            .with_opt("name", self.name.as_deref())
            .with_opt("code", self.code.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_search_params() {
        let search = SupplierSearch {
            code: Some("S-0".to_string()),
            ..Default::default()
        };
        assert_eq!(search.to_params().to_query_string(), "code=S-0");
    }
}

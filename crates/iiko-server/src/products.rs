//! Nomenclature search parameters.

use iiko_client::Params;

/// Nomenclature search (`api/products/search`).
///
/// Every text field is a regular expression matched by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSearch {
    pub include_deleted: bool,
    pub name: Option<String>,
    /// Quick-dial code in iikoFront.
    pub code: Option<String>,
    pub main_unit: Option<String>,
    /// Article number.
    pub num: Option<String>,
    pub cooking_place_type: Option<String>,
    pub product_group_type: Option<String>,
    /// `GOODS`, `DISH`, `PREPARED`, `SERVICE`, `MODIFIER`, `OUTER`, `PETROL`, `RATE`.
    pub product_type: Option<String>,
}

impl ProductSearch {
    pub fn to_params(&self) -> Params {
        Params::new()
            .with("includeDeleted", self.include_deleted)
            .with_opt("name", self.name.as_deref())
            .with_opt("code", self.code.as_deref())
            .with_opt("mainUnit", self.main_unit.as_deref())
            .with_opt("num", self.num.as_deref())
            .with_opt("cookingPlaceType", self.cooking_place_type.as_deref())
            .with_opt("productGroupType", self.product_group_type.as_deref())
            .with_opt("productType", self.product_type.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_search_params() {
        let search = ProductSearch {
            name: Some("Latte".to_string()),
            product_type: Some("DISH".to_string()),
            ..Default::default()
        };
        assert_eq!(
            search.to_params().to_query_string(),
            "includeDeleted=false&name=Latte&productType=DISH"
        );
    }
}

//! EDI order lookup parameters.

use iiko_client::{Error, ErrorKind, Params, Result};

/// Supplier identification for `edi/{ediSystem}/orders/bySeller`.
///
/// At least one of `gln` and `inn` must be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdiSeller {
    /// Global Location Number.
    pub gln: Option<String>,
    /// Taxpayer identification number.
    pub inn: Option<String>,
    /// Tax registration reason code.
    pub kpp: Option<String>,
    pub name: Option<String>,
}

impl EdiSeller {
    pub fn by_gln(gln: impl Into<String>) -> Self {
        Self {
            gln: Some(gln.into()),
            ..Default::default()
        }
    }

    pub fn by_inn(inn: impl Into<String>) -> Self {
        Self {
            inn: Some(inn.into()),
            ..Default::default()
        }
    }

    pub fn to_params(&self) -> Result<Params> {
        if self.gln.is_none() && self.inn.is_none() {
            return Err(Error::new(ErrorKind::Config(
                "EDI seller needs a gln or an inn".to_string(),
            )));
        }
        Ok(Params::new()
            .with_opt("gln", self.gln.as_deref())
            .with_opt("inn", self.inn.as_deref())
            .with_opt("kpp", self.kpp.as_deref())
            .with_opt("name", self.name.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_params() {
        let mut seller = EdiSeller::by_inn("7701234567");
        seller.kpp = Some("770101001".to_string());
        assert_eq!(
            seller.to_params().unwrap().to_query_string(),
            "inn=7701234567&kpp=770101001"
        );
        assert_eq!(
            EdiSeller::by_gln("4607").to_params().unwrap().to_query_string(),
            "gln=4607"
        );
    }

    #[test]
    fn test_seller_requires_gln_or_inn() {
        let seller = EdiSeller {
            name: Some("Acme".to_string()),
            ..Default::default()
        };
        let err = seller.to_params().unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Config(_)));
    }
}

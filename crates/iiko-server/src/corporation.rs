//! Corporation structure search parameters.

use iiko_client::Params;

/// Search for department groups (`api/corporation/groups/search`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupSearch {
    /// Group name, a regular expression.
    pub name: Option<String>,
    /// Department the groups belong to.
    pub department_id: Option<String>,
}

impl GroupSearch {
    pub fn to_params(&self) -> Params {
        Params::new()
            .with_opt("name", self.name.as_deref())
            .with_opt("departmentId", self.department_id.as_deref())
    }
}

/// Search for terminals (`api/corporation/terminal/search`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalSearch {
    /// Front terminals are `false`; back office and system terminals are `true`.
    pub anonymous: bool,
    /// Terminal name as shown in the back office, a regular expression.
    pub name: Option<String>,
    /// Computer name, a regular expression.
    pub computer_name: Option<String>,
}

impl TerminalSearch {
    pub fn to_params(&self) -> Params {
        Params::new()
            .with("anonymous", self.anonymous)
            .with_opt("name", self.name.as_deref())
            .with_opt("computerName", self.computer_name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_search_params() {
        assert!(GroupSearch::default().to_params().is_empty());

        let search = GroupSearch {
            name: Some("Hall.*".to_string()),
            department_id: Some("d-1".to_string()),
        };
        assert_eq!(
            search.to_params().to_query_string(),
            "name=Hall.%2A&departmentId=d-1"
        );
    }

    #[test]
    fn test_terminal_search_always_sends_anonymous() {
        let params = TerminalSearch::default().to_params();
        assert_eq!(params.to_query_string(), "anonymous=false");

        let params = TerminalSearch {
            anonymous: true,
            computer_name: Some("POS1".to_string()),
            ..Default::default()
        }
        .to_params();
        assert_eq!(params.to_query_string(), "anonymous=true&computerName=POS1");
    }
}

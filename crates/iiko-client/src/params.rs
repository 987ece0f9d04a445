//! Query parameters passed through to the remote API.

use std::fmt;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(i) => write!(f, "{i}"),
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
        }
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

/// Ordered name/value mapping appended to a request URL.
///
/// Names may repeat (`groupRow=a&groupRow=b`). Values are only
/// percent-encoded, never interpreted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    pairs: Vec<(String, ParamValue)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.push(name, value);
        self
    }

    /// Append a parameter only when a value is present.
    pub fn with_opt<V: Into<ParamValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    /// Append the same name once per value.
    pub fn with_all<I, V>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        for value in values {
            self.push(name, value);
        }
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Append every pair of `other`.
    pub fn extend(&mut self, other: Params) {
        self.pairs.extend(other.pairs);
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.pairs.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Percent-encoded `name=value` pairs joined with `&`.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(&value.to_string())
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.push(name, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_rendering() {
        assert_eq!(ParamValue::from(true).to_string(), "true");
        assert_eq!(ParamValue::from(false).to_string(), "false");
        assert_eq!(ParamValue::from(-1).to_string(), "-1");
        assert_eq!(ParamValue::from(2.5).to_string(), "2.5");
        assert_eq!(ParamValue::from("x").to_string(), "x");
    }

    #[test]
    fn test_query_string_encodes_and_keeps_order() {
        let params = Params::new()
            .with("name", "Борщ & salad")
            .with("includeDeleted", true)
            .with("hourFrom", -1);
        assert_eq!(
            params.to_query_string(),
            "name=%D0%91%D0%BE%D1%80%D1%89%20%26%20salad&includeDeleted=true&hourFrom=-1"
        );
    }

    #[test]
    fn test_repeated_names() {
        let params = Params::new().with_all("groupRow", ["WaiterName", "OpenTime"]);
        assert_eq!(params.len(), 2);
        assert_eq!(
            params.to_query_string(),
            "groupRow=WaiterName&groupRow=OpenTime"
        );
    }

    #[test]
    fn test_with_opt_skips_none() {
        let params = Params::new()
            .with_opt("from", Some("01.01.2024"))
            .with_opt::<&str>("to", None);
        assert_eq!(params.len(), 1);
        assert!(params.get("to").is_none());
        assert_eq!(params.get("from"), Some(&ParamValue::from("01.01.2024")));
    }

    #[test]
    fn test_from_iterator_and_extend() {
        let mut params: Params = vec![("a", "1"), ("b", "2")].into_iter().collect();
        params.extend(Params::new().with("c", 3));
        assert_eq!(params.to_query_string(), "a=1&b=2&c=3");
        assert!(Params::new().is_empty());
    }
}

//! Ordered query parameters.
//!
//! Binance signs the literal query string it receives, so parameters keep
//! their insertion order all the way from the caller to the wire.

use url::form_urlencoded;

/// Ordered list of query parameter pairs.
///
/// A key may appear several times for list-valued parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.push(key, value);
        self
    }

    /// Append a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Append one `key=value` pair per item, in iteration order.
    pub fn push_all<I, V>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        for value in values {
            self.push(key, value);
        }
    }

    /// Returns true if any pair uses `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Form-urlencode the pairs in insertion order, joined by `&`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

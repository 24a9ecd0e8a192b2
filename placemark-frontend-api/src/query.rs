use std::fmt;

use url::form_urlencoded;

/// Ordered query parameters.
///
/// Absent values and empty strings are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(&'static str, String)>,
}

impl Query {
    #[must_use]
    pub const fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Setting a key twice replaces the first value in place.
    #[must_use]
    pub fn param<V>(mut self, key: &'static str, value: Option<V>) -> Self
    where
        V: ToString,
    {
        let Some(value) = value.map(|v| v.to_string()) else {
            return self;
        };
        if value.is_empty() {
            return self;
        }
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.params.push((key, value)),
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Appends the query string to `path`.
    #[must_use]
    pub fn to_path(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_owned()
        } else {
            format!("{path}?{self}")
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter().map(|(k, v)| (*k, v.as_str())))
            .finish();
        f.write_str(&encoded)
    }
}

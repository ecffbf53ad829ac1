use std::{borrow::Cow, fmt::Display};

/// Ordered query-string parameters for one request.
///
/// Optional parameters that are `None` and empty lists are dropped, so
/// endpoint methods can pass their arguments straight through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(Cow<'static, str>, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Display) -> Self {
        self.pairs.push((name.into(), value.to_string()));
        self
    }

    pub fn with_opt<V: Display>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    /// ESI takes array parameters as a single comma-separated value.
    pub fn with_list<V: Display>(self, name: &'static str, values: &[V]) -> Self {
        if values.is_empty() {
            return self;
        }
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        self.with(name, joined)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.pairs.iter().any(|(key, _)| key == name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn pairs(&self) -> &[(Cow<'static, str>, String)] {
        &self.pairs
    }

    pub(crate) fn with_page(&self, page: u32) -> Self {
        let mut query = self.clone();
        query.pairs.retain(|(key, _)| key != "page");
        query.with("page", page)
    }
}

use reqwest::Url;

/// Query parameters for `GET /transaction`. `None` and empty values are
/// both left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub category: Option<String>,
    pub status: Option<String>,
}

impl Query {
    /// Build a query from filter selections, where `""` means "no filter".
    pub fn from_selection(category: &str, status: &str) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            category: non_empty(category),
            status: non_empty(status),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs().next().is_none()
    }

    fn pairs(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [("category", &self.category), ("status", &self.status)]
            .into_iter()
            .filter_map(|(key, val)| {
                val.as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| (key, v))
            })
    }

    /// Append the non-empty parameters to `endpoint`. With no parameters the
    /// endpoint is returned untouched (no trailing `?`).
    pub fn to_url(&self, endpoint: &Url) -> Url {
        let mut url = endpoint.clone();
        if !self.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, val) in self.pairs() {
                pairs.append_pair(key, val);
            }
        }
        url
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("(unfiltered)");
        }
        let parts: Vec<String> = self.pairs().map(|(k, v)| format!("{k}={v}")).collect();
        f.write_str(&parts.join("&"))
    }
}

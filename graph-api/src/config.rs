use std::fmt;

/// Where requests go and which token authorizes them.
///
/// Built once at startup and handed to [`crate::API`]; never mutated or
/// refreshed afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestConfig {
    base_url: String,
    access_token: String,
}

impl RequestConfig {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            access_token: access_token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

impl fmt::Debug for RequestConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

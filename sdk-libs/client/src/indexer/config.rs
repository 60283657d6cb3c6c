pub const DEFAULT_REQUEST_ID: &str = "tiny-spl";

/// Read API endpoint. The api key, when set, is sent as the `api-key` query
/// parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerConfig {
    pub url: String,
    pub api_key: Option<String>,
    pub request_id: String,
}

impl IndexerConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            request_id: DEFAULT_REQUEST_ID.to_string(),
        }
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = request_id.into();
        self
    }
}

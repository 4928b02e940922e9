use crate::error::{ShareError, ShareErrorExt};
use crate::token::AccessToken;
use eshare_domain::config::ClientConfig;
use eshare_domain::constants::{
    ACCESS_TOKEN_PARAM, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TOKEN_FILE, ECAS_COMMUNITY_ID,
};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{StatusCode, Url};
use serde_json::Value;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Longest slice of an error body copied into [`ShareError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 256;

/// Blocking client for one repository instance.
///
/// The token file is read on every authenticated call, so a token rotated on disk is
/// picked up without rebuilding the client. Cloning is cheap: the connection pool is shared.
#[derive(Debug, Clone)]
pub struct ShareClient {
    pub(crate) http: Client,
    base_url: Url,
    token_file: PathBuf,
    pub(crate) community_id: String,
    pub(crate) page_size: u32,
}

impl ShareClient {
    /// Creates a new [`ShareClientBuilder`].
    pub fn builder() -> ShareClientBuilder {
        ShareClientBuilder::new()
    }

    /// Builds a client from the `[client]` configuration section.
    ///
    /// # Errors
    /// Same as [`ShareClientBuilder::build`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, ShareError> {
        let mut builder = Self::builder()
            .base_url(&config.base_url)
            .token_file(&config.token_file)
            .community_id(&config.community_id)
            .user_agent(&config.user_agent)
            .page_size(config.page_size);

        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        builder.build()
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn token_file(&self) -> &Path {
        &self.token_file
    }

    #[must_use]
    pub fn community_id(&self) -> &str {
        &self.community_id
    }

    /// Reads the access token from the configured file.
    ///
    /// # Errors
    /// * [`ShareError::Io`] if the file cannot be read.
    /// * [`ShareError::Token`] if the file is blank.
    pub fn retrieve_access_token(&self) -> Result<AccessToken, ShareError> {
        AccessToken::from_file(&self.token_file)
    }

    /// Resolves `path` against the base URL and appends `segments`, percent-encoding each.
    pub(crate) fn endpoint(&self, path: &str, segments: &[&str]) -> Result<Url, ShareError> {
        let mut url = self.base_url.join(path).map_err(|e| ShareError::Configuration {
            message: e.to_string().into(),
            context: Some(format!("Joining '{path}' onto the base URL").into()),
        })?;

        if !segments.is_empty() {
            url.path_segments_mut()
                .map_err(|()| ShareError::Internal {
                    message: "base URL cannot carry a path".into(),
                    context: None,
                })?
                .pop_if_empty()
                .extend(segments);
        }

        Ok(url)
    }

    /// Attaches the access token as a query parameter.
    pub(crate) fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder, ShareError> {
        let token = self.retrieve_access_token()?;
        Ok(request.query(&[(ACCESS_TOKEN_PARAM, token.expose())]))
    }

    /// Sends `request` and fails on any non-success status.
    pub(crate) fn execute(
        &self,
        request: RequestBuilder,
        action: &'static str,
    ) -> Result<Response, ShareError> {
        let response = request.send().context(action)?;
        debug!(status = %response.status(), action, "Repository responded");
        check_status(response, action)
    }

    /// Like [`Self::execute`], then decodes the body as JSON.
    pub(crate) fn execute_json(
        &self,
        request: RequestBuilder,
        action: &'static str,
    ) -> Result<Value, ShareError> {
        self.execute(request, action)?.json::<Value>().context(action)
    }

    /// Like [`Self::execute`], returning only the status code.
    pub(crate) fn execute_status(
        &self,
        request: RequestBuilder,
        action: &'static str,
    ) -> Result<StatusCode, ShareError> {
        self.execute(request, action).map(|response| response.status())
    }
}

fn check_status(response: Response, action: &'static str) -> Result<Response, ShareError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = error_message(&response.text().unwrap_or_default());
    if status == StatusCode::NOT_FOUND {
        return Err(ShareError::EntityUnavailable { message, context: Some(action.into()) });
    }

    Err(ShareError::Status { status: status.as_u16(), message, context: Some(action.into()) })
}

/// Error bodies are JSON `{"status": .., "message": ..}`; fall back to the raw text.
fn error_message(body: &str) -> Cow<'static, str> {
    let from_json = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_owned));

    let message = from_json.unwrap_or_else(|| body.trim().to_owned());
    if message.is_empty() {
        return "empty response body".into();
    }
    if message.chars().count() > MAX_ERROR_BODY_CHARS {
        let cut: String = message.chars().take(MAX_ERROR_BODY_CHARS).collect();
        return format!("{cut}...").into();
    }
    message.into()
}

/// Reads `hits.total` from a search response. Newer servers wrap it in an object.
pub(crate) fn hits_total(response: &Value) -> Option<u64> {
    let total = response.pointer("/hits/total")?;
    total.as_u64().or_else(|| total.get("value").and_then(Value::as_u64))
}

/// A fluent builder for a [`ShareClient`].
///
/// Every setting has a default matching the ECAS training deployment.
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct ShareClientBuilder {
    base_url: Option<String>,
    token_file: Option<PathBuf>,
    community_id: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    page_size: Option<u32>,
}

impl ShareClientBuilder {
    /// Creates a new [`ShareClientBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_file = Some(path.into());
        self
    }

    /// Community used by [`ShareClient::create_draft_record_with_pid`] for handle sources.
    pub fn community_id(mut self, id: impl Into<String>) -> Self {
        self.community_id = Some(id.into());
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Overall per-request timeout.
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Default `size` of [`ShareClient::list_all_records`].
    pub const fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Validates the settings and builds the HTTP client.
    ///
    /// A base URL without a trailing slash gets one, so `https://host/b2share` keeps its
    /// path prefix when endpoints are joined onto it.
    ///
    /// # Errors
    /// * [`ShareError::Configuration`] if the base URL does not parse or is not `http(s)`.
    /// * [`ShareError::Transport`] if the TLS backend cannot be initialized.
    #[instrument(skip(self), fields(base_url = self.base_url))]
    pub fn build(self) -> Result<ShareClient, ShareError> {
        let raw = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        let base_url = parse_base_url(&raw)?;

        let mut http = Client::builder().user_agent(
            self.user_agent
                .unwrap_or_else(|| concat!("eshare/", env!("CARGO_PKG_VERSION")).to_owned()),
        );
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build().context("Building HTTP client")?;

        let token_file = self.token_file.unwrap_or_else(|| PathBuf::from(DEFAULT_TOKEN_FILE));
        info!(base_url = %base_url, token_file = %token_file.display(), "Repository client ready");

        Ok(ShareClient {
            http,
            base_url,
            token_file,
            community_id: self.community_id.unwrap_or_else(|| ECAS_COMMUNITY_ID.to_owned()),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ShareError> {
    let invalid = |message: Cow<'static, str>| ShareError::Configuration {
        message,
        context: Some(format!("base URL '{raw}'").into()),
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string().into()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme()).into()));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot be a base".into()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eshare_domain::constants::endpoints;
    use serde_json::json;

    fn client(base: &str) -> ShareClient {
        ShareClient::builder().base_url(base).token_file("/nonexistent/token.txt").build().unwrap()
    }

    #[test]
    fn defaults_target_the_training_instance() {
        let client = ShareClient::builder().build().unwrap();
        assert_eq!(client.base_url().as_str(), "https://eudat-b2share-test.csc.fi/");
        assert_eq!(client.token_file(), Path::new(DEFAULT_TOKEN_FILE));
        assert_eq!(client.community_id(), ECAS_COMMUNITY_ID);
        assert_eq!(client.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn endpoints_keep_a_base_path_prefix() {
        let client = client("https://repo.example/b2share");
        let url = client.endpoint(endpoints::RECORDS, &["abc", "draft"]).unwrap();
        assert_eq!(url.as_str(), "https://repo.example/b2share/api/records/abc/draft");
    }

    #[test]
    fn trailing_slash_endpoint_survives_without_segments() {
        let client = client("https://repo.example");
        let url = client.endpoint(endpoints::RECORDS, &[]).unwrap();
        assert_eq!(url.as_str(), "https://repo.example/api/records/");
    }

    #[test]
    fn segments_are_percent_encoded() {
        let client = client("https://repo.example/");
        let url = client.endpoint(endpoints::FILES, &["bucket", "my data?.nc"]).unwrap();
        assert_eq!(url.as_str(), "https://repo.example/api/files/bucket/my%20data%3F.nc");
    }

    #[test]
    fn non_http_base_urls_are_rejected() {
        let err = ShareClient::builder().base_url("ftp://repo.example").build().unwrap_err();
        assert!(matches!(err, ShareError::Configuration { .. }));

        let err = ShareClient::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, ShareError::Configuration { .. }));
    }

    #[test]
    fn from_config_applies_every_setting() {
        let config = ClientConfig {
            base_url: "http://localhost:5000".to_owned(),
            token_file: PathBuf::from("/tmp/token.txt"),
            community_id: "c-1".to_owned(),
            page_size: 3,
            timeout_seconds: Some(5),
            ..ClientConfig::default()
        };
        let client = ShareClient::from_config(&config).unwrap();

        assert_eq!(client.base_url().as_str(), "http://localhost:5000/");
        assert_eq!(client.token_file(), Path::new("/tmp/token.txt"));
        assert_eq!(client.community_id(), "c-1");
        assert_eq!(client.page_size, 3);
    }

    #[test]
    fn error_message_prefers_the_json_message() {
        let body = r#"{"status": 400, "message": "Validation error."}"#;
        assert_eq!(error_message(body), "Validation error.");
        assert_eq!(error_message("  plain text\n"), "plain text");
        assert_eq!(error_message(""), "empty response body");
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(1000);
        let message = error_message(&body);
        assert_eq!(message.chars().count(), MAX_ERROR_BODY_CHARS + 3);
    }

    #[test]
    fn hits_total_reads_both_shapes() {
        assert_eq!(hits_total(&json!({ "hits": { "total": 4 } })), Some(4));
        assert_eq!(hits_total(&json!({ "hits": { "total": { "value": 7 } } })), Some(7));
        assert_eq!(hits_total(&json!({ "hits": {} })), None);
    }
}

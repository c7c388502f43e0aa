use reqwest::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared_types::AppError;
use tracing::{debug, warn};

use crate::config;
use crate::error_convert::ReqwestErrorExt;

/// HTTP client for the authentication backend and the dispatch API.
///
/// Every request carries the browser's credentials (cookie jar on native,
/// `credentials: include` on wasm) so the backend session cookie rides
/// along. Cheap to clone; clones share one connection pool and cookie jar.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    log_requests: bool,
}

impl ApiClient {
    /// Build a client for `base_url` with request logging off.
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        Self::build(base_url.into(), None)
    }

    /// Build a client from `config.toml` and `DISPATCH_API_URL`.
    pub fn from_config() -> Result<Self, AppError> {
        let cfg = config::load_config();
        let client = Self::build(config::api_base_url(), cfg.api.timeout_secs)?;
        Ok(client.with_request_logging(cfg.features.request_logging))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn build(base_url: String, timeout_secs: Option<u64>) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder().cookie_store(true);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let http = builder.build().map_err(|e| e.into_app_error())?;
        Ok(Self::with_http(http, base_url))
    }

    #[cfg(target_arch = "wasm32")]
    fn build(base_url: String, _timeout_secs: Option<u64>) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| e.into_app_error())?;
        Ok(Self::with_http(http, base_url))
    }

    fn with_http(http: reqwest::Client, base_url: String) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            log_requests: false,
        }
    }

    /// Toggle debug-level request/response lines.
    pub fn with_request_logging(mut self, enabled: bool) -> Self {
        self.log_requests = enabled;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `path` onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    /// Send a request; non-2xx responses become `AppError`s.
    async fn execute(&self, builder: RequestBuilder) -> Result<Response, AppError> {
        let request = builder.build().map_err(|e| e.into_app_error())?;
        let method = request.method().clone();
        let url = request.url().clone();

        if self.log_requests {
            debug!(%method, %url, "dispatch api request");
        }

        let response = self.http.execute(request).await.map_err(|e| {
            warn!(%method, %url, error = %e, "dispatch api request did not complete");
            e.into_app_error()
        })?;

        let status = response.status();
        if self.log_requests {
            debug!(%method, %url, status = status.as_u16(), "dispatch api response");
        }

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = AppError::from_response_body(status.as_u16(), &body);
        warn!(%method, %url, status = status.as_u16(), error = %err, "dispatch api request failed");
        Err(err)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.execute(self.request(Method::GET, path)).await?;
        response.json::<T>().await.map_err(|e| e.into_app_error())
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.execute(self.request(method, path).json(body)).await?;
        response.json::<T>().await.map_err(|e| e.into_app_error())
    }

    /// Send a body-less request and ignore whatever comes back.
    pub(crate) async fn send_empty(&self, method: Method, path: &str) -> Result<(), AppError> {
        self.execute(self.request(method, path)).await.map(|_| ())
    }
}

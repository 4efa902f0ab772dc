//! HTTP API client wrapping `gloo-net` for calls to the controller's `/api/*`.

use std::future::Future;

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use zerofeed_app::config::DashboardConfig;
use zerofeed_app::ports::DashboardApi;
use zerofeed_domain::{error::FetchError, log::LogSnapshot, status::StatusSnapshot};

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

fn transport_error(err: gloo_net::Error) -> FetchError {
    FetchError::Network(err.to_string())
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, FetchError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => resp.status_text(),
    };
    Err(FetchError::Status { status, message })
}

/// GET `url` and return the body of a successful response.
async fn get_body(url: &str) -> Result<String, FetchError> {
    let resp = Request::get(url).send().await.map_err(transport_error)?;
    let resp = check_response(resp).await?;
    resp.text().await.map_err(transport_error)
}

/// [`DashboardApi`] implementation talking to the controller over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    status_url: String,
    logs_url: String,
}

impl HttpDashboardApi {
    /// Create a client for the endpoints named in `config`.
    #[must_use]
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            status_url: config.status_url.clone(),
            logs_url: config.logs_url.clone(),
        }
    }
}

impl DashboardApi for HttpDashboardApi {
    fn fetch_status(&self) -> impl Future<Output = Result<StatusSnapshot, FetchError>> {
        async move { StatusSnapshot::from_json(&get_body(&self.status_url).await?) }
    }

    fn fetch_logs(&self) -> impl Future<Output = Result<LogSnapshot, FetchError>> {
        async move { LogSnapshot::from_json(&get_body(&self.logs_url).await?) }
    }
}

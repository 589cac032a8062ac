use reqwest::{Response, StatusCode};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Invalid header value: '{0}'")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
    #[error("Request to '{url}' not successful, status code: {status}")]
    RequestNotOk { url: String, status: StatusCode },
}

/// Turns a non-success response into `Error::RequestNotOk`, logging the body.
pub(crate) async fn ensure_success(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    // query strings may carry credentials
    let mut url = resp.url().clone();
    url.set_query(None);
    let url = url.to_string();
    let body = resp.text().await.unwrap_or_else(|_| "empty".to_owned());
    log::error!(
        "Request not successful, status code: {}, url: {}, body: {}",
        status,
        url,
        body
    );
    Err(Error::RequestNotOk { url, status })
}

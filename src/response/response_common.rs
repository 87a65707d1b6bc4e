use strum_macros::Display;

/// Checks the HTTP status before any body handling. The service reports
/// errors through the status line, so a non-success code short-circuits here.
pub(crate) fn unwrap_return_code(
    response: reqwest::Response,
) -> Result<reqwest::Response, ResponseError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        crate::request_warn!("{} answered {status}", response.url().path());
        Err(ResponseError::HttpStatus(status))
    }
}

/// Failure of a single API call. Every variant is scoped to the one request
/// that produced it; the client never retries on its own.
#[derive(Debug, Display)]
pub enum ResponseError {
    #[strum(to_string = "no connection to the service: {0}")]
    NoConnection(reqwest::Error),
    #[strum(to_string = "request timed out: {0}")]
    Timeout(reqwest::Error),
    #[strum(to_string = "service answered with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[strum(to_string = "response body was not valid JSON: {0}")]
    MalformedBody(reqwest::Error),
    #[strum(to_string = "request failed: {0}")]
    Unknown(reqwest::Error),
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_connect() {
            ResponseError::NoConnection(value)
        } else if value.is_timeout() {
            ResponseError::Timeout(value)
        } else if value.is_decode() {
            ResponseError::MalformedBody(value)
        } else {
            ResponseError::Unknown(value)
        }
    }
}

use std::fmt::{self, Write as _};

use crate::endpoint::ApiPage;
use crate::http_client::RetroClient;
use crate::response::response_common::{self, ResponseError};

/// Operation-specific `&key=value` suffix appended after the identity
/// parameters. Values are interpolated as-is: nothing is URL-escaped, which
/// is the wire behavior existing consumers of the service rely on.
#[derive(Debug, Default)]
pub struct QueryFragment {
    buf: String,
}

impl QueryFragment {
    pub fn new() -> QueryFragment {
        QueryFragment { buf: String::new() }
    }

    /// Appends `&{key}={value}`. The service uses single-letter field names
    /// throughout, hence the `char` key.
    #[must_use]
    pub fn param(mut self, key: char, value: impl fmt::Display) -> QueryFragment {
        let _ = write!(self.buf, "&{key}={value}");
        self
    }
}

impl fmt::Display for QueryFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

/// One remote API page plus the query fragment it sends. The default
/// `send_request` is the single dispatch path every operation goes through.
pub(crate) trait ApiRequestType {
    type Response: for<'de> serde::Deserialize<'de>;

    fn page(&self) -> ApiPage;

    /// `acting_user` is the account user from the client; operations with a
    /// per-call user override fall back to it when the override is absent.
    fn query_fragment(&self, acting_user: &str) -> QueryFragment {
        let _ = acting_user;
        QueryFragment::new()
    }

    fn request_url(&self, client: &RetroClient) -> String {
        format!(
            "{}/API/{}?z={}&y={}{}",
            client.url(),
            self.page().path(),
            client.user(),
            client.api_key(),
            self.query_fragment(client.user())
        )
    }

    async fn send_request(&self, client: &RetroClient) -> Result<Self::Response, ResponseError> {
        let url = self.request_url(client);
        crate::request_event!("GET {url}");
        let response = client.client().get(&url).send().await?;
        let response = response_common::unwrap_return_code(response)?;
        Ok(response.json::<Self::Response>().await?)
    }
}

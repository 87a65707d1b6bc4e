use super::request_common::ApiRequestType;
use crate::endpoint::ApiPage;

#[derive(Debug)]
pub struct ConsoleIdsRequest {}

impl ApiRequestType for ConsoleIdsRequest {
    type Response = serde_json::Value;

    fn page(&self) -> ApiPage {
        ApiPage::ConsoleIds
    }
}

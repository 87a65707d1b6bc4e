use super::request_common::ApiRequestType;
use crate::endpoint::ApiPage;

#[derive(Debug)]
pub struct TopTenUsersRequest {}

impl ApiRequestType for TopTenUsersRequest {
    type Response = serde_json::Value;

    fn page(&self) -> ApiPage {
        ApiPage::TopTenUsers
    }
}

use super::request_common::{ApiRequestType, QueryFragment};
use crate::endpoint::ApiPage;

/// Lists the games registered for one console.
#[derive(Debug)]
pub struct GameListRequest {
    pub console_id: u32,
    /// Passed through as the service's `f` field; defaults to `false`.
    pub flag: bool,
}

impl GameListRequest {
    pub fn new(console_id: u32) -> GameListRequest {
        GameListRequest { console_id, flag: false }
    }
}

impl ApiRequestType for GameListRequest {
    type Response = serde_json::Value;

    fn page(&self) -> ApiPage {
        ApiPage::GameList
    }

    fn query_fragment(&self, _acting_user: &str) -> QueryFragment {
        QueryFragment::new().param('i', self.console_id).param('f', self.flag)
    }
}

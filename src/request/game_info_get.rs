use super::request_common::{ApiRequestType, QueryFragment};
use crate::endpoint::ApiPage;

#[derive(Debug)]
pub struct GameInfoRequest {
    pub game_id: u32,
}

impl ApiRequestType for GameInfoRequest {
    type Response = serde_json::Value;

    fn page(&self) -> ApiPage {
        ApiPage::GameInfo
    }

    fn query_fragment(&self, _acting_user: &str) -> QueryFragment {
        QueryFragment::new().param('i', self.game_id)
    }
}

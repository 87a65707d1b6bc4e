use super::request_common::{ApiRequestType, QueryFragment};
use crate::endpoint::ApiPage;

#[derive(Debug)]
pub struct AchievementCountRequest {
    pub game_id: u32,
}

impl ApiRequestType for AchievementCountRequest {
    type Response = serde_json::Value;

    fn page(&self) -> ApiPage {
        ApiPage::AchievementCount
    }

    fn query_fragment(&self, _acting_user: &str) -> QueryFragment {
        QueryFragment::new().param('i', self.game_id)
    }
}

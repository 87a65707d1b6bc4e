use super::request_common::{ApiRequestType, QueryFragment};
use crate::endpoint::ApiPage;

#[derive(Debug)]
pub struct AchievementUnlocksRequest {
    pub achievement_id: u32,
}

impl ApiRequestType for AchievementUnlocksRequest {
    type Response = serde_json::Value;

    fn page(&self) -> ApiPage {
        ApiPage::AchievementUnlocks
    }

    fn query_fragment(&self, _acting_user: &str) -> QueryFragment {
        QueryFragment::new().param('a', self.achievement_id)
    }
}

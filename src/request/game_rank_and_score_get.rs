use super::request_common::{ApiRequestType, QueryFragment};
use crate::endpoint::ApiPage;

#[derive(Debug)]
pub struct GameRankAndScoreRequest {
    pub game_id: u32,
}

impl ApiRequestType for GameRankAndScoreRequest {
    type Response = serde_json::Value;

    fn page(&self) -> ApiPage {
        ApiPage::GameRankAndScore
    }

    fn query_fragment(&self, _acting_user: &str) -> QueryFragment {
        // This page keys the game on g, unlike its siblings that use i.
        QueryFragment::new().param('g', self.game_id)
    }
}

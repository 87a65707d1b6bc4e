use super::request_common::{ApiRequestType, QueryFragment};
use crate::endpoint::ApiPage;

#[derive(Debug)]
pub struct UserGameRankAndScoreRequest {
    pub user: Option<String>,
    pub game_id: u32,
}

impl UserGameRankAndScoreRequest {
    pub fn new(game_id: u32) -> UserGameRankAndScoreRequest {
        UserGameRankAndScoreRequest { user: None, game_id }
    }
}

impl ApiRequestType for UserGameRankAndScoreRequest {
    type Response = serde_json::Value;

    fn page(&self) -> ApiPage {
        ApiPage::UserGameRankAndScore
    }

    fn query_fragment(&self, acting_user: &str) -> QueryFragment {
        QueryFragment::new()
            .param('u', self.user.as_deref().unwrap_or(acting_user))
            .param('g', self.game_id)
    }
}

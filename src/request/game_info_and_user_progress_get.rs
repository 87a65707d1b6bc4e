use super::request_common::{ApiRequestType, QueryFragment};
use crate::endpoint::ApiPage;

/// Complete summary of one user's progress in one game.
#[derive(Debug)]
pub struct GameInfoAndUserProgressRequest {
    pub user: Option<String>,
    pub game_id: u32,
}

impl GameInfoAndUserProgressRequest {
    pub fn new(game_id: u32) -> GameInfoAndUserProgressRequest {
        GameInfoAndUserProgressRequest { user: None, game_id }
    }
}

impl ApiRequestType for GameInfoAndUserProgressRequest {
    type Response = serde_json::Value;

    fn page(&self) -> ApiPage {
        ApiPage::GameInfoAndUserProgress
    }

    fn query_fragment(&self, acting_user: &str) -> QueryFragment {
        QueryFragment::new()
            .param('u', self.user.as_deref().unwrap_or(acting_user))
            .param('g', self.game_id)
    }
}

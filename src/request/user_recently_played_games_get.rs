use super::request_common::{ApiRequestType, QueryFragment};
use crate::endpoint::ApiPage;

#[derive(Debug)]
pub struct UserRecentlyPlayedGamesRequest {
    pub user: Option<String>,
    pub count: u32,
    pub offset: u32,
}

impl Default for UserRecentlyPlayedGamesRequest {
    fn default() -> UserRecentlyPlayedGamesRequest {
        UserRecentlyPlayedGamesRequest { user: None, count: 1, offset: 0 }
    }
}

impl ApiRequestType for UserRecentlyPlayedGamesRequest {
    type Response = serde_json::Value;

    fn page(&self) -> ApiPage {
        ApiPage::UserRecentlyPlayedGames
    }

    fn query_fragment(&self, acting_user: &str) -> QueryFragment {
        QueryFragment::new()
            .param('u', self.user.as_deref().unwrap_or(acting_user))
            .param('c', self.count)
            .param('o', self.offset)
    }
}

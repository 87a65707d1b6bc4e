use super::request_common::{ApiRequestType, QueryFragment};
use crate::endpoint::ApiPage;

#[derive(Debug, Default)]
pub struct UserCompletedGamesRequest {
    pub user: Option<String>,
}

impl ApiRequestType for UserCompletedGamesRequest {
    type Response = serde_json::Value;

    fn page(&self) -> ApiPage {
        ApiPage::UserCompletedGames
    }

    fn query_fragment(&self, acting_user: &str) -> QueryFragment {
        QueryFragment::new().param('u', self.user.as_deref().unwrap_or(acting_user))
    }
}

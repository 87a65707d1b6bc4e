use super::request_common::{ApiRequestType, QueryFragment};
use crate::endpoint::ApiPage;

/// Second page for completed games; overlaps with
/// [`UserCompletedGamesRequest`](super::user_completed_games_get::UserCompletedGamesRequest)
/// but the service serves both and some consumers depend on this shape.
#[derive(Debug, Default)]
pub struct UserCompletedGames2Request {
    pub user: Option<String>,
}

impl ApiRequestType for UserCompletedGames2Request {
    type Response = serde_json::Value;

    fn page(&self) -> ApiPage {
        ApiPage::UserCompletedGames2
    }

    fn query_fragment(&self, acting_user: &str) -> QueryFragment {
        QueryFragment::new().param('u', self.user.as_deref().unwrap_or(acting_user))
    }
}

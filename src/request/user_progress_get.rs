use super::request_common::{ApiRequestType, QueryFragment};
use crate::endpoint::ApiPage;

/// Progress for a user across a comma-separated list of game IDs.
#[derive(Debug, Default)]
pub struct UserProgressRequest {
    pub user: Option<String>,
    /// Comma-separated game IDs, e.g. `"2,3,75"`. Whitespace around the
    /// commas is stripped before the list goes on the wire. Earlier clients
    /// of this service matched the literal characters `\s` here and shipped
    /// the list untouched; actual stripping is an intentional change.
    pub game_ids: String,
}

impl ApiRequestType for UserProgressRequest {
    type Response = serde_json::Value;

    fn page(&self) -> ApiPage {
        ApiPage::UserProgress
    }

    fn query_fragment(&self, acting_user: &str) -> QueryFragment {
        let ids: String = self.game_ids.chars().filter(|c| !c.is_whitespace()).collect();
        QueryFragment::new()
            .param('u', self.user.as_deref().unwrap_or(acting_user))
            .param('i', ids)
    }
}

use super::request_common::{ApiRequestType, QueryFragment};
use crate::endpoint::ApiPage;

/// Activity feed for a user.
#[derive(Debug)]
pub struct FeedRequest {
    /// `None` falls back to the account user the client was built with.
    pub user: Option<String>,
    pub count: u32,
    pub offset: u32,
}

impl Default for FeedRequest {
    fn default() -> FeedRequest {
        FeedRequest { user: None, count: 1, offset: 0 }
    }
}

impl ApiRequestType for FeedRequest {
    type Response = serde_json::Value;

    fn page(&self) -> ApiPage {
        ApiPage::Feed
    }

    fn query_fragment(&self, acting_user: &str) -> QueryFragment {
        QueryFragment::new()
            .param('u', self.user.as_deref().unwrap_or(acting_user))
            .param('c', self.count)
            .param('o', self.offset)
    }
}

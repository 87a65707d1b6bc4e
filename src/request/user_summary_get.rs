use super::request_common::{ApiRequestType, QueryFragment};
use crate::endpoint::ApiPage;

/// Summary of a user plus their most recently played games.
#[derive(Debug, Default)]
pub struct UserSummaryRequest {
    pub user: Option<String>,
    pub num_recent_games: u32,
}

impl ApiRequestType for UserSummaryRequest {
    type Response = serde_json::Value;

    fn page(&self) -> ApiPage {
        ApiPage::UserSummary
    }

    fn query_fragment(&self, acting_user: &str) -> QueryFragment {
        // The trailing a=5 is part of the wire contract for this page.
        QueryFragment::new()
            .param('u', self.user.as_deref().unwrap_or(acting_user))
            .param('g', self.num_recent_games)
            .param('a', 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_carries_fixed_achievement_count() {
        let req = UserSummaryRequest { user: Some(String::from("Scott")), num_recent_games: 3 };
        assert_eq!(req.query_fragment("U").to_string(), "&u=Scott&g=3&a=5");
    }
}

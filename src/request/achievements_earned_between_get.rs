use chrono::{DateTime, Utc};

use super::request_common::{ApiRequestType, QueryFragment};
use crate::endpoint::ApiPage;

/// Timestamp shape the service expects for the f/t date bounds.
const BOUND_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Achievements a user earned inside a date range. Whether the range is
/// ordered sensibly is the caller's responsibility; the service answers
/// an empty set for a reversed one.
#[derive(Debug)]
pub struct AchievementsEarnedBetweenRequest {
    pub user: Option<String>,
    pub date_start: DateTime<Utc>,
    pub date_end: DateTime<Utc>,
}

impl AchievementsEarnedBetweenRequest {
    pub fn new(date_start: DateTime<Utc>, date_end: DateTime<Utc>) -> AchievementsEarnedBetweenRequest {
        AchievementsEarnedBetweenRequest { user: None, date_start, date_end }
    }
}

impl ApiRequestType for AchievementsEarnedBetweenRequest {
    type Response = serde_json::Value;

    fn page(&self) -> ApiPage {
        ApiPage::AchievementsEarnedBetween
    }

    fn query_fragment(&self, acting_user: &str) -> QueryFragment {
        QueryFragment::new()
            .param('u', self.user.as_deref().unwrap_or(acting_user))
            .param('f', self.date_start.format(BOUND_FORMAT))
            .param('t', self.date_end.format(BOUND_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn bounds_use_service_timestamp_shape() {
        let req = AchievementsEarnedBetweenRequest::new(
            Utc.with_ymd_and_hms(2013, 12, 31, 20, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2014, 1, 1, 4, 0, 0).unwrap(),
        );
        assert_eq!(
            req.query_fragment("Scott").to_string(),
            "&u=Scott&f=2013-12-31 20:00:00&t=2014-01-01 04:00:00"
        );
    }
}

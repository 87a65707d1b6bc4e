use serde_json::Value;

use crate::request::achievement_count_get::AchievementCountRequest;
use crate::request::achievement_unlocks_get::AchievementUnlocksRequest;
use crate::request::achievements_earned_between_get::AchievementsEarnedBetweenRequest;
use crate::request::console_ids_get::ConsoleIdsRequest;
use crate::request::feed_get::FeedRequest;
use crate::request::game_info_and_user_progress_get::GameInfoAndUserProgressRequest;
use crate::request::game_info_extended_get::GameInfoExtendedRequest;
use crate::request::game_info_get::GameInfoRequest;
use crate::request::game_list_get::GameListRequest;
use crate::request::game_rank_and_score_get::GameRankAndScoreRequest;
use crate::request::game_rating_get::GameRatingRequest;
use crate::request::request_common::ApiRequestType;
use crate::request::top_ten_users_get::TopTenUsersRequest;
use crate::request::user_completed_games2_get::UserCompletedGames2Request;
use crate::request::user_completed_games_get::UserCompletedGamesRequest;
use crate::request::user_game_rank_and_score_get::UserGameRankAndScoreRequest;
use crate::request::user_progress_get::UserProgressRequest;
use crate::request::user_rank_and_score_get::UserRankAndScoreRequest;
use crate::request::user_recently_played_games_get::UserRecentlyPlayedGamesRequest;
use crate::request::user_summary_get::UserSummaryRequest;
use crate::response::response_common::ResponseError;

/// Root URL of the live service.
const BASE_URL: &str = "https://retroachievements.org";

/// Client for the RetroAchievements Web API.
///
/// Wraps a `reqwest::Client` together with the account identity (user name
/// and API key) sent as the mandatory `z`/`y` query parameters on every
/// request. Immutable after construction; a single instance can serve any
/// number of concurrent calls, each of which issues exactly one GET.
#[derive(Debug)]
pub struct RetroClient {
    client: reqwest::Client,
    base_url: String,
    user: String,
    api_key: String,
}

impl RetroClient {
    /// Constructs a client against the live service.
    ///
    /// No request timeout is configured; callers who want one should build
    /// their own transport policy around these calls.
    pub fn new(user: &str, api_key: &str) -> RetroClient {
        Self::with_base_url(BASE_URL, user, api_key)
    }

    /// Same as [`RetroClient::new`] but against an arbitrary host, which is
    /// how the test suite points the client at a local mock server.
    pub fn with_base_url(base_url: &str, user: &str, api_key: &str) -> RetroClient {
        RetroClient {
            client: reqwest::Client::new(),
            base_url: String::from(base_url),
            user: String::from(user),
            api_key: String::from(api_key),
        }
    }

    pub(crate) fn client(&self) -> &reqwest::Client { &self.client }
    pub(crate) fn url(&self) -> &str { self.base_url.as_str() }
    pub(crate) fn user(&self) -> &str { self.user.as_str() }
    pub(crate) fn api_key(&self) -> &str { self.api_key.as_str() }

    pub async fn get_top_ten_users(&self) -> Result<Value, ResponseError> {
        TopTenUsersRequest {}.send_request(self).await
    }

    pub async fn get_console_ids(&self) -> Result<Value, ResponseError> {
        ConsoleIdsRequest {}.send_request(self).await
    }

    pub async fn get_game_list(&self, req: GameListRequest) -> Result<Value, ResponseError> {
        req.send_request(self).await
    }

    pub async fn get_game_info(&self, req: GameInfoRequest) -> Result<Value, ResponseError> {
        req.send_request(self).await
    }

    pub async fn get_game_info_extended(
        &self,
        req: GameInfoExtendedRequest,
    ) -> Result<Value, ResponseError> {
        req.send_request(self).await
    }

    pub async fn get_feed_for(&self, req: FeedRequest) -> Result<Value, ResponseError> {
        req.send_request(self).await
    }

    pub async fn get_user_rank_and_score(
        &self,
        req: UserRankAndScoreRequest,
    ) -> Result<Value, ResponseError> {
        req.send_request(self).await
    }

    pub async fn get_user_recently_played_games(
        &self,
        req: UserRecentlyPlayedGamesRequest,
    ) -> Result<Value, ResponseError> {
        req.send_request(self).await
    }

    pub async fn get_user_summary(&self, req: UserSummaryRequest) -> Result<Value, ResponseError> {
        req.send_request(self).await
    }

    pub async fn get_game_info_and_user_progress(
        &self,
        req: GameInfoAndUserProgressRequest,
    ) -> Result<Value, ResponseError> {
        req.send_request(self).await
    }

    pub async fn get_game_rating(&self, req: GameRatingRequest) -> Result<Value, ResponseError> {
        req.send_request(self).await
    }

    pub async fn get_user_game_rank_and_score(
        &self,
        req: UserGameRankAndScoreRequest,
    ) -> Result<Value, ResponseError> {
        req.send_request(self).await
    }

    pub async fn get_game_rank_and_score(
        &self,
        req: GameRankAndScoreRequest,
    ) -> Result<Value, ResponseError> {
        req.send_request(self).await
    }

    pub async fn get_achievement_count(
        &self,
        req: AchievementCountRequest,
    ) -> Result<Value, ResponseError> {
        req.send_request(self).await
    }

    pub async fn get_achievement_unlocks(
        &self,
        req: AchievementUnlocksRequest,
    ) -> Result<Value, ResponseError> {
        req.send_request(self).await
    }

    pub async fn get_achievements_earned_between(
        &self,
        req: AchievementsEarnedBetweenRequest,
    ) -> Result<Value, ResponseError> {
        req.send_request(self).await
    }

    pub async fn get_user_completed_games(
        &self,
        req: UserCompletedGamesRequest,
    ) -> Result<Value, ResponseError> {
        req.send_request(self).await
    }

    pub async fn get_user_completed_games2(
        &self,
        req: UserCompletedGames2Request,
    ) -> Result<Value, ResponseError> {
        req.send_request(self).await
    }

    pub async fn get_user_progress(&self, req: UserProgressRequest) -> Result<Value, ResponseError> {
        req.send_request(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> RetroClient {
        RetroClient::with_base_url("http://localhost", "U", "K")
    }

    #[test]
    fn nullary_operations_carry_only_identity_params() {
        let client = client();
        assert_eq!(
            TopTenUsersRequest {}.request_url(&client),
            "http://localhost/API/API_GetTopTenUsers.php?z=U&y=K"
        );
        assert_eq!(
            ConsoleIdsRequest {}.request_url(&client),
            "http://localhost/API/API_GetConsoleIDs.php?z=U&y=K"
        );
    }

    #[test]
    fn defaults_are_substituted() {
        let client = client();
        assert_eq!(
            GameListRequest::new(3).request_url(&client),
            "http://localhost/API/API_GetGameList.php?z=U&y=K&i=3&f=false"
        );
        assert_eq!(
            FeedRequest::default().request_url(&client),
            "http://localhost/API/API_GetFeed.php?z=U&y=K&u=U&c=1&o=0"
        );
        assert_eq!(
            UserRecentlyPlayedGamesRequest::default().request_url(&client),
            "http://localhost/API/API_GetUserRecentlyPlayedGames.php?z=U&y=K&u=U&c=1&o=0"
        );
        assert_eq!(
            UserSummaryRequest::default().request_url(&client),
            "http://localhost/API/API_GetUserSummary.php?z=U&y=K&u=U&g=0&a=5"
        );
        assert_eq!(
            UserRankAndScoreRequest::default().request_url(&client),
            "http://localhost/API/API_GetUserRankAndScore.php?z=U&y=K&u=U"
        );
        assert_eq!(
            UserCompletedGamesRequest::default().request_url(&client),
            "http://localhost/API/API_GetUserCompletedGames.php?z=U&y=K&u=U"
        );
        assert_eq!(
            UserCompletedGames2Request::default().request_url(&client),
            "http://localhost/API/API_GetCompletedGames.php?z=U&y=K&u=U"
        );
    }

    #[test]
    fn explicit_values_land_in_documented_positions() {
        let client = client();
        assert_eq!(
            GameInfoRequest { game_id: 504 }.request_url(&client),
            "http://localhost/API/API_GetGame.php?z=U&y=K&i=504"
        );
        assert_eq!(
            GameInfoExtendedRequest { game_id: 504 }.request_url(&client),
            "http://localhost/API/API_GetGameExtended.php?z=U&y=K&i=504"
        );
        assert_eq!(
            GameRatingRequest { game_id: 3 }.request_url(&client),
            "http://localhost/API/API_GetGameRating.php?z=U&y=K&i=3"
        );
        assert_eq!(
            GameRankAndScoreRequest { game_id: 3 }.request_url(&client),
            "http://localhost/API/API_GetGameRankAndScore.php?z=U&y=K&g=3"
        );
        assert_eq!(
            AchievementCountRequest { game_id: 3 }.request_url(&client),
            "http://localhost/API/API_GetAchievementCount.php?z=U&y=K&i=3"
        );
        assert_eq!(
            AchievementUnlocksRequest { achievement_id: 385 }.request_url(&client),
            "http://localhost/API/API_GetAchievementUnlocks.php?z=U&y=K&a=385"
        );
        let feed = FeedRequest { user: Some(String::from("Scott")), count: 8, offset: 2 };
        assert_eq!(
            feed.request_url(&client),
            "http://localhost/API/API_GetFeed.php?z=U&y=K&u=Scott&c=8&o=2"
        );
        let progress = GameInfoAndUserProgressRequest {
            user: Some(String::from("Scott")),
            game_id: 3,
        };
        assert_eq!(
            progress.request_url(&client),
            "http://localhost/API/API_GetGameInfoAndUserProgress.php?z=U&y=K&u=Scott&g=3"
        );
        assert_eq!(
            UserGameRankAndScoreRequest::new(3).request_url(&client),
            "http://localhost/API/API_GetUserGameRankAndScore.php?z=U&y=K&u=U&g=3"
        );
        let ids = UserProgressRequest {
            user: None,
            game_ids: String::from("2, 3, 75"),
        };
        assert_eq!(
            ids.request_url(&client),
            "http://localhost/API/API_GetUserProgress.php?z=U&y=K&u=U&i=2,3,75"
        );
    }

    #[test]
    fn user_override_does_not_stick() {
        let client = client();
        let with_override = UserSummaryRequest {
            user: Some(String::from("Scott")),
            num_recent_games: 3,
        };
        assert_eq!(
            with_override.request_url(&client),
            "http://localhost/API/API_GetUserSummary.php?z=U&y=K&u=Scott&g=3&a=5"
        );
        // A later call without the override reverts to the account user.
        assert_eq!(
            UserSummaryRequest::default().request_url(&client),
            "http://localhost/API/API_GetUserSummary.php?z=U&y=K&u=U&g=0&a=5"
        );
    }

    #[tokio::test]
    async fn user_summary_hits_documented_page_and_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/API/API_GetUserSummary.php"))
            .and(query_param("z", "U"))
            .and(query_param("y", "K"))
            .and(query_param("u", "Scott"))
            .and(query_param("g", "3"))
            .and(query_param("a", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"RichPresenceMsg": "idle"})))
            .mount(&server)
            .await;

        let client = RetroClient::with_base_url(&server.uri(), "U", "K");
        let req = UserSummaryRequest { user: Some(String::from("Scott")), num_recent_games: 3 };
        let body = client.get_user_summary(req).await.unwrap();
        assert_eq!(body, json!({"RichPresenceMsg": "idle"}));
    }

    #[tokio::test]
    async fn response_body_passes_through_unmodified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/API/API_GetTopTenUsers.php"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;

        let client = RetroClient::with_base_url(&server.uri(), "U", "K");
        let body = client.get_top_ten_users().await.unwrap();
        assert_eq!(body, json!({"ok": true}));
    }

    #[tokio::test]
    async fn non_success_status_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = RetroClient::with_base_url(&server.uri(), "U", "K");
        let err = client.get_console_ids().await.unwrap_err();
        assert!(matches!(err, ResponseError::HttpStatus(status) if status.as_u16() == 500));
    }

    #[tokio::test]
    async fn non_json_body_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let client = RetroClient::with_base_url(&server.uri(), "U", "K");
        let err = client.get_top_ten_users().await.unwrap_err();
        assert!(matches!(err, ResponseError::MalformedBody(_)), "{err}");
    }

    #[tokio::test]
    async fn refused_connection_rejects_without_retry() {
        // Port 9 (discard) is not listening; reqwest reports a connect error.
        let client = RetroClient::with_base_url("http://127.0.0.1:9", "U", "K");
        let err = client.get_console_ids().await.unwrap_err();
        assert!(matches!(err, ResponseError::NoConnection(_)), "{err}");
    }
}

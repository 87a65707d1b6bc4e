use strum_macros::EnumIter;

/// Static table mapping each logical operation to the literal `API_*.php`
/// page serving it on retroachievements.org.
///
/// A typo here silently produces a broken URL; there is no validation step
/// beyond the tests below, so treat every edit as wire-contract surgery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ApiPage {
    TopTenUsers,
    ConsoleIds,
    GameList,
    GameInfo,
    GameInfoExtended,
    Feed,
    UserRankAndScore,
    UserRecentlyPlayedGames,
    UserSummary,
    GameInfoAndUserProgress,
    GameRating,
    UserGameRankAndScore,
    GameRankAndScore,
    AchievementCount,
    AchievementUnlocks,
    AchievementsEarnedBetween,
    UserCompletedGames,
    UserCompletedGames2,
    UserProgress,
}

impl ApiPage {
    /// The resource segment appended after the fixed `/API/` prefix.
    pub fn path(self) -> &'static str {
        match self {
            ApiPage::TopTenUsers => "API_GetTopTenUsers.php",
            ApiPage::ConsoleIds => "API_GetConsoleIDs.php",
            ApiPage::GameList => "API_GetGameList.php",
            ApiPage::GameInfo => "API_GetGame.php",
            ApiPage::GameInfoExtended => "API_GetGameExtended.php",
            ApiPage::Feed => "API_GetFeed.php",
            ApiPage::UserRankAndScore => "API_GetUserRankAndScore.php",
            ApiPage::UserRecentlyPlayedGames => "API_GetUserRecentlyPlayedGames.php",
            ApiPage::UserSummary => "API_GetUserSummary.php",
            ApiPage::GameInfoAndUserProgress => "API_GetGameInfoAndUserProgress.php",
            ApiPage::GameRating => "API_GetGameRating.php",
            ApiPage::UserGameRankAndScore => "API_GetUserGameRankAndScore.php",
            ApiPage::GameRankAndScore => "API_GetGameRankAndScore.php",
            ApiPage::AchievementCount => "API_GetAchievementCount.php",
            ApiPage::AchievementUnlocks => "API_GetAchievementUnlocks.php",
            ApiPage::AchievementsEarnedBetween => "API_GetAchievementsEarnedBetween.php",
            ApiPage::UserCompletedGames => "API_GetUserCompletedGames.php",
            // Overlapping result shape with UserCompletedGames; the service
            // keeps both pages alive and so do we.
            ApiPage::UserCompletedGames2 => "API_GetCompletedGames.php",
            ApiPage::UserProgress => "API_GetUserProgress.php",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiPage;
    use strum::IntoEnumIterator;

    #[test]
    fn every_page_maps_to_a_php_script() {
        for page in ApiPage::iter() {
            let path = page.path();
            assert!(!path.is_empty(), "{page:?} has an empty path");
            assert!(path.starts_with("API_Get"), "{page:?} -> {path}");
            assert!(path.ends_with(".php"), "{page:?} -> {path}");
        }
    }

    #[test]
    fn paths_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for page in ApiPage::iter() {
            assert!(seen.insert(page.path()), "{page:?} reuses {}", page.path());
        }
    }
}

pub mod achievement_count_get;
pub mod achievement_unlocks_get;
pub mod achievements_earned_between_get;
pub mod console_ids_get;
pub mod feed_get;
pub mod game_info_and_user_progress_get;
pub mod game_info_extended_get;
pub mod game_info_get;
pub mod game_list_get;
pub mod game_rank_and_score_get;
pub mod game_rating_get;
pub mod request_common;
pub mod top_ten_users_get;
pub mod user_completed_games2_get;
pub mod user_completed_games_get;
pub mod user_game_rank_and_score_get;
pub mod user_progress_get;
pub mod user_rank_and_score_get;
pub mod user_recently_played_games_get;
pub mod user_summary_get;

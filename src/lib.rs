//! Asynchronous client for the RetroAchievements.org Web API.
//!
//! Every public method on [`RetroClient`] corresponds to one remote API page
//! and performs exactly one HTTP GET. Responses are returned as opaque
//! [`serde_json::Value`] bodies; the remote service owns their shape.
//!
//! ```no_run
//! use retroachievements_api::RetroClient;
//! use retroachievements_api::request::user_summary_get::UserSummaryRequest;
//!
//! # async fn run() -> Result<(), retroachievements_api::ResponseError> {
//! let client = RetroClient::new("Scott", "api_key_123456");
//! let summary = client
//!     .get_user_summary(UserSummaryRequest { num_recent_games: 3, ..Default::default() })
//!     .await?;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

pub use chrono;
pub use reqwest;

pub mod endpoint;
pub mod http_client;
mod logger;
pub mod request;
pub mod response;

pub use http_client::RetroClient;
pub use response::response_common::ResponseError;

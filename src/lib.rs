//! Microsoft Graph helpers for the signed-in user's profile and photo.
//!
//! Both fetchers take the caller's access token verbatim and go through a
//! [`GraphApi`] implementation, normally [`HttpGraphClient`].
//!
//! ```no_run
//! # async fn demo(token: &str) -> graph_profile::GraphResult<()> {
//! let client = graph_profile::HttpGraphClient::from_env();
//! let profile = graph_profile::fetch_user_profile(&client, token).await?;
//! let photo = graph_profile::fetch_user_photo(&client, token).await?;
//! println!("{} ({} base64 chars)", profile["displayName"], photo.len());
//! # Ok(())
//! # }
//! ```
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod photo;
pub mod profile;

#[cfg(test)]
mod test_support;

pub use client::{GraphApi, HttpGraphClient};
pub use config::GraphConfig;
pub use error::{GraphError, GraphResult};
pub use photo::fetch_user_photo;
pub use profile::{fetch_user_profile, UserProfile};

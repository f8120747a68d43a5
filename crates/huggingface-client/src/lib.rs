//! Rust client for the Hugging Face Hub model API
//!
//! Provides type-safe bindings to the Hub's public model endpoint, used to
//! enrich locally-discovered models with repository metadata.
//!
//! # Example
//!
//! ```no_run
//! use huggingface_client::HfHubClient;
//!
//! # async fn example() -> Result<(), huggingface_client::HfHubError> {
//! let client = HfHubClient::new();
//!
//! if let Some(info) = client.get_model("stabilityai/stable-diffusion-xl-base-1.0").await? {
//!     println!("{} downloads", info.downloads.unwrap_or(0));
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod types;

pub use client::HfHubClient;
pub use error::{HfHubError, Result};
pub use types::{ModelInfo, Sibling};

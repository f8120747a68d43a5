//! Rust client for the Civitai model registry API
//!
//! Provides type-safe bindings to the Civitai public REST API, which hosts
//! community-shared Stable Diffusion checkpoints, LoRAs, and related assets.
//!
//! # Example
//!
//! ```no_run
//! use civitai_client::CivitaiClient;
//!
//! # async fn example() -> Result<(), civitai_client::CivitaiError> {
//! let client = CivitaiClient::new();
//!
//! // Look up a model version by the SHA-256 of a local file
//! if let Some(version) = client.get_model_version_by_hash("abc123...").await? {
//!     println!("{}", version.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - `GET /models/{id}` - Get model details with all versions
//! - `GET /model-versions/by-hash/{hash}` - Resolve a file hash to a version
//! - `GET /models?query=...` - Search models by name

mod client;
mod error;
mod types;

pub use client::CivitaiClient;
pub use error::{CivitaiError, Result};
pub use types::{
    ModelCreator, ModelDetail, ModelFile, ModelImage, ModelSearchResponse, ModelSummary,
    ModelVersion,
};

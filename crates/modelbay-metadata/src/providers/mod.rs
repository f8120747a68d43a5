//! Concrete providers backed by external registries

mod civitai;
mod huggingface;

pub use civitai::CivitaiProvider;
pub use huggingface::HuggingFaceProvider;

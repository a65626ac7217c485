//! Uploading meshes to a GPU device, plus an in-memory device for
//! headless runs.

mod recording;
mod types;

pub use recording::*;
pub use types::*;

pub mod format;
pub mod sidecar;

pub use format::{OutputFormat, format_pose, to_json_string};
pub use sidecar::{sidecar_path, write_sidecar};

//! Shared helpers for the demo binaries.

use std::path::{Path, PathBuf};

pub mod cube;

/// Resolves a path relative to this crate's directory, so the demos find
/// their shader and image assets regardless of the working directory.
pub fn asset_path(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_path_is_anchored_to_the_crate() {
        let path = asset_path("shaders/triangle.vert");
        assert!(path.is_absolute());
        assert!(path.ends_with("shaders/triangle.vert"));
    }
}

//! Role decoration assets (`{dir}/{role}.svg`).
//!
//! Every failure here degrades to "no overlay"; nothing is surfaced to callers.

use std::path::{Path, PathBuf};

use badge_overlay_core::extract_inner_fragment;
use badge_overlay_core::params::sanitize_role;

#[derive(Debug, Clone)]
pub struct AssetStore {
    dir: PathBuf,
}

impl AssetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the inner markup of the decoration for `role`.
    ///
    /// Returns `None` when the role is not a safe file stem, the file is
    /// missing or unreadable, or the extracted fragment is empty.
    pub async fn load(&self, role: &str) -> Option<String> {
        let role = sanitize_role(role)?;
        let path = self.dir.join(format!("{role}.svg"));

        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "role asset unavailable");
                return None;
            }
        };

        let inner = extract_inner_fragment(&text);
        if inner.is_empty() {
            None
        } else {
            Some(inner.to_owned())
        }
    }
}

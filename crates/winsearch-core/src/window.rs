//! Window snapshot records held for the length of one search session.

use crate::host::WindowInfo;
use crate::search::normalize;
use serde::{Deserialize, Serialize};

/// App name used when the host cannot resolve a window's owner.
pub const UNKNOWN_APP_NAME: &str = "Unknown";

/// Result identifier, unique within one session.
///
/// Built from the enumeration position and the host window id, so it is only
/// meaningful as a key into the session it was created in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(String);

impl WindowId {
    #[must_use]
    pub fn new(position: usize, stable_id: u64) -> Self {
        Self(format!("{position}-{stable_id}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for WindowId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for WindowId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A searchable window
#[derive(Debug, Clone)]
pub struct WindowRecord<H> {
    pub id: WindowId,

    pub title: String,

    /// Owning application, or [`UNKNOWN_APP_NAME`]
    pub app_name: String,

    pub app_icon: Option<String>,

    /// Zero-based workspace index at snapshot time
    pub workspace_index: u32,

    /// Normalized `"{workspace}: {title} {app}"`, matched against queries
    pub search_key: String,

    pub handle: H,
}

impl<H> WindowRecord<H> {
    /// Snapshot a host window at enumeration `position`.
    #[must_use]
    pub fn from_info(position: usize, info: WindowInfo<H>) -> Self {
        let app_name = info
            .app_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_APP_NAME.to_string());

        let search_key = normalize(&format!(
            "{}: {} {}",
            info.workspace_index.saturating_add(1),
            info.title,
            app_name
        ));

        Self {
            id: WindowId::new(position, info.stable_id),
            title: info.title,
            app_name,
            app_icon: info.app_icon,
            workspace_index: info.workspace_index,
            search_key,
            handle: info.handle,
        }
    }

    /// Title as shown in results: `"{workspace}: {title}"` with a 1-based
    /// workspace number.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}: {}", self.workspace_index.saturating_add(1), self.title)
    }
}

//! Host boundary for the window search provider.
//!
//! The engine never talks to a compositor directly. Everything it needs from
//! the desktop (window enumeration, workspace moves, activation, closing) goes
//! through these two traits so a real shell integration and the test fakes
//! plug in the same way.

use std::fmt::Debug;

/// One window as reported by the host, before it becomes a [`WindowRecord`].
///
/// [`WindowRecord`]: crate::window::WindowRecord
#[derive(Debug, Clone)]
pub struct WindowInfo<H> {
    /// Host-assigned window identifier, stable while the window lives
    pub stable_id: u64,

    pub title: String,

    /// Display name of the owning application, if the host could resolve one
    pub app_name: Option<String>,

    /// Icon name of the owning application
    pub app_icon: Option<String>,

    /// Zero-based workspace index
    pub workspace_index: u32,

    /// Opaque handle passed back to [`WorkspaceHost`] primitives
    pub handle: H,
}

/// Enumerates the windows the provider searches over.
pub trait WindowSource {
    type Handle: Clone + Debug;

    /// List windows in the host's preferred order (most recently used first
    /// for a tab list). Called once per initial search.
    fn list_windows(&self) -> Vec<WindowInfo<Self::Handle>>;
}

/// Window and workspace primitives the action dispatcher drives.
pub trait WorkspaceHost: WindowSource {
    /// Bring a window to the foreground, switching workspace if needed.
    fn activate(&self, handle: &Self::Handle);

    /// Ask a window to close. `timestamp` is in host time units.
    fn close(&self, handle: &Self::Handle, timestamp: u32);

    /// Reassign a window to the zero-based workspace `index`.
    fn move_to_workspace(&self, handle: &Self::Handle, index: u32);

    fn workspace_count(&self) -> u32;

    /// Zero-based index of the workspace currently shown.
    fn active_workspace_index(&self) -> u32;

    /// Current host event time, the base for ordered close requests.
    fn current_time(&self) -> u32;

    /// Post a desktop notification. Hosts without a notification service can
    /// keep the default.
    fn notify(&self, summary: &str, body: &str) {
        let _ = (summary, body);
    }
}

//! Desktop snapshot host.
//!
//! Reads a JSON description of open windows and workspaces and stands in for
//! the window manager. Actions are recorded instead of performed, so a query
//! and its activation can be replayed from the command line.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::path::Path;
use winsearch_core::{WindowInfo, WindowSource, WorkspaceHost};

/// One window in a snapshot file
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotWindow {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub app: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    /// Zero-based workspace index
    #[serde(default)]
    pub workspace: u32,
}

/// Snapshot file contents
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub active_workspace: u32,
    #[serde(default = "default_workspace_count")]
    pub workspace_count: u32,
    #[serde(default)]
    pub time: u32,
    #[serde(default)]
    pub windows: Vec<SnapshotWindow>,
}

fn default_workspace_count() -> u32 {
    1
}

impl Snapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid snapshot {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(content)?;
        if snapshot.active_workspace >= snapshot.workspace_count {
            anyhow::bail!(
                "activeWorkspace {} is outside {} workspaces",
                snapshot.active_workspace,
                snapshot.workspace_count
            );
        }
        Ok(snapshot)
    }
}

/// Side effect requested by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum HostAction {
    Activate { window: u64 },
    Close { window: u64, timestamp: u32 },
    Move { window: u64, workspace: u32 },
    Notify { summary: String, body: String },
}

/// [`WorkspaceHost`] backed by a [`Snapshot`]
#[derive(Debug)]
pub struct SnapshotHost {
    snapshot: Snapshot,
    actions: RefCell<Vec<HostAction>>,
}

impl SnapshotHost {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            actions: RefCell::new(Vec::new()),
        }
    }

    /// Actions recorded so far, in order
    pub fn actions(&self) -> Vec<HostAction> {
        self.actions.borrow().clone()
    }

    fn record(&self, action: HostAction) {
        tracing::debug!("Host action: {:?}", action);
        self.actions.borrow_mut().push(action);
    }
}

impl WindowSource for SnapshotHost {
    type Handle = u64;

    fn list_windows(&self) -> Vec<WindowInfo<u64>> {
        self.snapshot
            .windows
            .iter()
            .map(|w| WindowInfo {
                stable_id: w.id,
                title: w.title.clone(),
                app_name: w.app.clone(),
                app_icon: w.icon.clone(),
                workspace_index: w.workspace,
                handle: w.id,
            })
            .collect()
    }
}

impl WorkspaceHost for SnapshotHost {
    fn activate(&self, handle: &u64) {
        self.record(HostAction::Activate { window: *handle });
    }

    fn close(&self, handle: &u64, timestamp: u32) {
        self.record(HostAction::Close {
            window: *handle,
            timestamp,
        });
    }

    fn move_to_workspace(&self, handle: &u64, index: u32) {
        self.record(HostAction::Move {
            window: *handle,
            workspace: index,
        });
    }

    fn workspace_count(&self) -> u32 {
        self.snapshot.workspace_count
    }

    fn active_workspace_index(&self) -> u32 {
        self.snapshot.active_workspace
    }

    fn current_time(&self) -> u32 {
        self.snapshot.time
    }

    fn notify(&self, summary: &str, body: &str) {
        self.record(HostAction::Notify {
            summary: summary.to_string(),
            body: body.to_string(),
        });
    }
}

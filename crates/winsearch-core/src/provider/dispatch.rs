use super::session::Session;
use crate::host::WorkspaceHost;
use crate::query::WindowCommand;
use crate::window::WindowRecord;
use serde::Serialize;
use tracing::{debug, info};

const NOTIFY_SUMMARY: &str = "Window Search Provider";

/// Keyboard modifiers held when a result was activated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivationModifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl ActivationModifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Self = Self {
        shift: true,
        ctrl: false,
    };
    pub const CTRL_SHIFT: Self = Self {
        shift: true,
        ctrl: true,
    };
}

/// What an activation ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum DispatchOutcome {
    /// Selected window brought to the foreground
    Activated,
    Closed { count: usize },
    /// Windows moved to the 1-based `workspace`
    Moved { count: usize, workspace: u32 },
    /// Move target outside `1..=workspace_count`; nothing happened
    Aborted { target: u32 },
    /// Id not part of the current session
    UnknownResult,
}

/// Command to run for an activation.
///
/// A command typed into the query wins. Without one, Shift moves the selected
/// window and Ctrl+Shift moves every displayed window to the active workspace,
/// when `shift_moves_enabled`.
#[must_use]
pub fn resolve_command(
    pending: WindowCommand,
    modifiers: ActivationModifiers,
    shift_moves_enabled: bool,
    active_workspace: u32,
) -> WindowCommand {
    if !pending.is_none() || !shift_moves_enabled || !modifiers.shift {
        return pending;
    }

    let target = active_workspace.saturating_add(1);
    if modifiers.ctrl {
        WindowCommand::MoveAllToWorkspace { target }
    } else {
        WindowCommand::MoveToWorkspace { target }
    }
}

/// Run `command` against the selected window and the session's displayed
/// results.
pub(crate) fn execute<H: WorkspaceHost>(
    host: &H,
    session: &Session<H::Handle>,
    selected: &WindowRecord<H::Handle>,
    command: WindowCommand,
) -> DispatchOutcome {
    match command {
        WindowCommand::None => {
            debug!("Activating window '{}'", selected.title);
            host.activate(&selected.handle);
            DispatchOutcome::Activated
        }
        WindowCommand::Close => close_windows(host, std::iter::once(selected)),
        WindowCommand::CloseAll => close_windows(host, session.displayed()),
        WindowCommand::MoveToWorkspace { target } => {
            move_windows(host, selected, std::iter::once(selected), target)
        }
        WindowCommand::MoveAllToWorkspace { target } => {
            move_windows(host, selected, session.displayed(), target)
        }
    }
}

/// Close request timestamps step by one so the host keeps every request.
fn close_windows<'a, H, I>(host: &H, windows: I) -> DispatchOutcome
where
    H: WorkspaceHost,
    H::Handle: 'a,
    I: Iterator<Item = &'a WindowRecord<H::Handle>>,
{
    let mut timestamp = host.current_time();
    let mut count = 0usize;

    for record in windows {
        debug!("Closing window '{}' at {}", record.title, timestamp);
        host.close(&record.handle, timestamp);
        timestamp = timestamp.wrapping_add(1);
        count += 1;
    }

    info!("Closed {} windows", count);
    host.notify(NOTIFY_SUMMARY, &format!("Closed {count} windows."));
    DispatchOutcome::Closed { count }
}

fn move_windows<'a, H, I>(
    host: &H,
    selected: &WindowRecord<H::Handle>,
    windows: I,
    target: u32,
) -> DispatchOutcome
where
    H: WorkspaceHost,
    H::Handle: 'a,
    I: Iterator<Item = &'a WindowRecord<H::Handle>>,
{
    let workspace_count = host.workspace_count();
    if target == 0 || target > workspace_count {
        debug!(
            "Ignoring move to workspace {} ({} workspaces)",
            target, workspace_count
        );
        return DispatchOutcome::Aborted { target };
    }

    let mut count = 0usize;
    for record in windows {
        host.move_to_workspace(&record.handle, target - 1);
        count += 1;
    }

    info!("Moved {} windows to workspace {}", count, target);
    host.activate(&selected.handle);
    DispatchOutcome::Moved {
        count,
        workspace: target,
    }
}

use crate::query::WindowCommand;
use crate::window::{WindowId, WindowRecord};
use std::collections::HashMap;

/// Window snapshot and parsed command for one search interaction.
#[derive(Debug)]
pub(crate) struct Session<H> {
    /// Records in enumeration order
    windows: Vec<WindowRecord<H>>,
    by_id: HashMap<WindowId, usize>,
    pub(crate) pending: WindowCommand,
    pub(crate) last_result_order: Vec<WindowId>,
}

impl<H> Default for Session<H> {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            by_id: HashMap::new(),
            pending: WindowCommand::None,
            last_result_order: Vec::new(),
        }
    }
}

impl<H> Session<H> {
    /// Start over with a fresh snapshot. The previous command and result
    /// order belong to the old snapshot and are dropped with it.
    pub(crate) fn reset(&mut self, windows: Vec<WindowRecord<H>>) {
        self.by_id = windows
            .iter()
            .enumerate()
            .map(|(i, record)| (record.id.clone(), i))
            .collect();
        self.windows = windows;
        self.pending = WindowCommand::None;
        self.last_result_order.clear();
    }

    pub(crate) fn windows(&self) -> &[WindowRecord<H>] {
        &self.windows
    }

    pub(crate) fn get(&self, id: &WindowId) -> Option<&WindowRecord<H>> {
        self.by_id.get(id).map(|&i| &self.windows[i])
    }

    /// Records currently displayed, in result order.
    pub(crate) fn displayed(&self) -> impl Iterator<Item = &WindowRecord<H>> {
        self.last_result_order.iter().filter_map(|id| self.get(id))
    }
}

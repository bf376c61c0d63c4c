//! Window search provider.
//!
//! Implements the host's search-provider contract over a snapshot of open
//! windows: an initial search enumerates windows and ranks them, subsearches
//! re-rank the same snapshot on every keystroke, and activation either focuses
//! the selected window or runs the command typed at the end of the query.

mod dispatch;
mod meta;
mod session;

pub use dispatch::{ActivationModifiers, DispatchOutcome, resolve_command};
pub use meta::{MISSING_ICON, ProviderInfo, ResultIcon, ResultMeta};

use crate::config::WindowSearchConfig;
use crate::host::WorkspaceHost;
use crate::query::{ParsedQuery, WindowCommand};
use crate::search::{MatchMode, rank_ids};
use crate::window::{WindowId, WindowRecord};
use session::Session;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

/// Search provider listing open windows
pub struct WindowSearchProvider<H: WorkspaceHost> {
    host: H,
    config: WindowSearchConfig,
    session: Session<H::Handle>,
}

impl<H: WorkspaceHost> WindowSearchProvider<H> {
    #[must_use]
    pub fn new(host: H, config: WindowSearchConfig) -> Self {
        Self {
            host,
            config,
            session: Session::default(),
        }
    }

    #[must_use]
    pub fn info(&self) -> ProviderInfo {
        ProviderInfo::default()
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn config(&self) -> &WindowSearchConfig {
        &self.config
    }

    /// Apply changed settings. They take effect with the next query.
    pub fn set_config(&mut self, config: WindowSearchConfig) {
        debug!("Window search config updated: {:?}", config);
        self.config = config;
    }

    /// Command parsed from the latest query
    #[must_use]
    pub fn pending_command(&self) -> WindowCommand {
        self.session.pending
    }

    /// Ids returned by the latest ranking pass
    #[must_use]
    pub fn last_result_order(&self) -> &[WindowId] {
        &self.session.last_result_order
    }

    #[must_use]
    pub fn record(&self, id: &WindowId) -> Option<&WindowRecord<H::Handle>> {
        self.session.get(id)
    }

    /// Start a new session: enumerate windows and rank them for `terms`.
    ///
    /// `cancellable` is accepted for the host contract; ranking finishes
    /// synchronously and never consults it.
    pub fn initial_result_set<S: AsRef<str>>(
        &mut self,
        terms: &[S],
        cancellable: Option<&CancellationToken>,
    ) -> Vec<WindowId> {
        let _ = cancellable;

        let windows: Vec<_> = self
            .host
            .list_windows()
            .into_iter()
            .enumerate()
            .map(|(position, info)| WindowRecord::from_info(position, info))
            .collect();
        debug!("Window search snapshot: {} windows", windows.len());
        self.session.reset(windows);

        self.result_set(terms)
    }

    /// Re-rank the current snapshot for refined `terms`.
    ///
    /// Windows are not enumerated again; `previous` results are ignored so
    /// fast typing never shows results for an older query.
    pub fn subsearch_result_set<S: AsRef<str>>(
        &mut self,
        previous: &[WindowId],
        terms: &[S],
        cancellable: Option<&CancellationToken>,
    ) -> Vec<WindowId> {
        let _ = cancellable;
        trace!("Subsearch over {} previous results", previous.len());
        self.result_set(terms)
    }

    /// Display data for `ids`. Ids from another session are skipped.
    #[must_use]
    pub fn result_metas(&self, ids: &[WindowId]) -> Vec<ResultMeta> {
        ids.iter()
            .filter_map(|id| {
                let record = self.session.get(id);
                if record.is_none() {
                    warn!("No window for result id {}", id);
                }
                record.map(ResultMeta::from_record)
            })
            .collect()
    }

    /// All matches are shown; `max_results` is not applied.
    #[must_use]
    pub fn filter_results(&self, ids: Vec<WindowId>, max_results: usize) -> Vec<WindowId> {
        trace!("Not truncating {} results to {}", ids.len(), max_results);
        ids
    }

    /// Run the provider's own search UI. Window search has none.
    pub fn launch_search<S: AsRef<str>>(&self, terms: &[S]) {
        let _ = terms;
    }

    /// Activate the selected result, honoring the query command or the held
    /// modifiers.
    pub fn activate_result<S: AsRef<str>>(
        &mut self,
        id: &WindowId,
        terms: &[S],
        modifiers: ActivationModifiers,
    ) -> DispatchOutcome {
        let _ = terms;

        let Some(selected) = self.session.get(id) else {
            warn!("Activated unknown result id {}", id);
            return DispatchOutcome::UnknownResult;
        };

        let command = resolve_command(
            self.session.pending,
            modifiers,
            self.config.shift_moves_enabled,
            self.host.active_workspace_index(),
        );
        debug!("Activating result {} with {:?}", id, command);

        dispatch::execute(&self.host, &self.session, selected, command)
    }

    fn result_set<S: AsRef<str>>(&mut self, terms: &[S]) -> Vec<WindowId> {
        let query = ParsedQuery::parse(terms, &self.config.prefix, self.config.commands_enabled);
        if self.config.commands_enabled {
            self.session.pending = query.command;
        }

        let mode = if self.config.fuzzy_enabled {
            MatchMode::Fuzzy
        } else {
            MatchMode::Strict
        };

        let ids = rank_ids(
            &query,
            self.session.windows(),
            self.host.active_workspace_index(),
            mode,
        );
        self.session.last_result_order.clone_from(&ids);
        ids
    }
}

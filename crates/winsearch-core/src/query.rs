//! Query preprocessing: provider prefix and trailing window commands.
//!
//! Commands are typed as the last word of the query:
//!
//! | token        | effect                                             |
//! |--------------|----------------------------------------------------|
//! | `/x!`        | close the selected window                          |
//! | `/xa!`       | close every window in the result list              |
//! | `/m<N>`      | move the selected window to workspace N            |
//! | `/ma<N>`     | move every window in the result list to workspace N |
//!
//! Any other last word starting with `/` is dropped from the search terms.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Leading character of every command token.
pub const COMMAND_ESCAPE: char = '/';

/// Term substituted when the prefix was the whole query.
pub const SENTINEL_TERM: &str = " ";

static CLOSE_SELECTED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/x!$").unwrap());
static CLOSE_ALL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/xa!$").unwrap());
static MOVE_TO_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/m([0-9]+)$").unwrap());
static MOVE_ALL_TO_WS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^/ma([0-9]+)$").unwrap());

/// Bulk window action requested by a trailing command token.
///
/// Move targets are 1-based, as typed. They are validated against the
/// workspace count only when the action runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WindowCommand {
    #[default]
    None,
    Close,
    CloseAll,
    MoveToWorkspace { target: u32 },
    MoveAllToWorkspace { target: u32 },
}

impl WindowCommand {
    /// Parse a single token. Returns `None` when the token is no command at
    /// all, which is different from [`WindowCommand::None`].
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        if CLOSE_SELECTED.is_match(token) {
            Some(Self::Close)
        } else if CLOSE_ALL.is_match(token) {
            Some(Self::CloseAll)
        } else if let Some(caps) = MOVE_TO_WS.captures(token) {
            Some(Self::MoveToWorkspace {
                target: parse_target(&caps[1]),
            })
        } else if let Some(caps) = MOVE_ALL_TO_WS.captures(token) {
            Some(Self::MoveAllToWorkspace {
                target: parse_target(&caps[1]),
            })
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

/// Digits that overflow become target 0, which never validates.
fn parse_target(digits: &str) -> u32 {
    digits.parse().unwrap_or(0)
}

/// Search terms left after preprocessing, plus the requested command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub terms: Vec<String>,
    pub command: WindowCommand,
}

impl ParsedQuery {
    /// Split host tokens into search terms and an optional trailing command.
    ///
    /// `prefix` is the provider's activation word (matched with or without a
    /// trailing `:`). Commands are only recognized when `commands_enabled`.
    #[must_use]
    pub fn parse<S: AsRef<str>>(tokens: &[S], prefix: &str, commands_enabled: bool) -> Self {
        let mut terms: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();

        let bare_prefix = prefix.trim_end_matches(':');
        if terms
            .first()
            .is_some_and(|first| is_prefix_token(first, bare_prefix))
        {
            terms.remove(0);
        }

        if terms.is_empty() {
            terms.push(SENTINEL_TERM.to_string());
        }

        let mut command = WindowCommand::None;
        if commands_enabled && let Some(last) = terms.last() {
            if let Some(parsed) = WindowCommand::parse(last) {
                debug!("Parsed window command {:?} from '{}'", parsed, last);
                command = parsed;
                terms.pop();
            } else if last.starts_with(COMMAND_ESCAPE) {
                debug!("Dropping unrecognized command token '{}'", last);
                terms.pop();
            }
        }

        Self { terms, command }
    }

    /// True when the query was only the provider prefix.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.terms.len() == 1 && self.terms[0] == SENTINEL_TERM
    }

    /// Terms joined with single spaces, as fed to the fuzzy matcher.
    #[must_use]
    pub fn joined(&self) -> String {
        self.terms.join(" ")
    }
}

fn is_prefix_token(token: &str, bare_prefix: &str) -> bool {
    !bare_prefix.is_empty()
        && token
            .strip_prefix(bare_prefix)
            .is_some_and(|rest| rest.is_empty() || rest == ":")
}

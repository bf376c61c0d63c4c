pub mod config;
pub mod host;
pub mod provider;
pub mod query;

// Exposed for benchmarks - not part of stable API
#[doc(hidden)]
pub mod search;

pub mod window;

mod error;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use host::{WindowInfo, WindowSource, WorkspaceHost};
pub use provider::{
    ActivationModifiers, DispatchOutcome, ProviderInfo, ResultIcon, ResultMeta,
    WindowSearchProvider,
};
pub use query::{ParsedQuery, WindowCommand};
pub use window::{WindowId, WindowRecord};

use thiserror::Error;

use crate::provider::ProviderError;

mod fallback;
mod normalize;
mod pipeline;
mod prompts;
mod sanitize;
#[cfg(test)]
mod tests;

pub use fallback::{FALLBACK_CONFIG_FILENAME, FallbackConfig};
pub use normalize::{normalize_proposal, normalize_rfp};
pub use pipeline::{extract_proposal, extract_rfp};
pub use sanitize::sanitize;

/// Failure of one extraction stage. Both variants are caught at the pipeline
/// boundary and converted into the canned fallback record; they never
/// propagate to a command.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("provider reply is not valid JSON")]
    NotJson,
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

use thiserror::Error;

/// Failures surfaced to the host. Everything that happens inside a tick is
/// resolved by the engine itself and never shows up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("could not find any dance tracks")]
    NoTracksAvailable,
    #[error("unknown track mode '{0}'")]
    UnknownMode(String),
}

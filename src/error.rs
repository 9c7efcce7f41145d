use thiserror::Error;

/// Failures raised by the grid store surface.
///
/// Geometric input is never validated; the only failure mode is a usage-contract
/// violation, which callers should treat as a programming error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid store accessed outside an active scope; create a new GridHandler before reading or dispatching")]
    OutsideScope,
}

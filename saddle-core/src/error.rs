use thiserror::Error;

/// Error returned when the objective Hessian of a
/// [`ProblemWrapper`](crate::ProblemWrapper) is evaluated but no objective
/// Hessian callable has been installed.
///
/// The wrapper never substitutes a default (such as a zero matrix) for a
/// missing callable, because a plausible-looking but wrong Hessian would
/// corrupt the solver silently instead of failing here.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("objective Hessian callable is not set")]
pub struct MissingObjectiveHessian;

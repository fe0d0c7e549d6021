//! Problem abstraction for the Saddle constrained-optimization framework.
//!
//! This crate defines the contract between user-supplied mathematics and
//! the numerical solvers that consume it:
//!
//! - [`Problem`]: the six evaluation operations a constrained
//!   nonlinear-optimization solver needs — objective, gradient, Hessian,
//!   constraints, constraints Jacobian, and Lagrangian Hessian — over
//!   compile-time problem dimensions.
//! - [`ProblemWrapper`]: a functional adapter that assembles a `Problem`
//!   from independent closures, with each callable swappable after
//!   construction.
//!
//! Vectors and matrices are `nalgebra`'s statically sized types
//! ([`Primal`], [`Dual`], [`Hessian`], [`Jacobian`]), so every dimension
//! invariant at the solver boundary is enforced by the type system.

mod error;
mod problem;
mod wrapper;

pub use error::MissingObjectiveHessian;
pub use problem::{Dual, Hessian, Jacobian, Primal, Problem};
pub use wrapper::{
    ConstraintsFn, ConstraintsJacobianFn, LagrangianHessianFn, ObjectiveFn, ObjectiveGradientFn,
    ObjectiveHessianFn, ProblemWrapper,
};

use std::fmt;

use nalgebra::RealField;

use crate::{
    error::MissingObjectiveHessian,
    problem::{Dual, Hessian, Jacobian, Primal, Problem},
};

/// Callable evaluating the objective `f(x)`.
pub type ObjectiveFn<R, const N: usize> = Box<dyn Fn(&Primal<R, N>) -> R>;

/// Callable evaluating the objective gradient `∇f(x)`.
pub type ObjectiveGradientFn<R, const N: usize> = Box<dyn Fn(&Primal<R, N>) -> Primal<R, N>>;

/// Callable evaluating the objective Hessian `∇²f(x)`.
pub type ObjectiveHessianFn<R, const N: usize> = Box<dyn Fn(&Primal<R, N>) -> Hessian<R, N>>;

/// Callable evaluating the constraints `g(x)`.
pub type ConstraintsFn<R, const N: usize, const M: usize> =
    Box<dyn Fn(&Primal<R, N>) -> Dual<R, M>>;

/// Callable evaluating the constraints Jacobian.
pub type ConstraintsJacobianFn<R, const N: usize, const M: usize> =
    Box<dyn Fn(&Primal<R, N>, &Dual<R, M>) -> Jacobian<R, M, N>>;

/// Callable evaluating the Lagrangian Hessian `∇²ₓ L(x, z)`.
pub type LagrangianHessianFn<R, const N: usize, const M: usize> =
    Box<dyn Fn(&Primal<R, N>, &Dual<R, M>) -> Hessian<R, N>>;

/// Adapter that builds a [`Problem`] from plain callables.
///
/// Use this when a dedicated subtype is more ceremony than the problem
/// deserves: supply each mathematical piece as a closure and hand the
/// wrapper to a solver. Each callable can be inspected or swapped after
/// construction, so a harness can, for example, replace a gradient with a
/// finite-difference version between runs.
///
/// The objective Hessian slot is optional. Solvers built around the
/// Lagrangian Hessian never ask for the bare objective Hessian, so
/// [`new`](Self::new) leaves that slot unset; fill it with
/// [`with_objective_hessian`](Self::with_objective_hessian) or
/// [`set_objective_hessian`](Self::set_objective_hessian) when a solver
/// needs it.
///
/// # Example
///
/// ```
/// use nalgebra::{SMatrix, SVector};
/// use saddle_core::{Problem, ProblemWrapper};
///
/// // Minimize x² subject to x = 1.
/// let problem = ProblemWrapper::<f64, 1, 1>::new(
///     |x| x[0] * x[0],
///     |x| SVector::<f64, 1>::new(2.0 * x[0]),
///     |x| SVector::<f64, 1>::new(x[0] - 1.0),
///     |_x, _z| SMatrix::<f64, 1, 1>::new(1.0),
///     |_x, _z| SMatrix::<f64, 1, 1>::new(2.0),
/// );
///
/// let x = SVector::<f64, 1>::new(3.0);
/// assert_eq!(problem.objective(&x), 9.0);
/// assert_eq!(problem.constraints(&x)[0], 2.0);
/// ```
pub struct ProblemWrapper<R: RealField + Copy, const N: usize, const M: usize> {
    objective: ObjectiveFn<R, N>,
    objective_gradient: ObjectiveGradientFn<R, N>,
    objective_hessian: Option<ObjectiveHessianFn<R, N>>,
    constraints: ConstraintsFn<R, N, M>,
    constraints_jacobian: ConstraintsJacobianFn<R, N, M>,
    lagrangian_hessian: LagrangianHessianFn<R, N, M>,
}

impl<R: RealField + Copy, const N: usize, const M: usize> ProblemWrapper<R, N, M> {
    /// Creates a wrapper from the five callables every solver needs.
    ///
    /// The objective Hessian slot is left unset.
    pub fn new(
        objective: impl Fn(&Primal<R, N>) -> R + 'static,
        objective_gradient: impl Fn(&Primal<R, N>) -> Primal<R, N> + 'static,
        constraints: impl Fn(&Primal<R, N>) -> Dual<R, M> + 'static,
        constraints_jacobian: impl Fn(&Primal<R, N>, &Dual<R, M>) -> Jacobian<R, M, N> + 'static,
        lagrangian_hessian: impl Fn(&Primal<R, N>, &Dual<R, M>) -> Hessian<R, N> + 'static,
    ) -> Self {
        const {
            assert!(N > 0, "primal dimension `N` must be positive");
            assert!(M > 0, "dual dimension `M` must be positive");
        }

        Self {
            objective: Box::new(objective),
            objective_gradient: Box::new(objective_gradient),
            objective_hessian: None,
            constraints: Box::new(constraints),
            constraints_jacobian: Box::new(constraints_jacobian),
            lagrangian_hessian: Box::new(lagrangian_hessian),
        }
    }

    /// Fills the objective Hessian slot, completing the six-callable
    /// construction form.
    #[must_use]
    pub fn with_objective_hessian(
        mut self,
        objective_hessian: impl Fn(&Primal<R, N>) -> Hessian<R, N> + 'static,
    ) -> Self {
        self.objective_hessian = Some(Box::new(objective_hessian));
        self
    }

    /// Returns the stored objective callable.
    #[must_use]
    pub fn objective_fn(&self) -> &ObjectiveFn<R, N> {
        &self.objective
    }

    /// Replaces the objective callable.
    pub fn set_objective(&mut self, objective: impl Fn(&Primal<R, N>) -> R + 'static) {
        self.objective = Box::new(objective);
    }

    /// Returns the stored objective gradient callable.
    #[must_use]
    pub fn objective_gradient_fn(&self) -> &ObjectiveGradientFn<R, N> {
        &self.objective_gradient
    }

    /// Replaces the objective gradient callable.
    pub fn set_objective_gradient(
        &mut self,
        objective_gradient: impl Fn(&Primal<R, N>) -> Primal<R, N> + 'static,
    ) {
        self.objective_gradient = Box::new(objective_gradient);
    }

    /// Returns the stored objective Hessian callable, or `None` if the
    /// slot is unset.
    #[must_use]
    pub fn objective_hessian_fn(&self) -> Option<&ObjectiveHessianFn<R, N>> {
        self.objective_hessian.as_ref()
    }

    /// Replaces (or fills) the objective Hessian callable.
    pub fn set_objective_hessian(
        &mut self,
        objective_hessian: impl Fn(&Primal<R, N>) -> Hessian<R, N> + 'static,
    ) {
        self.objective_hessian = Some(Box::new(objective_hessian));
    }

    /// Returns the stored constraints callable.
    #[must_use]
    pub fn constraints_fn(&self) -> &ConstraintsFn<R, N, M> {
        &self.constraints
    }

    /// Replaces the constraints callable.
    pub fn set_constraints(&mut self, constraints: impl Fn(&Primal<R, N>) -> Dual<R, M> + 'static) {
        self.constraints = Box::new(constraints);
    }

    /// Returns the stored constraints Jacobian callable.
    #[must_use]
    pub fn constraints_jacobian_fn(&self) -> &ConstraintsJacobianFn<R, N, M> {
        &self.constraints_jacobian
    }

    /// Replaces the constraints Jacobian callable.
    pub fn set_constraints_jacobian(
        &mut self,
        constraints_jacobian: impl Fn(&Primal<R, N>, &Dual<R, M>) -> Jacobian<R, M, N> + 'static,
    ) {
        self.constraints_jacobian = Box::new(constraints_jacobian);
    }

    /// Returns the stored Lagrangian Hessian callable.
    #[must_use]
    pub fn lagrangian_hessian_fn(&self) -> &LagrangianHessianFn<R, N, M> {
        &self.lagrangian_hessian
    }

    /// Replaces the Lagrangian Hessian callable.
    pub fn set_lagrangian_hessian(
        &mut self,
        lagrangian_hessian: impl Fn(&Primal<R, N>, &Dual<R, M>) -> Hessian<R, N> + 'static,
    ) {
        self.lagrangian_hessian = Box::new(lagrangian_hessian);
    }

    /// Evaluates the objective Hessian if its callable is set.
    ///
    /// Solvers that can fall back to a quasi-Newton approximation should
    /// use this instead of the panicking trait method.
    ///
    /// # Errors
    ///
    /// Returns [`MissingObjectiveHessian`] if the slot is unset.
    pub fn try_objective_hessian(
        &self,
        x: &Primal<R, N>,
    ) -> Result<Hessian<R, N>, MissingObjectiveHessian> {
        match &self.objective_hessian {
            Some(objective_hessian) => Ok(objective_hessian(x)),
            None => Err(MissingObjectiveHessian),
        }
    }
}

impl<R: RealField + Copy, const N: usize, const M: usize> Problem<R, N, M>
    for ProblemWrapper<R, N, M>
{
    fn objective(&self, x: &Primal<R, N>) -> R {
        (self.objective)(x)
    }

    fn objective_gradient(&self, x: &Primal<R, N>) -> Primal<R, N> {
        (self.objective_gradient)(x)
    }

    /// Evaluates the stored objective Hessian callable.
    ///
    /// # Panics
    ///
    /// Panics if the objective Hessian slot is unset. Invoking an unset
    /// callable is a caller contract violation, not a recoverable
    /// condition; use [`try_objective_hessian`](Self::try_objective_hessian)
    /// to probe the capability first.
    fn objective_hessian(&self, x: &Primal<R, N>) -> Hessian<R, N> {
        match self.try_objective_hessian(x) {
            Ok(hessian) => hessian,
            Err(error) => panic!("{error}"),
        }
    }

    fn constraints(&self, x: &Primal<R, N>) -> Dual<R, M> {
        (self.constraints)(x)
    }

    fn constraints_jacobian(&self, x: &Primal<R, N>, z: &Dual<R, M>) -> Jacobian<R, M, N> {
        (self.constraints_jacobian)(x, z)
    }

    fn lagrangian_hessian(&self, x: &Primal<R, N>, z: &Dual<R, M>) -> Hessian<R, N> {
        (self.lagrangian_hessian)(x, z)
    }
}

/// Closures are opaque, so only the shape of the wrapper is shown.
impl<R: RealField + Copy, const N: usize, const M: usize> fmt::Debug for ProblemWrapper<R, N, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProblemWrapper")
            .field("primal_dimension", &N)
            .field("dual_dimension", &M)
            .field("has_objective_hessian", &self.objective_hessian.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use nalgebra::{SMatrix, SVector};

    fn linear_wrapper() -> ProblemWrapper<f64, 2, 1> {
        ProblemWrapper::new(
            |x| x[0] + x[1],
            |_x| SVector::<f64, 2>::new(1.0, 1.0),
            |x| SVector::<f64, 1>::new(x[0] - x[1]),
            |_x, _z| SMatrix::<f64, 1, 2>::new(1.0, -1.0),
            |_x, _z| SMatrix::<f64, 2, 2>::zeros(),
        )
    }

    #[test]
    fn new_leaves_objective_hessian_unset() {
        let wrapper = linear_wrapper();

        assert!(wrapper.objective_hessian_fn().is_none());
    }

    #[test]
    fn with_objective_hessian_fills_the_slot() {
        let wrapper = linear_wrapper().with_objective_hessian(|_x| SMatrix::<f64, 2, 2>::zeros());

        assert!(wrapper.objective_hessian_fn().is_some());
    }

    #[test]
    fn getters_expose_the_stored_callables() {
        let wrapper = linear_wrapper();
        let x = SVector::<f64, 2>::new(3.0, 4.0);
        let z = SVector::<f64, 1>::new(0.0);

        assert_relative_eq!((wrapper.objective_fn())(&x), 7.0);
        assert_relative_eq!(
            (wrapper.objective_gradient_fn())(&x),
            SVector::<f64, 2>::new(1.0, 1.0)
        );
        assert_relative_eq!((wrapper.constraints_fn())(&x), SVector::<f64, 1>::new(-1.0));
        assert_relative_eq!(
            (wrapper.constraints_jacobian_fn())(&x, &z),
            SMatrix::<f64, 1, 2>::new(1.0, -1.0)
        );
        assert_relative_eq!(
            (wrapper.lagrangian_hessian_fn())(&x, &z),
            SMatrix::<f64, 2, 2>::zeros()
        );
    }

    #[test]
    fn try_objective_hessian_reports_the_unset_slot() {
        let wrapper = linear_wrapper();
        let x = SVector::<f64, 2>::zeros();

        assert_eq!(
            wrapper.try_objective_hessian(&x),
            Err(MissingObjectiveHessian)
        );
    }

    #[test]
    #[should_panic(expected = "objective Hessian callable is not set")]
    fn objective_hessian_panics_when_unset() {
        let wrapper = linear_wrapper();
        let x = SVector::<f64, 2>::zeros();

        let _ = wrapper.objective_hessian(&x);
    }

    #[test]
    fn debug_shows_dimensions_and_hessian_presence() {
        let wrapper = linear_wrapper();
        let formatted = format!("{wrapper:?}");

        assert!(formatted.contains("primal_dimension: 2"));
        assert!(formatted.contains("has_objective_hessian: false"));
    }
}

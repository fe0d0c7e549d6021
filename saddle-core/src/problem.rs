use nalgebra::{RealField, SMatrix, SVector};

/// The primal variable: the vector of decision variables being optimized.
pub type Primal<R, const N: usize> = SVector<R, N>;

/// The dual variable: multipliers associated with the constraints, also the
/// shape of the constraint-value vector.
pub type Dual<R, const M: usize> = SVector<R, M>;

/// An `N × N` Hessian matrix, of the objective or of the Lagrangian.
pub type Hessian<R, const N: usize> = SMatrix<R, N, N>;

/// The `M × N` Jacobian of the constraints with respect to the primal
/// variable.
pub type Jacobian<R, const M: usize, const N: usize> = SMatrix<R, M, N>;

/// Defines a constrained nonlinear-optimization problem to be solved.
///
/// This trait is the contract between user-supplied mathematics and the
/// solvers that consume it. A solver holds a `Problem` and repeatedly
/// queries the objective, its derivatives, the constraints, and their
/// derivatives at the current primal point `x` (and dual point `z` where
/// the operation needs it). Dimensions are fixed at compile time: `N` is
/// the primal dimension and `M` the dual dimension, and the statically
/// sized vector and matrix types make a dimension mismatch a type error
/// rather than a runtime failure.
///
/// Implementations must be pure with respect to this contract: no call may
/// mutate its input vectors (the shared references enforce this), calls may
/// arrive in any order and be interleaved freely, and the same inputs are
/// expected to produce the same outputs.
///
/// Hessians are mathematically expected to be symmetric. This is not
/// checked; a non-symmetric result silently corrupts second-order solver
/// steps, so it is the implementor's responsibility.
pub trait Problem<R: RealField + Copy, const N: usize, const M: usize> {
    /// Evaluates the objective function `f(x)`.
    fn objective(&self, x: &Primal<R, N>) -> R;

    /// Evaluates the gradient of the objective function, `∇f(x)`.
    fn objective_gradient(&self, x: &Primal<R, N>) -> Primal<R, N>;

    /// Evaluates the Hessian of the objective function, `∇²f(x)`.
    fn objective_hessian(&self, x: &Primal<R, N>) -> Hessian<R, N>;

    /// Evaluates the constraints function `g(x)`.
    fn constraints(&self, x: &Primal<R, N>) -> Dual<R, M>;

    /// Evaluates the Jacobian of the constraints with respect to `x`.
    ///
    /// The dual variable `z` is passed through so that implementations may
    /// evaluate a dual-weighted or constraint-group-specific Jacobian;
    /// most implementations simply ignore it.
    fn constraints_jacobian(&self, x: &Primal<R, N>, z: &Dual<R, M>) -> Jacobian<R, M, N>;

    /// Evaluates the Hessian of the Lagrangian with respect to `x`,
    /// `∇²ₓ L(x, z)` where `L(x, z) = f(x) + zᵀ g(x)`.
    fn lagrangian_hessian(&self, x: &Primal<R, N>, z: &Dual<R, M>) -> Hessian<R, N>;

    /// Evaluates the Lagrangian `L(x, z) = f(x) + zᵀ g(x)`.
    ///
    /// The default implementation combines [`objective`](Self::objective)
    /// and [`constraints`](Self::constraints); override it if a direct
    /// evaluation is cheaper.
    fn lagrangian(&self, x: &Primal<R, N>, z: &Dual<R, M>) -> R {
        self.objective(x) + z.dot(&self.constraints(x))
    }
}

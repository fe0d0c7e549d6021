//! # Equality-Constrained Quadratic Program
//!
//! This example assembles a [`ProblemWrapper`] for the problem
//!
//! ```text
//! minimize    f(x) = x₀² + x₁²
//! subject to  g(x) = x₀ + x₁ − 1 = 0
//! ```
//!
//! and evaluates every operation of the [`Problem`] contract the way a
//! solver would: at the current primal point `x` and dual point `z`.
//! The optimum is `x* = (0.5, 0.5)` with multiplier `z* = −1`, where the
//! KKT stationarity residual `∇f(x) + J(x)ᵀz` vanishes.
//!
//! ## Running the Example
//!
//! ```sh
//! cargo run --example equality_qp
//! ```

use nalgebra::{SMatrix, SVector};
use saddle_core::{Problem, ProblemWrapper};

fn main() {
    let problem = ProblemWrapper::<f64, 2, 1>::new(
        |x| x[0] * x[0] + x[1] * x[1],
        |x| SVector::<f64, 2>::new(2.0 * x[0], 2.0 * x[1]),
        |x| SVector::<f64, 1>::new(x[0] + x[1] - 1.0),
        |_x, _z| SMatrix::<f64, 1, 2>::new(1.0, 1.0),
        |_x, _z| SMatrix::<f64, 2, 2>::identity() * 2.0,
    )
    .with_objective_hessian(|_x| SMatrix::<f64, 2, 2>::identity() * 2.0);

    let x = SVector::<f64, 2>::new(0.5, 0.5);
    let z = SVector::<f64, 1>::new(-1.0);

    println!("at x = {:?}, z = {:?}", x.as_slice(), z.as_slice());
    println!("  objective            = {}", problem.objective(&x));
    println!(
        "  objective gradient   = {:?}",
        problem.objective_gradient(&x).as_slice()
    );
    println!(
        "  objective Hessian    = {:?}",
        problem.objective_hessian(&x).as_slice()
    );
    println!(
        "  constraints          = {:?}",
        problem.constraints(&x).as_slice()
    );
    println!(
        "  constraints Jacobian = {:?}",
        problem.constraints_jacobian(&x, &z).as_slice()
    );
    println!(
        "  Lagrangian Hessian   = {:?}",
        problem.lagrangian_hessian(&x, &z).as_slice()
    );
    println!("  Lagrangian           = {}", problem.lagrangian(&x, &z));

    let stationarity = problem.objective_gradient(&x)
        + problem.constraints_jacobian(&x, &z).transpose() * z;
    println!("  KKT stationarity     = {:?}", stationarity.as_slice());
}

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cartesian_components;

/// A single Gaussian term `coefficient * exp(-exponent * r^2)`, to be multiplied with the
/// Cartesian polynomial of its shell.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub exponent: f64,
    /// The contraction coefficient, optionally including the normalization constant
    pub coefficient: f64,
}

impl Primitive {
    /// Normalization constant of the `x^l` component of an unnormalized Cartesian Gaussian
    /// with the given exponent.
    pub fn norm(exponent: f64, angular_momentum: u32) -> f64 {
        let l = angular_momentum as i32;

        (std::f64::consts::FRAC_2_PI * exponent)
            .powi(3)
            .sqrt()
            .sqrt()
            * f64::sqrt((4.0 * exponent).powi(l) / double_factorial(2 * l - 1))
    }
}

/// A contracted shell of Cartesian Gaussians sharing one center and one angular momentum.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shell {
    pub angular_momentum: u32,
    /// The position of this shell, in natural units
    pub center: Vector3<f64>,
    pub primitives: SmallVec<[Primitive; 6]>,
}

impl Shell {
    /// Creates a shell from parallel slices of exponents and contraction coefficients.
    pub fn new(
        angular_momentum: u32,
        center: Vector3<f64>,
        exponents: &[f64],
        coefficients: &[f64],
    ) -> Self {
        assert_eq!(
            exponents.len(),
            coefficients.len(),
            "every primitive needs exactly one exponent and one coefficient"
        );
        assert!(!exponents.is_empty(), "a shell needs at least one primitive");

        let primitives = exponents
            .iter()
            .zip(coefficients)
            .map(|(&exponent, &coefficient)| Primitive {
                exponent,
                coefficient,
            })
            .collect();

        Self {
            angular_momentum,
            center,
            primitives,
        }
    }

    /// Creates a shell made of a single primitive.
    pub fn uncontracted(
        angular_momentum: u32,
        center: Vector3<f64>,
        exponent: f64,
        coefficient: f64,
    ) -> Self {
        Self::new(angular_momentum, center, &[exponent], &[coefficient])
    }

    /// The number of primitives in this shell.
    pub fn contraction_depth(&self) -> usize {
        self.primitives.len()
    }

    /// The number of Cartesian functions this shell contributes.
    pub fn size(&self) -> usize {
        cartesian_components(self.angular_momentum as usize)
    }
}

fn double_factorial(n: i32) -> f64 {
    (1..=n).rev().step_by(2).map(|k| k as f64).product()
}

//! McMurchie Davidon integration scheme, specialised to two centers.
//!
//! Each shell is a single Gaussian about its own center, so its Hermite expansion only has the
//! `1/(2 alpha)` and `(t + 1)` terms. The Hermite Coulomb integrals `R_tuv` are seeded from the
//! same screened seeds the Obara-Saika recurrence uses, which makes this expander an
//! independent check of that one.
//!
//! Reference:
//!
//! [1] Goings, J. Integrals. https://joshuagoings.com/2017/04/28/integrals/
//! [2] Helgaker, T.; Jorgensen, P.; Olsen, J. Molecular Electronic-Structure Theory, ch. 9.
use nalgebra::Vector3;

use crate::basis::{cartesian_components, cartesian_exponents};

use super::{AngularExpander, PrimitivePair};

#[derive(Copy, Clone, Debug, Default)]
pub struct HermiteExpander;

impl AngularExpander for HermiteExpander {
    fn expand(
        &self,
        am_a: usize,
        am_c: usize,
        pair: &PrimitivePair,
        seeds: &[f64],
        _scratch: &mut Vec<f64>,
        output: &mut [f64],
    ) {
        let n_c = cartesian_components(am_c);
        let a = pair.exponent_a;
        let c = pair.exponent_c;

        for (ia, [l1, m1, n1]) in cartesian_exponents(am_a).enumerate() {
            let (l1, m1, n1) = (l1 as i32, m1 as i32, n1 as i32);

            for (ic, [l2, m2, n2]) in cartesian_exponents(am_c).enumerate() {
                let (l2, m2, n2) = (l2 as i32, m2 as i32, n2 as i32);

                let mut sum = 0.0;
                for (t1, u1, v1) in itertools::iproduct!(0..=l1, 0..=m1, 0..=n1) {
                    let e_a = hermite_expansion(l1, t1, a)
                        * hermite_expansion(m1, u1, a)
                        * hermite_expansion(n1, v1, a);
                    if e_a == 0.0 {
                        continue;
                    }

                    for (t2, u2, v2) in itertools::iproduct!(0..=l2, 0..=m2, 0..=n2) {
                        let e_c = hermite_expansion(l2, t2, c)
                            * hermite_expansion(m2, u2, c)
                            * hermite_expansion(n2, v2, c);

                        sum += e_a
                            * e_c
                            * coulomb_auxiliary(
                                t1 + t2,
                                u1 + u2,
                                v1 + v2,
                                0,
                                pair.reduced_exponent,
                                pair.separation,
                                seeds,
                            )
                            * if (t2 + u2 + v2) % 2 == 0 { 1.0 } else { -1.0 }
                        // (-1)^(t2 + u2 + v2)
                    }
                }

                output[ia * n_c + ic] += sum;
            }
        }
    }
}

/// Hermite expansion coefficient `E^i_t` of `x^i exp(-exponent x^2)` about its own center.
fn hermite_expansion(i: i32, t: i32, exponent: f64) -> f64 {
    if t < 0 || t > i {
        0.0
    } else if i == 0 {
        1.0
    } else {
        0.5 / exponent * hermite_expansion(i - 1, t - 1, exponent)
            + (t + 1) as f64 * hermite_expansion(i - 1, t + 1, exponent)
    }
}

/// Hermite Coulomb integral `R^n_tuv`, with `R^n_000 = (-2 alpha)^n seeds[n]`.
fn coulomb_auxiliary(
    t: i32,
    u: i32,
    v: i32,
    n: i32,
    alpha: f64,
    // A - C
    diff: Vector3<f64>,
    seeds: &[f64],
) -> f64 {
    if t < 0 || u < 0 || v < 0 {
        return 0.0;
    }

    let step = |t, u, v| coulomb_auxiliary(t, u, v, n + 1, alpha, diff, seeds);

    match (t, u, v) {
        (0, 0, 0) => (-2.0 * alpha).powi(n) * seeds[n as usize],
        (t, u, v) if t > 0 => (t - 1) as f64 * step(t - 2, u, v) + diff.x * step(t - 1, u, v),
        (0, u, v) if u > 0 => (u - 1) as f64 * step(0, u - 2, v) + diff.y * step(0, u - 1, v),
        (0, 0, v) => (v - 1) as f64 * step(0, 0, v - 2) + diff.z * step(0, 0, v - 1),
        _ => unreachable!("negative hermite indices are handled above"),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    use crate::{
        basis::cartesian_components,
        integrals::{boys::boys_function, AngularExpander, ObaraSaika, PrimitivePair},
    };

    use super::{hermite_expansion, HermiteExpander};

    #[test]
    fn hermite_coefficients() {
        // x exp(-a x^2) = 1/(2a) d/dx exp(-a x^2)
        assert_eq!(hermite_expansion(1, 1, 2.0), 0.25);
        assert_eq!(hermite_expansion(1, 0, 2.0), 0.0);
        // x^2 exp(-a x^2): E_0 = 1/(2a), E_2 = 1/(2a)^2
        assert_eq!(hermite_expansion(2, 0, 2.0), 0.25);
        assert_eq!(hermite_expansion(2, 2, 2.0), 0.0625);
        assert_eq!(hermite_expansion(2, 1, 2.0), 0.0);
    }

    #[test]
    fn agrees_with_obara_saika() {
        let pair = PrimitivePair::new(
            Vector3::new(0.3, -0.8, 0.1),
            0.75,
            1.2,
            Vector3::new(-0.4, 0.5, 0.9),
            1.6,
            0.4,
            0.6,
        );

        for am_a in 0..=3 {
            for am_c in 0..=3 {
                let am = am_a + am_c;
                let mut boys = vec![0.0; am + 1];
                let mut seeds = vec![0.0; am + 1];
                boys_function(am, pair.boys_argument, &mut boys);
                pair.seeds(&boys, &mut seeds);

                let n = cartesian_components(am_a) * cartesian_components(am_c);
                let mut hermite = vec![0.0; n];
                let mut obara_saika = vec![0.0; n];
                HermiteExpander.expand(am_a, am_c, &pair, &seeds, &mut Vec::new(), &mut hermite);
                ObaraSaika.expand(am_a, am_c, &pair, &seeds, &mut Vec::new(), &mut obara_saika);

                for (h, o) in hermite.iter().zip(&obara_saika) {
                    assert_relative_eq!(*h, *o, epsilon = 1e-12, max_relative = 1e-10);
                }
            }
        }
    }
}

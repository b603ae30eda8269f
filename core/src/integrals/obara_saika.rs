//! Obara-Saika vertical recurrence for two-center integrals.
//!
//! The bra is built first at zero ket angular momentum,
//!
//! `[a+1_i|0]^(m) = PA_i [a|0]^(m) + WP_i [a|0]^(m+1)
//!                 + N_i(a) oo2z ([a-1_i|0]^(m) - roz [a-1_i|0]^(m+1))`
//!
//! then the ket for every bra component,
//!
//! `[a|c+1_i]^(m) = QC_i [a|c]^(m) + WQ_i [a|c]^(m+1)
//!                 + N_i(c) oo2e ([a|c-1_i]^(m) - roe [a|c-1_i]^(m+1))
//!                 + N_i(a) oo2ze [a-1_i|c]^(m+1)`
//!
//! All intermediates live in one flat table indexed by (bra component, ket component, order),
//! where components of every angular momentum up to the target are numbered consecutively.
//!
//! Reference:
//!
//! [1] Obara, S.; Saika, A. J. Chem. Phys. 84, 3963 (1986).
use crate::basis::{canonical_index, cartesian_components, cartesian_exponents, shell_offset};

use super::{AngularExpander, PrimitivePair, RecurrenceParameters};

#[derive(Copy, Clone, Debug, Default)]
pub struct ObaraSaika;

impl AngularExpander for ObaraSaika {
    fn expand(
        &self,
        am_a: usize,
        am_c: usize,
        pair: &PrimitivePair,
        seeds: &[f64],
        scratch: &mut Vec<f64>,
        output: &mut [f64],
    ) {
        let am = am_a + am_c;
        let orders = am + 1;
        debug_assert_eq!(seeds.len(), orders);

        let n_ket = shell_offset(am_c + 1);
        let index = |bra: usize, ket: usize, m: usize| (bra * n_ket + ket) * orders + m;

        scratch.clear();
        scratch.resize(shell_offset(am_a + 1) * n_ket * orders, 0.0);
        scratch[..orders].copy_from_slice(seeds);

        let RecurrenceParameters {
            oo2z,
            oo2e,
            oo2ze,
            roz,
            roe,
            wp,
            wq,
            pa,
            qc,
            ..
        } = pair.recurrence;

        for l in 1..=am_a {
            for a in cartesian_exponents(l) {
                let i = build_direction(a);
                let a1 = lower(a, i);

                let bra = component_index(a);
                let bra1 = component_index(a1);
                let bra2 = (a1[i] > 0).then(|| component_index(lower(a1, i)));

                for m in 0..=am - l {
                    let mut value =
                        pa[i] * scratch[index(bra1, 0, m)] + wp[i] * scratch[index(bra1, 0, m + 1)];

                    if let Some(bra2) = bra2 {
                        value += a1[i] as f64
                            * oo2z
                            * (scratch[index(bra2, 0, m)] - roz * scratch[index(bra2, 0, m + 1)]);
                    }

                    scratch[index(bra, 0, m)] = value;
                }
            }
        }

        for lc in 1..=am_c {
            for c in cartesian_exponents(lc) {
                let i = build_direction(c);
                let c1 = lower(c, i);

                let ket = component_index(c);
                let ket1 = component_index(c1);
                let ket2 = (c1[i] > 0).then(|| component_index(lower(c1, i)));

                for la in 0..=am_a {
                    for a in cartesian_exponents(la) {
                        let bra = component_index(a);
                        let bra1 = (a[i] > 0).then(|| component_index(lower(a, i)));

                        for m in 0..=am - la - lc {
                            let mut value = qc[i] * scratch[index(bra, ket1, m)]
                                + wq[i] * scratch[index(bra, ket1, m + 1)];

                            if let Some(ket2) = ket2 {
                                value += c1[i] as f64
                                    * oo2e
                                    * (scratch[index(bra, ket2, m)]
                                        - roe * scratch[index(bra, ket2, m + 1)]);
                            }

                            if let Some(bra1) = bra1 {
                                value += a[i] as f64 * oo2ze * scratch[index(bra1, ket1, m + 1)];
                            }

                            scratch[index(bra, ket, m)] = value;
                        }
                    }
                }
            }
        }

        let bra_start = shell_offset(am_a);
        let ket_start = shell_offset(am_c);
        let n_c = cartesian_components(am_c);

        for ia in 0..cartesian_components(am_a) {
            for ic in 0..n_c {
                output[ia * n_c + ic] += scratch[index(bra_start + ia, ket_start + ic, 0)];
            }
        }
    }
}

#[inline(always)]
fn component_index(exponents: [usize; 3]) -> usize {
    shell_offset(exponents.iter().sum()) + canonical_index(exponents)
}

/// The direction a component is reached from: x if it has an x exponent, otherwise y, then z.
#[inline(always)]
fn build_direction([i, j, _]: [usize; 3]) -> usize {
    if i > 0 {
        0
    } else if j > 0 {
        1
    } else {
        2
    }
}

#[inline(always)]
fn lower(mut exponents: [usize; 3], direction: usize) -> [usize; 3] {
    exponents[direction] -= 1;
    exponents
}

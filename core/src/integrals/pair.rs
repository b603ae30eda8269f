//! Gaussian product parameters of one primitive pair.
use nalgebra::Vector3;

const PI_2P5: f64 = 17.493418327624862; // pi^(5/2)

/// Inputs of the angular-momentum recurrences for one primitive pair.
///
/// The two-center integral `(a|c)` is treated as the four-center integral `(a0|c0)` with
/// two s functions of exponent zero, so the bra/ket transfer displacements `pa`, `pb`, `qc`
/// and `cd` are always zero. They are kept so every expander sees the same parameter set.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RecurrenceParameters {
    /// 1 / (2 alpha_p)
    pub oo2z: f64,
    /// 1 / (2 alpha_q)
    pub oo2e: f64,
    /// 1 / (2 (alpha_p + alpha_q))
    pub oo2ze: f64,
    /// reduced exponent / alpha_p
    pub roz: f64,
    /// reduced exponent / alpha_q
    pub roe: f64,
    pub wp: Vector3<f64>,
    pub wq: Vector3<f64>,
    pub pa: Vector3<f64>,
    pub pb: Vector3<f64>,
    pub qc: Vector3<f64>,
    pub cd: Vector3<f64>,
}

/// Everything derived from one primitive of shell A and one primitive of shell C.
///
/// Built and dropped inside the pair loop; nothing in here refers to other pairs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PrimitivePair {
    pub exponent_a: f64,
    pub exponent_c: f64,
    /// alpha_p alpha_q / (alpha_p + alpha_q)
    pub reduced_exponent: f64,
    /// alpha_p alpha_q / (alpha_p + alpha_q + alpha_p alpha_q rcut^2)
    pub screened_reduced_exponent: f64,
    /// (alpha_p + alpha_q) / (alpha_p + alpha_q + alpha_p alpha_q rcut^2), in (0, 1]
    pub screening_ratio: f64,
    /// A - C
    pub separation: Vector3<f64>,
    /// |A - C|^2
    pub separation_squared: f64,
    /// (alpha_p A + alpha_q C) / (alpha_p + alpha_q)
    pub weighted_center: Vector3<f64>,
    /// Argument of the Boys function
    pub boys_argument: f64,
    /// 2 pi^(5/2) / (alpha_p alpha_q sqrt(alpha_p + alpha_q)), times both contraction coefficients
    pub prefactor: f64,
    pub recurrence: RecurrenceParameters,
}

impl PrimitivePair {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        center_a: Vector3<f64>,
        exponent_a: f64,
        coefficient_a: f64,
        center_c: Vector3<f64>,
        exponent_c: f64,
        coefficient_c: f64,
        range_separation: f64,
    ) -> Self {
        debug_assert!(
            exponent_a > 0.0 && exponent_c > 0.0,
            "gaussian exponents must be positive"
        );

        let sum = exponent_a + exponent_c;
        let product = exponent_a * exponent_c;

        let reduced_exponent = product / sum;

        // with rcut = 0 the added term is an exact zero, so both quantities below reduce to
        // their unscreened values bit for bit
        let screened_sum = sum + product * range_separation * range_separation;
        let screened_reduced_exponent = product / screened_sum;
        let screening_ratio = sum / screened_sum;

        let separation = center_a - center_c;
        let separation_squared = separation.norm_squared();

        let weighted_center = (exponent_a * center_a + exponent_c * center_c) / sum;
        let wp = weighted_center - center_a;
        let wq = weighted_center - center_c;

        let prefactor = 2.0 * PI_2P5 / (product * sum.sqrt()) * coefficient_a * coefficient_c;

        Self {
            exponent_a,
            exponent_c,
            reduced_exponent,
            screened_reduced_exponent,
            screening_ratio,
            separation,
            separation_squared,
            weighted_center,
            boys_argument: separation_squared * screened_reduced_exponent,
            prefactor,
            recurrence: RecurrenceParameters {
                oo2z: 0.5 / exponent_a,
                oo2e: 0.5 / exponent_c,
                oo2ze: 0.5 / sum,
                roz: reduced_exponent / exponent_a,
                roe: reduced_exponent / exponent_c,
                wp,
                wq,
                pa: Vector3::zeros(),
                pb: Vector3::zeros(),
                qc: Vector3::zeros(),
                cd: Vector3::zeros(),
            },
        }
    }

    /// Writes the seed integrals `[ss|ss]^(n)` for `n = 0..boys.len()`: the prefactor times the
    /// Boys values, each corrected by `screening_ratio^(n + 1/2)`.
    pub fn seeds(&self, boys: &[f64], seeds: &mut [f64]) {
        debug_assert_eq!(boys.len(), seeds.len());

        let mut scale = self.screening_ratio.sqrt();
        for (seed, &value) in seeds.iter_mut().zip(boys) {
            *seed = self.prefactor * value * scale;
            scale *= self.screening_ratio;
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    use super::PrimitivePair;

    fn pair(range_separation: f64) -> PrimitivePair {
        PrimitivePair::new(
            Vector3::new(0.1, -0.4, 0.9),
            1.3,
            0.7,
            Vector3::new(-0.6, 0.2, 0.3),
            0.45,
            1.9,
            range_separation,
        )
    }

    #[test]
    fn pi_constant() {
        assert_relative_eq!(super::PI_2P5, std::f64::consts::PI.powf(2.5), epsilon = 1e-13);
    }

    #[test]
    fn unscreened_is_exact() {
        let pair = pair(0.0);

        assert_eq!(pair.screened_reduced_exponent, pair.reduced_exponent);
        assert_eq!(pair.screening_ratio, 1.0);

        let boys = [0.7, 0.3, 0.1];
        let mut seeds = [0.0; 3];
        pair.seeds(&boys, &mut seeds);
        for (seed, value) in seeds.iter().zip(boys) {
            assert_eq!(*seed, pair.prefactor * value);
        }
    }

    #[test]
    fn product_parameters() {
        let pair = pair(0.0);
        let a = Vector3::new(0.1, -0.4, 0.9);
        let c = Vector3::new(-0.6, 0.2, 0.3);

        assert_relative_eq!(pair.reduced_exponent, 1.3 * 0.45 / 1.75, epsilon = 1e-15);
        assert_relative_eq!(pair.separation_squared, (a - c).norm_squared(), epsilon = 1e-15);
        assert_relative_eq!(
            pair.boys_argument,
            pair.reduced_exponent * (a - c).norm_squared(),
            epsilon = 1e-15
        );
        assert_relative_eq!(
            pair.weighted_center,
            (1.3 * a + 0.45 * c) / 1.75,
            epsilon = 1e-15
        );
        assert_relative_eq!(pair.recurrence.wp, pair.weighted_center - a, epsilon = 1e-15);
        assert_relative_eq!(pair.recurrence.wq, pair.weighted_center - c, epsilon = 1e-15);
        assert_eq!(pair.recurrence.pa, Vector3::zeros());
        assert_eq!(pair.recurrence.cd, Vector3::zeros());

        let expected = 2.0 * std::f64::consts::PI.powf(2.5) / (1.3 * 0.45 * 1.75f64.sqrt()) * 0.7 * 1.9;
        assert_relative_eq!(pair.prefactor, expected, max_relative = 1e-14);
    }

    #[test]
    fn screened_parameters() {
        let rcut = 0.8;
        let pair = pair(rcut);
        let screened_sum = 1.75 + 1.3 * 0.45 * rcut * rcut;

        assert_relative_eq!(
            pair.screened_reduced_exponent,
            1.3 * 0.45 / screened_sum,
            epsilon = 1e-15
        );
        assert_relative_eq!(pair.screening_ratio, 1.75 / screened_sum, epsilon = 1e-15);
        assert!(pair.screening_ratio < 1.0);

        // the recurrences keep using the unscreened reduced exponent
        assert_relative_eq!(pair.recurrence.roz, pair.reduced_exponent / 1.3, epsilon = 1e-15);

        let boys = [1.0; 4];
        let mut seeds = [0.0; 4];
        pair.seeds(&boys, &mut seeds);
        for (n, seed) in seeds.iter().enumerate() {
            assert_relative_eq!(
                *seed,
                pair.prefactor * pair.screening_ratio.powf(n as f64 + 0.5),
                max_relative = 1e-14
            );
        }
    }
}

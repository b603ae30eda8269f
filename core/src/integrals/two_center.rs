use crate::basis::Shell;

use super::{
    boys::boys_function, workspace::Workspace, AngularExpander, ObaraSaika, PrimitivePair,
    MAX_ANGULAR_MOMENTUM,
};

/// Evaluates two-center Coulomb integrals `(a|c)` over pairs of contracted shells, optionally
/// attenuated to the long-range `erf(r / rcut) / r` interaction.
///
/// The engine owns its working buffers, so a single engine should be reused across calls on
/// one thread. Engines are independent of each other.
#[derive(Debug, Default)]
pub struct TwoCenterEngine<E = ObaraSaika> {
    expander: E,
    workspace: Workspace,
}

impl<E: AngularExpander> TwoCenterEngine<E> {
    pub fn new(expander: E) -> Self {
        Self {
            expander,
            workspace: Workspace::default(),
        }
    }

    /// Writes the Cartesian block `(a|c)` into `output`, row-major with the components of
    /// `shell_a` as the slow index. A `range_separation` of zero gives the full Coulomb
    /// interaction.
    ///
    /// Every element of `output` is overwritten.
    ///
    /// # Panics
    ///
    /// If either shell exceeds [`MAX_ANGULAR_MOMENTUM`] or has no primitives, if a shell is
    /// contracted while the `contracted` feature is off, if `output` does not hold exactly one
    /// value per pair of Cartesian components, or if `range_separation` is negative or not
    /// finite.
    pub fn compute(
        &mut self,
        shell_a: &Shell,
        shell_c: &Shell,
        range_separation: f64,
        output: &mut [f64],
    ) {
        let am_a = shell_a.angular_momentum as usize;
        let am_c = shell_c.angular_momentum as usize;

        assert!(
            am_a <= MAX_ANGULAR_MOMENTUM && am_c <= MAX_ANGULAR_MOMENTUM,
            "angular momentum ({am_a}|{am_c}) exceeds the supported maximum of {MAX_ANGULAR_MOMENTUM}"
        );
        assert!(
            shell_a.contraction_depth() > 0 && shell_c.contraction_depth() > 0,
            "every shell needs at least one primitive"
        );
        #[cfg(not(feature = "contracted"))]
        assert!(
            shell_a.contraction_depth() == 1 && shell_c.contraction_depth() == 1,
            "contracted shells require the `contracted` feature"
        );
        assert_eq!(
            output.len(),
            shell_a.size() * shell_c.size(),
            "output must hold one value per pair of cartesian components"
        );
        assert!(
            range_separation >= 0.0 && range_separation.is_finite(),
            "range separation must be finite and non-negative, got {range_separation}"
        );

        let am = am_a + am_c;

        log::trace!(
            "({am_a}|{am_c}) over {}x{} primitives, rcut = {range_separation}",
            shell_a.contraction_depth(),
            shell_c.contraction_depth(),
        );

        self.workspace.acquire(am);
        if am > 0 {
            output.fill(0.0);
        }

        let Workspace {
            boys,
            seeds,
            base,
            scratch,
        } = &mut self.workspace;

        for (primitive_a, primitive_c) in
            itertools::iproduct!(shell_a.primitives.iter(), shell_c.primitives.iter())
        {
            let pair = PrimitivePair::new(
                shell_a.center,
                primitive_a.exponent,
                primitive_a.coefficient,
                shell_c.center,
                primitive_c.exponent,
                primitive_c.coefficient,
                range_separation,
            );

            boys_function(am, pair.boys_argument, boys);
            pair.seeds(boys, seeds);

            for (total, seed) in base.iter_mut().zip(seeds.iter()) {
                *total += seed;
            }

            if am > 0 {
                self.expander.expand(am_a, am_c, &pair, seeds, scratch, output);
            }
        }

        if am == 0 {
            output[0] = base[0];
        }
    }

    /// The contracted seed integrals `[ss|ss]^(n)`, `n = 0..=am_a + am_c`, of the last call to
    /// [`compute`](Self::compute).
    pub fn base_integrals(&self) -> &[f64] {
        &self.workspace.base
    }
}

/// Computes one shell-pair block with a short-lived engine. Prefer a [`TwoCenterEngine`] when
/// evaluating many blocks.
pub fn compute_two_center_integral(
    shell_a: &Shell,
    shell_c: &Shell,
    range_separation: f64,
    output: &mut [f64],
) {
    TwoCenterEngine::new(ObaraSaika).compute(shell_a, shell_c, range_separation, output)
}

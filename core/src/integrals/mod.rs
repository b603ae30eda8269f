pub mod boys;
pub mod metric;
pub mod mmd;
pub mod obara_saika;
pub mod pair;
pub mod two_center;
mod workspace;

pub use metric::CoulombMetric;
pub use mmd::HermiteExpander;
pub use obara_saika::ObaraSaika;
pub use pair::{PrimitivePair, RecurrenceParameters};
pub use two_center::{compute_two_center_integral, TwoCenterEngine};

pub type DefaultExpander = ObaraSaika;

/// Highest angular momentum a single shell may carry.
pub const MAX_ANGULAR_MOMENTUM: usize = 6;

/// Expands the seed integrals `[ss|ss]^(n)` of one primitive pair into the Cartesian block
/// `(a|c)` for shells of angular momentum `am_a` and `am_c`.
pub trait AngularExpander {
    /// Adds the block of this primitive pair to `output`, laid out row-major with the
    /// components of shell A as the slow index.
    ///
    /// `seeds` holds `am_a + am_c + 1` values. `scratch` belongs to the caller and may be
    /// resized freely; its contents are meaningless between calls.
    fn expand(
        &self,
        am_a: usize,
        am_c: usize,
        pair: &PrimitivePair,
        seeds: &[f64],
        scratch: &mut Vec<f64>,
        output: &mut [f64],
    );
}

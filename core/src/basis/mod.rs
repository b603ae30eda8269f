mod cartesian;
mod functions;
mod set;

pub use cartesian::{canonical_index, cartesian_components, cartesian_exponents, shell_offset};
pub use functions::{Primitive, Shell};
pub use set::{AtomicBasis, BasisSet, ShellTemplate};

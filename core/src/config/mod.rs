pub use basis_set::ConfigBasisSet;
pub use molecule::ConfigMolecule;

mod basis_set;
mod molecule;

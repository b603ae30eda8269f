use nalgebra::Vector3;

/// Represents an atom in a molecule.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Atom {
    pub(crate) position: Vector3<f64>,
    pub(crate) atomic_number: u32,
}

impl Atom {
    pub fn new(atomic_number: u32, position: Vector3<f64>) -> Self {
        Self {
            position,
            atomic_number,
        }
    }

    /// Returns the charge of this nucleus
    pub fn nuclear_charge(&self) -> u32 {
        self.atomic_number
    }

    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }
}

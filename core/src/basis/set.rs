use std::{collections::HashMap, error::Error};

use nalgebra::Vector3;
use smallvec::SmallVec;

use crate::{atom::Atom, molecule::Molecule};

use super::{Primitive, Shell};

#[derive(Debug)]
pub struct BasisSet {
    atomic_mapping: HashMap<u32, AtomicBasis>,
}

impl BasisSet {
    /// Returns the basis of a given atom, if it exists.
    pub fn for_atom(&self, atom: &Atom) -> Option<&AtomicBasis> {
        self.atomic_mapping.get(&atom.atomic_number)
    }

    /// Places the shells of every atom of the molecule on that atom, in molecule order.
    pub fn shells_for(&self, molecule: &Molecule) -> Result<Vec<Shell>, Box<dyn Error>> {
        let mut shells = Vec::new();

        for atom in molecule.atoms() {
            let atomic_basis = self
                .for_atom(atom)
                .ok_or_else(|| format!("no basis for element {}", atom.atomic_number))?;

            shells.extend(atomic_basis.shells_at(atom.position));
        }

        Ok(shells)
    }

    /// Create a new basis set given mappings from atomic number to the basis of that element
    pub(crate) fn new(atomic_mapping: HashMap<u32, AtomicBasis>) -> Self {
        Self { atomic_mapping }
    }
}

/// Represents the shells of a single element, not yet placed on a center.
#[derive(Debug)]
pub struct AtomicBasis {
    pub(crate) shells: Vec<ShellTemplate>,
}

impl AtomicBasis {
    pub(crate) fn empty() -> Self {
        Self { shells: Vec::new() }
    }

    pub fn shell_templates(&self) -> &[ShellTemplate] {
        &self.shells
    }

    pub fn shells_at(&self, position: Vector3<f64>) -> impl Iterator<Item = Shell> + '_ {
        self.shells.iter().map(move |template| Shell {
            angular_momentum: template.angular_momentum,
            center: position,
            primitives: template.primitives.clone(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ShellTemplate {
    pub(crate) angular_momentum: u32,
    pub(crate) primitives: SmallVec<[Primitive; 6]>,
}

impl ShellTemplate {
    pub(crate) fn new(angular_momentum: u32) -> Self {
        Self {
            angular_momentum,
            primitives: SmallVec::new(),
        }
    }

    pub fn angular_momentum(&self) -> u32 {
        self.angular_momentum
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }
}

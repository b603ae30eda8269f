use std::error::Error;

use nalgebra::Vector3;
use serde::Deserialize;

use crate::{atom::Atom, molecule::Molecule};

/// Represents a full molecule in a config file.
/// A molecule is just a list of positioned atoms, each identified by its atomic number.
#[derive(Deserialize)]
pub struct ConfigMolecule(Vec<ConfigAtom>);

#[derive(Deserialize)]
struct ConfigAtom {
    element: u32,
    position: Vec<f64>,
}

impl TryFrom<ConfigMolecule> for Molecule {
    type Error = Box<dyn Error>;

    fn try_from(value: ConfigMolecule) -> Result<Self, Self::Error> {
        let ConfigMolecule(config_atoms) = value;

        let mut atoms = Vec::with_capacity(config_atoms.len());

        for (index, atom) in config_atoms.into_iter().enumerate() {
            let &[x, y, z] = atom.position.as_slice() else {
                return Err(format!(
                    "atom {index} has {} coordinates, expected x, y and z",
                    atom.position.len()
                )
                .into());
            };

            if atom.element == 0 {
                return Err(format!("atom {index} has atomic number 0").into());
            }

            atoms.push(Atom {
                position: Vector3::new(x, y, z),
                atomic_number: atom.element,
            });
        }

        Ok(Self { atoms })
    }
}

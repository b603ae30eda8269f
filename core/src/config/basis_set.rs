use std::{collections::HashMap, error::Error};

use serde::Deserialize;

use crate::basis::{AtomicBasis, BasisSet, Primitive, ShellTemplate};

/// A basis set in the Basis Set Exchange JSON schema.
#[derive(Deserialize)]
pub struct ConfigBasisSet {
    elements: HashMap<String, ConfigElectronicConfiguration>,
}

#[derive(Deserialize)]
struct ConfigElectronicConfiguration {
    electron_shells: Vec<ConfigElectronShell>,
}

#[derive(Deserialize)]
#[allow(unused)]
struct ConfigElectronShell {
    function_type: String,
    angular_momentum: Vec<u32>,
    exponents: Vec<String>,
    coefficients: Vec<Vec<String>>,
}

impl TryFrom<ConfigBasisSet> for BasisSet {
    type Error = Box<dyn Error>;

    fn try_from(value: ConfigBasisSet) -> Result<Self, Self::Error> {
        let mut atomic_mapping = HashMap::with_capacity(value.elements.len());

        for (element, configuration) in value.elements {
            let atomic_number = element
                .parse::<u32>()
                .map_err(|err| format!("invalid element key {element:?}: {err}"))?;

            let mut element_atomic_basis = AtomicBasis::empty();

            for electron_shell in &configuration.electron_shells {
                let exponents = electron_shell
                    .exponents
                    .iter()
                    .map(|exponent| exponent.parse::<f64>())
                    .collect::<Result<Vec<_>, _>>()?;

                for (index, coefficients) in electron_shell.coefficients.iter().enumerate() {
                    let angular_momentum = shell_angular_momentum(electron_shell, index)?;

                    if coefficients.len() != exponents.len() {
                        return Err(format!(
                            "element {atomic_number}: {} coefficients for {} exponents",
                            coefficients.len(),
                            exponents.len()
                        )
                        .into());
                    }

                    let mut shell = ShellTemplate::new(angular_momentum);

                    for (&exponent, coefficient) in exponents.iter().zip(coefficients) {
                        let coefficient = coefficient.parse::<f64>()?;
                        let norm = Primitive::norm(exponent, angular_momentum);

                        shell.primitives.push(Primitive {
                            exponent,
                            coefficient: coefficient * norm,
                        });
                    }

                    element_atomic_basis.shells.push(shell);
                }
            }

            log::debug!(
                "element {atomic_number}: {} shells",
                element_atomic_basis.shells.len()
            );
            atomic_mapping.insert(atomic_number, element_atomic_basis);
        }

        Ok(Self::new(atomic_mapping))
    }
}

// A shell listing several angular momenta (e.g. Pople "sp" shells) pairs the i-th coefficient
// row with the i-th angular momentum. A single angular momentum with several rows is a general
// contraction: every row is its own shell.
fn shell_angular_momentum(shell: &ConfigElectronShell, row: usize) -> Result<u32, Box<dyn Error>> {
    match shell.angular_momentum.as_slice() {
        [] => Err("electron shell without angular momentum".into()),
        &[angular_momentum] => Ok(angular_momentum),
        angular_momenta => angular_momenta.get(row).copied().ok_or_else(|| {
            format!(
                "coefficient row {row} has no matching angular momentum in {angular_momenta:?}"
            )
            .into()
        }),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    use crate::{
        atom::Atom,
        basis::{BasisSet, Primitive},
        molecule::Molecule,
    };

    use super::ConfigBasisSet;

    const B_STO_3G: &str = r#"{"molssi_bse_schema":{"schema_type":"complete","schema_version":"0.1"},"revision_description":"DatafromGaussian09","revision_date":"2018-06-19","elements":{"1":{"electron_shells":[{"function_type":"gto","region":"","angular_momentum":[0],"exponents":["0.3425250914E+01","0.6239137298E+00","0.1688554040E+00"],"coefficients":[["0.1543289673E+00","0.5353281423E+00","0.4446345422E+00"]]}],"references":[{"reference_description":"STO-3GMinimalBasis(3functions/AO)","reference_keys":["hehre1969a"]}]},"6":{"electron_shells":[{"function_type":"gto","region":"","angular_momentum":[0],"exponents":["0.7161683735E+02","0.1304509632E+02","0.3530512160E+01"],"coefficients":[["0.1543289673E+00","0.5353281423E+00","0.4446345422E+00"]]},{"function_type":"gto","region":"","angular_momentum":[0,1],"exponents":["0.2941249355E+01","0.6834830964E+00","0.2222899159E+00"],"coefficients":[["-0.9996722919E-01","0.3995128261E+00","0.7001154689E+00"],["0.1559162750E+00","0.6076837186E+00","0.3919573931E+00"]]}],"references":[{"reference_description":"STO-3GMinimalBasis(3functions/AO)","reference_keys":["hehre1969a"]}]}},"version":"1","function_types":["gto"],"names":["STO-3G"],"tags":[],"family":"sto","description":"STO-3GMinimalBasis(3functions/AO)","role":"orbital","auxiliaries":{},"name":"STO-3G"}"#;

    const B_GENERAL: &str = r#"{"elements":{"2":{"electron_shells":[{"function_type":"gto","angular_momentum":[0],"exponents":["38.36","5.77","1.24"],"coefficients":[["0.0238","0.1549","0.4700"],["0.0","0.0","1.0"]]},{"function_type":"gto","angular_momentum":[2],"exponents":["1.275"],"coefficients":[["1.0"]]}]}}}"#;

    #[test]
    fn sto_3g_shells() {
        let config: ConfigBasisSet = serde_json::from_str(B_STO_3G).unwrap();
        let basis_set = BasisSet::try_from(config).unwrap();

        let carbon = basis_set
            .for_atom(&Atom::new(6, Vector3::zeros()))
            .unwrap()
            .shell_templates();
        let angular = carbon
            .iter()
            .map(|shell| shell.angular_momentum())
            .collect::<Vec<_>>();
        assert_eq!(angular, [0, 0, 1]);

        let p = carbon[2].primitives();
        assert_eq!(p.len(), 3);
        assert_relative_eq!(
            p[0].coefficient,
            0.1559162750 * Primitive::norm(2.941249355, 1),
            epsilon = 1e-14
        );
    }

    #[test]
    fn general_contraction() {
        let config: ConfigBasisSet = serde_json::from_str(B_GENERAL).unwrap();
        let basis_set = BasisSet::try_from(config).unwrap();

        let helium = basis_set
            .for_atom(&Atom::new(2, Vector3::zeros()))
            .unwrap()
            .shell_templates();
        let angular = helium
            .iter()
            .map(|shell| shell.angular_momentum())
            .collect::<Vec<_>>();
        assert_eq!(angular, [0, 0, 2]);
    }

    #[test]
    fn shells_for_molecule() {
        let config: ConfigBasisSet = serde_json::from_str(B_STO_3G).unwrap();
        let basis_set = BasisSet::try_from(config).unwrap();

        let methylidyne = Molecule::new(vec![
            Atom::new(6, Vector3::zeros()),
            Atom::new(1, Vector3::new(0.0, 0.0, 2.1)),
        ]);

        let shells = basis_set.shells_for(&methylidyne).unwrap();
        assert_eq!(shells.len(), 4);
        assert_eq!(shells[3].center, Vector3::new(0.0, 0.0, 2.1));
        assert_eq!(shells.iter().map(|shell| shell.size()).sum::<usize>(), 6);
    }

    #[test]
    fn missing_element() {
        let config: ConfigBasisSet = serde_json::from_str(B_STO_3G).unwrap();
        let basis_set = BasisSet::try_from(config).unwrap();

        let neon = Molecule::new(vec![Atom::new(10, Vector3::zeros())]);
        assert!(basis_set.shells_for(&neon).is_err());
    }
}

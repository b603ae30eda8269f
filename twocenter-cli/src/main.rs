use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use twocenter::{
    basis::{BasisSet, Shell},
    config::{ConfigBasisSet, ConfigMolecule},
    integrals::{CoulombMetric, ObaraSaika, TwoCenterEngine},
    molecule::Molecule,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the integral block of a single pair of shells
    Pair {
        /// A JSON file with the shells `a` and `c` and the `range_separation`
        #[arg(long, short)]
        input: PathBuf,
    },
    /// Build the two-center Coulomb metric of a basis placed on a molecule
    Metric {
        /// The basis set, in Basis Set Exchange JSON format
        #[arg(long, short)]
        basis_set: PathBuf,
        /// A path to the molecule the basis is placed on
        #[arg(long, short)]
        molecule: PathBuf,
        /// Range-separation parameter; zero selects the full Coulomb interaction
        #[arg(long, short, default_value_t = 0.0)]
        range_separation: f64,
        /// Where to write the metric as a JSON list of rows
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Deserialize)]
struct PairInput {
    a: Shell,
    c: Shell,
    #[serde(default)]
    range_separation: f64,
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> anyhow::Result<T> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("failed to parse {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args: Args = Args::parse();

    match args.command {
        Command::Pair { input } => {
            let PairInput {
                a,
                c,
                range_separation,
            } = read_json(&input)?;

            let mut output = vec![0.0; a.size() * c.size()];
            TwoCenterEngine::new(ObaraSaika).compute(&a, &c, range_separation, &mut output);

            println!(
                "({}|{}) block, range separation {range_separation}",
                a.angular_momentum, c.angular_momentum
            );
            for row in output.chunks(c.size()) {
                println!("{row:12.8?}");
            }
        }

        Command::Metric {
            basis_set,
            molecule,
            range_separation,
            output,
        } => {
            let basis_set = BasisSet::try_from(read_json::<ConfigBasisSet>(&basis_set)?)
                .map_err(|err| anyhow!("invalid basis set: {err}"))?;
            let molecule = Molecule::try_from(read_json::<ConfigMolecule>(&molecule)?)
                .map_err(|err| anyhow!("invalid molecule: {err}"))?;
            let shells = basis_set
                .shells_for(&molecule)
                .map_err(|err| anyhow!("{err}"))?;

            log::info!(
                "{} atoms, {} shells, range separation {range_separation}",
                molecule.atoms().len(),
                shells.len()
            );

            let start = Instant::now();
            let metric = CoulombMetric::from_shells(&shells, range_separation, ObaraSaika);

            println!(
                "coulomb metric of {} functions built in {:0.2?}",
                metric.size(),
                start.elapsed()
            );
            println!("trace: {:.10}", metric.matrix().trace());

            if let Some(path) = output {
                let rows: Vec<Vec<f64>> = metric
                    .matrix()
                    .row_iter()
                    .map(|row| row.iter().copied().collect())
                    .collect();

                let file = File::create(&path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                serde_json::to_writer(BufWriter::new(file), &rows)?;
            }
        }
    }

    Ok(())
}

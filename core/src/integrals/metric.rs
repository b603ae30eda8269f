use std::time::Instant;

use nalgebra::DMatrix;

use crate::basis::Shell;

use super::{AngularExpander, TwoCenterEngine};

/// Shell pairs handed to one worker at a time.
const CHUNK_SIZE: usize = 64;

/// The two-center Coulomb metric `(P|Q)` over every Cartesian function of a list of shells,
/// as used in resolution-of-identity fitting.
#[derive(Clone, Debug)]
pub struct CoulombMetric {
    matrix: DMatrix<f64>,
    /// index of the first function of each shell, plus the total size at the end
    shell_offsets: Vec<usize>,
}

impl CoulombMetric {
    /// Computes the metric over `shells`. Only the upper triangle of shell pairs is evaluated;
    /// the lower triangle is filled by symmetry.
    ///
    /// This method utilizes parallel processing with the Rayon library when the `rayon`
    /// feature is enabled, with one engine per chunk of shell pairs.
    pub fn from_shells<E>(shells: &[Shell], range_separation: f64, expander: E) -> Self
    where
        E: AngularExpander + Clone + Send + Sync,
    {
        let start = Instant::now();

        let mut shell_offsets = Vec::with_capacity(shells.len() + 1);
        let mut size = 0;
        for shell in shells {
            shell_offsets.push(size);
            size += shell.size();
        }
        shell_offsets.push(size);

        let mut matrix = DMatrix::zeros(size, size);

        let pairs: Vec<(usize, usize)> = (0..shells.len())
            .flat_map(|i| (i..shells.len()).map(move |j| (i, j)))
            .collect();

        let compute_chunk = |chunk: &[(usize, usize)]| {
            let mut engine = TwoCenterEngine::new(expander.clone());
            chunk
                .iter()
                .map(|&(i, j)| {
                    let mut block = vec![0.0; shells[i].size() * shells[j].size()];
                    engine.compute(&shells[i], &shells[j], range_separation, &mut block);
                    log::trace!("metric block ({i}|{j}) done");
                    (i, j, block)
                })
                .collect::<Vec<_>>()
        };

        #[cfg(feature = "rayon")]
        let blocks: Vec<_> = {
            use rayon::iter::{ParallelBridge, ParallelIterator};

            pairs
                .chunks(CHUNK_SIZE)
                .par_bridge()
                .map(compute_chunk)
                .collect::<Vec<_>>() // iterators are lazy - we collect to evaluate all elements
                .into_iter()
                .flatten()
                .collect()
        };

        #[cfg(not(feature = "rayon"))]
        let blocks: Vec<_> = pairs
            .chunks(CHUNK_SIZE)
            .flat_map(compute_chunk)
            .collect();

        for (i, j, block) in blocks {
            let (row, column) = (shell_offsets[i], shell_offsets[j]);
            let (rows, columns) = (shells[i].size(), shells[j].size());

            for (k, l) in itertools::iproduct!(0..rows, 0..columns) {
                let value = block[k * columns + l];
                matrix[(row + k, column + l)] = value;
                matrix[(column + l, row + k)] = value;
            }
        }

        log::debug!(
            "coulomb metric: {} shells, {size} functions, {} shell pairs in {:?}",
            shells.len(),
            pairs.len(),
            start.elapsed()
        );

        Self {
            matrix,
            shell_offsets,
        }
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// The number of Cartesian functions, i.e. the side length of the matrix.
    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }

    /// The index of the first function of every shell, followed by [`size`](Self::size).
    pub fn shell_offsets(&self) -> &[usize] {
        &self.shell_offsets
    }

    pub fn into_matrix(self) -> DMatrix<f64> {
        self.matrix
    }
}

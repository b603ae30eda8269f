//! Cartesian component bookkeeping shared by the recurrences and the result packer.
//!
//! Components of a shell with angular momentum `L` are ordered by descending x
//! exponent, then descending y exponent:
//!
//! `(L,0,0), (L-1,1,0), (L-1,0,1), (L-2,2,0), ..., (0,0,L)`
//!
//! so a d shell reads `xx, xy, xz, yy, yz, zz`.

/// Number of Cartesian components of a shell with angular momentum `l`: (l+1)(l+2)/2
#[inline(always)]
pub const fn cartesian_components(l: usize) -> usize {
    (l + 1) * (l + 2) / 2
}

/// Number of Cartesian components of all shells with angular momentum below `l`.
#[inline(always)]
pub const fn shell_offset(l: usize) -> usize {
    l * (l + 1) * (l + 2) / 6
}

/// Position of the component `(i, j, k)` inside its own shell.
#[inline(always)]
pub const fn canonical_index([_, j, k]: [usize; 3]) -> usize {
    let n = j + k;
    n * (n + 1) / 2 + k
}

/// Iterates the `(i, j, k)` exponents of a shell in canonical order.
pub fn cartesian_exponents(l: usize) -> impl Iterator<Item = [usize; 3]> {
    (0..=l)
        .rev()
        .flat_map(move |i| (0..=l - i).rev().map(move |j| [i, j, l - i - j]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_counts() {
        let counts = (0..=6).map(cartesian_components).collect::<Vec<_>>();
        assert_eq!(counts, [1, 3, 6, 10, 15, 21, 28]);

        for l in 0..=6 {
            assert_eq!(cartesian_exponents(l).count(), cartesian_components(l));
            assert_eq!(shell_offset(l + 1) - shell_offset(l), cartesian_components(l));
        }
    }

    #[test]
    fn d_shell_order() {
        let d = cartesian_exponents(2).collect::<Vec<_>>();
        assert_eq!(
            d,
            [[2, 0, 0], [1, 1, 0], [1, 0, 1], [0, 2, 0], [0, 1, 1], [0, 0, 2]]
        );
    }

    #[test]
    fn canonical_index_matches_iteration_order() {
        for l in 0..=6 {
            for (position, exponents) in cartesian_exponents(l).enumerate() {
                assert_eq!(
                    canonical_index(exponents),
                    position,
                    "wrong index for {exponents:?}"
                );
            }
        }
    }
}

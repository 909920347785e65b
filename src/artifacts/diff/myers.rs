//! Myers' shortest edit script
//!
//! Greedy forward search over diagonals `k = x - y`, keeping the furthest
//! reaching `x` for every `k` at each edit distance `d`. Walking the saved
//! frontiers back from the end recovers one snake per edit distance; the
//! snakes are the matching blocks of the alignment.

use crate::artifacts::diff::edit_script::{DiffAlgorithm, Match, OpCode, opcodes_from_blocks};
use crate::artifacts::diff::error::DiffError;
use derive_new::new;

/// Furthest reaching `x` per diagonal, indexed by `k + n + m`
type Frontier = Vec<isize>;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq> MyersDiff<'d, T> {
    fn max_distance(&self) -> isize {
        (self.a.len() + self.b.len()) as isize
    }

    fn diagonal(&self, k: isize) -> usize {
        (k + self.max_distance()) as usize
    }

    /// Whether diagonal `k` at distance `d` is entered from `k + 1` (an insertion)
    fn enters_by_insertion(&self, frontier: &Frontier, d: isize, k: isize) -> bool {
        k == -d || (k != d && frontier[self.diagonal(k - 1)] < frontier[self.diagonal(k + 1)])
    }

    /// Length of the run of equal items starting at `(x, y)`
    fn common_run(&self, x: isize, y: isize) -> isize {
        if x < 0 || y < 0 {
            return 0;
        }

        self.a
            .iter()
            .skip(x as usize)
            .zip(self.b.iter().skip(y as usize))
            .take_while(|(a, b)| a == b)
            .count() as isize
    }

    /// Frontiers as they stood before each edit distance, up to the one reaching the end
    fn frontiers(&self) -> Vec<Frontier> {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let mut frontier = vec![0; 2 * self.max_distance() as usize + 2];
        let mut frontiers = Vec::new();

        for d in 0..=self.max_distance() {
            frontiers.push(frontier.clone());

            for k in (-d..=d).step_by(2) {
                let x = if self.enters_by_insertion(&frontier, d, k) {
                    frontier[self.diagonal(k + 1)]
                } else {
                    frontier[self.diagonal(k - 1)] + 1
                };
                let x = x + self.common_run(x, x - k);
                frontier[self.diagonal(k)] = x;

                if x >= n && x - k >= m {
                    return frontiers;
                }
            }
        }

        frontiers
    }

    /// Snakes of the shortest edit path in order, plus the end sentinel
    pub fn matching_blocks(&self) -> Vec<Match> {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let mut blocks = Vec::new();

        for (d, frontier) in self.frontiers().iter().enumerate().rev() {
            let (d, k) = (d as isize, x - y);

            let prev_k = if self.enters_by_insertion(frontier, d, k) { k + 1 } else { k - 1 };
            let prev_x = frontier[self.diagonal(prev_k)];

            // the snake on diagonal k starts right after the edit from prev_k
            let snake_x = if prev_k == k - 1 { prev_x + 1 } else { prev_x };
            if x > snake_x {
                blocks.push(Match::new(
                    snake_x as usize,
                    (snake_x - k) as usize,
                    (x - snake_x) as usize,
                ));
            }

            (x, y) = (prev_x, prev_x - prev_k);
        }

        // consecutive snakes are separated by an edit, so they never merge
        blocks.reverse();
        blocks.push(Match::new(self.a.len(), self.b.len(), 0));
        blocks
    }
}

impl<T: Eq> DiffAlgorithm<T> for MyersDiff<'_, T> {
    fn opcodes(&self) -> Result<Vec<OpCode>, DiffError> {
        Ok(opcodes_from_blocks(&self.matching_blocks()))
    }
}

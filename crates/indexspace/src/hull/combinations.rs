//! Lexicographic k-combinations of `0..n`.

/// Iterator over ascending index tuples `[i_0 < i_1 < ... < i_{k-1}]`.
///
/// Yields nothing when `k == 0` or `k > n`.
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    idxs: Vec<usize>,
    done: bool,
}

pub fn combinations(n: usize, k: usize) -> Combinations {
    Combinations {
        n,
        idxs: (0..k).collect(),
        done: k == 0 || k > n,
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let out = self.idxs.clone();
        let k = self.idxs.len();
        // rightmost slot that can still move
        match (0..k).rev().find(|&i| self.idxs[i] != i + self.n - k) {
            Some(i) => {
                self.idxs[i] += 1;
                for j in i + 1..k {
                    self.idxs[j] = self.idxs[j - 1] + 1;
                }
            }
            None => self.done = true,
        }
        Some(out)
    }
}

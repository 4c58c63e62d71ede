//! Stirling numbers of the second kind, with the factorials needed to
//! count ordered partitions.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// A lazily grown table of Stirling numbers of the second kind.
///
/// Row `n` holds `S(n, 0) ..= S(n, n)`.  Rows are filled bottom up from
/// `S(0, 0) = 1`, so asking for a large `n` never recurses.  Entries are
/// never invalidated, so one cache can serve any number of queries.
#[derive(Debug, Clone)]
pub struct StirlingCache {
    rows: Vec<Vec<BigUint>>,
    facts: Vec<BigUint>,
}

impl StirlingCache {
    pub fn new() -> StirlingCache {
        StirlingCache {
            rows: vec![vec![BigUint::one()]],
            facts: vec![BigUint::one()],
        }
    }

    /// The number of ways to partition `n` labeled items into exactly `k`
    /// non-empty unlabeled subsets.
    pub fn stirling(&mut self, n: u32, k: u32) -> BigUint {
        if k > n {
            return BigUint::zero();
        }
        self.grow_rows(n);
        self.rows[n as usize][k as usize].clone()
    }

    /// `n!`
    pub fn factorial(&mut self, n: u32) -> BigUint {
        self.grow_facts(n);
        self.facts[n as usize].clone()
    }

    /// `C(n, k)`, the number of `k` element subsets of an `n` element set.
    pub fn binomial(&mut self, n: u32, k: u32) -> BigUint {
        if k > n {
            return BigUint::zero();
        }
        self.grow_facts(n);
        let n = n as usize;
        let k = k as usize;
        &self.facts[n] / (&self.facts[k] * &self.facts[n - k])
    }

    /// The number of partitions of an `n` element set into any number of
    /// blocks.
    pub fn bell(&mut self, n: u32) -> BigUint {
        self.grow_rows(n);
        self.rows[n as usize].iter().sum()
    }

    /// Extend the table so that row `n` exists.
    fn grow_rows(&mut self, n: u32) {
        let n = n as usize;
        while self.rows.len() <= n {
            let row = {
                let prev = &self.rows[self.rows.len() - 1];
                let m = prev.len();
                let mut row = Vec::with_capacity(m + 1);
                row.push(BigUint::zero());
                for k in 1..m {
                    row.push(&prev[k - 1] + &prev[k] * BigUint::from(k));
                }
                // S(m, m) only has the first term, as S(m - 1, m) is zero.
                row.push(prev[m - 1].clone());
                row
            };
            trace!("stirling: row {} computed", self.rows.len());
            self.rows.push(row);
        }
    }

    fn grow_facts(&mut self, n: u32) {
        let n = n as usize;
        while self.facts.len() <= n {
            let i = self.facts.len();
            let next = &self.facts[i - 1] * BigUint::from(i);
            self.facts.push(next);
        }
    }
}

impl Default for StirlingCache {
    fn default() -> StirlingCache {
        StirlingCache::new()
    }
}

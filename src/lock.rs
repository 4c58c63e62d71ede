//! Simplex lock combination counting.
//!
//! A simplex lock has a row of buttons.  A combination is entered by
//! pressing groups of buttons in sequence, where all of the buttons in a
//! group are pressed together, and no button is pressed twice.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

use crate::stirling::StirlingCache;

/// The number of buttons on the locks sold in most places.
pub const DEFAULT_BUTTONS: u32 = 5;

/// A lock with a given number of buttons.  The lock owns the table used to
/// count its combinations, so repeated queries are cheap.
#[derive(Debug, Clone)]
pub struct Lock {
    buttons: u32,
    cache: StirlingCache,
}

impl Lock {
    pub fn new(buttons: u32) -> Lock {
        Lock {
            buttons,
            cache: StirlingCache::new(),
        }
    }

    pub fn buttons(&self) -> u32 {
        self.buttons
    }

    /// Count the combinations that press every button exactly once.
    ///
    /// Splitting the buttons into `i` groups can be done in `S(n, i)` ways,
    /// and each split can be pressed in `i!` orders.  A lock with no buttons
    /// has no combinations.
    pub fn count_combinations(&mut self) -> BigUint {
        let total = self.ordered_partitions(self.buttons);
        debug!("lock: {} buttons, {} combinations", self.buttons, total);
        total
    }

    /// Count the combinations that press any non-empty subset of the
    /// buttons, each at most once.
    pub fn count_partial_combinations(&mut self) -> BigUint {
        let n = self.buttons;
        let mut total = BigUint::zero();
        for k in 1..=n {
            let choose = self.cache.binomial(n, k);
            total += self.ordered_partitions(k) * choose;
        }
        debug!("lock: {} buttons, {} partial combinations", n, total);
        total
    }

    /// Seconds needed to brute force the lock, trying one combination every
    /// `seconds_per_guess`.  Unless `worst_case` is set, the right
    /// combination is expected to turn up halfway through.
    ///
    /// A count too large for an `f64` gives an infinite time.
    pub fn brute_force_time(&mut self, seconds_per_guess: f64, worst_case: bool) -> f64 {
        let total = self.count_combinations().to_f64().unwrap_or(f64::INFINITY);
        let guesses = if worst_case { total } else { total * 0.5 };
        guesses * seconds_per_guess
    }

    /// Ordered partitions of a `k` element set into non-empty blocks.
    fn ordered_partitions(&mut self, k: u32) -> BigUint {
        let mut total = BigUint::zero();
        for i in 1..=k {
            total += self.cache.factorial(i) * self.cache.stirling(k, i);
        }
        total
    }
}

impl Default for Lock {
    fn default() -> Lock {
        Lock::new(DEFAULT_BUTTONS)
    }
}

#[cfg(test)]
mod tests {
    use super::Lock;
    use num_bigint::BigUint;

    fn count(n: u32) -> BigUint {
        Lock::new(n).count_combinations()
    }

    #[test]
    fn small_locks() {
        assert_eq!(count(0), BigUint::from(0u32));
        assert_eq!(count(1), BigUint::from(1u32));
        // {12}, {1}{2}, {2}{1}
        assert_eq!(count(2), BigUint::from(3u32));
        assert_eq!(count(3), BigUint::from(13u32));
    }

    #[test]
    fn ordered_bell_numbers() {
        let expect: [u64; 11] = [0, 1, 3, 13, 75, 541, 4683, 47293, 545835, 7087261, 102247563];
        for (n, &e) in expect.iter().enumerate() {
            assert_eq!(count(n as u32), BigUint::from(e), "{} buttons", n);
        }
    }

    #[test]
    fn strictly_increasing() {
        let mut prev = count(1);
        for n in 2..40 {
            let next = count(n);
            assert!(next > prev, "{} buttons", n);
            prev = next;
        }
    }

    #[test]
    fn large_counts_are_exact() {
        let big = count(30);
        assert!(big > BigUint::from(u64::MAX));
        // Fubini(20)
        assert_eq!(
            count(20),
            "2677687796244384203115".parse::<BigUint>().unwrap()
        );
    }

    #[test]
    fn repeated_queries_agree() {
        let mut lock = Lock::new(12);
        let first = lock.count_combinations();
        assert_eq!(lock.count_combinations(), first);
        assert_eq!(first, count(12));
    }

    #[test]
    fn partial_combinations() {
        let expect: [u32; 5] = [0, 1, 5, 25, 149];
        for (n, &e) in expect.iter().enumerate() {
            let mut lock = Lock::new(n as u32);
            assert_eq!(lock.count_partial_combinations(), BigUint::from(e));
        }
    }

    #[test]
    fn partial_is_twice_full_less_one() {
        for n in 1..25 {
            let mut lock = Lock::new(n);
            let full = lock.count_combinations();
            let partial = lock.count_partial_combinations();
            assert_eq!(partial + 1u32, full * 2u32, "{} buttons", n);
        }
    }

    #[test]
    fn default_lock() {
        let mut lock = Lock::default();
        assert_eq!(lock.buttons(), 5);
        assert_eq!(lock.count_combinations(), BigUint::from(541u32));
    }

    #[test]
    fn average_is_half_of_worst() {
        for n in 1..15 {
            for &s in &[0.25, 1.0, 3.5, 60.0] {
                let mut lock = Lock::new(n);
                let worst = lock.brute_force_time(s, true);
                let avg = lock.brute_force_time(s, false);
                assert_eq!(worst, 2.0 * avg, "{} buttons at {}s", n, s);
            }
        }
    }

    #[test]
    fn brute_force_three_buttons() {
        let mut lock = Lock::new(3);
        assert_eq!(lock.brute_force_time(1.0, false), 6.5);
        assert_eq!(lock.brute_force_time(1.0, true), 13.0);
        assert_eq!(lock.brute_force_time(2.0, false), 13.0);
        assert_eq!(Lock::new(0).brute_force_time(10.0, true), 0.0);
    }

    #[test]
    fn brute_force_overflows_to_infinity() {
        let mut lock = Lock::new(400);
        assert!(lock.brute_force_time(1.0, true).is_infinite());
    }
}

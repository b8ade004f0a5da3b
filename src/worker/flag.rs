//! Shared stop condition for one search.

use std::sync::atomic::{AtomicBool, Ordering};

/// Raised once a result is claimed (or the search is cancelled).
///
/// Transitions false -> true exactly once. Workers poll it with a relaxed
/// load every iteration; a stale read costs at most one extra attempt.
#[derive(Debug, Default)]
pub struct StopFlag(AtomicBool);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the right to publish a result. Only the first caller gets `true`.
    #[inline]
    pub fn try_claim(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Stops the search without publishing anything.
    pub fn raise(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[test]
    fn test_single_claim() {
        let flag = StopFlag::new();
        assert!(!flag.is_raised());
        assert!(flag.try_claim());
        assert!(flag.is_raised());
        assert!(!flag.try_claim());
    }

    #[test]
    fn test_raise_blocks_claims() {
        let flag = StopFlag::new();
        flag.raise();
        assert!(flag.is_raised());
        assert!(!flag.try_claim());
    }

    #[test]
    fn test_concurrent_claims_have_one_winner() {
        for _ in 0..200 {
            let flag = Arc::new(StopFlag::new());
            let barrier = Arc::new(Barrier::new(8));
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let flag = flag.clone();
                    let barrier = barrier.clone();
                    thread::spawn(move || {
                        barrier.wait();
                        flag.try_claim()
                    })
                })
                .collect();
            let winners = handles
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|&won| won)
                .count();
            assert_eq!(winners, 1);
        }
    }
}

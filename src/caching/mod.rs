//! # Caching Module
//!
//! This module provides memoization of fitness evaluations. The mutation pass
//! rescores a child after every flipped bit and elites are carried forward
//! round after round, so the same bit sequences are scored again and again.
//! For expensive fitness functions wrapping the challenge in a
//! `CachedChallenge` avoids the redundant work.
//!
//! Fitness functions are pure functions of the bits, which is what makes the
//! cache sound.
//!
//! ## Example
//!
//! ```rust
//! use bitga::challenge::Challenge;
//!
//! let challenge = (|bits: &[bool]| bits.iter().filter(|bit| **bit).count() as f64).with_cache();
//!
//! assert_eq!(challenge.score(&[true, true]).unwrap(), 2.0);
//! assert_eq!(challenge.score(&[true, true]).unwrap(), 2.0);
//! assert_eq!(challenge.cache_size(), 1);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::challenge::Challenge;
use crate::error::Result;

/// A wrapper around a challenge that caches fitness evaluations.
///
/// Clones share the same cache. Failed evaluations are not cached, so a
/// failing fitness function fails again on the next request.
#[derive(Debug, Clone)]
pub struct CachedChallenge<C>
where
    C: Challenge,
{
    /// The wrapped challenge
    challenge: C,
    /// The cache of fitness evaluations, keyed by bit sequence
    cache: Arc<Mutex<HashMap<Vec<bool>, f64>>>,
}

impl<C> CachedChallenge<C>
where
    C: Challenge,
{
    /// Creates a new cached challenge wrapping the given challenge.
    pub fn new(challenge: C) -> Self {
        Self {
            challenge,
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a new cached challenge with a pre-populated cache.
    pub fn with_cache(challenge: C, cache: HashMap<Vec<bool>, f64>) -> Self {
        Self {
            challenge,
            cache: Arc::new(Mutex::new(cache)),
        }
    }

    /// Returns a reference to the wrapped challenge.
    pub fn inner(&self) -> &C {
        &self.challenge
    }

    /// Returns the number of cached fitness evaluations.
    pub fn cache_size(&self) -> usize {
        self.lock().len()
    }

    /// Clears the cache.
    pub fn clear_cache(&self) {
        self.lock().clear();
    }

    /// Returns a copy of the cache.
    pub fn get_cache(&self) -> HashMap<Vec<bool>, f64> {
        self.lock().clone()
    }

    // Entries are inserted whole, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<Vec<bool>, f64>> {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<C> Challenge for CachedChallenge<C>
where
    C: Challenge,
{
    fn score(&self, bits: &[bool]) -> Result<f64> {
        if let Some(score) = self.lock().get(bits) {
            return Ok(*score);
        }

        let score = self.challenge.score(bits)?;
        self.lock().insert(bits.to_vec(), score);

        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneticError;
    use std::cell::Cell;
    use std::io;

    struct CountingChallenge {
        evaluations: Cell<usize>,
    }

    impl Challenge for CountingChallenge {
        fn score(&self, bits: &[bool]) -> Result<f64> {
            self.evaluations.set(self.evaluations.get() + 1);
            Ok(bits.iter().filter(|bit| **bit).count() as f64)
        }
    }

    struct FailingChallenge;

    impl Challenge for FailingChallenge {
        fn score(&self, _bits: &[bool]) -> Result<f64> {
            Err(GeneticError::fitness(io::Error::new(
                io::ErrorKind::Other,
                "scoring backend unavailable",
            )))
        }
    }

    #[test]
    fn test_cached_challenge() {
        let cached = CachedChallenge::new(CountingChallenge {
            evaluations: Cell::new(0),
        });

        assert_eq!(cached.score(&[true, false, true]).unwrap(), 2.0);
        assert_eq!(cached.inner().evaluations.get(), 1);
        assert_eq!(cached.cache_size(), 1);

        // Same bits are served from the cache
        assert_eq!(cached.score(&[true, false, true]).unwrap(), 2.0);
        assert_eq!(cached.inner().evaluations.get(), 1);

        // Different bits are evaluated
        assert_eq!(cached.score(&[true, true, true]).unwrap(), 3.0);
        assert_eq!(cached.inner().evaluations.get(), 2);
        assert_eq!(cached.cache_size(), 2);

        cached.clear_cache();
        assert_eq!(cached.cache_size(), 0);

        assert_eq!(cached.score(&[true, false, true]).unwrap(), 2.0);
        assert_eq!(cached.inner().evaluations.get(), 3);
    }

    #[test]
    fn test_with_prepopulated_cache() {
        let mut cache = HashMap::new();
        cache.insert(vec![true, true], 100.0);

        let cached = CachedChallenge::with_cache(
            CountingChallenge {
                evaluations: Cell::new(0),
            },
            cache,
        );

        assert_eq!(cached.score(&[true, true]).unwrap(), 100.0);
        assert_eq!(cached.inner().evaluations.get(), 0);
        assert_eq!(cached.get_cache().get(&vec![true, true]), Some(&100.0));
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cached = CachedChallenge::new(FailingChallenge);

        assert!(cached.score(&[true]).is_err());
        assert!(cached.score(&[true]).is_err());
        assert_eq!(cached.cache_size(), 0);
    }

    #[test]
    fn test_clones_share_cache() {
        let cached = (|bits: &[bool]| bits.len() as f64).with_cache();
        let clone = cached.clone();

        cached.score(&[false, false]).unwrap();
        assert_eq!(clone.cache_size(), 1);
    }
}

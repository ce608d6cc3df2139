//! Engine-owned move-set cache.

use std::collections::HashMap;
use std::sync::Arc;

use super::types::{Move, NeighborhoodPolicy};

/// Caches move sets per problem instance.
///
/// The key is the instance identity `(name, variable count)`. A move set
/// depends only on instance size, so one entry serves every candidate
/// of a run.
#[derive(Debug, Default)]
pub struct MoveSetCache {
    entries: HashMap<(String, usize), Arc<[Move]>>,
}

impl MoveSetCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached move set for the instance, generating it on first use.
    pub fn get_or_generate<V, N: NeighborhoodPolicy<V> + ?Sized>(
        &mut self,
        instance: &str,
        size: usize,
        policy: &N,
    ) -> Arc<[Move]> {
        let entry = self
            .entries
            .entry((instance.to_owned(), size))
            .or_insert_with(|| {
                log::debug!(
                    "generating {} move set for {instance} ({size} variables)",
                    policy.name()
                );
                policy.generate_moves(size).into()
            });
        Arc::clone(entry)
    }

    /// Number of cached instances.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached move set.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::domain::{dog::Dog, errors::DomainError};

/// Errors reported by the collection substrate itself, kept separate from the
/// domain taxonomy so constraint violations stay distinguishable from caller
/// mistakes.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ConstraintViolation(detail) => DomainError::Conflict(detail),
        }
    }
}

/// In-memory collection of dog records with a unique index on `name`.
///
/// Committed rows keep insertion order, which is what makes the repository's
/// sort stable with respect to the original order of equal keys. Writes are
/// staged first and applied as a whole batch by [`commit`](Self::commit).
#[derive(Debug, Default)]
pub struct DogCollection {
    committed: Vec<Dog>,
    index: HashMap<String, usize>,
    staged: Vec<Dog>,
}

impl DogCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all committed rows in insertion order.
    pub fn scan(&self) -> Vec<Dog> {
        self.committed.clone()
    }

    pub fn get(&self, name: &str) -> Option<&Dog> {
        self.index.get(name).map(|slot| &self.committed[*slot])
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    pub fn staged_len(&self) -> usize {
        self.staged.len()
    }

    pub fn stage(&mut self, dog: Dog) {
        self.staged.push(dog);
    }

    /// Applies the staged batch. The unique index is checked for every staged
    /// row, and for duplicates within the batch, before any row becomes
    /// visible; on violation the whole batch is discarded and the committed
    /// state is untouched.
    pub fn commit(&mut self) -> Result<u64, StoreError> {
        let mut conflict = None;
        let mut pending: HashSet<&str> = HashSet::new();
        for dog in &self.staged {
            if self.index.contains_key(&dog.name) || !pending.insert(dog.name.as_str()) {
                conflict = Some(dog.name.clone());
                break;
            }
        }

        if let Some(name) = conflict {
            self.staged.clear();
            return Err(StoreError::ConstraintViolation(format!(
                "duplicate key '{name}'"
            )));
        }

        let applied = self.staged.len() as u64;
        for dog in self.staged.drain(..) {
            let slot = self.committed.len();
            self.index.insert(dog.name.clone(), slot);
            self.committed.push(dog);
        }
        Ok(applied)
    }

    /// Idempotent by key: rows whose name is already present are skipped.
    /// Returns how many rows were installed.
    pub fn seed(&mut self, rows: impl IntoIterator<Item = Dog>) -> u64 {
        let mut installed = 0;
        for dog in rows {
            if self.index.contains_key(&dog.name) {
                continue;
            }
            let slot = self.committed.len();
            self.index.insert(dog.name.clone(), slot);
            self.committed.push(dog);
            installed += 1;
        }
        installed
    }
}

use std::collections::HashSet;

use crate::email::email_key;

/// Emails accepted so far in the current run, compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Deduplicator {
    seen: HashSet<String>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `email`; returns true when it had not been seen before.
    pub fn check_and_register(&mut self, email: &str) -> bool {
        self.seen.insert(email_key(email))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

//! Ordered throw log. Append, pop and clear are the only structural mutations.
use serde::{Deserialize, Serialize};

use crate::constants::VISIT_SIZE;
use crate::throw::ThrowRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThrowLog {
    throws: Vec<ThrowRecord>,
}

impl ThrowLog {
    #[must_use]
    pub const fn new() -> Self {
        Self { throws: Vec::new() }
    }

    pub fn push(&mut self, record: ThrowRecord) {
        self.throws.push(record);
    }

    /// Remove and return the most recent throw, if any.
    pub fn pop(&mut self) -> Option<ThrowRecord> {
        self.throws.pop()
    }

    pub fn clear(&mut self) {
        self.throws.clear();
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.throws.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.throws.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&ThrowRecord> {
        self.throws.last()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ThrowRecord> {
        self.throws.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ThrowRecord] {
        &self.throws
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ThrowRecord> {
        self.throws.iter()
    }

    /// Throws from `start` to the end of the log (empty when `start` is past the end).
    #[must_use]
    pub fn tail_from(&self, start: usize) -> &[ThrowRecord] {
        self.throws.get(start..).unwrap_or(&[])
    }

    /// Index of the first throw of the visit the latest throw belongs to.
    #[must_use]
    pub const fn current_visit_start(&self) -> usize {
        if self.throws.is_empty() {
            0
        } else {
            (self.throws.len() - 1) / VISIT_SIZE * VISIT_SIZE
        }
    }

    /// Number of visits started so far, counting a partial final visit.
    #[must_use]
    pub const fn visit_count(&self) -> usize {
        self.throws.len().div_ceil(VISIT_SIZE)
    }

    /// Append not-thrown placeholders until the log ends on a visit boundary.
    /// Returns how many placeholders were added.
    pub fn pad_visit(&mut self) -> usize {
        let mut added = 0;
        while self.throws.len() % VISIT_SIZE != 0 {
            self.throws.push(ThrowRecord::not_thrown());
            added += 1;
        }
        added
    }

    /// Zero the counted score of every throw from `start` onward, keeping labels.
    pub fn zero_from(&mut self, start: usize) {
        if let Some(tail) = self.throws.get_mut(start..) {
            tail.iter_mut().for_each(ThrowRecord::zero_score);
        }
    }
}

impl<'a> IntoIterator for &'a ThrowLog {
    type Item = &'a ThrowRecord;
    type IntoIter = std::slice::Iter<'a, ThrowRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.throws.iter()
    }
}

//! Ordered candidate set with prefix queries and a cycling cursor
//!
//! [`PrefixSet`] is the basic building block of the completion engine: an
//! ordered collection of unique strings that can be queried by prefix and
//! cycled through one candidate at a time, the way repeated TAB presses
//! walk through matches.
//!
//! The cursor is keyed by the queried prefix. It stays valid only while the
//! same prefix is queried again; a different prefix, or any mutation of the
//! items, starts a fresh cycle.

/// Cycle direction for completion requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Advance to the next candidate
    Forward,
    /// Step back to the previous candidate
    Backward,
}

/// Cursor over the matches of one specific prefix
#[derive(Debug, Clone)]
struct Cursor {
    /// Prefix the cursor was built for
    prefix: String,
    /// Index of the last returned candidate within the match list
    index: usize,
}

/// Ordered unique-string collection with prefix query and cyclic cursor
#[derive(Debug, Default)]
pub struct PrefixSet {
    /// Candidate items in stored order
    items: Vec<String>,
    /// Active cycle, if the last query is still current
    cursor: Option<Cursor>,
}

impl PrefixSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set from an ordered list of items, dropping duplicates
    pub fn with_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for item in items {
            set.add(item);
        }
        set
    }

    /// Insert an item if absent; duplicates are a no-op.
    /// Any active cursor is invalidated.
    pub fn add(&mut self, item: impl Into<String>) {
        let item = item.into();
        if !self.items.contains(&item) {
            self.items.push(item);
            self.cursor = None;
        }
    }

    /// Remove an item if present.
    /// Any active cursor is invalidated.
    pub fn remove(&mut self, item: &str) {
        if let Some(pos) = self.items.iter().position(|i| i == item) {
            self.items.remove(pos);
            self.cursor = None;
        }
    }

    /// Check whether an item is in the set
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the set holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Forget the cycle position but keep the items
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Replace the entire item list while preserving the cycle position.
    ///
    /// This is the volatile-source path: filesystem candidates are rebuilt
    /// on every keystroke, and a plain `add`/`remove` sequence would cancel
    /// the cycle each time. The cursor's prefix is kept and its index is
    /// clamped to the new match count.
    ///
    /// # Arguments
    /// * `items` - New candidate list, in order; duplicates are dropped
    pub fn update<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fresh: Vec<String> = Vec::new();
        for item in items {
            let item = item.into();
            if !fresh.contains(&item) {
                fresh.push(item);
            }
        }
        self.items = fresh;

        if let Some(cursor) = &mut self.cursor {
            let count = self
                .items
                .iter()
                .filter(|i| i.starts_with(&cursor.prefix))
                .count();
            if count == 0 {
                self.cursor = None;
            } else if cursor.index >= count {
                cursor.index = count - 1;
            }
        }
    }

    /// Return the next (or previous) item matching `prefix`.
    ///
    /// Matching is case-sensitive exact-prefix in stored order. A query with
    /// a different prefix than the active cursor starts a fresh cycle at the
    /// first match (last match for [`Direction::Backward`]). Repeating the
    /// same prefix advances one step per call. At the end of the matches,
    /// `wrap` selects between returning to the first match and ending the
    /// cycle with `None`.
    ///
    /// # Arguments
    /// * `prefix` - Partial token to match
    /// * `wrap` - Wrap around at the boundary instead of stopping
    /// * `direction` - Cycle direction
    ///
    /// # Returns
    /// * `Option<String>` - The candidate, or `None` when nothing matches
    ///   or a non-wrapping cycle is exhausted
    pub fn complete(&mut self, prefix: &str, wrap: bool, direction: Direction) -> Option<String> {
        let matches: Vec<&String> = self
            .items
            .iter()
            .filter(|i| i.starts_with(prefix))
            .collect();

        if matches.is_empty() {
            self.cursor = None;
            return None;
        }

        let index = match &self.cursor {
            Some(cursor) if cursor.prefix == prefix => match direction {
                Direction::Forward => {
                    if cursor.index + 1 < matches.len() {
                        Some(cursor.index + 1)
                    } else if wrap {
                        Some(0)
                    } else {
                        None
                    }
                }
                Direction::Backward => {
                    if cursor.index > 0 {
                        Some(cursor.index - 1)
                    } else if wrap {
                        Some(matches.len() - 1)
                    } else {
                        None
                    }
                }
            },
            _ => match direction {
                Direction::Forward => Some(0),
                Direction::Backward => Some(matches.len() - 1),
            },
        };

        match index {
            Some(index) => {
                let found = matches[index].clone();
                self.cursor = Some(Cursor {
                    prefix: prefix.to_string(),
                    index,
                });
                Some(found)
            }
            None => {
                // Exhausted without wrapping: the next query starts over
                self.cursor = None;
                None
            }
        }
    }
}

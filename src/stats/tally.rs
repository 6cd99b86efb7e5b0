use std::collections::HashMap;

/// Per-player accumulator that remembers the order players were first seen
#[derive(Debug, Clone)]
pub struct OrderedTally<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V: Default> OrderedTally<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Accumulator for `name`, created with `V::default()` on first sight
    pub fn entry(&mut self, name: &str) -> &mut V {
        let idx = match self.index.get(name) {
            Some(&idx) => idx,
            None => {
                self.entries.push((name.to_string(), V::default()));
                self.index.insert(name.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order
    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

impl<V: Default> Default for OrderedTally<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_keep_first_seen_order() {
        let mut tally: OrderedTally<u32> = OrderedTally::new();
        *tally.entry("b") += 1;
        *tally.entry("a") += 2;
        *tally.entry("b") += 3;

        assert_eq!(tally.len(), 2);
        assert_eq!(
            tally.into_entries(),
            vec![("b".to_string(), 4), ("a".to_string(), 2)]
        );
    }
}

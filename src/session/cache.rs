use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

pub const DEFAULT_CAPACITY: usize = 512;
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(60);

struct Entry {
    misspelled: bool,
    inserted: Instant,
    tick: u64,
}

/// Capacity- and age-bounded memo of misspelling decisions, keyed by the
/// exact input text.
///
/// Lookups refresh recency but not age. When full, inserting a new key evicts
/// the least recently used one.
pub struct MisspellingCache {
    entries: HashMap<String, Entry>,
    // tick -> key, oldest first
    recency: BTreeMap<u64, String>,
    next_tick: u64,
    capacity: usize,
    max_age: Duration,
}

impl MisspellingCache {
    pub fn new(capacity: usize, max_age: Duration) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            recency: BTreeMap::new(),
            next_tick: 0,
            capacity,
            max_age,
        }
    }

    pub fn get(&mut self, key: &str) -> Option<bool> {
        self.get_at(key, Instant::now())
    }

    pub fn set(&mut self, key: &str, misspelled: bool) {
        self.set_at(key, misspelled, Instant::now());
    }

    pub(crate) fn get_at(&mut self, key: &str, now: Instant) -> Option<bool> {
        let entry = self.entries.get(key)?;
        if now.saturating_duration_since(entry.inserted) > self.max_age {
            self.remove(key);
            return None;
        }

        let tick = self.bump();
        let entry = self.entries.get_mut(key)?;
        let previous = std::mem::replace(&mut entry.tick, tick);
        let misspelled = entry.misspelled;
        self.recency.remove(&previous);
        self.recency.insert(tick, key.to_string());
        Some(misspelled)
    }

    pub(crate) fn set_at(&mut self, key: &str, misspelled: bool, now: Instant) {
        if self.capacity == 0 {
            return;
        }

        let tick = self.bump();
        if let Some(entry) = self.entries.get_mut(key) {
            let previous = std::mem::replace(&mut entry.tick, tick);
            entry.misspelled = misspelled;
            entry.inserted = now;
            self.recency.remove(&previous);
            self.recency.insert(tick, key.to_string());
            return;
        }

        while self.entries.len() >= self.capacity {
            match self.recency.pop_first() {
                Some((_, oldest)) => {
                    self.entries.remove(&oldest);
                }
                None => break,
            }
        }

        self.entries.insert(
            key.to_string(),
            Entry {
                misspelled,
                inserted: now,
                tick,
            },
        );
        self.recency.insert(tick, key.to_string());
    }

    pub fn remove(&mut self, key: &str) -> Option<bool> {
        let entry = self.entries.remove(key)?;
        self.recency.remove(&entry.tick);
        Some(entry.misspelled)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    fn bump(&mut self) -> u64 {
        self.next_tick += 1;
        self.next_tick
    }
}

impl Default for MisspellingCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_MAX_AGE)
    }
}

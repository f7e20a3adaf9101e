use std::sync::Arc;

use crate::record::EventRecord;

/// Immutable handle to the normalized dataset.
///
/// Cloning is cheap and shares the underlying rows, so one load can serve any
/// number of readers across threads. Row order is the canonical dataset order
/// and is what "first occurrence" means throughout the engine.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Arc<[EventRecord]>,
}

impl Dataset {
    pub fn new(records: Vec<EventRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<EventRecord>> for Dataset {
    fn from(records: Vec<EventRecord>) -> Self {
        Self::new(records)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a EventRecord;
    type IntoIter = std::slice::Iter<'a, EventRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

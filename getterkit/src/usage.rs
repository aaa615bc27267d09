use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::host::FieldRef;

/// Receives read-usage notes for fields whose value a synthesized getter exposes.
///
/// Downstream analyses (unused-field or write-only-field checks) consult it so a
/// field read only through a generated getter is not reported as unread.
pub trait UsageRegistry {
    fn add_read_usage(&self, field: &FieldRef);
}

/// In-memory registry counting reads per field.
#[derive(Debug, Default)]
pub struct ReadUsageRegistry {
    reads: RwLock<HashMap<FieldRef, usize>>,
}

impl ReadUsageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_read(&self, field: &FieldRef) -> bool {
        self.read_count(field) > 0
    }

    pub fn read_count(&self, field: &FieldRef) -> usize {
        let reads = self.reads.read().unwrap_or_else(PoisonError::into_inner);
        reads.get(field).copied().unwrap_or(0)
    }

    /// Fields with at least one recorded read, sorted for stable output.
    pub fn read_fields(&self) -> Vec<FieldRef> {
        let reads = self.reads.read().unwrap_or_else(PoisonError::into_inner);
        let mut fields: Vec<FieldRef> = reads.keys().cloned().collect();
        fields.sort();
        fields
    }
}

impl UsageRegistry for ReadUsageRegistry {
    fn add_read_usage(&self, field: &FieldRef) {
        let mut reads = self.reads.write().unwrap_or_else(PoisonError::into_inner);
        *reads.entry(field.clone()).or_insert(0) += 1;
    }
}

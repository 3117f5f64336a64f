//! Bulk phone normalization over a contact store.
//!
//! One run fetches every contact's phone value, canonicalizes it, and writes
//! back only the values that changed. A write failure is counted and logged
//! for that record alone; the run always finishes and reports its stats.

use crate::error::Result;
use chrono::Utc;
use dialkeep_core::domain::{canonicalize, ContactId};
use dialkeep_store::repo::PhoneRecord;
use dialkeep_store::Store;
use serde::Serialize;
use tracing::{info, warn};

/// Read and write seams of the external store. The bulk fetch failing aborts
/// the run; a per-record write failure is isolated by the caller.
pub trait PhoneSource {
    fn fetch_phone_records(&self) -> Result<Vec<PhoneRecord>>;
    fn update_phone(&self, id: ContactId, value: &str) -> Result<()>;
}

impl PhoneSource for Store {
    fn fetch_phone_records(&self) -> Result<Vec<PhoneRecord>> {
        Ok(self.contacts().list_phone_records()?)
    }

    fn update_phone(&self, id: ContactId, value: &str) -> Result<()> {
        let now = Utc::now().timestamp();
        Ok(self.contacts().update_phone(now, id, value)?)
    }
}

/// Per-run counters. Ephemeral; logged and returned, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub processed: usize,
    pub changed: usize,
    pub skipped: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Count would-be changes without writing anything back.
    pub dry_run: bool,
}

/// Run one normalization pass. Idempotent: on already-canonical data every
/// record lands in `skipped` and nothing is written, so overlapping or
/// repeated runs settle on the same end state.
pub fn run_batch(source: &impl PhoneSource, options: &NormalizeOptions) -> Result<BatchStats> {
    let records = source.fetch_phone_records()?;
    info!(
        records = records.len(),
        dry_run = options.dry_run,
        "phone normalization started"
    );

    let mut stats = BatchStats::default();
    for record in records {
        stats.processed += 1;

        let stored = match record.phone.as_deref() {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                stats.skipped += 1;
                continue;
            }
        };

        let canonical = canonicalize(stored);
        if canonical == stored {
            stats.skipped += 1;
            continue;
        }

        if options.dry_run {
            stats.changed += 1;
            continue;
        }

        match source.update_phone(record.id, &canonical) {
            Ok(()) => stats.changed += 1,
            Err(err) => {
                stats.failed += 1;
                warn!(contact = %record.id, error = %err, "phone update failed");
            }
        }
    }

    info!(
        processed = stats.processed,
        changed = stats.changed,
        skipped = stats.skipped,
        failed = stats.failed,
        "phone normalization finished"
    );
    Ok(stats)
}

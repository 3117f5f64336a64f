//! Daily background scheduler for the normalization batch.
//!
//! One handle owns one background thread that wakes at the next local 02:00,
//! runs the batch against its own store connection, and goes back to sleep.
//! There is no global job registry: the daemon constructs a `Scheduler` at
//! startup and shuts it down (or drops it) on exit. Overlapping or repeated
//! runs are harmless because the batch skips already-canonical values.

use crate::normalize::{run_batch, NormalizeOptions};
use chrono::{Local, NaiveDateTime};
use dialkeep_store::Store;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{error, info};

/// Local wall-clock hour of the nightly run.
pub const RUN_HOUR: u32 = 2;

pub struct Scheduler {
    thread: Option<JoinHandle<()>>,
    stop: Sender<()>,
}

impl Scheduler {
    /// Spawn the scheduler thread. The thread opens the store per tick so a
    /// transient open failure only costs that night's run.
    pub fn start(db_path: PathBuf) -> std::io::Result<Self> {
        let (stop, stop_rx) = mpsc::channel();
        let thread = thread::Builder::new()
            .name("dialkeep-scheduler".to_string())
            .spawn(move || run_loop(&db_path, &stop_rx))?;
        Ok(Self {
            thread: Some(thread),
            stop,
        })
    }

    /// Stop the thread and wait for it to exit. Dropping the handle without
    /// calling this also stops the thread (the channel disconnect wakes it),
    /// just without joining.
    pub fn shutdown(mut self) {
        let _ = self.stop.send(());
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

fn run_loop(db_path: &Path, stop: &Receiver<()>) {
    loop {
        let now = Local::now().naive_local();
        let next = next_run_after(now);
        let wait = (next - now).to_std().unwrap_or(Duration::ZERO);
        info!(next_run = %next, "scheduler waiting for next run");

        match stop.recv_timeout(wait) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                info!("scheduler stopped");
                return;
            }
            Err(RecvTimeoutError::Timeout) => {}
        }

        run_once(db_path);
    }
}

fn run_once(db_path: &Path) {
    // A failed run is only logged; the next tick retries a day later.
    let store = match Store::open(db_path) {
        Ok(store) => store,
        Err(err) => {
            error!(error = %err, "scheduled run could not open store");
            return;
        }
    };
    if let Err(err) = run_batch(&store, &NormalizeOptions::default()) {
        error!(error = %err, "scheduled normalization run failed");
    }
}

/// Next strictly-future occurrence of the run hour.
pub fn next_run_after(now: NaiveDateTime) -> NaiveDateTime {
    match now.date().and_hms_opt(RUN_HOUR, 0, 0) {
        Some(candidate) if candidate > now => candidate,
        _ => now
            .date()
            .succ_opt()
            .and_then(|date| date.and_hms_opt(RUN_HOUR, 0, 0))
            .unwrap_or(now),
    }
}

#[cfg(test)]
mod tests {
    use super::next_run_after;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .expect("valid date")
            .and_hms_opt(h, min, 0)
            .expect("valid time")
    }

    #[test]
    fn before_the_run_hour_schedules_same_day() {
        assert_eq!(next_run_after(at(2026, 3, 1, 0, 30)), at(2026, 3, 1, 2, 0));
    }

    #[test]
    fn at_or_after_the_run_hour_schedules_next_day() {
        assert_eq!(next_run_after(at(2026, 3, 1, 2, 0)), at(2026, 3, 2, 2, 0));
        assert_eq!(next_run_after(at(2026, 3, 1, 14, 45)), at(2026, 3, 2, 2, 0));
    }

    #[test]
    fn rolls_over_month_boundaries() {
        assert_eq!(next_run_after(at(2026, 2, 28, 23, 0)), at(2026, 3, 1, 2, 0));
    }
}

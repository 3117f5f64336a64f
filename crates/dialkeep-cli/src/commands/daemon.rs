use crate::commands::Context;
use anyhow::{Context as _, Result};
use dialkeep_batch::scheduler::{Scheduler, RUN_HOUR};
use std::path::PathBuf;
use std::thread;
use tracing::info;

/// Run the nightly scheduler until the process is killed. Partial runs left
/// behind by a hard stop are safe: every record update is its own atomic
/// write and the next run skips whatever already changed.
pub fn daemon(ctx: &Context<'_>, db_path: PathBuf) -> Result<()> {
    if !ctx.config.scheduler.enabled {
        info!("scheduler disabled in config");
        println!("scheduler is disabled; set [scheduler] enabled = true to use the daemon");
        return Ok(());
    }

    let _scheduler = Scheduler::start(db_path).with_context(|| "start scheduler")?;
    println!("dialkeep daemon running, next run at {RUN_HOUR:02}:00 local time (Ctrl-C to stop)");

    loop {
        thread::park();
    }
}

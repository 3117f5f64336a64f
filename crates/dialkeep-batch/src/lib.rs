pub mod error;
pub mod normalize;
pub mod scheduler;

pub use error::{BatchError, Result};
pub use normalize::{run_batch, BatchStats, NormalizeOptions, PhoneSource};
pub use scheduler::Scheduler;

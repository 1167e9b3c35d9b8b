//! Table operations, implemented as `impl RecordStore` blocks.

mod history;
mod settings;
mod technician;

use chrono::{DateTime, SubsecRound, Utc};

/// Current time at the millisecond precision records are persisted with.
fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

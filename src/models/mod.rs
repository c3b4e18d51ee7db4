//! CPU scheduling domain models.
//!
//! Provides the data types the schedulers operate on and produce.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Scheduling inputs and per-process results |
//! | `Timeline` | CPU slices produced by one run |
//! | `Slice` | One interval a process held the CPU |

mod process;
mod timeline;

pub use process::Process;
pub use timeline::{Slice, Timeline};

//! Service layer
//!
//! Job submission and the full submit-then-poll lifecycle. Services use the
//! repository seam and never talk HTTP directly.

mod lifecycle;
mod submitter;

pub use lifecycle::JobLifecycle;
pub use submitter::{JobSubmitter, SubmitError};

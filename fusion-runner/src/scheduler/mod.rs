//! Scheduler layer
//!
//! Repeatedly reads job status until a terminal outcome or the deadline.
//! The retry budget lives in `PollPolicy` so the loop itself holds no timing
//! constants.

pub mod policy;
pub mod poller;

pub use policy::PollPolicy;
pub use poller::JobPoller;

//! Repository layer
//!
//! The provider seam. Repositories are stateless wrappers around the
//! provider API with no business logic, trait-based so the submitter and
//! poller can run against stubs in tests.

mod jobs;

pub use jobs::HttpJobRepository;
pub use jobs::JobRepository;

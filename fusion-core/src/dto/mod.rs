//! Data Transfer Objects for the provider API
//!
//! Wire shapes sent to and read from the fusion provider. Domain types stay
//! free of serialization quirks; the conversions live here.

pub mod job;

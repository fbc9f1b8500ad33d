//! Core building blocks: the profile store, job composition, and
//! subprocess execution. These are the primitives consumed by the
//! high-level `api` module.
pub mod exec;
pub mod job;
pub mod profiles;

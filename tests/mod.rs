//! Integration tests for `pgdiff`.
//!
//! Every test here needs a live PostgreSQL (`DATABASE_URL`), and the `cli`
//! module additionally needs Docker for scratch-database provisioning.
//! They are `#[ignore]`d by default (see `tests/helpers/harness.rs`) and are
//! meant to run under a CI job with both available.

pub mod cli;
pub mod helpers;

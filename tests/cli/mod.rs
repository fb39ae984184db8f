//! CLI end-to-end tests for the `pgdiff sync` subcommand. `#[ignore]`d:
//! these need both `DATABASE_URL` and a reachable Docker daemon for
//! scratch-database provisioning.

pub mod sync;

//! CLI command implementations

pub(crate) mod common;
pub(crate) mod migrate;
pub(crate) mod seed;
pub(crate) mod verify;

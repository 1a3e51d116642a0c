//! Interactive provisioning of local PocketBase instances in Docker.
//!
//! The binary wires these modules into a strictly linear pipeline:
//! preflight, prompts, port selection, directory layout, image build,
//! container launch, summary.

pub mod config;
pub mod docker;
pub mod ports;
pub mod prompt;
pub mod provision;
pub mod summary;

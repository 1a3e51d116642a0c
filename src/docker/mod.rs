// Docker plumbing — daemon preflight, argument assembly, process execution.

pub mod commands;
pub mod engine;
pub mod run;

pub use commands::{build_args, run_args};
pub use engine::{container_exists, ensure_available, remove_container};
pub use run::{capture, execute};

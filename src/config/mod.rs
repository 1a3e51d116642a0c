// Tool configuration — defaults plus an optional `.pocketuprc` override file.

pub mod loader;
pub mod types;

pub use loader::load;
pub use types::Config;

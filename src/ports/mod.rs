// Port selection — bind-and-release probing over two fixed scan ranges.

pub mod scan;

pub use scan::{FALLBACK_RANGE, PRIMARY_RANGE, find_free_port, is_free, parse_port};

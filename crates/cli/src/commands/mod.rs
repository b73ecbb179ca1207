//! CLI command implementations.

mod clean;
mod fetch;
mod paths;

pub use clean::clean;
pub use fetch::fetch;
pub use paths::paths;

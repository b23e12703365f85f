//! Shared building blocks for the workspace: logging setup and wire types
//! reused by every HTTP-facing crate.

pub mod types;

pub mod utils {
    pub mod logging;
}

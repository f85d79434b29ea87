#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # depwalk-core
//!
//! Core error type and layered configuration shared by the depwalk CLI.

pub mod config;
pub mod error;
pub mod result;

pub use config::{Config, ConfigSources, PartialConfig, RepoMode, load_config};
pub use error::Error;
pub use result::Result;

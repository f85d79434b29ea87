//! Result type definition.

use crate::error::Error;

/// The standard Result type for depwalk operations.
///
/// All fallible configuration and source operations return this type.
/// Use the `?` operator, `match`, or combinator methods to handle results.
///
/// # Examples
///
/// ```ignore
/// fn package() -> Result<String> {
///     let config = load_config(&ConfigSources::default())?;
///     Ok(config.package_name)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

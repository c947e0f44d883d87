//! # sovran-bundle
//!
//! Typed, absence-aware accessors over a heterogeneous key/value bundle.
//!
//! A [`Bundle`] stores booleans, bytes, chars, doubles, floats, ints, longs,
//! shorts, strings and arbitrary payloads under string keys, with nothing at
//! compile time tying a key to a kind. This crate gives every primitive kind two
//! ways in:
//!
//! - **Soft**: `get_<kind>_or_none` returns `Option<T>` and never fails. A missing
//!   key and a value of the wrong kind both come back as `None`.
//! - **Strict**: `require_<kind>` returns the value or a [`RequireError`] saying
//!   *why* it couldn't: [`RequireError::Argument`] when the key doesn't exist,
//!   [`RequireError::State`] when it holds a different kind.
//!
//! Kinds are compared by tag, never by numeric range. An `int` stored under a
//! key is not returned by the `byte`, `short` or `long` accessors.
//!
//! ## Key Features
//!
//! - **Two failure causes kept apart**: a typo in a key and a producer/consumer
//!   schema disagreement surface as different errors
//! - **Total soft accessors**: `get_*_or_none` is `None` exactly when
//!   `require_*` would fail
//! - **Stateless**: every accessor borrows the bundle for one call and keeps nothing
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_bundle::{Bundle, BundleExt, RequireError};
//!
//! fn main() -> Result<(), RequireError> {
//!     let mut bundle = Bundle::new();
//!
//!     // Store values of different kinds
//!     bundle.put_boolean("enabled", true);
//!     bundle.put_int("retries", 3);
//!     bundle.put_string("name", "sensor");
//!
//!     // Strict lookups return the value directly
//!     let enabled = bundle.require_boolean("enabled")?;
//!     let retries = bundle.require_int("retries")?;
//!     println!("enabled: {}, retries: {}", enabled, retries);
//!
//!     // Soft lookups fall back however the caller likes
//!     let timeout = bundle.get_long_or_none("timeout_ms").unwrap_or(5_000);
//!     assert_eq!(timeout, 5_000);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use sovran_bundle::{Bundle, BundleExt, RequireError};
//!
//! let mut bundle = Bundle::new();
//! bundle.put_string("port", "8080");
//!
//! match bundle.require_int("port") {
//!     Ok(port) => println!("Port: {}", port),
//!     Err(RequireError::Argument { key }) => println!("{} was never set", key),
//!     Err(RequireError::State { key, found, .. }) => println!("{} holds a {}", key, found),
//! }
//! ```
//!
//! ### Generic Access
//!
//! ```rust
//! use sovran_bundle::{get_or_none, require, Bundle};
//!
//! let mut bundle = Bundle::new();
//! bundle.put_short("level", 2);
//!
//! assert_eq!(get_or_none::<i16>(&bundle, "level"), Some(2));
//! assert_eq!(get_or_none::<i32>(&bundle, "level"), None);
//! assert!(require::<i32>(&bundle, "level").unwrap_err().is_state());
//! ```

mod accessor;
mod any_value;
mod bundle;
mod error;
mod value;

pub use accessor::{get_or_none, require, BundleExt, Primitive};
pub use any_value::AnyValue;
pub use bundle::Bundle;
pub use error::{RequireError, RequireResult};
pub use value::{BundleValue, Kind};

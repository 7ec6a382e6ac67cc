//! # Linecast
//!
//! A Rust library for typed console input: read raw text lines from the
//! terminal, split them into tokens, and cast every token to a requested
//! type (including one level of iterable literals like `(1,2,3)`) with a
//! configurable error-handling policy.
//!
//! ## Features
//!
//! - **Typed Single Reads** - One line, one value, cast to any supported
//!   scalar kind, with optional first-space truncation
//! - **Typed Multi Reads** - One line split on a separator, every token cast
//!   per a position-matched type spec (or one spec broadcast to all tokens)
//! - **Iterable Literals** - Tokens wrapped in `()`, `[]` or `{}` unpack into
//!   lists of scalars, position-matched against a type list
//! - **Error Policy** - Every reportable condition can raise, print a console
//!   warning, or be silently swallowed with a raw-string fallback, per device
//! - **Stream Sizes** - Device-level and per-call input truncation limits
//! - **Pluggable Sources** - Reads go through a small [`device::LineSource`]
//!   trait, so tests and embedders can script input
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! linecast = "0.1"
//! linecast = { version = "0.1", features = ["serde-dep"] }
//! ```
//!
//! ## Usage Examples
//!
//! ### Read one typed value
//!
//! ```rust,no_run
//! use linecast::cast::ScalarKind;
//! use linecast::device::{InputDevice, Kit};
//!
//! let mut device = InputDevice::new(true, false, None, Kit::default());
//!
//! let age = device
//!     .read_one(Some("Your age: "), ScalarKind::U8, false, None)
//!     .unwrap();
//! println!("age: {}", age);
//! ```
//!
//! ### Read a line of mixed values
//!
//! ```rust,no_run
//! use linecast::cast::{ScalarKind, TypeSpec};
//! use linecast::device::{InputDevice, Kit};
//!
//! let mut device = InputDevice::new(true, false, None, Kit::default());
//!
//! // e.g. "7 (a,2,3.5) done"
//! let values = device
//!     .read_many(
//!         &[
//!             TypeSpec::Scalar(ScalarKind::I64),
//!             TypeSpec::Iterable(vec![ScalarKind::Str, ScalarKind::I64, ScalarKind::F64]),
//!             TypeSpec::Scalar(ScalarKind::Str),
//!         ],
//!         Some("> "),
//!         None,
//!         None,
//!         None,
//!     )
//!     .unwrap();
//! println!("{:?}", values);
//! ```
//!
//! ### Coerce tokens you already have
//!
//! The engine is exposed directly for composite use, no terminal involved:
//!
//! ```rust
//! use linecast::cast::{ScalarKind, TypeSpec, Value};
//! use linecast::device::{InputDevice, Kit};
//!
//! let device = InputDevice::new(false, false, None, Kit::default());
//! let tokens = vec!["1".to_string(), "2".to_string(), "3".to_string()];
//!
//! let values = device
//!     .cast_tokens(&tokens, &[TypeSpec::Scalar(ScalarKind::I64)], ",")
//!     .unwrap();
//! assert_eq!(values, vec![Value::I64(1), Value::I64(2), Value::I64(3)]);
//! ```
//!
//! ### Raise instead of warn
//!
//! ```rust
//! use linecast::cast::{ScalarKind, TypeSpec};
//! use linecast::device::{InputDevice, Kit};
//!
//! let device = InputDevice::new(false, true, None, Kit::default());
//! let tokens = vec!["x".to_string()];
//!
//! let err = device
//!     .cast_tokens(&tokens, &[TypeSpec::Scalar(ScalarKind::I64)], ",")
//!     .unwrap_err();
//! assert_eq!(format!("{}", err), "Couldn't cast the value (x) to i64");
//! ```
//!
//! ## Architecture
//!
//! The library is designed with modularity and composability in mind:
//!
//! - **`cast`** - Scalar kinds, values and per-position type specs
//! - **`device`** - The input device: configuration, kit, line sources and
//!   the coercion engine
//! - **`error`** - The crate-level error taxonomy
//!
//! ## Error Handling
//!
//! All operations return `Result<T, E>` types; whether an internal condition
//! becomes an `Err`, a console warning or nothing at all is selected per
//! device instance:
//!
//! ```rust
//! use linecast::device::{FieldValue, InputDevice};
//! use linecast::error::InputError;
//!
//! let mut device = InputDevice::default();
//! match device.set_field("volume", FieldValue::Int(3)) {
//!     Err(InputError::AttributeNotFound(name)) => eprintln!("no field {}", name),
//!     Err(e) => eprintln!("other error: {}", e),
//!     Ok(()) => {}
//! }
//! ```

pub mod cast;

pub mod device;

pub mod error;

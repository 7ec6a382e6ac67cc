//! # Input Device
//!
//! This module provides [`InputDevice`], the configurable front door for
//! typed console input. A device owns the error policy (`warnings`,
//! `raise_errors`), an optional stream-size limit, a [`Kit`] of string
//! defaults, and a [`LineSource`] it reads from.
//!
//! ## Features
//! - Single-value reads with casting and optional first-space truncation
//! - Multi-value reads: one line split on a separator, each token cast per a
//!   position-matched [`TypeSpec`]
//! - Per-call stream-size overrides that never touch the device-level value
//! - A name-keyed, type-checked field setter ([`InputDevice::set_field`])
//!
//! ## Usage
//!
//! ```rust,no_run
//! use linecast::cast::{ScalarKind, TypeSpec};
//! use linecast::device::{InputDevice, Kit};
//!
//! let mut device = InputDevice::new(true, false, Some(5), Kit::default());
//!
//! // "1 2 3" -> [I64(1), I64(2), I64(3)]
//! let numbers = device
//!     .read_many(
//!         &[TypeSpec::Scalar(ScalarKind::I64)],
//!         Some("numbers: "),
//!         None,
//!         None,
//!         None,
//!     )
//!     .unwrap();
//! println!("{:?}", numbers);
//! ```

pub mod kit;
pub use kit::Kit;

pub mod source;
pub use source::{LineSource, StdinSource};

mod engine;

use crate::cast::{ScalarKind, TypeSpec, Value};
use crate::error::{InputError, Result};

/// A typed value handed to [`InputDevice::set_field`].
///
/// Each configurable field accepts exactly one variant; anything else is
/// rejected with [`InputError::InvalidFieldType`] and the prior value stays.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Kit(Kit),
}

impl FieldValue {
    fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Bool(_) => "bool",
            FieldValue::Int(_) => "int",
            FieldValue::Kit(_) => "kit",
        }
    }
}

/// Typed console input with a configurable error policy.
///
/// The policy flags decide how reportable conditions surface:
/// `raise_errors` aborts the current call with an `Err`, otherwise
/// `warnings` prints the condition to the console and the call continues
/// with a fallback value (typically the original raw string). With both
/// flags off, conditions are silently swallowed. `raise_errors` takes
/// precedence.
///
/// The device is generic over its [`LineSource`]; [`InputDevice::new`]
/// wires up the real terminal.
pub struct InputDevice<S: LineSource = StdinSource> {
    warnings: bool,
    raise_errors: bool,
    stream_size: Option<usize>,
    kit: Kit,
    source: S,
}

impl InputDevice<StdinSource> {
    /// Creates a device reading from standard input.
    ///
    /// A non-positive `stream_size` is stored as unlimited; an invalid `kit`
    /// is replaced with [`Kit::default`].
    pub fn new(
        warnings: bool,
        raise_errors: bool,
        stream_size: Option<usize>,
        kit: Kit,
    ) -> InputDevice<StdinSource> {
        Self::with_source(StdinSource, warnings, raise_errors, stream_size, kit)
    }
}

impl Default for InputDevice<StdinSource> {
    fn default() -> Self {
        InputDevice::new(false, false, None, Kit::default())
    }
}

impl<S: LineSource> InputDevice<S> {
    /// Creates a device reading from a custom [`LineSource`].
    pub fn with_source(
        source: S,
        warnings: bool,
        raise_errors: bool,
        stream_size: Option<usize>,
        kit: Kit,
    ) -> InputDevice<S> {
        let mut device = InputDevice {
            warnings,
            raise_errors,
            stream_size: stream_size.filter(|&size| size > 0),
            kit,
            source,
        };
        device.ensure_kit();
        device
    }

    pub fn warnings(&self) -> bool {
        self.warnings
    }

    pub fn raise_errors(&self) -> bool {
        self.raise_errors
    }

    pub fn stream_size(&self) -> Option<usize> {
        self.stream_size
    }

    pub fn kit(&self) -> &Kit {
        &self.kit
    }

    /// Resolves the effective stream-size limit for one call.
    ///
    /// - `None`, `Some(0)` or a negative override other than `-1` keep the
    ///   device-level value.
    /// - `Some(-1)` means unlimited for this call only.
    /// - A positive override is used as-is for this call only.
    pub fn resolve_stream_size(&self, override_size: Option<i64>) -> Option<usize> {
        match override_size {
            Some(-1) => None,
            Some(size) if size > 0 => Some(size as usize),
            _ => self.stream_size,
        }
    }

    /// Updates one configuration field through its typed validator.
    ///
    /// Recognized names are `"warnings"`, `"raise_errors"`, `"stream_size"`
    /// and `"kit"`. Unknown names fail with
    /// [`InputError::AttributeNotFound`], a mismatched [`FieldValue`]
    /// variant fails with [`InputError::InvalidFieldType`] (prior value
    /// retained), and an empty name fails with
    /// [`InputError::WrongArgument`] before any lookup.
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()> {
        if name.is_empty() {
            return Err(InputError::WrongArgument(format!(
                "Invalid arguments: {:?}, {:?}",
                name, value
            )));
        }

        match name {
            "warnings" => match value {
                FieldValue::Bool(state) => {
                    self.warnings = state;
                    Ok(())
                }
                other => Err(invalid_field(name, "bool", &other)),
            },
            "raise_errors" => match value {
                FieldValue::Bool(state) => {
                    self.raise_errors = state;
                    Ok(())
                }
                other => Err(invalid_field(name, "bool", &other)),
            },
            "stream_size" => match value {
                FieldValue::Int(size) => {
                    self.stream_size = if size > 0 { Some(size as usize) } else { None };
                    Ok(())
                }
                other => Err(invalid_field(name, "int", &other)),
            },
            "kit" => match value {
                FieldValue::Kit(kit) => {
                    // Validated lazily at the next read, like the rest of
                    // the kit lifecycle.
                    self.kit = kit;
                    Ok(())
                }
                other => Err(invalid_field(name, "kit", &other)),
            },
            _ => Err(InputError::AttributeNotFound(name.to_string())),
        }
    }

    /// Reads one line and casts it to `cast`.
    ///
    /// The line is truncated to the resolved stream size in characters, then
    /// cut at the first space when `include_spaces` is false. A cast failure
    /// is reported per the device policy and falls back to the raw string.
    ///
    /// NOTE: to read an iterable literal use [`InputDevice::read_many`]
    /// instead.
    pub fn read_one(
        &mut self,
        prompt: Option<&str>,
        cast: ScalarKind,
        include_spaces: bool,
        override_size: Option<i64>,
    ) -> Result<Value> {
        self.ensure_kit();
        let prompt = prompt.unwrap_or(&self.kit.prompt).to_string();

        let line = self.source.read_line(&prompt)?;
        let mut value: String = match self.resolve_stream_size(override_size) {
            Some(limit) => line.chars().take(limit).collect(),
            None => line,
        };

        if !include_spaces {
            if let Some(space) = value.find(' ') {
                value.truncate(space);
            }
        }

        match cast.cast(&value) {
            Ok(cast_value) => Ok(cast_value),
            Err(failure) => {
                self.report(InputError::ValueCast(failure.to_string()))?;
                Ok(Value::Str(value))
            }
        }
    }

    /// Reads one line, splits it on `separator` and casts every token per
    /// the position-matched `specs` (a single spec broadcasts to all
    /// tokens).
    ///
    /// Empty or absent `separator`/`iter_separator` fall back to the kit
    /// defaults; the two resolved separators must differ, otherwise the
    /// collision is reported per the device policy and `Ok(None)` is
    /// returned without parsing anything. Both the tokens and the parallel
    /// `specs` are truncated to the resolved stream size before the cast.
    pub fn read_many(
        &mut self,
        specs: &[TypeSpec],
        prompt: Option<&str>,
        separator: Option<&str>,
        iter_separator: Option<&str>,
        override_size: Option<i64>,
    ) -> Result<Option<Vec<Value>>> {
        self.ensure_kit();
        let prompt = prompt.unwrap_or(&self.kit.prompt).to_string();
        let separator = resolve_or(separator, &self.kit.separator);
        let iter_separator = resolve_or(iter_separator, &self.kit.iter_separator);

        if separator == iter_separator {
            self.report(InputError::WrongArgument(format!(
                "Items separator ({}) and iter separator ({}) cannot be equal",
                separator, iter_separator
            )))?;
            return Ok(None);
        }

        let line = self.source.read_line(&prompt)?;
        let limit = self.resolve_stream_size(override_size);

        let mut tokens: Vec<String> = line.split(separator.as_str()).map(str::to_string).collect();
        if let Some(limit) = limit {
            tokens.truncate(limit);
        }
        let specs = &specs[..specs.len().min(limit.unwrap_or(usize::MAX))];

        self.cast_tokens(&tokens, specs, &iter_separator).map(Some)
    }

    /// Routes a reportable condition through the device policy: `Err` when
    /// raising, a console warning when warning, nothing otherwise.
    pub(crate) fn report(&self, err: InputError) -> Result<()> {
        if self.raise_errors {
            return Err(err);
        }
        if self.warnings {
            println!("Warning: {}", err);
        }
        Ok(())
    }

    fn ensure_kit(&mut self) {
        if !self.kit.is_valid() {
            self.kit = Kit::default();
        }
    }
}

fn invalid_field(field: &str, expected: &'static str, found: &FieldValue) -> InputError {
    InputError::InvalidFieldType {
        field: field.to_string(),
        expected,
        found: found.type_name(),
    }
}

fn resolve_or(candidate: Option<&str>, fallback: &str) -> String {
    match candidate {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => fallback.to_string(),
    }
}

pub mod scalar;
pub use scalar::{CastFailure, ScalarKind, UnknownKind, Value};

pub mod spec;
pub use spec::TypeSpec;

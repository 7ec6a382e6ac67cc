//! The kit: the small bag of string defaults a device falls back to when a
//! caller omits explicit values.

/// Default strings used by the read operations: the token separator, the
/// separator inside iterable literals, and the prompt text.
///
/// The defaults mirror classic console input: tokens split on a space,
/// iterable pieces split on a comma, no prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-dep", derive(serde::Serialize, serde::Deserialize))]
pub struct Kit {
    pub separator: String,
    pub iter_separator: String,
    pub prompt: String,
}

impl Kit {
    pub fn new(separator: &str, iter_separator: &str, prompt: &str) -> Kit {
        Kit {
            separator: separator.to_string(),
            iter_separator: iter_separator.to_string(),
            prompt: prompt.to_string(),
        }
    }

    /// A kit is usable only when all three fields are non-empty. Devices
    /// re-check this lazily before every read and silently swap an invalid
    /// kit for [`Kit::default`].
    pub fn is_valid(&self) -> bool {
        !self.separator.is_empty() && !self.iter_separator.is_empty() && !self.prompt.is_empty()
    }
}

impl Default for Kit {
    fn default() -> Self {
        Kit {
            separator: " ".to_string(),
            iter_separator: ",".to_string(),
            prompt: String::new(),
        }
    }
}

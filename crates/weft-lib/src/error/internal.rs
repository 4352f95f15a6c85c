use std::sync::Arc;

/// The failure carried in the parse state between a failing parser and the
/// alternation (or top level) that inspects it.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalError<T> {
    /// Token found at `location`, `None` at end of input or for `Fail`.
    pub unexpected: Option<T>,
    /// The failure was caused by running out of input.
    pub eof: bool,
    /// Offset of the failure.
    pub location: usize,
    pub message: Option<Arc<str>>,
}

impl<T> InternalError<T> {
    /// A token mismatch; `None` means the input ended.
    pub fn mismatch(unexpected: Option<T>, location: usize) -> Self {
        Self {
            eof: unexpected.is_none(),
            unexpected,
            location,
            message: None,
        }
    }

    /// An unconditional failure with a message (`Fail`, `assert`).
    pub fn custom(location: usize, message: Arc<str>) -> Self {
        Self {
            unexpected: None,
            eof: false,
            location,
            message: Some(message),
        }
    }
}

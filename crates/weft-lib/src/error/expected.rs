use std::sync::Arc;

use weft_core::Token;

/// What a parser would have accepted at the point it failed.
///
/// Cloning shares the underlying tokens or label; nothing is copied.
#[derive(Debug, Clone, PartialEq)]
pub enum Expected<T> {
    /// A literal run of tokens. Empty means "nothing in particular".
    Tokens(Arc<[T]>),
    /// A human-readable name such as `"digit"` or `"value"`.
    Label(Arc<str>),
    /// The end of the input.
    EndOfInput,
}

impl<T: Token> Expected<T> {
    pub fn nothing() -> Self {
        Self::Tokens(Arc::from([]))
    }

    pub fn token(token: T) -> Self {
        Self::Tokens(Arc::new([token]))
    }

    pub fn tokens(tokens: impl IntoIterator<Item = T>) -> Self {
        Self::Tokens(tokens.into_iter().collect())
    }

    pub fn label(label: impl Into<Arc<str>>) -> Self {
        Self::Label(label.into())
    }

    pub fn is_nothing(&self) -> bool {
        matches!(self, Self::Tokens(tokens) if tokens.is_empty())
    }

    /// Rendering for diagnostics, `None` for [`Expected::nothing`].
    pub fn describe(&self) -> Option<String> {
        match self {
            Self::Tokens(tokens) => match &tokens[..] {
                [] => None,
                [single] => Some(single.describe()),
                run => Some(T::describe_run(run)),
            },
            Self::Label(label) => Some(label.to_string()),
            Self::EndOfInput => Some("end of input".to_string()),
        }
    }
}

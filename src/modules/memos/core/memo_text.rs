use crate::modules::memos::core::decision::DecideError;

/// Memo text that is known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoText(String);

impl MemoText {
    pub fn parse(raw: Option<String>) -> Result<Self, DecideError> {
        match raw {
            Some(text) if !text.is_empty() => Ok(Self(text)),
            _ => Err(DecideError::EmptyText),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

use thiserror::Error;

use super::PropertyId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("invalid argument: undefined PropertyId of {id}")]
    UnmappedIdentifier { id: i32 },
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },
}

impl PropertyError {
    pub fn unmapped(id: PropertyId) -> Self {
        Self::UnmappedIdentifier { id: id.raw() }
    }

    pub fn invalid_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            value: value.into(),
        }
    }

    /// 呼び出し側の引数不正（未登録IDの受け渡し）か
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::UnmappedIdentifier { .. })
    }
}

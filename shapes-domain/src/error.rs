//! 领域层统一错误定义
//!
//! 校验失败只有两类：类型不符（`TypeMismatch`）与取值越界（`InvalidValue`），
//! 其错误信息是对外契约的一部分。另有动态构造时的参数个数错误。
//!
use thiserror::Error;

use crate::field::{Constraint, RectangleField};

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // --- 属性校验 ---
    #[error("{field} must be an integer")]
    TypeMismatch { field: RectangleField },
    #[error("{field} must be {constraint}")]
    InvalidValue {
        field: RectangleField,
        constraint: Constraint,
    },

    // --- 动态构造 ---
    #[error("missing required argument: {field}")]
    MissingArgument { field: RectangleField },
    #[error("too many arguments: expected at most 5, got {given}")]
    TooManyArguments { given: usize },
}

impl DomainError {
    /// 类型不符（对应 "must be an integer"）
    pub fn is_type_error(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// 取值越界（对应 "must be > 0" / "must be >= 0"）
    pub fn is_value_error(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }

    /// 出错的属性；参数个数错误时为 None
    pub fn field(&self) -> Option<RectangleField> {
        match self {
            Self::TypeMismatch { field }
            | Self::InvalidValue { field, .. }
            | Self::MissingArgument { field } => Some(*field),
            Self::TooManyArguments { .. } => None,
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

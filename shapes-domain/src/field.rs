//! 矩形属性与取值约束
//!
//! 属性名即对外字典的键名；动态值（`serde_json::Value`）在此完成整数类型检查。
//!
use std::fmt;

use serde_json::Value;

use crate::error::{DomainError, DomainResult};

/// 矩形的可赋值属性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RectangleField {
    Id,
    Width,
    Height,
    X,
    Y,
}

impl RectangleField {
    /// `update` 位置参数的赋值顺序，同时也是字典的键顺序
    pub const POSITIONAL: [Self; 5] = [Self::Id, Self::Width, Self::Height, Self::X, Self::Y];

    /// 构造参数顺序：width, height, x, y, id
    pub const CONSTRUCTOR: [Self; 5] = [Self::Width, Self::Height, Self::X, Self::Y, Self::Id];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Width => "width",
            Self::Height => "height",
            Self::X => "x",
            Self::Y => "y",
        }
    }

    /// 按属性名查找；未知名称返回 None
    pub fn from_name(name: &str) -> Option<Self> {
        Self::POSITIONAL.into_iter().find(|f| f.name() == name)
    }

    /// 取值约束；id 不受约束
    pub const fn constraint(self) -> Option<Constraint> {
        match self {
            Self::Id => None,
            Self::Width | Self::Height => Some(Constraint::Positive),
            Self::X | Self::Y => Some(Constraint::NonNegative),
        }
    }

    /// 取值检查
    pub fn check(self, value: i64) -> DomainResult<i64> {
        match self.constraint() {
            Some(constraint) if !constraint.admits(value) => Err(DomainError::InvalidValue {
                field: self,
                constraint,
            }),
            _ => Ok(value),
        }
    }

    /// 类型检查：仅接受可表示为 i64 的 JSON 整数，布尔值、浮点数等一律拒绝
    pub fn integer(self, value: &Value) -> DomainResult<i64> {
        match value {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
        .ok_or(DomainError::TypeMismatch { field: self })
    }

    /// 先类型检查、再取值检查
    pub fn validate(self, value: &Value) -> DomainResult<i64> {
        self.check(self.integer(value)?)
    }
}

impl fmt::Display for RectangleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 整数属性的取值约束
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// > 0
    Positive,
    /// >= 0
    NonNegative,
}

impl Constraint {
    pub const fn admits(self, value: i64) -> bool {
        match self {
            Self::Positive => value > 0,
            Self::NonNegative => value >= 0,
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => f.write_str("> 0"),
            Self::NonNegative => f.write_str(">= 0"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn names_round_trip() {
        for field in RectangleField::POSITIONAL {
            assert_eq!(RectangleField::from_name(field.name()), Some(field));
            assert_eq!(field.to_string(), field.name());
        }
        assert_eq!(RectangleField::from_name("size"), None);
        assert_eq!(RectangleField::from_name("Width"), None);
        assert_eq!(RectangleField::from_name("__width"), None);
    }

    #[test]
    fn constraint_bounds() {
        assert!(!Constraint::Positive.admits(0));
        assert!(Constraint::Positive.admits(1));
        assert!(Constraint::NonNegative.admits(0));
        assert!(!Constraint::NonNegative.admits(-1));
    }

    #[test]
    fn check_applies_field_constraint() {
        assert_eq!(RectangleField::Width.check(3), Ok(3));
        assert_eq!(
            RectangleField::Width.check(0),
            Err(DomainError::InvalidValue {
                field: RectangleField::Width,
                constraint: Constraint::Positive,
            })
        );
        assert_eq!(RectangleField::X.check(0), Ok(0));
        assert!(RectangleField::Y.check(-1).is_err());
        // id 不做范围限制
        assert_eq!(RectangleField::Id.check(-7), Ok(-7));
    }

    // 布尔值、浮点数、字符串、null 都不是整数
    #[test]
    fn integer_rejects_non_integers() {
        let field = RectangleField::Height;
        for value in [
            json!(true),
            json!(false),
            json!(4.0),
            json!(2.5),
            json!("4"),
            json!(null),
            json!([4]),
            json!({"height": 4}),
            json!(u64::MAX),
        ] {
            let err = field.integer(&value).unwrap_err();
            assert!(err.is_type_error(), "{value} should be rejected");
            assert_eq!(err.to_string(), "height must be an integer");
        }
        assert_eq!(field.integer(&json!(-4)), Ok(-4));
        assert_eq!(field.integer(&json!(i64::MAX)), Ok(i64::MAX));
    }

    // 类型错误优先于取值错误
    #[test]
    fn validate_checks_type_before_range() {
        assert!(RectangleField::X.validate(&json!("-1")).unwrap_err().is_type_error());
        assert!(RectangleField::X.validate(&json!(-1)).unwrap_err().is_value_error());
        assert_eq!(RectangleField::X.validate(&json!(2)), Ok(2));
    }
}

//! 类型化的部分更新
//!
//! 所有字段可选，仅赋值出现的字段；校验与不回滚语义与 `Rectangle::update` 一致。
//!
use bon::Builder;

use crate::field::RectangleField;
use crate::identity::ShapeId;

/// 矩形的部分更新：仅赋值出现的字段
///
/// 由 `Rectangle::apply` 按 id, width, height, x, y 的顺序逐个校验并赋值。
#[derive(Builder, Default, Debug, Clone, PartialEq, Eq)]
pub struct RectangleUpdate {
    id: Option<ShapeId>,
    width: Option<i64>,
    height: Option<i64>,
    x: Option<i64>,
    y: Option<i64>,
}

impl RectangleUpdate {
    pub fn id(&self) -> Option<ShapeId> {
        self.id
    }

    pub fn width(&self) -> Option<i64> {
        self.width
    }

    pub fn height(&self) -> Option<i64> {
        self.height
    }

    pub fn x(&self) -> Option<i64> {
        self.x
    }

    pub fn y(&self) -> Option<i64> {
        self.y
    }

    pub fn get(&self, field: RectangleField) -> Option<i64> {
        match field {
            RectangleField::Id => self.id.map(i64::from),
            RectangleField::Width => self.width,
            RectangleField::Height => self.height,
            RectangleField::X => self.x,
            RectangleField::Y => self.y,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.assignments().next().is_none()
    }

    /// 待赋值的 (属性, 值)，按位置参数顺序
    pub fn assignments(&self) -> impl Iterator<Item = (RectangleField, i64)> + '_ {
        RectangleField::POSITIONAL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }
}

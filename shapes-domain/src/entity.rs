//! 实体（Entity）基础抽象
//!
//! 为图形实体提供统一的标识（Id）能力；标识的分配见 `identity`。
//!
use std::{fmt::Display, str::FromStr};

/// 具备唯一标识的实体抽象
///
/// 通常由 `#[entity(id = ...)]` 宏自动实现。
pub trait Entity {
    /// 实体标识类型，要求可解析、可显示与可克隆
    type Id: FromStr + Clone + Display;

    /// 实体类型名，用于文本表示（如 `[Rectangle]`）
    const TYPE: &'static str;

    /// 获取实体标识
    fn id(&self) -> &Self::Id;
}

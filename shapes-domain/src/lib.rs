//! 图形领域层基础库（shapes-domain）
//!
//! 提供带标识与属性校验的图形实体：
//! - 实体（`entity`）抽象与标识分配（`identity`）
//! - 矩形（`rectangle`）：属性校验、面积、字符画、字典表示与批量更新
//! - 属性与取值约束（`field`）、类型化的部分更新（`update`）
//! - 统一错误（`error`）
//!
//! 典型用法：
//! 1. 通过 `Rectangle::new` / `Rectangle::with_size` 构造矩形，未给出标识时自动分配；
//! 2. 使用 `set_*`、`update` 或 `apply` 修改属性，每次赋值都会校验；
//! 3. 通过 `to_dictionary` / `from_dictionary`（或 serde）在字典表示之间转换。
//!
pub mod entity;
pub mod error;
pub mod field;
pub mod identity;
pub mod rectangle;
pub mod update;

// 允许在本 crate 内部通过 ::shapes_domain 进行自引用，
// 以便过程宏生成的路径在本 crate 中也能解析。
extern crate self as shapes_domain;

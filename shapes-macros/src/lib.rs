//! shapes 领域层过程宏
//!
//! - `#[entity]`：为具名字段结构体注入 `id` 字段并实现 `Entity`
//! - `#[entity_id]`：为单字段 tuple struct 生成标识类型所需的派生与转换
//!
use proc_macro::TokenStream;

mod derive_utils;
mod entity;
mod entity_id;
mod field_utils;

/// 实体宏
/// - 注入 `id: IdType` 字段（若已存在则复用原定义）并置于字段最前
/// - 合并派生：Debug（可关闭）、Clone、PartialEq、Eq
/// - 实现 `::shapes_domain::entity::Entity`（`TYPE`、`id`）
/// - 参数：`#[entity(id = IdType, debug = true|false, name = "...")]`
///   - `id` 默认 `String`
///   - `name` 默认取结构体名，作为 `Entity::TYPE`
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item)
}

/// 实体 ID 宏
/// 用于 `struct ShapeId(i64);` 这类单字段 tuple struct，自动生成：
/// - 派生：Clone, Debug（可关闭）, Serialize, Deserialize, PartialEq, Eq, Hash
/// - `new`、`into_inner`、`Display`、`FromStr`、`AsRef` 以及与内部类型的双向 `From`
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}

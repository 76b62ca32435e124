//! 标识分配
//!
//! 调用方给出的标识原样采用；未给出时从单调递增的序列中取下一个值。
//! 进程级序列为全局静态量，基于原子计数，多线程构造实体时也不会重复。
//!
use std::sync::atomic::{AtomicI64, Ordering};

use log::trace;
use shapes_macros::entity_id;

/// 图形实体标识
///
/// # 示例
///
/// ```
/// use shapes_domain::identity::ShapeId;
///
/// let id: ShapeId = "12".parse().unwrap();
/// assert_eq!(id, ShapeId::new(12));
/// assert_eq!(id.to_string(), "12");
/// assert_eq!(i64::from(id), 12);
/// ```
#[entity_id]
#[derive(Copy, PartialOrd, Ord)]
pub struct ShapeId(i64);

/// 单调递增的标识序列，首个分配值为 1
///
/// # 示例
///
/// ```
/// use shapes_domain::identity::{IdSequence, ShapeId};
///
/// let seq = IdSequence::new();
/// assert_eq!(seq.next(), ShapeId::new(1));
/// assert_eq!(seq.assign(Some(ShapeId::new(89))), ShapeId::new(89));
/// assert_eq!(seq.assign(None), ShapeId::new(2));
/// assert_eq!(seq.issued(), 2);
/// ```
#[derive(Debug, Default)]
pub struct IdSequence {
    issued: AtomicI64,
}

impl IdSequence {
    pub const fn new() -> Self {
        Self {
            issued: AtomicI64::new(0),
        }
    }

    /// 分配下一个标识
    pub fn next(&self) -> ShapeId {
        let value = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        ShapeId::new(value)
    }

    /// 给定标识则原样返回（不推进序列），否则分配下一个
    pub fn assign(&self, id: Option<ShapeId>) -> ShapeId {
        match id {
            Some(id) => id,
            None => self.next(),
        }
    }

    /// 已分配的标识个数
    pub fn issued(&self) -> i64 {
        self.issued.load(Ordering::Relaxed)
    }
}

static SHAPES: IdSequence = IdSequence::new();

/// 使用进程级序列分配标识
pub fn assign(id: Option<ShapeId>) -> ShapeId {
    let assigned = SHAPES.assign(id);
    trace!("shape id assigned: given={id:?}, assigned={assigned}");
    assigned
}

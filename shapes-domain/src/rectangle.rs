//! 矩形实体
//!
//! 四个整数属性在每次赋值时校验：width/height 必须 > 0，x/y 必须 >= 0。
//! 赋值失败时属性保持原值；构造失败时不产生对象，也不消耗标识。
//!
use std::fmt;
use std::io::{self, BufWriter, Write};

use log::{debug, trace};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::{Map, Value};
use shapes_macros::entity;

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::field::RectangleField;
use crate::identity::{self, ShapeId};
use crate::update::RectangleUpdate;

/// 矩形：宽、高、以及相对原点的偏移 x/y
#[entity(id = ShapeId)]
pub struct Rectangle {
    width: i64,
    height: i64,
    x: i64,
    y: i64,
}

impl Rectangle {
    /// 依次校验 width、height、x、y，全部通过后再分配标识
    pub fn new(width: i64, height: i64, x: i64, y: i64, id: Option<ShapeId>) -> DomainResult<Self> {
        let width = RectangleField::Width.check(width)?;
        let height = RectangleField::Height.check(height)?;
        let x = RectangleField::X.check(x)?;
        let y = RectangleField::Y.check(y)?;

        Ok(Self {
            id: identity::assign(id),
            width,
            height,
            x,
            y,
        })
    }

    /// 位于原点、自动分配标识的矩形
    pub fn with_size(width: i64, height: i64) -> DomainResult<Self> {
        Self::new(width, height, 0, 0, None)
    }

    /// 以动态参数构造：width, height, x = 0, y = 0, id = null
    pub fn from_args(args: &[Value]) -> DomainResult<Self> {
        let order = RectangleField::CONSTRUCTOR;
        if args.len() > order.len() {
            return Err(DomainError::TooManyArguments { given: args.len() });
        }
        if let Some(&field) = order[..2].get(args.len()) {
            return Err(DomainError::MissingArgument { field });
        }

        let optional = |field: RectangleField, index: usize| match args.get(index) {
            Some(value) => field.validate(value),
            None => Ok(0),
        };

        let width = RectangleField::Width.validate(&args[0])?;
        let height = RectangleField::Height.validate(&args[1])?;
        let x = optional(RectangleField::X, 2)?;
        let y = optional(RectangleField::Y, 3)?;
        let id = match args.get(4) {
            None | Some(Value::Null) => None,
            Some(value) => Some(ShapeId::new(RectangleField::Id.validate(value)?)),
        };

        Self::new(width, height, x, y, id)
    }

    /// 由字典重建：先构造 1x1 的矩形，再按关键字更新
    ///
    /// 字典缺少的键保留 1x1、0/0 的初始值；缺少 id 时分配新标识。
    pub fn from_dictionary(dictionary: &Map<String, Value>) -> DomainResult<Self> {
        let id = match dictionary.get(RectangleField::Id.name()) {
            Some(value) => Some(ShapeId::new(RectangleField::Id.validate(value)?)),
            None => None,
        };
        let mut rectangle = Self::new(1, 1, 0, 0, id)?;
        rectangle.update_keywords(dictionary)?;
        Ok(rectangle)
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }

    /// 按属性读取当前值
    pub fn get(&self, field: RectangleField) -> i64 {
        match field {
            RectangleField::Id => self.id.into(),
            RectangleField::Width => self.width,
            RectangleField::Height => self.height,
            RectangleField::X => self.x,
            RectangleField::Y => self.y,
        }
    }

    pub fn set_width(&mut self, width: i64) -> DomainResult<()> {
        self.assign(RectangleField::Width, width)
    }

    pub fn set_height(&mut self, height: i64) -> DomainResult<()> {
        self.assign(RectangleField::Height, height)
    }

    pub fn set_x(&mut self, x: i64) -> DomainResult<()> {
        self.assign(RectangleField::X, x)
    }

    pub fn set_y(&mut self, y: i64) -> DomainResult<()> {
        self.assign(RectangleField::Y, y)
    }

    /// 动态赋值：先检查是否为整数，再检查取值范围
    pub fn set_attribute(&mut self, field: RectangleField, value: &Value) -> DomainResult<()> {
        let value = field.integer(value)?;
        self.assign(field, value)
    }

    fn assign(&mut self, field: RectangleField, value: i64) -> DomainResult<()> {
        let value = field.check(value)?;
        match field {
            RectangleField::Id => self.id = ShapeId::new(value),
            RectangleField::Width => self.width = value,
            RectangleField::Height => self.height = value,
            RectangleField::X => self.x = value,
            RectangleField::Y => self.y = value,
        }
        trace!("rectangle {}: {field} = {value}", self.id);
        Ok(())
    }

    pub fn area(&self) -> u128 {
        // 两个正的 i64 之积不会溢出 u128
        self.width as u128 * self.height as u128
    }

    /// 先输出 y 个空行，再输出 height 行 `x 个空格 + width 个 #`
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // 写入 Vec 不会失败；输出仅含 ASCII
        self.write_to(&mut buf)
            .map(|()| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default()
    }

    /// 逐行流式输出，内存占用与图形尺寸无关
    pub fn write_to<W: Write>(&self, out: W) -> io::Result<()> {
        let mut out = BufWriter::new(out);
        write_repeated(&mut out, b'\n', self.y)?;
        for _ in 0..self.height {
            write_repeated(&mut out, b' ', self.x)?;
            write_repeated(&mut out, b'#', self.width)?;
            out.write_all(b"\n")?;
        }
        out.flush()
    }

    /// 将图形打印到标准输出
    pub fn display(&self) -> io::Result<()> {
        self.write_to(io::stdout().lock())
    }

    /// 批量更新
    ///
    /// 有位置参数时按 id, width, height, x, y 依次赋值并忽略 `kwargs`；
    /// 否则按关键字赋值。每次赋值都经过校验，出错时此前的赋值不回滚。
    pub fn update(&mut self, args: &[Value], kwargs: &Map<String, Value>) -> DomainResult<()> {
        if args.is_empty() {
            self.update_keywords(kwargs)
        } else {
            self.update_positional(args)
        }
    }

    /// 位置参数更新；超出 5 个的参数被忽略
    pub fn update_positional(&mut self, args: &[Value]) -> DomainResult<()> {
        let order = RectangleField::POSITIONAL;
        if args.len() > order.len() {
            debug!(
                "rectangle {}: ignoring {} extra positional argument(s)",
                self.id,
                args.len() - order.len()
            );
        }
        for (field, value) in order.into_iter().zip(args) {
            self.set_attribute(field, value)?;
        }
        Ok(())
    }

    /// 关键字更新；未知键被忽略
    pub fn update_keywords(&mut self, kwargs: &Map<String, Value>) -> DomainResult<()> {
        for (key, value) in kwargs {
            match RectangleField::from_name(key) {
                Some(field) => self.set_attribute(field, value)?,
                None => debug!("rectangle {}: ignoring unknown attribute '{key}'", self.id),
            }
        }
        Ok(())
    }

    /// 类型化的部分更新，语义与 `update` 相同（逐个赋值、不回滚）
    pub fn apply(&mut self, update: &RectangleUpdate) -> DomainResult<()> {
        for (field, value) in update.assignments() {
            self.assign(field, value)?;
        }
        Ok(())
    }

    /// 字典表示：键为 id, width, height, x, y
    pub fn to_dictionary(&self) -> Map<String, Value> {
        RectangleField::POSITIONAL
            .into_iter()
            .map(|field| (field.name().to_string(), Value::from(self.get(field))))
            .collect()
    }
}

// 分块写出 count 个相同字节；不变量保证 count 非负
fn write_repeated<W: Write>(out: &mut W, byte: u8, count: i64) -> io::Result<()> {
    let chunk = [byte; 512];
    let mut remaining = count.max(0) as u64;
    while remaining > 0 {
        let n = remaining.min(chunk.len() as u64) as usize;
        out.write_all(&chunk[..n])?;
        remaining -= n as u64;
    }
    Ok(())
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ({}) {}/{} - {}/{}",
            Self::TYPE,
            self.id,
            self.x,
            self.y,
            self.width,
            self.height
        )
    }
}

impl Serialize for Rectangle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_dictionary().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rectangle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let dictionary = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_dictionary(&dictionary).map_err(de::Error::custom)
    }
}

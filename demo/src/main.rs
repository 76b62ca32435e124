use log::info;
use serde_json::{Map, Value, json};
use shapes_domain::entity::Entity;
use shapes_domain::field::RectangleField;
use shapes_domain::identity::ShapeId;
use shapes_domain::rectangle::Rectangle;
use shapes_domain::update::RectangleUpdate;

fn kwargs(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn main() -> anyhow::Result<()> {
    // 日志级别通过 RUST_LOG 配置，例如 RUST_LOG=trace
    env_logger::init();

    // 构造：未给出 id 时自动分配
    let r1 = Rectangle::with_size(10, 2)?;
    let r2 = Rectangle::new(2, 10, 0, 0, None)?;
    let r3 = Rectangle::new(10, 2, 0, 0, Some(ShapeId::new(12)))?;
    for r in [&r1, &r2, &r3] {
        println!("{r}: id={}, area={}", r.id(), r.area());
    }

    // 校验失败
    for err in [
        Rectangle::new(10, 0, 0, 0, None).unwrap_err(),
        Rectangle::new(10, 2, 3, -1, None).unwrap_err(),
        Rectangle::from_args(&[json!(10), json!("2")]).unwrap_err(),
        Rectangle::from_args(&[json!(true), json!(2)]).unwrap_err(),
    ] {
        println!("[{}] {err}", if err.is_type_error() { "TypeError" } else { "ValueError" });
    }

    // 字符画
    let mut r4 = Rectangle::new(2, 3, 2, 2, None)?;
    r4.display()?;
    println!("---");

    // 批量更新：位置参数 / 关键字 / 类型化
    r4.update(&[json!(89), json!(4), json!(2)], &Map::new())?;
    println!("{r4}");
    r4.update(&[], &kwargs(json!({"x": 1, "y": 0, "depth": 3})))?;
    println!("{r4}");
    r4.apply(&RectangleUpdate::builder().height(1).build())?;
    println!("{r4}");
    r4.display()?;

    // 校验失败时属性保持原值
    if let Err(err) = r4.set_attribute(RectangleField::Width, &json!(-1)) {
        println!("[ValueError] {err}; still {r4}");
    }

    // 字典与 JSON
    let dictionary = r4.to_dictionary();
    println!("{}", Value::Object(dictionary.clone()));
    let copy = Rectangle::from_dictionary(&dictionary)?;
    info!("copy equals original: {}", copy == r4);
    println!("{}", serde_json::to_string(&[&r1, &r3])?);
    let parsed: Rectangle = serde_json::from_str(r#"{"id": 7, "width": 3, "height": 1}"#)?;
    println!("{parsed}");

    Ok(())
}

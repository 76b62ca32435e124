use shapes_domain::entity::Entity;
use shapes_macros::entity;

#[entity(id = u32)]
struct Marker {
    label: String,
}

// id 已存在时复用原定义并移至最前
#[entity(id = i64, name = "Pin")]
struct Pin {
    depth: i64,
    pub id: i64,
}

fn main() {
    let marker = Marker {
        id: 7,
        label: "origin".to_string(),
    };
    assert_eq!(marker.id(), &7);
    assert_eq!(Marker::TYPE, "Marker");
    assert_eq!(marker.clone(), marker);
    let _ = format!("{:?}", marker);

    let pin = Pin { id: -3, depth: 2 };
    assert_eq!(pin.id(), &-3);
    assert_eq!(pin.depth, 2);
    assert_eq!(Pin::TYPE, "Pin");
}

use shapes_macros::entity_id;

#[entity_id]
#[derive(Copy, PartialOrd, Ord)]
struct TileId(i64);

#[entity_id(debug = false)]
struct LabelId(String);

impl std::fmt::Debug for LabelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LabelId(..)")
    }
}

fn main() {
    let id = TileId::new(42);
    let copied = id;
    assert_eq!(id, copied);
    assert!(TileId::new(1) < TileId::new(2));
    assert_eq!(id.to_string(), "42");
    assert_eq!("42".parse::<TileId>().unwrap(), id);
    assert!("forty-two".parse::<TileId>().is_err());
    assert_eq!(i64::from(id), 42);
    assert_eq!(TileId::from(42), id);
    assert_eq!(AsRef::<i64>::as_ref(&id), &42);
    assert_eq!(serde_json::to_string(&id).unwrap(), "42");

    let label = LabelId::new("north".to_string());
    assert_eq!(format!("{:?}", label), "LabelId(..)");
    assert_eq!(label.clone().into_inner(), "north");
}

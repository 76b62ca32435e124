use shapes_domain::entity::Entity;
use shapes_macros::entity;

#[entity(debug = false)]
struct Secret {
    token: String,
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret({})", self.id)
    }
}

fn main() {
    let secret = Secret {
        id: "s-1".to_string(),
        token: "hidden".to_string(),
    };
    // 使用手写 Debug，实现可编译则说明未自动派生 Debug
    assert_eq!(format!("{:?}", secret), "Secret(s-1)");
    assert_eq!(secret.id(), "s-1");
    assert_eq!(secret.token.len(), 6);
}

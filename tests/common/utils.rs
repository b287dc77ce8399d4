use objectform::DomNode;

pub fn fixture(name: &str) -> String {
    let base = std::env::current_dir().unwrap();
    let path = base.join("tests").join("fixtures").join(name);

    path.display().to_string()
}

/// `<input name="a">` and an unchecked `<input name="b" type="checkbox">`.
pub fn two_field_form() -> DomNode {
    DomNode::element("form")
        .with_child(DomNode::element("input").with_name("a"))
        .with_child(DomNode::input("b", "checkbox"))
}

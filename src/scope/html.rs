use scraper::{ElementRef, Html};

use crate::scope::error::FormError;
use crate::scope::scope_model::DomNode;

/// Tag of the synthetic root that holds a parsed fragment's top-level elements.
pub const FRAGMENT_TAG: &str = "fragment";

/// Parse an HTML fragment (or full page) into a `DomNode` tree.
///
/// Only element nodes are kept. Current values are taken from markup:
/// `value` for inputs and buttons (`"on"` for a radio or checkbox without
/// one), text content for `textarea`, the selected option for `select`, and
/// `checked` from the attribute's presence.
pub fn parse_html(source: &str) -> Result<DomNode, FormError> {
    let fragment = Html::parse_fragment(source);
    let root = fragment.root_element();

    let children: Vec<DomNode> = root
        .children()
        .filter_map(ElementRef::wrap)
        .map(convert_element)
        .collect();

    if children.is_empty() {
        return Err(FormError::HtmlStructure(
            "fragment contains no elements".into(),
        ));
    }

    Ok(DomNode::element(FRAGMENT_TAG).with_children(children))
}

fn convert_element(el: ElementRef) -> DomNode {
    let data = el.value();
    let tag = data.name().to_ascii_lowercase();

    let value = match tag.as_str() {
        "textarea" => el.text().collect::<String>(),
        "select" => selected_option_value(el).unwrap_or_default(),
        "input" if is_checkable(data.attr("type")) => data.attr("value").unwrap_or("on").to_string(),
        _ => data.attr("value").unwrap_or("").to_string(),
    };

    DomNode {
        name: data.attr("name").map(str::to_string),
        r#type: data.attr("type").map(str::to_string),
        value,
        checked: data.attr("checked").is_some(),
        children: el
            .children()
            .filter_map(ElementRef::wrap)
            .map(convert_element)
            .collect(),
        tag,
    }
}

/// Radios and checkboxes without a `value` attribute report `"on"`.
fn is_checkable(input_type: Option<&str>) -> bool {
    input_type.is_some_and(|t| {
        let t = t.trim();
        t.eq_ignore_ascii_case("radio") || t.eq_ignore_ascii_case("checkbox")
    })
}

/// First `<option selected>`, else the first option.
fn selected_option_value(select: ElementRef) -> Option<String> {
    let options: Vec<ElementRef> = select
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name().eq_ignore_ascii_case("option"))
        .collect();

    options
        .iter()
        .find(|o| o.value().attr("selected").is_some())
        .or_else(|| options.first())
        .map(|o| option_value(*o))
}

fn option_value(option: ElementRef) -> String {
    match option.value().attr("value") {
        Some(v) => v.to_string(),
        None => option
            .text()
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" "),
    }
}

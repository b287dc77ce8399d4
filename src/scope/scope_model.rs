use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use crate::form::form_model::{FieldKind, FieldValue};

/// Tags that count as form inputs (the `:input` set).
pub const INPUT_TAGS: [&str; 4] = ["input", "select", "textarea", "button"];

/// A node of the element tree a form lives in.
///
/// Only the attributes the form helpers care about are kept. `value` is the
/// element's current value (for `select`, the selected option's value; for
/// `textarea`, its text), `checked` is the checked state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DomNode {
    pub tag: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub checked: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DomNode>,
}

impl DomNode {
    pub fn element(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    /// `<input name=.. type=..>` shorthand.
    pub fn input(name: &str, input_type: &str) -> Self {
        Self::element("input").with_name(name).with_type(input_type)
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_type(mut self, input_type: &str) -> Self {
        self.r#type = Some(input_type.to_string());
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_child(mut self, child: DomNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = DomNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn is_input(&self) -> bool {
        INPUT_TAGS
            .iter()
            .any(|t| self.tag.eq_ignore_ascii_case(t))
    }

    pub fn kind(&self) -> FieldKind {
        FieldKind::from_type_attr(self.r#type.as_deref())
    }

    /// The `name` attribute, if present and non-empty.
    pub fn field_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Current value as extraction sees it.
    pub fn current_value(&self) -> FieldValue {
        match self.kind() {
            FieldKind::Checkbox => FieldValue::Bool(self.checked),
            FieldKind::Text => FieldValue::Text(self.value.clone()),
        }
    }

    /// Write a value according to this element's kind.
    pub fn apply_value(&mut self, value: &FieldValue) {
        match self.kind() {
            FieldKind::Checkbox => self.checked = value.is_truthy(),
            FieldKind::Text => self.value = value.to_text(),
        }
    }

    /// All inputs below this node, in document order. The node itself is
    /// the scope and never one of its own inputs.
    pub fn inputs(&self) -> Vec<&DomNode> {
        let mut out = Vec::new();
        for child in &self.children {
            collect_inputs(child, &mut out);
        }
        out
    }

    /// Inputs whose name equals `name`, in document order.
    pub fn find_inputs(&self, name: &str) -> Vec<&DomNode> {
        self.inputs()
            .into_iter()
            .filter(|el| el.field_name() == Some(name))
            .collect()
    }

    /// Visit the inputs below this node mutably, in document order, until
    /// `visit` breaks.
    pub fn visit_inputs_mut<F>(&mut self, mut visit: F)
    where
        F: FnMut(&mut DomNode) -> ControlFlow<()>,
    {
        for child in &mut self.children {
            if visit_subtree(child, &mut visit).is_break() {
                break;
            }
        }
    }
}

fn collect_inputs<'a>(node: &'a DomNode, out: &mut Vec<&'a DomNode>) {
    if node.is_input() {
        out.push(node);
    }
    for child in &node.children {
        collect_inputs(child, out);
    }
}

fn visit_subtree<F>(node: &mut DomNode, visit: &mut F) -> ControlFlow<()>
where
    F: FnMut(&mut DomNode) -> ControlFlow<()>,
{
    if node.is_input() {
        visit(&mut *node)?;
    }
    for child in &mut node.children {
        visit_subtree(child, visit)?;
    }
    ControlFlow::Continue(())
}

use std::ops::ControlFlow;

use crate::form::form_model::{DuplicatePolicy, FormObject};
use crate::scope::scope_model::DomNode;

/// Fill `scope` from `values`, writing every input that carries each name.
pub fn fill<'a>(scope: &'a mut DomNode, values: &FormObject) -> &'a mut DomNode {
    fill_with(scope, values, DuplicatePolicy::All)
}

/// Fill `scope` from `values` and return it for chaining.
///
/// Checkbox targets are checked when the value is truthy and cleared
/// otherwise; other targets take the value's string form. Keys with no
/// matching input are ignored.
pub fn fill_with<'a>(
    scope: &'a mut DomNode,
    values: &FormObject,
    policy: DuplicatePolicy,
) -> &'a mut DomNode {
    for (name, value) in values {
        scope.visit_inputs_mut(|el: &mut DomNode| {
            if el.field_name() != Some(name.as_str()) {
                return ControlFlow::Continue(());
            }

            el.apply_value(value);

            match policy {
                DuplicatePolicy::First => ControlFlow::Break(()),
                DuplicatePolicy::All => ControlFlow::Continue(()),
            }
        });
    }

    scope
}

/// Keys of `values` that name no input in `scope`.
pub fn unmatched_fields<'v>(scope: &DomNode, values: &'v FormObject) -> Vec<&'v str> {
    let inputs = scope.inputs();

    values
        .keys()
        .filter(|name| !inputs.iter().any(|el| el.field_name() == Some(name.as_str())))
        .map(String::as_str)
        .collect()
}

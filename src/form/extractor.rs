use crate::form::form_model::{FieldValue, FormObject};
use crate::scope::scope_model::DomNode;

/// Extract every named input under `scope` into a fresh object.
pub fn extract(scope: &DomNode) -> FormObject {
    extract_filtered(scope, |_, _, _| true)
}

/// Like [`extract`], but `filter` decides per field whether it is assigned.
pub fn extract_filtered<F>(scope: &DomNode, filter: F) -> FormObject
where
    F: FnMut(&FormObject, &str, &FieldValue) -> bool,
{
    let mut object = FormObject::new();
    extract_into(scope, &mut object, filter);
    object
}

/// Extract into an existing object and hand the same object back.
///
/// Inputs without a name are skipped. Checkboxes yield their checked state,
/// all other inputs their current string value. `filter` sees the object as
/// built so far plus the candidate name and value; returning `false` leaves
/// the object untouched for that input. A later input with the same name
/// overwrites an earlier one.
pub fn extract_into<'a, F>(
    scope: &DomNode,
    destination: &'a mut FormObject,
    mut filter: F,
) -> &'a mut FormObject
where
    F: FnMut(&FormObject, &str, &FieldValue) -> bool,
{
    for el in scope.inputs() {
        let Some(name) = el.field_name() else {
            continue;
        };

        let value = el.current_value();
        if !filter(destination, name, &value) {
            continue;
        }

        destination.insert(name.to_string(), value);
    }

    destination
}

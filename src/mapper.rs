//! Maps schema properties to widget groups.
//!
//! Walks the root `properties` object in document order and classifies
//! each property by `type`/`enum`/`items` into the [`crate::model`]
//! model. Malformed or partial property schemas never fail the run; they
//! degrade to an empty group or a placeholder stub.

use heck::ToTitleCase;
use serde_json::Value;

use crate::model::{FieldGroup, LayoutModel, StringArrayResource, Widget};
use crate::pointer;

/// Converts a snake_case field name into a human-readable label.
/// `"user_name"` -> `"User Name"`. Total; empty in, empty out.
fn titleize(field_name: &str) -> String {
    field_name.to_title_case()
}

/// Renders an enum literal as display text: strings verbatim, anything
/// else (numbers, booleans) as its compact JSON form.
fn literal_text(value: &Value) -> String {
    match value.as_str() {
        Some(s) => s.to_string(),
        None => value.to_string(),
    }
}

/// Follows a node's `$ref`, if any, one hop into the document.
/// A broken pointer yields `Null`, which classifies as no type at all.
fn deref<'a>(root: &'a Value, node: &'a Value) -> &'a Value {
    match node.get("$ref").and_then(Value::as_str) {
        Some(pointer) => pointer::resolve(root, pointer).unwrap_or(&Value::Null),
        None => node,
    }
}

/// Maps every property of the root schema to a widget group.
///
/// Groups come out in property insertion order. Each property contributes
/// exactly one group regardless of type; spinner-backed fields also
/// contribute one string-array resource. Precedence: `array` beats `enum`
/// beats the scalar types, first match wins.
#[must_use]
pub fn map_fields(root: &Value) -> LayoutModel {
    let mut model: LayoutModel = LayoutModel::default();

    let Some(properties) = root.get("properties").and_then(Value::as_object) else {
        return model;
    };

    for (field, prop_schema) in properties {
        let prop: &Value = deref(root, prop_schema);
        let field_type: Option<&str> = prop.get("type").and_then(Value::as_str);
        let enums: Option<&Vec<Value>> = prop.get("enum").and_then(Value::as_array);
        let field_label: String = titleize(field);

        let mut widgets: Vec<Widget> = Vec::new();

        if field_type == Some("array") {
            let items: &Value = deref(root, prop.get("items").unwrap_or(&Value::Null));
            if let Some(item_enums) = items.get("enum").and_then(Value::as_array) {
                // One checkbox per enum value; display text stays raw.
                for enum_item in item_enums {
                    let text: String = literal_text(enum_item);
                    widgets.push(Widget::CheckBox {
                        id: format!("{field}_{}", text.replace(' ', "_")),
                        label: text,
                    });
                }
            } else {
                widgets.push(Widget::ListView { id: field.clone() });
            }
        } else if let Some(enum_values) = enums {
            model.resources.push(StringArrayResource {
                name: field.clone(),
                items: enum_values.iter().map(literal_text).collect(),
            });
            widgets.push(Widget::Spinner {
                id: field.clone(),
                entries: field.clone(),
            });
        } else {
            match field_type {
                Some("string") => widgets.push(Widget::EditText {
                    id: field.clone(),
                    numeric: false,
                }),
                Some("number" | "integer") => widgets.push(Widget::EditText {
                    id: field.clone(),
                    numeric: true,
                }),
                Some("boolean") => widgets.push(Widget::CheckBox {
                    id: field.clone(),
                    label: field_label.clone(),
                }),
                Some("object") => widgets.push(Widget::Placeholder {
                    field: field.clone(),
                }),
                // Absent or unrecognized type with no enum: labeled empty group.
                _ => {}
            }
        }

        model.groups.push(FieldGroup {
            label: field_label,
            widgets,
        });
    }

    model
}

// Helpers for folding a PatchField into a sea-orm ActiveValue.

use sea_orm::{ActiveValue, Value};

use crate::shared::patch_field::PatchField;

/// Non-nullable column: only `Value` writes, `Null` is ignored.
pub fn patch_required<V>(target: &mut ActiveValue<V>, field: &PatchField<V>)
where
    V: Into<Value> + Clone,
{
    if let PatchField::Value(v) = field {
        *target = ActiveValue::Set(v.clone());
    }
}

/// Nullable column: `Null` clears, `Value` replaces.
pub fn patch_nullable<V>(target: &mut ActiveValue<Option<V>>, field: &PatchField<V>)
where
    V: Clone,
    Option<V>: Into<Value>,
{
    match field {
        PatchField::Unset => {}
        PatchField::Null => *target = ActiveValue::Set(None),
        PatchField::Value(v) => *target = ActiveValue::Set(Some(v.clone())),
    }
}

/// JSON array column replaced wholesale; `Null` empties it.
pub fn patch_json_list(target: &mut ActiveValue<serde_json::Value>, field: &PatchField<Vec<String>>) {
    match field {
        PatchField::Unset => {}
        PatchField::Null => *target = ActiveValue::Set(serde_json::Value::Array(Vec::new())),
        PatchField::Value(items) => *target = ActiveValue::Set(json_list(items)),
    }
}

pub fn json_list(items: &[String]) -> serde_json::Value {
    serde_json::Value::Array(
        items
            .iter()
            .map(|item| serde_json::Value::String(item.clone()))
            .collect(),
    )
}

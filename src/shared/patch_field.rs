// src/shared/patch_field.rs

use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// Meaning:
// - Unset: field not provided => keep stored value
// - Null: explicitly null => clear the column (nullable fields only)
// - Value(v): replace with v
//
// Serde behavior (fields declared with #[serde(default)]):
// - omitted field => Unset
// - null => Null
// - value => Value(value)
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default)]
        location: PatchField<String>,
    }

    #[test]
    fn omitted_field_is_unset() {
        let payload: Payload = serde_json::from_str("{}").unwrap();
        assert!(matches!(payload.location, PatchField::Unset));
    }

    #[test]
    fn explicit_null_is_null() {
        let payload: Payload = serde_json::from_str(r#"{"location": null}"#).unwrap();
        assert!(matches!(payload.location, PatchField::Null));
    }

    #[test]
    fn value_is_kept() {
        let payload: Payload = serde_json::from_str(r#"{"location": "Berlin"}"#).unwrap();
        assert_eq!(payload.location.as_value(), Some(&"Berlin".to_string()));
    }
}

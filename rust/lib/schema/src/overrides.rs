//! Field option overrides.
//!
//! Overrides are declared next to the form code (or in the schema
//! document) and merged into `spec.options` of the targeted fields, so a
//! form can turn a `text` field into a multiline one without a backend
//! change.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::SchemaError;
use crate::registry::SchemaRegistry;

/// Options applied to one or more fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOverride {
    /// Fields this override applies to, in "resource.field" format.
    pub apply_to: Vec<String>,

    /// Options merged into `spec.options` (later keys replace earlier ones).
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub options: Value,
}

/// Merge overrides into the registry. Every definition of a targeted
/// field is updated, action-scoped variants included.
///
/// Returns the number of definitions touched. Targets naming unknown
/// resources or fields are skipped; malformed targets are an error.
pub fn apply_overrides(
    registry: &mut SchemaRegistry,
    overrides: &[FieldOverride],
) -> Result<usize, SchemaError> {
    let mut touched = 0;

    for ov in overrides {
        let options = match ov.options.as_object() {
            Some(o) => o,
            None => continue,
        };

        for target in &ov.apply_to {
            let (resource, field) = match target.split_once('.') {
                Some((r, f)) if !r.is_empty() && !f.is_empty() && !f.contains('.') => (r, f),
                _ => return Err(SchemaError::InvalidOverride(target.clone())),
            };

            let Some(schema) = registry.resource_mut(resource) else {
                debug!(override_target = %target, "override targets unknown resource");
                continue;
            };

            for (name, def) in schema.definitions_mut() {
                if name != field {
                    continue;
                }
                for (k, v) in options {
                    def.spec.options.insert(k.clone(), v.clone());
                }
                touched += 1;
            }
        }
    }

    Ok(touched)
}

/// Declare a field override.
///
/// Syntax:
///   `field_override!({ key: value, ... } => [resource.field, ...])`
#[macro_export]
macro_rules! field_override {
    ({ $($key:ident : $val:expr),* $(,)? } => [ $($resource:ident . $field:ident),+ $(,)? ]) => {
        $crate::FieldOverride {
            apply_to: vec![ $( concat!(stringify!($resource), ".", stringify!($field)).to_string() ),+ ],
            options: $crate::serde_json::json!({ $( stringify!($key): $val ),* }),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{FieldDef, FieldKind, TextFormat};

    fn registry() -> SchemaRegistry {
        let mut reg = SchemaRegistry::new();
        reg.insert_field("booking", "notes", FieldDef::new(FieldKind::Text, "Notes"));
        reg.insert_action_field("booking", "create", "notes", FieldDef::new(FieldKind::Text, "Notes"));
        reg.insert_field("property", "description", FieldDef::new(FieldKind::TranslatedText, "Description"));
        reg
    }

    #[test]
    fn applies_to_all_variants() {
        let mut reg = registry();
        let ov = field_override!({ format: "multiline", rows: 4 } => [booking.notes, property.description]);
        assert_eq!(ov.apply_to, vec!["booking.notes", "property.description"]);

        let touched = apply_overrides(&mut reg, &[ov]).unwrap();
        assert_eq!(touched, 3);

        let base = reg.find_field("booking", "notes", None).unwrap();
        assert_eq!(base.text_format(), TextFormat::Multiline);
        assert_eq!(base.option_usize("rows"), Some(4));
        let scoped = reg.find_field("booking", "notes", Some("create")).unwrap();
        assert_eq!(scoped.text_format(), TextFormat::Multiline);
    }

    #[test]
    fn unknown_targets_are_skipped() {
        let mut reg = registry();
        let ov = field_override!({ format: "html" } => [invoice.notes, booking.missing]);
        assert_eq!(apply_overrides(&mut reg, &[ov]).unwrap(), 0);
    }

    #[test]
    fn malformed_target_is_an_error() {
        let mut reg = registry();
        let ov = FieldOverride {
            apply_to: vec!["booking".into()],
            options: serde_json::json!({"format": "html"}),
        };
        assert!(matches!(
            apply_overrides(&mut reg, &[ov]),
            Err(SchemaError::InvalidOverride(t)) if t == "booking"
        ));
    }
}

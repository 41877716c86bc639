//! Field lookup by `(resource, field, action?)`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::field::FieldDef;

/// Fields of one resource, plus per-action variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceSchema {
    #[serde(default)]
    pub fields: BTreeMap<String, FieldDef>,

    /// `action -> field -> definition`. An action entry shadows the
    /// resource-level definition of the same field.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub actions: BTreeMap<String, BTreeMap<String, FieldDef>>,
}

impl ResourceSchema {
    /// Every definition in this resource, action variants included.
    pub(crate) fn definitions_mut(&mut self) -> impl Iterator<Item = (&String, &mut FieldDef)> {
        self.fields
            .iter_mut()
            .chain(self.actions.values_mut().flat_map(|fields| fields.iter_mut()))
    }
}

/// Read-only registry of resource field definitions.
///
/// Built once at startup and passed by reference to the form layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaRegistry {
    resources: BTreeMap<String, ResourceSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_resources(resources: BTreeMap<String, ResourceSchema>) -> Self {
        Self { resources }
    }

    /// Register a resource-level field definition.
    pub fn insert_field(&mut self, resource: &str, field: &str, def: FieldDef) {
        self.resources
            .entry(resource.to_string())
            .or_default()
            .fields
            .insert(field.to_string(), def);
    }

    /// Register an action-scoped field definition.
    pub fn insert_action_field(&mut self, resource: &str, action: &str, field: &str, def: FieldDef) {
        self.resources
            .entry(resource.to_string())
            .or_default()
            .actions
            .entry(action.to_string())
            .or_default()
            .insert(field.to_string(), def);
    }

    /// Find a field definition.
    ///
    /// With an action, the action-scoped definition wins; if the action
    /// does not redefine the field the resource-level definition is used.
    pub fn find_field(&self, resource: &str, field: &str, action: Option<&str>) -> Option<&FieldDef> {
        let schema = self.resources.get(resource)?;
        let scoped = action
            .and_then(|a| schema.actions.get(a))
            .and_then(|fields| fields.get(field));
        if scoped.is_some() {
            trace!(resource, field, action, "action-scoped field definition");
            return scoped;
        }
        schema.fields.get(field)
    }

    pub fn resource(&self, name: &str) -> Option<&ResourceSchema> {
        self.resources.get(name)
    }

    pub(crate) fn resource_mut(&mut self, name: &str) -> Option<&mut ResourceSchema> {
        self.resources.get_mut(name)
    }

    pub fn resource_names(&self) -> impl Iterator<Item = &str> {
        self.resources.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Total number of definitions, action variants included.
    pub fn field_count(&self) -> usize {
        self.resources
            .values()
            .map(|r| r.fields.len() + r.actions.values().map(|a| a.len()).sum::<usize>())
            .sum()
    }
}

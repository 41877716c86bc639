//! Resource field schema for the staykit admin forms.
//!
//! The backend describes every resource attribute with a [`FieldDef`]
//! (input type, label, constraints, relation target). Forms look fields up
//! by `(resource, field, action?)` through a [`SchemaRegistry`] that is
//! built once from a [`SchemaDocument`] and passed explicitly to whoever
//! needs it, together with the configured [`LocaleList`].

pub mod document;
pub mod error;
pub mod field;
pub mod locale;
pub mod overrides;
pub mod registry;

pub use document::SchemaDocument;
pub use error::SchemaError;
pub use field::{FieldDef, FieldKind, FieldSpec, PossibleValue, PossibleValues, TextFormat};
pub use locale::{Language, LocaleList};
pub use overrides::{apply_overrides, FieldOverride};
pub use registry::{ResourceSchema, SchemaRegistry};

#[doc(hidden)]
pub use serde_json;

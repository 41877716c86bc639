//! Field type to widget dispatch.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use staykit_schema::{FieldDef, FieldKind, LocaleList, SchemaRegistry, TextFormat};
use staykit_types::Currency;
use tracing::{debug, warn};

use crate::event::ChangeEvent;
use crate::props::{BlurHandler, ChangeHandler, InputProps};
use crate::widget::{InputType, Relation, Widget};
use crate::wrapper::{ChildAttrs, InputWrapper, WrapperView};

/// Renders schema fields as wrapped widgets.
///
/// Borrowing the registry and language list keeps the dispatcher free of
/// global state; build one per form.
#[derive(Debug, Clone, Copy)]
pub struct ResourceInput<'a> {
    registry: &'a SchemaRegistry,
    languages: &'a LocaleList,
}

impl<'a> ResourceInput<'a> {
    pub fn new(registry: &'a SchemaRegistry, languages: &'a LocaleList) -> Self {
        Self { registry, languages }
    }

    /// Render `resource.field`, optionally in the context of `action`.
    ///
    /// Returns `None` (and logs a warning) when the field is unknown or its
    /// type has no widget.
    pub fn render(
        &self,
        resource: &str,
        field: &str,
        action: Option<&str>,
        props: InputProps,
    ) -> Option<RenderedInput> {
        let Some(def) = self.registry.find_field(resource, field, action) else {
            warn!(resource, field, action, "no field definition, rendering nothing");
            return None;
        };

        let def = with_prop_options(def, &props);
        let Some(widget) = self.widget_for(&def) else {
            warn!(resource, field, kind = %def.kind, "unsupported field type, rendering nothing");
            return None;
        };
        debug!(resource, field, action, kind = %def.kind, "render field");

        let id = props.id.clone().unwrap_or_else(|| format!("{}-{}", resource, field));
        let (wrapper, child) = InputWrapper::new(id.clone())
            .label(def.label.clone())
            .required(def.is_required)
            .description(def.description.clone())
            .error(props.error.clone())
            .wrap(ChildAttrs { disabled: props.disabled, ..Default::default() });

        let value = if props.value.is_null() { def.default_value.clone() } else { props.value };

        Some(RenderedInput {
            id,
            name: field.to_string(),
            kind: def.kind.clone(),
            wrapper,
            child,
            widget,
            value,
            on_change: props.on_change,
            on_blur: props.on_blur,
        })
    }

    /// Widget for a definition whose options already include the props'.
    pub fn widget_for(&self, def: &FieldDef) -> Option<Widget> {
        let widget = match &def.kind {
            FieldKind::Text => match def.text_format() {
                TextFormat::Plain => Widget::TextInput { input_type: InputType::Text },
                TextFormat::Multiline => Widget::Textarea { rows: def.option_usize("rows") },
                TextFormat::Html => Widget::RichText,
            },
            FieldKind::Email => Widget::TextInput { input_type: InputType::Email },
            FieldKind::Integer => number(def, true),
            FieldKind::Decimal => match def.option_str("currency") {
                Some(code) if !code.is_empty() => Widget::MoneyInput { currency: Currency::new(code) },
                _ => number(def, false),
            },
            FieldKind::Percent => Widget::PercentageInput,
            FieldKind::Phone => Widget::PhoneInput {
                default_calling_code: def.option_str("default_calling_code").map(str::to_string),
            },
            FieldKind::Color => Widget::ColorInput,
            FieldKind::Time => Widget::TimeInput,
            FieldKind::Geo => Widget::GeolocationInput,
            FieldKind::Date => Widget::DatePicker,
            FieldKind::DateRange => Widget::DateRangePicker,
            FieldKind::Boolean => Widget::Checkbox,
            FieldKind::Picklist => Widget::Select {
                options: def
                    .possible_values
                    .as_ref()
                    .map(|pv| pv.iter().cloned().collect())
                    .unwrap_or_default(),
            },
            FieldKind::TranslatedText => Widget::MultiLanguageInput {
                languages: self.languages.iter().cloned().collect(),
                multiline: def.text_format() != TextFormat::Plain,
                min_characters: def.option_usize("min_characters"),
                max_characters: def.option_usize("max_characters"),
            },
            FieldKind::BelongsTo => {
                let target = def.relates_to.clone().unwrap_or_default();
                match Relation::from_target(&target) {
                    Some(relation) => Widget::RelationSelect {
                        relation,
                        placeholder: relation.placeholder(),
                        resource_type: def.option_str("resource_type").map(str::to_string),
                    },
                    None => Widget::UnsupportedRelation { target },
                }
            }
            FieldKind::Unsupported(_) => return None,
        };
        Some(widget)
    }
}

fn number(def: &FieldDef, integer: bool) -> Widget {
    let bound = |key: &str| def.option(key).and_then(Value::as_f64);
    Widget::NumberInput { integer, min: bound("min"), max: bound("max") }
}

/// Props options shadow the schema's `spec.options`.
fn with_prop_options(def: &FieldDef, props: &InputProps) -> FieldDef {
    let mut def = def.clone();
    for (k, v) in &props.options {
        def.spec.options.insert(k.clone(), v.clone());
    }
    def
}

/// A field ready to paint: wrapper chrome, child attributes, the widget
/// and its current value.
#[derive(Clone, Serialize)]
pub struct RenderedInput {
    pub id: String,
    pub name: String,
    pub kind: FieldKind,
    pub wrapper: WrapperView,
    pub child: ChildAttrs,
    pub widget: Widget,
    pub value: Value,
    #[serde(skip)]
    on_change: Option<ChangeHandler>,
    #[serde(skip)]
    on_blur: Option<BlurHandler>,
}

impl RenderedInput {
    /// Forward a change to the consumer with the bare value.
    pub fn change(&self, event: impl Into<ChangeEvent>) {
        if let Some(cb) = &self.on_change {
            cb(event.into().into_value());
        }
    }

    pub fn blur(&self) {
        if let Some(cb) = &self.on_blur {
            cb();
        }
    }
}

impl fmt::Debug for RenderedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderedInput")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("wrapper", &self.wrapper)
            .field("child", &self.child)
            .field("widget", &self.widget)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

//! Schema-driven admin form inputs.
//!
//! [`ResourceInput`] turns `(resource, field, action?)` into a typed
//! [`Widget`] description wrapped with label/error chrome
//! ([`InputWrapper`]). The widget state machines in [`widgets`],
//! [`language`] and [`autocomplete`] hold the per-input editing logic;
//! painting them is left to the front end.
//!
//! Nothing here reaches for globals: the [`SchemaRegistry`] and
//! [`LocaleList`] are passed in by the caller.
//!
//! [`SchemaRegistry`]: staykit_schema::SchemaRegistry
//! [`LocaleList`]: staykit_schema::LocaleList

pub mod autocomplete;
pub mod dispatch;
pub mod event;
pub mod language;
pub mod props;
pub mod widget;
pub mod widgets;
pub mod wrapper;

pub use autocomplete::{AutocompleteSource, Debouncer, RelationSelect, DEBOUNCE};
pub use dispatch::{RenderedInput, ResourceInput};
pub use event::ChangeEvent;
pub use language::{indicator_color, IndicatorColor, LanguageTabs, MultiLanguageInput, Orientation, TabView};
pub use props::{BlurHandler, ChangeHandler, FieldError, InputProps};
pub use widget::{InputType, Relation, Widget};
pub use wrapper::{ChildAttrs, InputWrapper, ValidationState, WrapperView};

//! Properties passed to a form input by the surrounding form.

use std::fmt;
use std::rc::Rc;

use serde_json::{Map, Value};

/// Consumer callback receiving the normalized value.
pub type ChangeHandler = Rc<dyn Fn(Value)>;

pub type BlurHandler = Rc<dyn Fn()>;

/// Error state reported by the form: a flag or a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldError {
    #[default]
    None,
    Flag(bool),
    Message(String),
}

impl FieldError {
    /// True for `Flag(true)` and non-empty messages.
    pub fn is_error(&self) -> bool {
        match self {
            FieldError::None => false,
            FieldError::Flag(b) => *b,
            FieldError::Message(m) => !m.is_empty(),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FieldError::Message(m) if !m.is_empty() => Some(m),
            _ => None,
        }
    }
}

impl From<bool> for FieldError {
    fn from(b: bool) -> Self {
        FieldError::Flag(b)
    }
}

impl From<&str> for FieldError {
    fn from(s: &str) -> Self {
        FieldError::Message(s.to_string())
    }
}

impl From<String> for FieldError {
    fn from(s: String) -> Self {
        FieldError::Message(s)
    }
}

#[derive(Clone, Default)]
pub struct InputProps {
    pub value: Value,
    pub on_change: Option<ChangeHandler>,
    pub on_blur: Option<BlurHandler>,
    pub disabled: bool,
    pub error: FieldError,
    /// Per-field options (`currency`, `resource_type`, ...). They take
    /// precedence over the schema's `spec.options`.
    pub options: Map<String, Value>,
    /// Element id; defaults to `{resource}-{field}`.
    pub id: Option<String>,
}

impl InputProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    pub fn on_change(mut self, f: impl Fn(Value) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    pub fn on_blur(mut self, f: impl Fn() + 'static) -> Self {
        self.on_blur = Some(Rc::new(f));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn error(mut self, error: impl Into<FieldError>) -> Self {
        self.error = error.into();
        self
    }

    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl fmt::Debug for InputProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputProps")
            .field("value", &self.value)
            .field("on_change", &self.on_change.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("disabled", &self.disabled)
            .field("error", &self.error)
            .field("options", &self.options)
            .field("id", &self.id)
            .finish()
    }
}

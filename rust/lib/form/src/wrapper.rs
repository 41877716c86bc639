//! Label / description / message chrome around a single input.

use serde::Serialize;

use crate::props::FieldError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationState {
    #[default]
    Default,
    Error,
    Success,
    Warning,
}

/// Attributes injected into the wrapped child element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChildAttrs {
    pub id: String,
    pub disabled: bool,
    #[serde(rename = "aria-invalid")]
    pub aria_invalid: bool,
    #[serde(rename = "aria-describedby", skip_serializing_if = "Option::is_none")]
    pub aria_describedby: Option<String>,
}

/// What the wrapper itself displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrapperView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_id: Option<String>,
    /// Message shown under the input for the current state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_id: Option<String>,
    pub state: ValidationState,
}

#[derive(Debug, Clone, Default)]
pub struct InputWrapper {
    id: String,
    label: Option<String>,
    required: bool,
    description: Option<String>,
    error: FieldError,
    success_message: Option<String>,
    warning_message: Option<String>,
    state: Option<ValidationState>,
    disabled: bool,
}

impl InputWrapper {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Default::default() }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.label = (!label.is_empty()).then_some(label);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description.filter(|d| !d.is_empty());
        self
    }

    pub fn error(mut self, error: FieldError) -> Self {
        self.error = error;
        self
    }

    pub fn success_message(mut self, msg: impl Into<String>) -> Self {
        self.success_message = Some(msg.into());
        self
    }

    pub fn warning_message(mut self, msg: impl Into<String>) -> Self {
        self.warning_message = Some(msg.into());
        self
    }

    /// Force a state regardless of messages.
    pub fn state(mut self, state: ValidationState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Priority: explicit state > error > success message > warning message.
    pub fn validation_state(&self) -> ValidationState {
        if let Some(state) = self.state {
            return state;
        }
        if self.error.is_error() {
            ValidationState::Error
        } else if self.success_message.is_some() {
            ValidationState::Success
        } else if self.warning_message.is_some() {
            ValidationState::Warning
        } else {
            ValidationState::Default
        }
    }

    fn message(&self, state: ValidationState) -> Option<&str> {
        match state {
            ValidationState::Error => self.error.message(),
            ValidationState::Success => self.success_message.as_deref(),
            ValidationState::Warning => self.warning_message.as_deref(),
            ValidationState::Default => None,
        }
    }

    pub fn description_id(&self) -> Option<String> {
        self.description.as_ref().map(|_| format!("{}-description", self.id))
    }

    /// Present only while an error message is displayed.
    pub fn error_id(&self) -> Option<String> {
        let state = self.validation_state();
        (state == ValidationState::Error && self.message(state).is_some())
            .then(|| format!("{}-error", self.id))
    }

    /// Compute the wrapper view and the attributes injected into `child`.
    ///
    /// `disabled` is the OR of the wrapper's and the child's own flag.
    pub fn wrap(&self, child: ChildAttrs) -> (WrapperView, ChildAttrs) {
        let state = self.validation_state();
        let description_id = self.description_id();
        let error_id = self.error_id();

        let describedby: Vec<&str> = [description_id.as_deref(), error_id.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        let attrs = ChildAttrs {
            id: self.id.clone(),
            disabled: self.disabled || child.disabled,
            aria_invalid: state == ValidationState::Error,
            aria_describedby: (!describedby.is_empty()).then(|| describedby.join(" ")),
        };

        let view = WrapperView {
            label: self.label.clone(),
            required: self.required,
            description: self.description.clone(),
            description_id,
            message: self.message(state).map(str::to_string),
            error_id,
            state,
        };

        (view, attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_priority() {
        let w = InputWrapper::new("f").success_message("ok").warning_message("hmm");
        assert_eq!(w.validation_state(), ValidationState::Success);

        let w = w.error(FieldError::from("bad"));
        assert_eq!(w.validation_state(), ValidationState::Error);

        let w = w.state(ValidationState::Warning);
        assert_eq!(w.validation_state(), ValidationState::Warning);

        let w = InputWrapper::new("f").warning_message("hmm");
        assert_eq!(w.validation_state(), ValidationState::Warning);

        assert_eq!(InputWrapper::new("f").validation_state(), ValidationState::Default);
        assert_eq!(
            InputWrapper::new("f").error(FieldError::Flag(false)).validation_state(),
            ValidationState::Default
        );
    }

    #[test]
    fn describedby_joins_present_ids() {
        let w = InputWrapper::new("booking-notes")
            .description(Some("Internal only".into()))
            .error(FieldError::from("Too long"));
        let (view, attrs) = w.wrap(ChildAttrs::default());
        assert_eq!(
            attrs.aria_describedby.as_deref(),
            Some("booking-notes-description booking-notes-error")
        );
        assert!(attrs.aria_invalid);
        assert_eq!(view.message.as_deref(), Some("Too long"));
        assert_eq!(attrs.id, "booking-notes");
    }

    #[test]
    fn describedby_omitted_when_nothing_to_describe() {
        let (_, attrs) = InputWrapper::new("x").wrap(ChildAttrs::default());
        assert_eq!(attrs.aria_describedby, None);
        assert!(!attrs.aria_invalid);

        // A bare error flag marks the input invalid but has no message to point at.
        let (view, attrs) = InputWrapper::new("x").error(FieldError::Flag(true)).wrap(ChildAttrs::default());
        assert!(attrs.aria_invalid);
        assert_eq!(attrs.aria_describedby, None);
        assert_eq!(view.error_id, None);
    }

    #[test]
    fn only_description() {
        let (_, attrs) = InputWrapper::new("x")
            .description(Some("Help".into()))
            .wrap(ChildAttrs::default());
        assert_eq!(attrs.aria_describedby.as_deref(), Some("x-description"));
    }

    #[test]
    fn disabled_is_merged() {
        let child = ChildAttrs { disabled: true, ..Default::default() };
        let (_, attrs) = InputWrapper::new("x").wrap(child);
        assert!(attrs.disabled);
        let (_, attrs) = InputWrapper::new("x").disabled(true).wrap(ChildAttrs::default());
        assert!(attrs.disabled);
        let (_, attrs) = InputWrapper::new("x").wrap(ChildAttrs::default());
        assert!(!attrs.disabled);
    }

    #[test]
    fn success_message_shown() {
        let (view, attrs) = InputWrapper::new("x").success_message("Saved").wrap(ChildAttrs::default());
        assert_eq!(view.state, ValidationState::Success);
        assert_eq!(view.message.as_deref(), Some("Saved"));
        assert!(!attrs.aria_invalid);
    }
}

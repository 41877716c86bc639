use staykit_types::PhoneNumber;

use super::{Commit, Controlled};

pub const INVALID_PHONE: &str = "Invalid phone number";

/// Phone box. Invalid input is never emitted; it stays in the draft with
/// a local validation message until fixed.
#[derive(Debug, Clone)]
pub struct PhoneInput {
    value: Controlled<Option<PhoneNumber>>,
    draft: String,
    default_calling_code: Option<String>,
    validation_message: Option<&'static str>,
}

impl PhoneInput {
    pub fn controlled(value: Option<PhoneNumber>, default_calling_code: Option<String>) -> Self {
        Self::build(Controlled::controlled(value), default_calling_code)
    }

    pub fn uncontrolled(default: Option<PhoneNumber>, default_calling_code: Option<String>) -> Self {
        Self::build(Controlled::uncontrolled(default), default_calling_code)
    }

    fn build(value: Controlled<Option<PhoneNumber>>, default_calling_code: Option<String>) -> Self {
        let draft = render(value.get());
        Self { value, draft, default_calling_code, validation_message: None }
    }

    pub fn value(&self) -> Option<&PhoneNumber> {
        self.value.get().as_ref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn default_calling_code(&self) -> Option<&str> {
        self.default_calling_code.as_deref()
    }

    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message
    }

    pub fn input(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.validation_message = None;
    }

    pub fn blur(&mut self) -> Commit<PhoneNumber> {
        let text = self.draft.trim();
        let parsed = if text.is_empty() {
            None
        } else {
            match PhoneNumber::parse(text, self.default_calling_code.as_deref()) {
                Ok(p) => Some(p),
                Err(_) => {
                    self.validation_message = Some(INVALID_PHONE);
                    return Commit::Rejected;
                }
            }
        };

        self.validation_message = None;
        self.draft = render(&parsed);
        if &parsed == self.value.get() {
            return Commit::Unchanged;
        }
        Commit::Changed(self.value.set(parsed))
    }

    pub fn sync(&mut self, value: Option<PhoneNumber>) {
        if self.value.is_controlled() {
            self.draft = render(&value);
            self.validation_message = None;
        }
        self.value.sync(value);
    }
}

fn render(value: &Option<PhoneNumber>) -> String {
    value.as_ref().map(|p| p.as_e164().to_string()).unwrap_or_default()
}

//! Contact form state.
//!
//! The form performs no network call: submitting clears the fields and
//! hands back a toast message. Validation lives entirely here; the view
//! router never sees a form error.

/// A form field, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Company, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Company => "Company",
            Field::Message => "Message",
        }
    }

    fn next(self) -> Field {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Company,
            Field::Company => Field::Message,
            Field::Message => Field::Name,
        }
    }

    fn prev(self) -> Field {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Company => Field::Email,
            Field::Message => Field::Company,
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Fields were valid; the form has been cleared.
    Accepted,
    /// A required field (name, email, or message) was empty.
    MissingFields,
}

impl SubmitOutcome {
    /// The toast text for this outcome.
    pub fn toast_message(self) -> &'static str {
        match self {
            SubmitOutcome::Accepted => {
                "Thanks for reaching out! I'll get back to you within 24 hours."
            }
            SubmitOutcome::MissingFields => "Name, email, and message are required.",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub focused: Field,
    /// True while key input is routed into the form.
    pub editing: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Message => &mut self.message,
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    pub fn insert_char(&mut self, c: char) {
        let field = self.focused;
        self.value_mut(field).push(c);
    }

    /// Insert a line break; only the message field is multi-line.
    /// Returns false when the focused field rejects newlines.
    pub fn insert_newline(&mut self) -> bool {
        if self.focused == Field::Message {
            self.message.push('\n');
            true
        } else {
            false
        }
    }

    pub fn backspace(&mut self) {
        let field = self.focused;
        self.value_mut(field).pop();
    }

    /// Attempt to submit. Name, email, and message are required; company
    /// is optional. On success every field is cleared.
    pub fn submit(&mut self) -> SubmitOutcome {
        let required_filled = !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty();
        if !required_filled {
            return SubmitOutcome::MissingFields;
        }
        tracing::info!(name = %self.name, "contact form submitted");
        self.reset();
        SubmitOutcome::Accepted
    }

    /// Clear every field and leave editing mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

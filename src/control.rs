use serde::{Deserialize, Serialize};

use crate::consts::{END_DATE_ID, START_DATE_ID};

/// A form control that accepts a string value, such as a date input.
pub trait ValueSink {
    fn set_value(&mut self, value: &str);
}

impl ValueSink for String {
    fn set_value(&mut self, value: &str) {
        value.clone_into(self);
    }
}

/// Finds form controls by their identifier.
pub trait ControlLookup {
    /// Returns the control with the given id, or `None` if the form has no such element.
    fn find_control(&mut self, id: &str) -> Option<&mut dyn ValueSink>;
}

/// An input element with an identifier and its current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputField {
    id:    String,
    value: String,
}

impl InputField {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id:    id.into(),
            value: String::new(),
        }
    }

    /// An input whose markup already carries a value
    pub fn with_value(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id:    id.into(),
            value: value.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl ValueSink for InputField {
    fn set_value(&mut self, value: &str) {
        self.value.set_value(value);
    }
}

/// An in-memory form: an ordered list of input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormFields {
    fields: Vec<InputField>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form with empty `start-date` and `end-date` inputs
    pub fn report_form() -> Self {
        Self::new()
            .with_field(InputField::new(START_DATE_ID))
            .with_field(InputField::new(END_DATE_ID))
    }

    #[must_use]
    pub fn with_field(mut self, field: InputField) -> Self {
        self.fields.push(field);
        self
    }

    /// Current value of the first field with this id
    pub fn value(&self, id: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .map(InputField::value)
    }

    pub fn fields(&self) -> &[InputField] {
        &self.fields
    }
}

impl ControlLookup for FormFields {
    fn find_control(&mut self, id: &str) -> Option<&mut dyn ValueSink> {
        self.fields
            .iter_mut()
            .find(|field| field.id == id)
            .map(|field| field as &mut dyn ValueSink)
    }
}

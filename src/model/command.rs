//! Parsed Commands
//!
//! A command owns its parameters outright: cloning is a deep copy,
//! clearing or dropping the command destroys every parameter.

use super::value::ParameterValue;

/// A named parameter like "X10" or "F"
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedParameter {
    /// Parameter name (e.g., "X", "S")
    pub name: String,
    /// Typed value
    pub value: ParameterValue,
}

impl ParsedParameter {
    pub fn new(name: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A G-code command like "G1 X10 Y20"
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedCommand {
    keyword: String,
    raw_text: String,
    parameters: Vec<ParsedParameter>,
}

impl ParsedCommand {
    /// Create a command with no parameters
    pub fn new(keyword: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            raw_text: raw_text.into(),
            parameters: Vec::new(),
        }
    }

    /// Builder form of [`ParsedCommand::append`]
    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Into<ParameterValue>,
    ) -> Self {
        self.append(name, value);
        self
    }

    /// Command keyword (e.g., "G1", "M104")
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// The line the command was parsed from
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    pub fn set_raw_text(&mut self, raw_text: impl Into<String>) {
        self.raw_text = raw_text.into();
    }

    /// Parameters in insertion order
    pub fn parameters(&self) -> &[ParsedParameter] {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut [ParsedParameter] {
        &mut self.parameters
    }

    /// Append a parameter.
    ///
    /// Duplicate names are not rejected; both entries are kept and the later
    /// one wins when the command is exported as a mapping.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<ParameterValue>) {
        let parameter = ParsedParameter::new(name, value);
        debug_assert!(!parameter.name.is_empty(), "parameter names are non-empty");
        self.parameters.push(parameter);
    }

    /// Look up a parameter value by name (last occurrence wins)
    pub fn parameter(&self, name: &str) -> Option<&ParameterValue> {
        self.parameters
            .iter()
            .rev()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }

    pub fn parameter_mut(&mut self, name: &str) -> Option<&mut ParameterValue> {
        self.parameters
            .iter_mut()
            .rev()
            .find(|p| p.name == name)
            .map(|p| &mut p.value)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// True when the command carries no parameters
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Reset to the default state, destroying all parameters
    pub fn clear(&mut self) {
        self.keyword.clear();
        self.raw_text.clear();
        self.parameters.clear();
    }
}

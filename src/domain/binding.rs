//! Binding domain model
//!
//! A binding links a resource query to a named binding type, optionally
//! with typed parameters. Bindings are classified into exactly one
//! lifecycle state from their stored flags.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use super::value::Value;

/// Default query language for resource queries
pub const DEFAULT_LANGUAGE: &str = "glob";

#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("Invalid parameter \"{0}\": expected <name>=<value>")]
    InvalidParameter(String),
}

/// Parses a `name=value` CLI parameter
///
/// The value side goes through [`Value::parse`]. A parameter without `=`
/// is a user input error, never silently corrected.
pub fn parse_parameter(raw: &str) -> Result<(String, Value), ParameterError> {
    match raw.split_once('=') {
        Some((name, value)) => Ok((name.to_string(), Value::parse(value))),
        None => Err(ParameterError::InvalidParameter(raw.to_string())),
    }
}

/// Binding parameters in declaration order
///
/// Setting an existing name overwrites its value in place: the last
/// occurrence wins but the original position is kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameters(Vec<(String, Value)>);

impl Parameters {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Sets a parameter, overwriting an earlier value under the same name
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Gets a parameter value by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Returns true if no parameters are set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over parameters in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter().map(|(name, value)| (name, value))
    }
}

impl FromIterator<(String, Value)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut parameters = Parameters::new();
        for (name, value) in iter {
            parameters.set(name, value);
        }
        parameters
    }
}

/// Lifecycle state of a binding
///
/// States are mutually exclusive and exhaustive: every binding is in
/// exactly one of them at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BindingState {
    Enabled,
    Disabled,
    /// Neither enabled nor disabled
    Undecided,
    /// The binding's type is not currently loaded
    HeldBack,
    /// The binding's type has duplicate definitions
    Ignored,
}

impl BindingState {
    /// All states, in display order
    pub fn all() -> [BindingState; 5] {
        [
            BindingState::Enabled,
            BindingState::Disabled,
            BindingState::Undecided,
            BindingState::HeldBack,
            BindingState::Ignored,
        ]
    }

    /// The state tag used in filters and output
    pub fn tag(&self) -> &'static str {
        match self {
            BindingState::Enabled => "enabled",
            BindingState::Disabled => "disabled",
            BindingState::Undecided => "undecided",
            BindingState::HeldBack => "held-back",
            BindingState::Ignored => "ignored",
        }
    }
}

impl fmt::Display for BindingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A rule mapping a resource query to a binding type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binding {
    /// Unique identifier
    pub uuid: Uuid,

    /// The resource query, e.g. `/app/config/*.yml`
    pub query: String,

    /// Query language the query is written in
    pub language: String,

    /// Name of the bound type
    pub type_name: String,

    /// Typed parameters in declaration order
    pub parameters: Parameters,

    /// Name of the package that owns the binding
    pub package_name: String,

    /// Whether the bound type is currently loaded
    pub type_loaded: bool,

    /// Whether the bound type has duplicate definitions
    pub type_duplicated: bool,

    /// Stored enablement flag; `None` when neither enabled nor disabled
    pub enabled: Option<bool>,
}

impl Binding {
    /// Creates a new enabled binding with a fresh UUID
    pub fn new(query: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            query: query.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            type_name: type_name.into(),
            parameters: Parameters::new(),
            package_name: String::new(),
            type_loaded: true,
            type_duplicated: false,
            enabled: Some(true),
        }
    }

    /// Classifies the binding into exactly one lifecycle state
    ///
    /// Computed fresh from the stored flags on every call, never cached.
    pub fn state(&self) -> BindingState {
        if !self.type_loaded {
            return BindingState::HeldBack;
        }
        if self.type_duplicated {
            return BindingState::Ignored;
        }
        match self.enabled {
            Some(true) => BindingState::Enabled,
            Some(false) => BindingState::Disabled,
            None => BindingState::Undecided,
        }
    }

    /// First six characters of the UUID, as shown in listings
    pub fn short_uuid(&self) -> String {
        self.uuid.to_string()[..6].to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_parameter_splits_on_first_equals() {
        assert_eq!(
            parse_parameter("priority=1"),
            Ok(("priority".to_string(), Value::Int(1)))
        );
        assert_eq!(
            parse_parameter("query=a=b"),
            Ok(("query".to_string(), Value::String("a=b".to_string())))
        );
    }

    #[test]
    fn parse_parameter_rejects_missing_equals() {
        assert_eq!(
            parse_parameter("broken"),
            Err(ParameterError::InvalidParameter("broken".to_string()))
        );
    }

    #[test]
    fn parameters_keep_declaration_order() {
        let mut parameters = Parameters::new();
        parameters.set("b", Value::Int(1));
        parameters.set("a", Value::Int(2));

        let names: Vec<&String> = parameters.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn duplicate_parameter_keeps_position_and_takes_last_value() {
        let mut parameters = Parameters::new();
        parameters.set("priority", Value::Int(1));
        parameters.set("cached", Value::Bool(true));
        parameters.set("priority", Value::Int(2));

        assert_eq!(parameters.len(), 2);
        assert_eq!(parameters.get("priority"), Some(&Value::Int(2)));

        let names: Vec<&String> = parameters.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["priority", "cached"]);
    }

    #[test]
    fn held_back_wins_over_every_other_state() {
        let mut binding = Binding::new("/app/*.yml", "config");
        binding.type_loaded = false;
        binding.type_duplicated = true;
        binding.enabled = Some(false);

        assert_eq!(binding.state(), BindingState::HeldBack);
    }

    #[test]
    fn ignored_wins_over_enablement() {
        let mut binding = Binding::new("/app/*.yml", "config");
        binding.type_duplicated = true;

        assert_eq!(binding.state(), BindingState::Ignored);
    }

    #[test]
    fn enablement_flag_decides_the_remaining_states() {
        let mut binding = Binding::new("/app/*.yml", "config");
        assert_eq!(binding.state(), BindingState::Enabled);

        binding.enabled = Some(false);
        assert_eq!(binding.state(), BindingState::Disabled);

        binding.enabled = None;
        assert_eq!(binding.state(), BindingState::Undecided);
    }

    #[test]
    fn short_uuid_is_the_first_six_characters() {
        let mut binding = Binding::new("/app/*.yml", "config");
        binding.uuid = Uuid::parse_str("bb5a07fe-d3f0-4f4c-8c0e-9d1a2b3c4d5e").unwrap();

        assert_eq!(binding.short_uuid(), "bb5a07");
    }
}

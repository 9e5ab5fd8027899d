//! Composable attribute predicates
//!
//! Listing commands turn their flags into a predicate over entity
//! attributes and hand it to the manager's matching routine. The
//! expression tree is immutable and composed left-to-right as flags are
//! read; `Always` is the identity so an empty flag set means
//! "unconstrained", never "matches nothing".

/// An entity attribute a predicate can test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Installer,
    State,
}

/// Entities that expose predicate-testable attributes
pub trait Fielded {
    /// Returns the entity's value for the given field
    fn field(&self, field: Field) -> String;
}

/// An immutable boolean expression over entity attributes
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Matches every entity
    Always,
    /// The field equals the given value
    Equals(Field, String),
    /// The field is one of the given values
    OneOf(Field, Vec<String>),
    /// Both sub-expressions match
    And(Box<Predicate>, Box<Predicate>),
}

impl Predicate {
    pub fn equals(field: Field, value: impl Into<String>) -> Predicate {
        Predicate::Equals(field, value.into())
    }

    pub fn one_of(field: Field, values: impl IntoIterator<Item = impl Into<String>>) -> Predicate {
        Predicate::OneOf(field, values.into_iter().map(Into::into).collect())
    }

    /// Combines two predicates; `Always` is the identity on either side
    pub fn and(self, other: Predicate) -> Predicate {
        match (self, other) {
            (Predicate::Always, other) => other,
            (this, Predicate::Always) => this,
            (this, other) => Predicate::And(Box::new(this), Box::new(other)),
        }
    }

    /// Evaluates the predicate against an entity
    pub fn matches<T: Fielded>(&self, entity: &T) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::Equals(field, value) => entity.field(*field) == *value,
            Predicate::OneOf(field, values) => values.contains(&entity.field(*field)),
            Predicate::And(left, right) => left.matches(entity) && right.matches(entity),
        }
    }
}

//! Declarative schemas
//!
//! Every wire entity and every create/update input is described once, as
//! static data, in [`registry`]. A single interpreter in [`validate`] checks
//! decoded JSON against those descriptions and reports every violation it
//! finds. Typed values are only produced after a value has passed its
//! schema.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod registry;
mod validate;

pub use validate::{
    check_enum, validate, validate_envelope, validate_partial, ValidationError, Violation,
};

/// A named shape: fields plus object-level rules
#[derive(Debug)]
pub struct Schema {
    pub name: &'static str,
    pub fields: &'static [Field],
    pub rules: &'static [Rule],
}

/// Primitive or structured type of a field
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    String,
    Integer,
    /// Any JSON number, integral or fractional.
    Number,
    Boolean,
    /// Closed set of string values, compared case-sensitively.
    Enum(&'static [&'static str]),
    Object(&'static Schema),
    List(&'static Schema),
}

/// Extra checks on a field that already has the right kind
#[derive(Debug, Clone, Copy)]
pub enum Constraint {
    /// Minimum number of characters in a string.
    MinLength(usize),
    /// String must parse as an IPv4 or IPv6 literal.
    IpAddr,
    /// Inclusive bounds on an integer.
    Range { min: i64, max: i64 },
}

/// Checks spanning several fields of one object
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Exactly one of the named fields is present and not null.
    ExactlyOneOf(&'static [&'static str]),
}

/// One field of a schema
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: Kind,
    pub required: bool,
    pub nullable: bool,
    pub constraints: &'static [Constraint],
}

impl Field {
    /// Field that must be present and not null
    pub const fn required(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            kind,
            required: true,
            nullable: false,
            constraints: &[],
        }
    }

    /// Field that may be absent, but is never null when present
    pub const fn optional(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            kind,
            required: false,
            nullable: false,
            constraints: &[],
        }
    }

    /// Field that may be absent or null
    pub const fn nullable(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            kind,
            required: false,
            nullable: true,
            constraints: &[],
        }
    }

    pub const fn with(self, constraints: &'static [Constraint]) -> Self {
        Self {
            constraints,
            ..self
        }
    }
}

/// A wire entity bound to the schema that guards its decoding
pub trait Model: DeserializeOwned {
    fn schema() -> &'static Schema;

    /// Validate `value` against the schema, then decode it.
    fn from_value(value: Value) -> Result<Self, ValidationError> {
        let schema = Self::schema();
        validate(schema, &value)?;
        serde_json::from_value(value).map_err(|e| ValidationError::decode(schema.name, &e))
    }

    /// Validate and unwrap a `{"data": [...]}` list envelope, keeping order.
    fn list_from_value(value: Value) -> Result<Vec<Self>, ValidationError> {
        let schema = Self::schema();
        validate_envelope(schema, &value)?;
        let envelope: Envelope<Self> = serde_json::from_value(value)
            .map_err(|e| ValidationError::decode(schema.name, &e))?;
        Ok(envelope.data)
    }
}

/// A request body checked locally before it is sent
pub trait Input: Serialize {
    fn schema() -> &'static Schema;

    /// Update inputs are partial: every field is optional, present fields are
    /// still fully checked.
    fn is_partial() -> bool {
        false
    }

    /// Serialize the input and check it, returning the wire value.
    fn validated(&self) -> Result<Value, ValidationError> {
        let schema = Self::schema();
        let value =
            serde_json::to_value(self).map_err(|e| ValidationError::decode(schema.name, &e))?;
        if Self::is_partial() {
            validate_partial(schema, &value)?;
        } else {
            validate(schema, &value)?;
        }
        Ok(value)
    }
}

/// Response wrapper used by every collection endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: Vec<T>,
}

//! Generic schema interpreter

use std::fmt;
use std::net::IpAddr;

use serde_json::{Map, Value};
use thiserror::Error;

use super::{Constraint, Field, Kind, Rule, Schema};

/// A single failed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path to the offending value, e.g. `data[1].status`. Empty for
    /// the value itself.
    pub path: String,
    pub message: String,
}

impl Violation {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Every violation found while checking one value against one schema
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {schema}: {}", summarize(.violations))]
pub struct ValidationError {
    pub schema: &'static str,
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Whether any violation points at `path`
    pub fn has_path(&self, path: &str) -> bool {
        self.violations.iter().any(|v| v.path == path)
    }

    pub(crate) fn decode(schema: &'static str, err: &serde_json::Error) -> Self {
        Self {
            schema,
            violations: vec![Violation::new("", err.to_string())],
        }
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Check `value` against every field and rule of `schema`.
pub fn validate(schema: &Schema, value: &Value) -> Result<(), ValidationError> {
    let mut violations = Vec::new();
    check_object(schema.fields, schema.rules, value, "", true, &mut violations);
    finish(schema.name, violations)
}

/// Check `value` as a partial of `schema`: missing fields and object-level
/// rules are ignored, anything present is checked in full.
pub fn validate_partial(schema: &Schema, value: &Value) -> Result<(), ValidationError> {
    let mut violations = Vec::new();
    check_object(schema.fields, &[], value, "", false, &mut violations);
    finish(schema.name, violations)
}

/// Check a `{"data": [...]}` envelope whose items follow `item`.
pub fn validate_envelope(item: &'static Schema, value: &Value) -> Result<(), ValidationError> {
    let mut violations = Vec::new();
    let data = [Field::required("data", Kind::List(item))];
    check_object(&data, &[], value, "", true, &mut violations);
    finish(item.name, violations)
}

/// Check a bare string against a closed set of values.
pub fn check_enum(
    name: &'static str,
    allowed: &'static [&'static str],
    value: &str,
) -> Result<(), ValidationError> {
    let mut violations = Vec::new();
    check_value(Kind::Enum(allowed), &[], &Value::from(value), "", &mut violations);
    finish(name, violations)
}

fn finish(schema: &'static str, violations: Vec<Violation>) -> Result<(), ValidationError> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { schema, violations })
    }
}

fn check_object(
    fields: &[Field],
    rules: &[Rule],
    value: &Value,
    path: &str,
    require: bool,
    out: &mut Vec<Violation>,
) {
    let Some(object) = value.as_object() else {
        out.push(Violation::new(
            path,
            format!("expected object, found {}", type_name(value)),
        ));
        return;
    };

    for field in fields {
        let field_path = join(path, field.name);
        match object.get(field.name) {
            None if field.required && require => {
                out.push(Violation::new(&field_path, "required field is missing"));
            }
            None => {}
            Some(Value::Null) if field.nullable => {}
            Some(Value::Null) => {
                out.push(Violation::new(&field_path, "must not be null"));
            }
            Some(inner) => check_value(field.kind, field.constraints, inner, &field_path, out),
        }
    }

    for rule in rules {
        check_rule(rule, object, path, out);
    }
}

fn check_value(
    kind: Kind,
    constraints: &[Constraint],
    value: &Value,
    path: &str,
    out: &mut Vec<Violation>,
) {
    match kind {
        Kind::String => match value.as_str() {
            Some(s) => check_string(s, constraints, path, out),
            None => out.push(mismatch(path, "string", value)),
        },
        Kind::Integer => match value.as_i64() {
            Some(n) => check_integer(n, constraints, path, out),
            None if value.is_u64() => {
                out.push(Violation::new(path, "integer is out of range"));
            }
            None => out.push(mismatch(path, "integer", value)),
        },
        Kind::Number => {
            if !value.is_number() {
                out.push(mismatch(path, "number", value));
            }
        }
        Kind::Boolean => {
            if !value.is_boolean() {
                out.push(mismatch(path, "boolean", value));
            }
        }
        Kind::Enum(allowed) => match value.as_str() {
            Some(s) if allowed.contains(&s) => {}
            Some(s) => out.push(Violation::new(
                path,
                format!("must be one of {}, found \"{s}\"", allowed.join(", ")),
            )),
            None => out.push(mismatch(path, "string", value)),
        },
        Kind::Object(schema) => {
            check_object(schema.fields, schema.rules, value, path, true, out);
        }
        Kind::List(schema) => match value.as_array() {
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    let item_path = format!("{path}[{index}]");
                    check_object(schema.fields, schema.rules, item, &item_path, true, out);
                }
            }
            None => out.push(mismatch(path, "array", value)),
        },
    }
}

fn check_string(s: &str, constraints: &[Constraint], path: &str, out: &mut Vec<Violation>) {
    for constraint in constraints {
        match *constraint {
            Constraint::MinLength(min) if s.chars().count() < min => {
                out.push(Violation::new(
                    path,
                    format!("must contain at least {min} character(s)"),
                ));
            }
            Constraint::IpAddr if s.parse::<IpAddr>().is_err() => {
                out.push(Violation::new(
                    path,
                    format!("\"{s}\" is not a valid IP address"),
                ));
            }
            _ => {}
        }
    }
}

fn check_integer(n: i64, constraints: &[Constraint], path: &str, out: &mut Vec<Violation>) {
    for constraint in constraints {
        if let Constraint::Range { min, max } = *constraint {
            if n < min || n > max {
                out.push(Violation::new(
                    path,
                    format!("must be between {min} and {max}, found {n}"),
                ));
            }
        }
    }
}

fn check_rule(rule: &Rule, object: &Map<String, Value>, path: &str, out: &mut Vec<Violation>) {
    match rule {
        Rule::ExactlyOneOf(names) => {
            let set = names
                .iter()
                .filter(|name| object.get(**name).is_some_and(|v| !v.is_null()))
                .count();
            if set != 1 {
                out.push(Violation::new(
                    &join(path, &names.join("|")),
                    format!("exactly one of {} must be set, found {set}", names.join(", ")),
                ));
            }
        }
    }
}

fn mismatch(path: &str, expected: &str, found: &Value) -> Violation {
    Violation::new(
        path,
        format!("expected {expected}, found {}", type_name(found)),
    )
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

//! Field-equality queries

use std::fmt;

use super::Record;

/// A conjunction of field-equality conditions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    conditions: Vec<(String, String)>,
}

impl Query {
    /// Query matching records whose `field` equals `value`.
    pub fn where_eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::default().and(field, value)
    }

    /// Adds another condition; all conditions must hold.
    pub fn and(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    pub fn matches<T: Record>(&self, record: &T) -> bool {
        self.conditions
            .iter()
            .all(|(field, value)| record.field(field) == Some(value.as_str()))
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conditions.is_empty() {
            return write!(f, "<any>");
        }
        for (i, (field, value)) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, " and ")?;
            }
            write!(f, "{} = {:?}", field, value)?;
        }
        Ok(())
    }
}

//! Dynamic values stored in an object's field set

use std::collections::HashMap;

use crate::capabilities::input_enabled::InputHandler;
use crate::foundation::math::{Point2, Rect};

/// Value of a capability field, property or method result
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value (unset reference)
    #[default]
    Empty,
    /// Flag
    Bool(bool),
    /// Scalar
    Number(f32),
    /// 2D point
    Point(Point2),
    /// Rectangle
    Rect(Rect),
    /// Per-object input handler state
    Input(InputHandler),
}

impl Value {
    /// Whether the value is [`Value::Empty`]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Flag value, if this is a flag
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Scalar value, if this is a number
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Point value, if this is a point
    pub fn as_point(&self) -> Option<Point2> {
        match self {
            Self::Point(value) => Some(*value),
            _ => None,
        }
    }

    /// Rectangle value, if this is a rectangle
    pub fn as_rect(&self) -> Option<Rect> {
        match self {
            Self::Rect(value) => Some(*value),
            _ => None,
        }
    }

    /// Whether both values are the same variant
    pub fn same_kind(&self, other: &Value) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Description of the variant, for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Empty => "nothing",
            Self::Bool(_) => "a flag",
            Self::Number(_) => "a number",
            Self::Point(_) => "a point",
            Self::Rect(_) => "a rectangle",
            Self::Input(_) => "an input handler",
        }
    }

    /// Input handler, if this holds one
    pub fn as_input(&self) -> Option<&InputHandler> {
        match self {
            Self::Input(handler) => Some(handler),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<Point2> for Value {
    fn from(value: Point2) -> Self {
        Self::Point(value)
    }
}

impl From<Rect> for Value {
    fn from(value: Rect) -> Self {
        Self::Rect(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Per-instance field values merged from every installed capability
///
/// Seeded from the type's surface defaults when the object is created.
/// Keys are unique across capabilities because the surface resolves
/// collisions before any instance exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    values: HashMap<&'static str, Value>,
}

impl FieldSet {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of a field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Store a field value
    pub fn set(&mut self, key: &'static str, value: impl Into<Value>) {
        self.values.insert(key, value.into());
    }

    /// Whether the field exists on this object
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Flag value; missing or non-flag fields read as `false`
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Numeric value of a field
    pub fn number(&self, key: &str) -> Option<f32> {
        self.get(key).and_then(Value::as_number)
    }

    /// Point value of a field
    pub fn point(&self, key: &str) -> Option<Point2> {
        self.get(key).and_then(Value::as_point)
    }

    /// Rectangle value of a field
    pub fn rect(&self, key: &str) -> Option<Rect> {
        self.get(key).and_then(Value::as_rect)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set holds no fields
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(&'static str, Value)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (&'static str, Value)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_accessors() {
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Number(2.0).as_bool(), None);
        assert_eq!(Value::from(Some(3.0)).as_number(), Some(3.0));
        assert!(Value::from(None::<Rect>).is_empty());
    }

    #[test]
    fn test_same_kind() {
        assert!(Value::Number(1.0).same_kind(&Value::Number(-4.0)));
        assert!(!Value::Number(1.0).same_kind(&Value::Bool(true)));
        assert_eq!(Value::Bool(false).kind_name(), "a flag");
    }

    #[test]
    fn test_field_set_flags() {
        let mut fields = FieldSet::new();
        fields.set("visible", true);
        fields.set("speed", 4.0);

        assert!(fields.flag("visible"));
        assert!(!fields.flag("speed"));
        assert!(!fields.flag("missing"));
        assert_eq!(fields.number("speed"), Some(4.0));
        assert_eq!(fields.len(), 2);
    }
}

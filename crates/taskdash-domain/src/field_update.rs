use serde::{Serialize, Serializer};

/// Three-state value for optional fields in partial-update request bodies.
///
/// - `NoChange`: the field is left out of the body
/// - `Set(value)`: the field is sent with the value
/// - `Clear`: the field is sent as `null`
///
/// Use `#[serde(skip_serializing_if = "FieldUpdate::is_no_change")]` on the
/// containing struct field so `NoChange` never reaches the wire.
///
/// # Example
///
/// ```
/// use taskdash_domain::FieldUpdate;
///
/// let mut due = Some("2024-01-01".to_string());
/// FieldUpdate::Clear.apply_to(&mut due);
/// assert_eq!(due, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    #[default]
    NoChange,
    Set(T),
    Clear,
}

impl<T> FieldUpdate<T> {
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => *field = Some(value),
            FieldUpdate::Clear => *field = None,
        }
    }

    pub fn is_change(&self) -> bool {
        !self.is_no_change()
    }

    pub fn is_no_change(&self) -> bool {
        matches!(self, FieldUpdate::NoChange)
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    /// `Some` sets the field, `None` clears it.
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => FieldUpdate::Set(value),
            None => FieldUpdate::Clear,
        }
    }
}

impl<T: Serialize> Serialize for FieldUpdate<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldUpdate::Set(value) => value.serialize(serializer),
            FieldUpdate::NoChange | FieldUpdate::Clear => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_to() {
        let mut field = Some(1);
        FieldUpdate::NoChange.apply_to(&mut field);
        assert_eq!(field, Some(1));
        FieldUpdate::Set(2).apply_to(&mut field);
        assert_eq!(field, Some(2));
        FieldUpdate::Clear.apply_to(&mut field);
        assert_eq!(field, None);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(FieldUpdate::from(Some(3)), FieldUpdate::Set(3));
        assert_eq!(FieldUpdate::<i32>::from(None), FieldUpdate::Clear);
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&FieldUpdate::Set("x")).unwrap(), "\"x\"");
        assert_eq!(serde_json::to_string(&FieldUpdate::<i64>::Clear).unwrap(), "null");
    }
}

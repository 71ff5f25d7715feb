/// A form model that can be seeded from an existing server record.
///
/// Create mode uses the implementor's `Default`; edit mode calls
/// `from_entity` so every field starts from the record being edited.
pub trait Editable<T>: Sized {
    fn from_entity(entity: &T) -> Self;
}

use crate::{Family, Iri, Object, TypeTag};

/// identity of every record: its reference, its type tag and the shape it was built as
pub trait Base {
	fn id(&self) -> Option<&Iri>;
	fn kind(&self) -> &TypeTag;
	fn family(&self) -> Family;

	/// anonymous records have no reference and can never be replaced by one
	fn is_anonymous(&self) -> bool {
		self.id().is_none()
	}
}

/// access to the Object field set shared by every non-Link record
pub trait AsObject {
	fn as_object(&self) -> &Object;
	fn as_object_mut(&mut self) -> &mut Object;
}

macro_rules! strenum {
	( $(pub enum $enum_name:ident { $($flat:ident),* ; $($deep:ident($inner:ident)),* };)+ ) => {
		$(
			#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
			pub enum $enum_name {
				$($flat,)*
				$($deep($inner),)*
			}

			impl AsRef<str> for $enum_name {
				fn as_ref(&self) -> &str {
					match self {
						$(Self::$flat => stringify!($flat),)*
						$(Self::$deep(x) => x.as_ref(),)*
					}
				}
			}

			impl std::fmt::Display for $enum_name {
				fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
					f.write_str(self.as_ref())
				}
			}

			impl TryFrom<&str> for $enum_name {
				type Error = $crate::Error;

				fn try_from(value:&str) -> Result<Self, Self::Error> {
					match value {
						$(stringify!($flat) => Ok(Self::$flat),)*
						_ => {
							$(
								if let Ok(x) = $inner::try_from(value) {
									return Ok(Self::$deep(x));
								}
							)*
							Err($crate::Error::UnrecognizedType(value.to_string()))
						},
					}
				}
			}

			impl From<$enum_name> for $crate::TypeTag {
				fn from(value: $enum_name) -> $crate::TypeTag {
					$crate::TypeTag::new(value.as_ref())
				}
			}

			impl PartialEq<$enum_name> for $crate::TypeTag {
				fn eq(&self, other: &$enum_name) -> bool {
					self.as_str() == other.as_ref()
				}
			}
		)*
	};
}

pub(crate) use strenum;

/// consuming builder setters for plain struct fields, `set_<field>(val) -> Self`
macro_rules! setters {
	($t:ty { $($field:ident : $ft:ty),* $(,)? }) => {
		impl $t {
			$(
				paste::item! {
					pub fn [< set_ $field >](mut self, val: $ft) -> Self {
						self.$field = val;
						self
					}
				}
			)*
		}
	};
}

pub(crate) use setters;

/// implements [`crate::Base`] and [`crate::AsObject`] for a record wrapping another record in its `base` field
macro_rules! shape {
	($t:ty => $family:ident) => {
		impl $crate::Base for $t {
			fn id(&self) -> Option<&$crate::Iri> { $crate::Base::id(&self.base) }
			fn kind(&self) -> &$crate::TypeTag { $crate::Base::kind(&self.base) }
			fn family(&self) -> $crate::Family { $crate::Family::$family }
		}

		impl $crate::AsObject for $t {
			fn as_object(&self) -> &$crate::Object { $crate::AsObject::as_object(&self.base) }
			fn as_object_mut(&mut self) -> &mut $crate::Object { $crate::AsObject::as_object_mut(&mut self.base) }
		}
	};
}

pub(crate) use shape;

#[cfg(test)]
mod test {
	use crate::{ActivityType, ActorType, BaseType, IgnoreType, ObjectType, OfferType, TypeTag};

	#[test]
	fn assert_flat_types_serialize() {
		let x = IgnoreType::Block;
		assert_eq!("Block", <IgnoreType as AsRef<str>>::as_ref(&x));
	}

	#[test]
	fn assert_deep_types_serialize() {
		let x = BaseType::Object(ObjectType::Actor(ActorType::Service));
		assert_eq!("Service", x.to_string());
	}

	#[test]
	fn assert_flat_types_deserialize() {
		let x = ActorType::try_from("Person").expect("could not deserialize");
		assert_eq!(ActorType::Person, x);
	}

	#[test]
	fn assert_deep_types_deserialize() {
		let x = ActivityType::try_from("Invite").expect("could not deserialize");
		assert_eq!(ActivityType::Offer(OfferType::Invite), x);
	}

	#[test]
	fn unknown_types_are_reported_by_name() {
		match BaseType::try_from("Bogus") {
			Err(crate::Error::UnrecognizedType(t)) => assert_eq!(t, "Bogus"),
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[test]
	fn type_tags_compare_against_enums() {
		let tag = TypeTag::from(ActivityType::Follow);
		assert_eq!(tag, ActivityType::Follow);
		assert_eq!(tag.as_str(), "Follow");
	}
}

use crate::{dedup, Item, Record};

/// replaces identifiable records with their reference, anonymous ones stay inline
pub fn flatten(item: Item) -> Item {
	match item {
		Item::Iri(_) => item,
		Item::Items(items) => Item::Items(flatten_list(items)),
		Item::Record(mut record) => {
			if let Some(reference) = record.reference() {
				return Item::Iri(reference.clone());
			}
			if let Some(members) = record.members_mut() {
				let taken = std::mem::take(members);
				*members = flatten_list(taken);
			}
			Item::Record(record)
		},
	}
}

fn flatten_list(items: Vec<Item>) -> Vec<Item> {
	let flat : Vec<Item> = items.into_iter().map(flatten).collect();
	dedup(&[flat.as_slice()], None)
}

fn flatten_field(field: &mut Option<Item>) {
	if let Some(item) = field.take() {
		*field = Some(flatten(item));
	}
}

/// flattens the fields that travel as plain references on the wire
pub fn flatten_properties(record: &mut Record) {
	if let Ok(activity) = record.as_intransitive_mut() {
		flatten_field(&mut activity.actor);
		flatten_field(&mut activity.target);
		flatten_field(&mut activity.result);
		flatten_field(&mut activity.origin);
		flatten_field(&mut activity.instrument);
	}
	if let Ok(activity) = record.as_activity_mut() {
		flatten_field(&mut activity.object);
	}
	if let Ok(object) = record.as_object_mut() {
		flatten_field(&mut object.attributed_to);
		flatten_field(&mut object.replies);
		flatten_field(&mut object.likes);
		flatten_field(&mut object.shares);
		for list in [&mut object.to, &mut object.bto, &mut object.cc, &mut object.bcc, &mut object.audience] {
			let taken = std::mem::take(&mut *list);
			*list = flatten_list(taken);
		}
	}
}

use std::collections::HashSet;

use crate::{Item, Object, Record};

/// union of `lists` in first-seen order, `seed` members first; items without a reference are always kept
pub fn dedup(lists: &[&[Item]], seed: Option<&Item>) -> Vec<Item> {
	let mut seen = HashSet::new();
	let mut out = Vec::new();
	for item in seed.into_iter().flat_map(Item::iter).chain(lists.iter().flat_map(|l| l.iter())) {
		let keep = match item.reference() {
			Some(r) => seen.insert(r.as_str()),
			None => true,
		};
		if keep {
			out.push(item.clone());
		}
	}
	out
}

/// drops from each list whatever `seed` or an earlier list already holds
pub fn dedup_in_place(lists: &mut [&mut Vec<Item>], seed: Option<&Item>) {
	let mut seen : HashSet<String> = seed
		.into_iter()
		.flat_map(Item::all_ids)
		.collect();
	for list in lists.iter_mut() {
		list.retain(|item| match item.reference() {
			Some(r) => seen.insert(r.to_string()),
			None => true,
		});
	}
}

fn ids(lists: &[&[Item]]) -> Vec<String> {
	lists
		.iter()
		.flat_map(|l| l.iter())
		.filter_map(|i| Some(i.reference()?.to_string()))
		.collect()
}

pub trait Recipients {
	/// every reference in to, bto, cc and bcc, duplicates included
	fn addressed(&self) -> Vec<String>;
	/// references in to and bto
	fn mentioning(&self) -> Vec<String>;
	/// everyone this should reach: audience fields plus the actor, each once
	fn recipients(&self) -> Vec<Item>;
	/// removes repeated recipients, earlier fields win: to, bto, cc, bcc, audience
	fn dedup_recipients(&mut self);
	/// dedup, then forget the blind fields before distribution
	fn clean(&mut self);
}

impl Recipients for Object {
	fn addressed(&self) -> Vec<String> {
		ids(&[self.to.as_slice(), self.bto.as_slice(), self.cc.as_slice(), self.bcc.as_slice()])
	}

	fn mentioning(&self) -> Vec<String> {
		ids(&[self.to.as_slice(), self.bto.as_slice()])
	}

	fn recipients(&self) -> Vec<Item> {
		dedup(&[self.to.as_slice(), self.bto.as_slice(), self.cc.as_slice(), self.bcc.as_slice(), self.audience.as_slice()], None)
	}

	fn dedup_recipients(&mut self) {
		dedup_in_place(&mut [&mut self.to, &mut self.bto, &mut self.cc, &mut self.bcc, &mut self.audience], None);
	}

	fn clean(&mut self) {
		self.dedup_recipients();
		self.bto.clear();
		self.bcc.clear();
	}
}

// activities always count their actor as already addressed
impl Recipients for Record {
	fn addressed(&self) -> Vec<String> {
		self.as_object().map(|o| o.addressed()).unwrap_or_default()
	}

	fn mentioning(&self) -> Vec<String> {
		self.as_object().map(|o| o.mentioning()).unwrap_or_default()
	}

	fn recipients(&self) -> Vec<Item> {
		let Ok(o) = self.as_object() else { return Vec::new() };
		let actor = self.as_intransitive().ok().and_then(|a| a.actor.as_ref());
		dedup(&[o.to.as_slice(), o.bto.as_slice(), o.cc.as_slice(), o.bcc.as_slice(), o.audience.as_slice()], actor)
	}

	fn dedup_recipients(&mut self) {
		let actor = self.as_intransitive().ok().and_then(|a| a.actor.clone());
		if let Ok(o) = self.as_object_mut() {
			dedup_in_place(&mut [&mut o.to, &mut o.bto, &mut o.cc, &mut o.bcc, &mut o.audience], actor.as_ref());
		}
	}

	fn clean(&mut self) {
		self.dedup_recipients();
		if let Ok(o) = self.as_object_mut() {
			o.bto.clear();
			o.bcc.clear();
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{Activity, ActivityType, Iri, ObjectType, PUBLIC};

	fn iri(s: &str) -> Item {
		Item::Iri(Iri::parse(s).expect("valid iri"))
	}

	fn people() -> Vec<Item> {
		let once = vec![
			iri("https://example.net/users/bob"),
			iri("https://example.net/users/alice"),
			iri("https://example.net/orgs/acme"),
			iri("https://example.net/groups/knitting"),
		];
		let mut twice = once.clone();
		twice.extend(once);
		twice
	}

	#[test]
	fn addressed_finds_all_targets() {
		let obj = Object::new(ObjectType::Note, None)
			.set_to(vec![iri("http://localhost:8080/usr/root/followers")])
			.set_bto(vec![iri("https://localhost:8080/usr/secret")])
			.set_cc(vec![iri(PUBLIC)]);

		assert_eq!(
			obj.addressed(),
			vec![
				"http://localhost:8080/usr/root/followers".to_string(),
				"https://localhost:8080/usr/secret".to_string(),
				PUBLIC.to_string(),
			]
		);
	}

	#[test]
	fn mentioning_only_finds_to_and_bto() {
		let obj = Object::new(ObjectType::Note, None)
			.set_to(vec![iri("http://localhost:8080/usr/root/followers")])
			.set_bto(vec![iri("https://localhost:8080/usr/secret")])
			.set_cc(vec![iri(PUBLIC)]);

		assert_eq!(
			obj.mentioning(),
			vec![
				"http://localhost:8080/usr/root/followers".to_string(),
				"https://localhost:8080/usr/secret".to_string(),
			]
		);
	}

	#[test]
	fn dedup_keeps_first_seen_order() {
		let to = people();
		let unique = dedup(&[to.as_slice()], None);
		assert_eq!(unique, to[..4].to_vec());
	}

	#[test]
	fn clean_leaves_everyone_in_to() {
		let mut obj = Object::new(ObjectType::Note, None)
			.set_to(people())
			.set_bto(people())
			.set_cc(people())
			.set_bcc(people());
		obj.clean();
		assert_eq!(obj.to, people()[..4].to_vec());
		assert!(obj.bto.is_empty());
		assert!(obj.cc.is_empty());
		assert!(obj.bcc.is_empty());

		let all = obj.addressed();
		let distinct : HashSet<&String> = all.iter().collect();
		assert_eq!(all.len(), distinct.len());
	}

	#[test]
	fn later_fields_lose_their_duplicates() {
		let mut obj = Object::new(ObjectType::Note, None)
			.set_to(vec![iri("https://example.net/a")])
			.set_cc(vec![iri("https://example.net/a"), iri("https://example.net/b")])
			.set_bcc(vec![iri("https://example.net/b"), iri("https://example.net/c")]);
		obj.dedup_recipients();
		assert_eq!(obj.cc, vec![iri("https://example.net/b")]);
		assert_eq!(obj.bcc, vec![iri("https://example.net/c")]);
	}

	#[test]
	fn activity_actor_is_already_a_recipient() {
		let alice = iri("https://example.net/users/alice");
		let mut activity = Activity::new(ActivityType::Create, None).set_actor(Some(alice.clone()));
		activity.base.base.to = vec![alice.clone(), iri("https://example.net/users/bob")];
		let mut record = Record::from(activity);

		let recipients = record.recipients();
		assert_eq!(recipients, vec![alice.clone(), iri("https://example.net/users/bob")]);

		record.clean();
		let to = &record.as_object().expect("activities are objects").to;
		assert_eq!(to, &vec![iri("https://example.net/users/bob")]);
	}

	#[test]
	fn every_actor_is_already_a_recipient() {
		let item = crate::decode(br#"{
			"type": "Create",
			"actor": ["https://example.net/users/alice", "https://example.net/users/bob"],
			"to": ["https://example.net/users/alice", "https://example.net/users/bob", "https://example.net/users/carl"]
		}"#).expect("valid create");
		let mut record = item.into_record().expect("record");

		let recipients = record.recipients();
		assert_eq!(recipients, vec![
			iri("https://example.net/users/alice"),
			iri("https://example.net/users/bob"),
			iri("https://example.net/users/carl"),
		]);

		record.clean();
		let to = &record.as_object().expect("activities are objects").to;
		assert_eq!(to, &vec![iri("https://example.net/users/carl")]);
	}

	#[test]
	fn anonymous_recipients_are_never_merged() {
		let anon = Item::record(Object::new(ObjectType::Note, None));
		let anons = vec![anon.clone(), anon];
		let unique = dedup(&[anons.as_slice()], None);
		assert_eq!(unique.len(), 2);
	}
}

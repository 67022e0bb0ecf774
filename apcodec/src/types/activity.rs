use super::Family;

crate::strenum! {
	pub enum ActivityType {
		Activity,
		Add,
		Announce,
		Create,
		Delete,
		Dislike,
		Flag,
		Follow,
		Join,
		Leave,
		Like,
		Listen,
		Move,
		Read,
		Remove,
		Undo,
		Update,
		View;

		IntransitiveActivity(IntransitiveActivityType),
		Accept(AcceptType),
		Ignore(IgnoreType),
		Offer(OfferType),
		Reject(RejectType)
	};

	pub enum IntransitiveActivityType {
		IntransitiveActivity,
		Arrive,
		Question,
		Travel;
	};

	pub enum AcceptType {
		Accept,
		TentativeAccept;
	};

	pub enum IgnoreType {
		Ignore,
		Block;
	};

	pub enum OfferType {
		Offer,
		Invite;
	};

	pub enum RejectType {
		Reject,
		TentativeReject;
	};
}

impl ActivityType {
	pub fn family(&self) -> Family {
		match self {
			ActivityType::IntransitiveActivity(IntransitiveActivityType::Question) => Family::Question,
			ActivityType::IntransitiveActivity(_) => Family::IntransitiveActivity,
			_ => Family::Activity,
		}
	}
}

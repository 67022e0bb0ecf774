use crate::{Iri, Object, ObjectType};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Place {
	pub base: Object,
	pub accuracy: Option<f64>,
	pub altitude: Option<f64>,
	pub latitude: Option<f64>,
	pub longitude: Option<f64>,
	pub radius: Option<f64>,
	/// "cm", "feet", "inches", "km", "m", "miles" or an IRI
	pub units: Option<String>,
}

impl Place {
	pub fn new(id: Option<Iri>) -> Self {
		Place {
			base: Object::new(ObjectType::Place, id),
			..Default::default()
		}
	}
}

crate::setters! {
	Place {
		accuracy: Option<f64>,
		altitude: Option<f64>,
		latitude: Option<f64>,
		longitude: Option<f64>,
		radius: Option<f64>,
		units: Option<String>,
	}
}

crate::shape!(Place => Place);

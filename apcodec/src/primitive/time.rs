use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeDelta, Utc};

use crate::{Error, Result};

/// RFC3339 timestamps, plus offset-less ISO-8601 ones which are taken as UTC
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
	if let Ok(t) = DateTime::parse_from_rfc3339(value) {
		return Some(t.with_timezone(&Utc));
	}
	NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
		.ok()
		.map(|t| t.and_utc())
}

pub fn format_timestamp(value: &DateTime<Utc>) -> String {
	value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

const MINUTE : i64 = 60;
const HOUR : i64 = 60 * MINUTE;
const DAY : i64 = 24 * HOUR;

/// xsd:duration, the zero duration counts as absent
///
/// Years and months have no fixed length: they are read as 365 and 30 days, and
/// always written back as days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(TimeDelta);

impl Duration {
	pub fn new(delta: TimeDelta) -> Self {
		Duration(delta)
	}

	pub fn seconds(secs: i64) -> Self {
		Duration(TimeDelta::try_seconds(secs).unwrap_or(TimeDelta::MAX))
	}

	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}

	pub fn delta(&self) -> TimeDelta {
		self.0
	}

	pub fn parse(value: &str) -> Result<Self> {
		parse_xsd(value).ok_or_else(|| Error::MalformedInput(format!("'{value}' is not an xsd:duration")))
	}
}

fn parse_xsd(value: &str) -> Option<Duration> {
	let (negative, rest) = match value.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, value),
	};
	let rest = rest.strip_prefix('P')?;
	let (date, time) = match rest.split_once('T') {
		Some((_, "")) => return None,
		Some((d, t)) => (d, Some(t)),
		None => (rest, None),
	};

	let mut secs : i64 = 0;
	let mut nanos : u32 = 0;
	let mut any = false;

	for (number, unit) in components(date)? {
		let n : i64 = number.parse().ok()?;
		let scale = match unit {
			'Y' => 365 * DAY,
			'M' => 30 * DAY,
			'W' => 7 * DAY,
			'D' => DAY,
			_ => return None,
		};
		secs = secs.checked_add(n.checked_mul(scale)?)?;
		any = true;
	}

	if let Some(time) = time {
		for (number, unit) in components(time)? {
			if unit == 'S' {
				let (whole, frac) = number.split_once('.').unwrap_or((number, ""));
				let n : i64 = whole.parse().ok()?;
				secs = secs.checked_add(n)?;
				if !frac.is_empty() {
					if !frac.chars().all(|c| c.is_ascii_digit()) {
						return None;
					}
					let digits : String = frac.chars().chain(std::iter::repeat('0')).take(9).collect();
					nanos = digits.parse().ok()?;
				}
			} else {
				let n : i64 = number.parse().ok()?;
				let scale = match unit {
					'H' => HOUR,
					'M' => MINUTE,
					_ => return None,
				};
				secs = secs.checked_add(n.checked_mul(scale)?)?;
			}
			any = true;
		}
	}

	if !any {
		return None;
	}

	let delta = TimeDelta::new(secs, nanos)?;
	Some(Duration(if negative { -delta } else { delta }))
}

// splits "1D2H" into [("1", 'D'), ("2", 'H')]
fn components(s: &str) -> Option<Vec<(&str, char)>> {
	let mut out = Vec::new();
	let mut start = 0;
	for (i, c) in s.char_indices() {
		if c.is_ascii_digit() || c == '.' {
			continue;
		}
		let number = &s[start..i];
		if number.is_empty() || !number.starts_with(|c: char| c.is_ascii_digit()) {
			return None;
		}
		out.push((number, c));
		start = i + c.len_utf8();
	}
	if start != s.len() {
		return None; // trailing number without unit
	}
	Some(out)
}

impl std::str::FromStr for Duration {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Duration::parse(s)
	}
}

impl std::fmt::Display for Duration {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let negative = self.0 < TimeDelta::zero();
		let delta = if negative { -self.0 } else { self.0 };
		let total = delta.num_seconds();
		let nanos = delta.subsec_nanos();
		let days = total / DAY;
		let hours = (total % DAY) / HOUR;
		let minutes = (total % HOUR) / MINUTE;
		let seconds = total % MINUTE;

		if negative {
			f.write_str("-")?;
		}
		f.write_str("P")?;
		if days > 0 {
			write!(f, "{days}D")?;
		}
		if hours == 0 && minutes == 0 && seconds == 0 && nanos == 0 {
			if days == 0 {
				f.write_str("T0S")?;
			}
			return Ok(());
		}
		f.write_str("T")?;
		if hours > 0 {
			write!(f, "{hours}H")?;
		}
		if minutes > 0 {
			write!(f, "{minutes}M")?;
		}
		if seconds > 0 || nanos > 0 {
			if nanos > 0 {
				let frac = format!("{nanos:09}");
				write!(f, "{seconds}.{}S", frac.trim_end_matches('0'))?;
			} else {
				write!(f, "{seconds}S")?;
			}
		}
		Ok(())
	}
}

impl From<TimeDelta> for Duration {
	fn from(value: TimeDelta) -> Self {
		Duration(value)
	}
}

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::TimeDelta;

use crate::{SerializeError, ValueKind};

// xsd:duration has no fixed-length years and months, just pretend
const YEAR: i64 = 365 * DAY;
const MONTH: i64 = 30 * DAY;
const DAY: i64 = 24 * HOUR;
const HOUR: i64 = 60 * MINUTE;
const MINUTE: i64 = 60;

/// A literal property value
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
	String(String),
	LangString(BTreeMap<String, String>),
	Boolean(bool),
	Float(f64),
	NonNegativeInteger(u64),
	/// keeps the offset it was written with
	DateTime(chrono::DateTime<chrono::FixedOffset>),
	Duration(TimeDelta),
}

impl Literal {
	pub fn kind(&self) -> ValueKind {
		match self {
			Literal::String(_) => ValueKind::String,
			Literal::LangString(_) => ValueKind::LangString,
			Literal::Boolean(_) => ValueKind::Boolean,
			Literal::Float(_) => ValueKind::Float,
			Literal::NonNegativeInteger(_) => ValueKind::NonNegativeInteger,
			Literal::DateTime(_) => ValueKind::DateTime,
			Literal::Duration(_) => ValueKind::Duration,
		}
	}

	/// attempts reading `value` as the given kind, None if it doesn't fit
	pub fn deserialize(kind: ValueKind, value: &serde_json::Value) -> Option<Self> {
		match kind {
			ValueKind::String => Some(Literal::String(value.as_str()?.to_string())),
			ValueKind::LangString => {
				let mut out = BTreeMap::new();
				for (lang, text) in value.as_object()? {
					out.insert(lang.clone(), text.as_str()?.to_string());
				}
				Some(Literal::LangString(out))
			},
			ValueKind::Boolean => match value {
				serde_json::Value::Bool(x) => Some(Literal::Boolean(*x)),
				serde_json::Value::Number(n) => match n.as_u64()? {
					0 => Some(Literal::Boolean(false)),
					1 => Some(Literal::Boolean(true)),
					_ => None,
				},
				_ => None,
			},
			ValueKind::Float => Some(Literal::Float(value.as_f64()?)),
			ValueKind::NonNegativeInteger => {
				if let Some(x) = value.as_u64() {
					return Some(Literal::NonNegativeInteger(x));
				}
				let x = value.as_f64()?;
				if x < 0.0 || x.fract() != 0.0 || x > u64::MAX as f64 {
					return None;
				}
				Some(Literal::NonNegativeInteger(x as u64))
			},
			ValueKind::DateTime => Some(Literal::DateTime(parse_datetime(value.as_str()?)?)),
			ValueKind::Duration => Some(Literal::Duration(parse_duration(value.as_str()?)?)),
		}
	}

	pub fn serialize(&self) -> Result<serde_json::Value, SerializeError> {
		Ok(match self {
			Literal::String(x) => serde_json::Value::String(x.clone()),
			Literal::LangString(map) => serde_json::Value::Object(
				map.iter()
					.map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
					.collect()
			),
			Literal::Boolean(x) => serde_json::Value::Bool(*x),
			Literal::Float(x) => float_value(*x)?,
			Literal::NonNegativeInteger(x) => serde_json::Value::Number((*x).into()),
			Literal::DateTime(x) => serde_json::Value::String(x.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)),
			Literal::Duration(x) => serde_json::Value::String(format_duration(*x)),
		})
	}

	/// natural ordering between literals of the same kind, false across kinds
	pub fn less_than(&self, other: &Self) -> bool {
		match (self, other) {
			(Literal::String(a), Literal::String(b)) => a < b,
			(Literal::LangString(a), Literal::LangString(b)) => lang_string_less_than(a, b),
			(Literal::Boolean(a), Literal::Boolean(b)) => !a & b,
			(Literal::Float(a), Literal::Float(b)) => a < b,
			(Literal::NonNegativeInteger(a), Literal::NonNegativeInteger(b)) => a < b,
			(Literal::DateTime(a), Literal::DateTime(b)) => a < b,
			(Literal::Duration(a), Literal::Duration(b)) => a < b,
			_ => false,
		}
	}
}

// languages are compared first, then their texts, then shorter maps come first
fn lang_string_less_than(a: &BTreeMap<String, String>, b: &BTreeMap<String, String>) -> bool {
	for ((lang_a, text_a), (lang_b, text_b)) in a.iter().zip(b.iter()) {
		if lang_a != lang_b {
			return lang_a < lang_b;
		}
		if text_a != text_b {
			return text_a < text_b;
		}
	}
	a.len() < b.len()
}

// integral values are written without a fraction: 36, not 36.0
fn float_value(x: f64) -> Result<serde_json::Value, SerializeError> {
	if x.fract() == 0.0 && x.abs() < 1e18 {
		return Ok(serde_json::Value::Number((x as i64).into()));
	}
	serde_json::Number::from_f64(x)
		.map(serde_json::Value::Number)
		.ok_or(SerializeError::NonFiniteFloat(x))
}

fn parse_datetime(value: &str) -> Option<chrono::DateTime<chrono::FixedOffset>> {
	if let Ok(x) = chrono::DateTime::parse_from_rfc3339(value) {
		return Some(x);
	}
	// some implementations leave out the offset entirely
	chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
		.ok()
		.map(|x| x.and_utc().fixed_offset())
}

fn parse_duration(value: &str) -> Option<TimeDelta> {
	let (negative, value) = match value.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, value),
	};
	let value = value.strip_prefix('P')?;
	let (date, time) = match value.split_once('T') {
		Some((date, time)) => (date, Some(time)),
		None => (value, None),
	};

	let (mut seconds, mut found) = sum_components(date, &[('Y', YEAR), ('M', MONTH), ('D', DAY)])?;
	if let Some(time) = time {
		let (time_seconds, time_found) = sum_components(time, &[('H', HOUR), ('M', MINUTE), ('S', 1)])?;
		if time_found == 0 {
			return None; // "T" must be followed by something
		}
		seconds += time_seconds;
		found += time_found;
	}
	if found == 0 {
		return None;
	}

	let millis = (seconds * 1000.0).round();
	if !millis.is_finite() || millis > i64::MAX as f64 {
		return None;
	}
	let delta = TimeDelta::try_milliseconds(millis as i64)?;
	Some(if negative { -delta } else { delta })
}

fn sum_components(mut part: &str, units: &[(char, i64)]) -> Option<(f64, usize)> {
	let mut seconds = 0.0;
	let mut found = 0;
	for (designator, scale) in units {
		let Some(idx) = part.find(*designator) else { continue };
		let amount = &part[..idx];
		if amount.is_empty() || !amount.chars().all(|c| c.is_ascii_digit() || c == '.') {
			return None;
		}
		seconds += amount.parse::<f64>().ok()? * (*scale as f64);
		found += 1;
		part = &part[idx + 1..];
	}
	if !part.is_empty() {
		return None; // leftovers, either garbage or designators out of order
	}
	Some((seconds, found))
}

fn format_duration(value: TimeDelta) -> String {
	let mut out = String::new();
	let value = if value < TimeDelta::zero() {
		out.push('-');
		-value
	} else {
		value
	};
	out.push('P');

	let mut seconds = value.num_seconds();
	let millis = value.subsec_nanos() / 1_000_000;

	for (designator, scale) in [('Y', YEAR), ('M', MONTH), ('D', DAY)] {
		let amount = seconds / scale;
		if amount > 0 {
			let _ = write!(out, "{amount}{designator}");
			seconds -= amount * scale;
		}
	}

	if seconds > 0 || millis > 0 {
		out.push('T');
		for (designator, scale) in [('H', HOUR), ('M', MINUTE)] {
			let amount = seconds / scale;
			if amount > 0 {
				let _ = write!(out, "{amount}{designator}");
				seconds -= amount * scale;
			}
		}
		if millis > 0 {
			let _ = write!(out, "{seconds}.{millis:03}S");
		} else if seconds > 0 {
			let _ = write!(out, "{seconds}S");
		}
	}

	if out.ends_with('P') {
		out.push_str("T0S");
	}

	out
}

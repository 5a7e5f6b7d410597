//! Lenient wire value types for vital-sign fields.
//!
//! Upstream patient feeds are not trustworthy: a temperature may arrive as `"TEMP_ERROR"`,
//! an age as `null` and a blood pressure as `150/` or not at all. The types here accept
//! any JSON value for their field and record whether it was usable, so that a malformed
//! field never fails deserialisation of the surrounding record.

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Serialize, Serializer};
use std::fmt;

/// A numeric reading that may be missing or unusable.
///
/// Only finite JSON numbers are accepted as values. Strings (including numeric-looking
/// strings such as `"45"`), `null`, booleans, arrays and objects all become
/// [`Measurement::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Measurement {
    /// A finite numeric value.
    Value(f64),
    /// Missing, non-numeric or non-finite.
    #[default]
    Invalid,
}

impl Measurement {
    /// Returns the numeric value, if valid.
    pub fn value(self) -> Option<f64> {
        match self {
            Measurement::Value(v) => Some(v),
            Measurement::Invalid => None,
        }
    }

    pub fn is_valid(self) -> bool {
        matches!(self, Measurement::Value(_))
    }
}

impl From<f64> for Measurement {
    /// NaN and infinities map to [`Measurement::Invalid`].
    fn from(value: f64) -> Self {
        if value.is_finite() {
            Measurement::Value(value)
        } else {
            Measurement::Invalid
        }
    }
}

impl From<Option<f64>> for Measurement {
    fn from(value: Option<f64>) -> Self {
        value.map(Measurement::from).unwrap_or_default()
    }
}

impl Serialize for Measurement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Measurement::Value(v) => serializer.serialize_f64(*v),
            Measurement::Invalid => serializer.serialize_none(),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Measurement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MeasurementVisitor)
    }
}

struct MeasurementVisitor;

impl<'de> Visitor<'de> for MeasurementVisitor {
    type Value = Measurement;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Measurement::from(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Measurement::from(v as f64))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Measurement::from(v))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(Measurement::Invalid)
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(Measurement::Invalid)
    }

    fn visit_bytes<E: de::Error>(self, _: &[u8]) -> Result<Self::Value, E> {
        Ok(Measurement::Invalid)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Measurement::Invalid)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Measurement::Invalid)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        drain_seq(seq)?;
        Ok(Measurement::Invalid)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        drain_map(map)?;
        Ok(Measurement::Invalid)
    }
}

/// A free-form text field that may be absent or of the wrong JSON type.
///
/// Any JSON string (including the empty string) becomes [`RawText::Text`]; every other
/// JSON value becomes [`RawText::Absent`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawText {
    Text(String),
    #[default]
    Absent,
}

impl RawText {
    /// Returns the text, if the field held a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawText::Text(s) => Some(s),
            RawText::Absent => None,
        }
    }
}

impl From<&str> for RawText {
    fn from(value: &str) -> Self {
        RawText::Text(value.to_owned())
    }
}

impl From<String> for RawText {
    fn from(value: String) -> Self {
        RawText::Text(value)
    }
}

impl From<Option<String>> for RawText {
    fn from(value: Option<String>) -> Self {
        value.map(RawText::Text).unwrap_or_default()
    }
}

impl Serialize for RawText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RawText::Text(s) => serializer.serialize_str(s),
            RawText::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de> serde::Deserialize<'de> for RawText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TextVisitor { numbers_as_text: false })
    }
}

/// Deserialises a record identifier.
///
/// Strings are taken as-is, numbers are rendered as their decimal text and anything else
/// yields an empty identifier. Intended for `#[serde(deserialize_with = "...")]`.
pub fn deserialize_identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let text = deserializer.deserialize_any(TextVisitor {
        numbers_as_text: true,
    })?;
    Ok(match text {
        RawText::Text(s) => s,
        RawText::Absent => String::new(),
    })
}

struct TextVisitor {
    numbers_as_text: bool,
}

impl TextVisitor {
    fn number(&self, rendered: String) -> RawText {
        if self.numbers_as_text {
            RawText::Text(rendered)
        } else {
            RawText::Absent
        }
    }
}

impl<'de> Visitor<'de> for TextVisitor {
    type Value = RawText;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any value")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(RawText::Text(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(RawText::Text(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(self.number(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(self.number(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(self.number(v.to_string()))
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
        Ok(RawText::Absent)
    }

    fn visit_bytes<E: de::Error>(self, _: &[u8]) -> Result<Self::Value, E> {
        Ok(RawText::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RawText::Absent)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RawText::Absent)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, seq: A) -> Result<Self::Value, A::Error> {
        drain_seq(seq)?;
        Ok(RawText::Absent)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        drain_map(map)?;
        Ok(RawText::Absent)
    }
}

fn drain_seq<'de, A: SeqAccess<'de>>(mut seq: A) -> Result<(), A::Error> {
    while seq.next_element::<IgnoredAny>()?.is_some() {}
    Ok(())
}

fn drain_map<'de, A: MapAccess<'de>>(mut map: A) -> Result<(), A::Error> {
    while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
    Ok(())
}

// Copyright 2023 The RelayBus Rust Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use cheetah_string::CheetahString;
use relaybus_error::FilterError;
use relaybus_error::FilterResult;
use serde::Deserialize;
use serde::Serialize;

/// An already resolved value on the right side of a comparison.
///
/// Values are evaluated by the caller before the predicate tree is built, so
/// translation never reads fields, calls functions or resolves anything at
/// compile time. An enumeration value carries both its symbolic name and its
/// numeric representation; the name is rendered unless [`as_number`] is
/// applied. An entity value carries the canonical resolved name of a named
/// platform entity.
///
/// [`as_number`]: FilterValue::as_number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    Str(CheetahString),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Enum { name: CheetahString, number: i64 },
    Entity(CheetahString),
    Null,
}

impl FilterValue {
    /// An enumeration value, rendered by symbolic name.
    pub fn enumeration(name: impl Into<CheetahString>, number: i64) -> Self {
        FilterValue::Enum {
            name: name.into(),
            number,
        }
    }

    /// A named platform entity, rendered by its canonical resolved name.
    pub fn entity(name: impl Into<CheetahString>) -> Self {
        FilterValue::Entity(name.into())
    }

    /// Switches an enumeration value to its numeric representation.
    ///
    /// Any other value is returned unchanged.
    pub fn as_number(self) -> Self {
        match self {
            FilterValue::Enum { number, .. } => FilterValue::Int(number),
            other => other,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FilterValue::Null)
    }

    /// Renders the value in the invariant, locale-independent form the
    /// matching engine compares against. `Null` renders as `None`; the
    /// caller decides what an absent value means for its operator.
    ///
    /// Fails with [`FilterError::UnsupportedValue`] for values the engine
    /// contract cannot carry (non-finite floats).
    pub fn render(&self) -> FilterResult<Option<CheetahString>> {
        let rendered = match self {
            FilterValue::Null => return Ok(None),
            FilterValue::Str(s) => s.clone(),
            FilterValue::Int(i) => CheetahString::from(i.to_string()),
            FilterValue::UInt(u) => CheetahString::from(u.to_string()),
            FilterValue::Float(f) => {
                if !f.is_finite() {
                    return Err(FilterError::unsupported_value(self.to_string()));
                }
                CheetahString::from(f.to_string())
            }
            FilterValue::Bool(true) => CheetahString::from_static_str("True"),
            FilterValue::Bool(false) => CheetahString::from_static_str("False"),
            FilterValue::Enum { name, .. } => name.clone(),
            FilterValue::Entity(name) => name.clone(),
        };
        Ok(Some(rendered))
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Str(s) => write!(f, "'{}'", s),
            FilterValue::Int(i) => write!(f, "{}", i),
            FilterValue::UInt(u) => write!(f, "{}", u),
            FilterValue::Float(v) => write!(f, "{}", v),
            FilterValue::Bool(true) => write!(f, "TRUE"),
            FilterValue::Bool(false) => write!(f, "FALSE"),
            FilterValue::Enum { name, .. } => write!(f, "{}", name),
            FilterValue::Entity(name) => write!(f, "{}", name),
            FilterValue::Null => write!(f, "NULL"),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Str(CheetahString::from_slice(value))
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Str(CheetahString::from_string(value))
    }
}

impl From<CheetahString> for FilterValue {
    fn from(value: CheetahString) -> Self {
        FilterValue::Str(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl From<f32> for FilterValue {
    fn from(value: f32) -> Self {
        FilterValue::Float(f64::from(value))
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => FilterValue::Null,
        }
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for FilterValue {
            fn from(value: $ty) -> Self {
                FilterValue::Int(i64::from(value))
            }
        })*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for FilterValue {
            fn from(value: $ty) -> Self {
                FilterValue::UInt(u64::from(value))
            }
        })*
    };
}

from_signed!(i8, i16, i32, i64);
from_unsigned!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(value: impl Into<FilterValue>) -> String {
        value.into().render().unwrap().unwrap().to_string()
    }

    #[test]
    fn test_render_strings() {
        assert_eq!(rendered("us-west"), "us-west");
        assert_eq!(rendered(String::from("eu")), "eu");
        assert_eq!(rendered(CheetahString::from("ap")), "ap");
    }

    #[test]
    fn test_render_integers() {
        assert_eq!(rendered(42i32), "42");
        assert_eq!(rendered(-7i64), "-7");
        assert_eq!(rendered(42u64), "42");
        assert_eq!(rendered(u64::MAX), "18446744073709551615");
    }

    #[test]
    fn test_render_floats_invariant() {
        assert_eq!(rendered(3.5f64), "3.5");
        assert_eq!(rendered(100.0f64), "100");
        assert_eq!(rendered(2.5f32), "2.5");
    }

    #[test]
    fn test_render_rejects_non_finite_floats() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = FilterValue::Float(v).render().unwrap_err();
            assert!(matches!(err, FilterError::UnsupportedValue(_)), "{:?}", err);
        }
        assert_eq!(
            FilterValue::Float(f64::NAN).render().unwrap_err(),
            FilterError::unsupported_value("NaN")
        );
    }

    #[test]
    fn test_render_booleans() {
        assert_eq!(rendered(true), "True");
        assert_eq!(rendered(false), "False");
    }

    #[test]
    fn test_render_enumeration_by_name() {
        let value = FilterValue::enumeration("High", 2);
        assert_eq!(value.render().unwrap().unwrap(), "High");
    }

    #[test]
    fn test_enumeration_as_number() {
        let value = FilterValue::enumeration("High", 2).as_number();
        assert_eq!(value, FilterValue::Int(2));
        assert_eq!(value.render().unwrap().unwrap(), "2");
    }

    #[test]
    fn test_as_number_leaves_other_values_alone() {
        assert_eq!(FilterValue::from("x").as_number(), FilterValue::from("x"));
        assert_eq!(FilterValue::Null.as_number(), FilterValue::Null);
    }

    #[test]
    fn test_render_entity_by_canonical_name() {
        let value = FilterValue::entity("topics.orders");
        assert_eq!(value.render().unwrap().unwrap(), "topics.orders");
    }

    #[test]
    fn test_null_renders_absent() {
        assert_eq!(FilterValue::Null.render().unwrap(), None);
        assert!(FilterValue::Null.is_null());
        assert_eq!(FilterValue::from(None::<i32>), FilterValue::Null);
        assert_eq!(FilterValue::from(Some(3i32)), FilterValue::Int(3));
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(FilterValue::from("x").to_string(), "'x'");
        assert_eq!(FilterValue::from(3i32).to_string(), "3");
        assert_eq!(FilterValue::from(true).to_string(), "TRUE");
        assert_eq!(FilterValue::Null.to_string(), "NULL");
        assert_eq!(FilterValue::enumeration("High", 2).to_string(), "High");
    }

    #[test]
    fn test_serde_round_trip() {
        let values = [
            FilterValue::from("x"),
            FilterValue::from(3i32),
            FilterValue::enumeration("High", 2),
            FilterValue::Null,
        ];
        for value in values {
            let json = serde_json::to_string(&value).unwrap();
            let back: FilterValue = serde_json::from_str(&json).unwrap();
            assert_eq!(value, back);
        }
    }
}

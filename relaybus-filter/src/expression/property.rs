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
use relaybus_common::common::filter::ComparisonOperator;
use relaybus_error::FilterError;
use relaybus_error::FilterResult;

use crate::expression::predicate::Predicate;
use crate::expression::value::FilterValue;

/// Reference to a named message context property.
///
/// A property reference resolves to the canonical dotted identity string the
/// matching engine routes on, never to a runtime value. Identity resolution
/// is the one place a comparison's left side can be rejected: a blank
/// identity, or one containing whitespace, is not a property the engine can
/// address.
///
/// The comparison builders (`eq`, `ne`, `gt`, `ge`, `lt`, `le`) are the
/// intended way to produce [`Predicate`] leaves:
///
/// ```rust
/// use relaybus_filter::PropertyRef;
///
/// let leaf = PropertyRef::new("order.priority").ge(3);
/// assert_eq!(leaf.to_string(), "(order.priority >= 3)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyRef {
    identity: CheetahString,
}

impl PropertyRef {
    pub fn new(identity: impl Into<CheetahString>) -> Self {
        Self {
            identity: identity.into(),
        }
    }

    /// The raw identity string as supplied by the caller.
    pub fn identity(&self) -> &CheetahString {
        &self.identity
    }

    /// Resolves the canonical identity the engine routes on.
    ///
    /// Fails with [`FilterError::UnsupportedProperty`] when the identity is
    /// blank or contains whitespace.
    pub fn resolve(&self) -> FilterResult<CheetahString> {
        if self.identity.is_empty() || self.identity.chars().any(char::is_whitespace) {
            return Err(FilterError::unsupported_property(self.identity.clone()));
        }
        Ok(self.identity.clone())
    }

    pub fn eq(&self, value: impl Into<FilterValue>) -> Predicate {
        self.compare(ComparisonOperator::Equals, value)
    }

    pub fn ne(&self, value: impl Into<FilterValue>) -> Predicate {
        self.compare(ComparisonOperator::NotEqual, value)
    }

    pub fn gt(&self, value: impl Into<FilterValue>) -> Predicate {
        self.compare(ComparisonOperator::GreaterThan, value)
    }

    pub fn ge(&self, value: impl Into<FilterValue>) -> Predicate {
        self.compare(ComparisonOperator::GreaterThanOrEquals, value)
    }

    pub fn lt(&self, value: impl Into<FilterValue>) -> Predicate {
        self.compare(ComparisonOperator::LessThan, value)
    }

    pub fn le(&self, value: impl Into<FilterValue>) -> Predicate {
        self.compare(ComparisonOperator::LessThanOrEquals, value)
    }

    fn compare(&self, op: ComparisonOperator, value: impl Into<FilterValue>) -> Predicate {
        Predicate::comparison(self.clone(), op, value)
    }
}

impl fmt::Display for PropertyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identity)
    }
}

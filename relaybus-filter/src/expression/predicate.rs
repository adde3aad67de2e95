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

use relaybus_common::common::filter::ComparisonOperator;

use crate::expression::property::PropertyRef;
use crate::expression::value::FilterValue;

/// A boolean predicate over message context properties.
///
/// Comparison leaves carry a property reference, an operator and an already
/// resolved value. Connectives hold their operands in source order; the
/// combinators never evaluate, reorder or simplify anything, they only build
/// a larger tree.
///
/// `Xor` is accepted as a connective but the compiler treats it as an
/// enumeration separator identical to `Or`, not as boolean exclusive-or.
///
/// The `Display` form is the parenthesized diagnostic notation used in error
/// messages, e.g. `((order.region = 'us-west') AND (order.total > 100))`.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    Comparison {
        property: PropertyRef,
        op: ComparisonOperator,
        value: FilterValue,
    },
    And(Box<Predicate>, Box<Predicate>),
    Or(Box<Predicate>, Box<Predicate>),
    Xor(Box<Predicate>, Box<Predicate>),
    Const(bool),
}

impl Predicate {
    /// Builds a comparison leaf.
    pub fn comparison(
        property: PropertyRef,
        op: ComparisonOperator,
        value: impl Into<FilterValue>,
    ) -> Self {
        Predicate::Comparison {
            property,
            op,
            value: value.into(),
        }
    }

    /// Conjunction of `self` and `other`, in that order.
    pub fn and(self, other: Predicate) -> Self {
        Predicate::And(Box::new(self), Box::new(other))
    }

    /// Disjunction of `self` and `other`, in that order.
    pub fn or(self, other: Predicate) -> Self {
        Predicate::Or(Box::new(self), Box::new(other))
    }

    /// Exclusive-or connective; compiled exactly like [`or`](Self::or).
    pub fn xor(self, other: Predicate) -> Self {
        Predicate::Xor(Box::new(self), Box::new(other))
    }

    /// Whether this node is a comparison leaf.
    pub fn is_comparison(&self) -> bool {
        matches!(self, Predicate::Comparison { .. })
    }

    /// Whether this node is a bare boolean constant.
    pub fn is_const(&self) -> bool {
        matches!(self, Predicate::Const(_))
    }
}

impl From<bool> for Predicate {
    fn from(value: bool) -> Self {
        Predicate::Const(value)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Comparison { property, op, value } => {
                write!(f, "({} {} {})", property, op, value)
            }
            Predicate::And(left, right) => write!(f, "({} AND {})", left, right),
            Predicate::Or(left, right) => write!(f, "({} OR {})", left, right),
            Predicate::Xor(left, right) => write!(f, "({} XOR {})", left, right),
            Predicate::Const(true) => write!(f, "TRUE"),
            Predicate::Const(false) => write!(f, "FALSE"),
        }
    }
}

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

use cheetah_string::CheetahString;
use relaybus_error::FilterError;
use relaybus_error::FilterResult;
use tracing::debug;

use crate::expression::normalize::normalize;
use crate::expression::predicate::Predicate;
use crate::filter::filter_translator::translate;

/// An immutable subscription filter over one predicate.
///
/// Filters compose with [`and`](Self::and), [`or`](Self::or) and
/// [`xor`](Self::xor); each combinator builds a new filter and leaves both
/// operands untouched, and nothing is evaluated until [`render`](Self::render)
/// runs. Rendering is pure and repeatable: the same filter always produces a
/// byte-identical document.
///
/// Construction never fails. Every failure (an absent predicate, a
/// constant-only predicate, an unresolvable property, an unrenderable value)
/// is deferred to `render`.
///
/// ```rust
/// use relaybus_filter::Filter;
/// use relaybus_filter::PropertyRef;
///
/// let west = Filter::new(PropertyRef::new("order.region").eq("us-west"));
/// let east = Filter::new(PropertyRef::new("order.region").eq("us-east"));
/// let either = west.or(&east);
///
/// // Two groups, one per disjunct; operands are still renderable on their own.
/// assert!(either.render().unwrap().as_str().contains("us-east"));
/// assert!(west.render().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    predicate: Option<Predicate>,
}

impl Filter {
    pub fn new(predicate: impl Into<Predicate>) -> Self {
        Self {
            predicate: Some(predicate.into()),
        }
    }

    /// A filter with no predicate; rendering it reports the absence.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn predicate(&self) -> Option<&Predicate> {
        self.predicate.as_ref()
    }

    /// Conjunction of two filters, operands in order, neither mutated.
    pub fn and(&self, other: &Filter) -> Filter {
        self.combine(other, Predicate::and)
    }

    /// Disjunction of two filters, operands in order, neither mutated.
    pub fn or(&self, other: &Filter) -> Filter {
        self.combine(other, Predicate::or)
    }

    /// Exclusive-or connective; the compiler treats it exactly like `or`.
    pub fn xor(&self, other: &Filter) -> Filter {
        self.combine(other, Predicate::xor)
    }

    fn combine(&self, other: &Filter, connect: fn(Predicate, Predicate) -> Predicate) -> Filter {
        // Absence is contagious so the failure surfaces at render time.
        match (&self.predicate, &other.predicate) {
            (Some(left), Some(right)) => Filter {
                predicate: Some(connect(left.clone(), right.clone())),
            },
            _ => Filter::empty(),
        }
    }

    /// Compiles the predicate into the matching engine's filter document.
    ///
    /// Runs the fixed pipeline: normalize into disjunctive normal form,
    /// translate into ordered groups, serialize. Deterministic and free of
    /// side effects; errors carry the textual form of the offending
    /// sub-expression where one exists.
    pub fn render(&self) -> FilterResult<CheetahString> {
        let Some(predicate) = &self.predicate else {
            return Err(FilterError::null_predicate());
        };
        let normalized = normalize(predicate.clone());
        // A bare constant never reaches the translator; it has no groups.
        if normalized.is_const() {
            return Err(FilterError::unsupported_constant(normalized.to_string()));
        }
        debug!(predicate = %normalized, "compiling subscription filter");
        translate(&normalized)?.render()
    }
}

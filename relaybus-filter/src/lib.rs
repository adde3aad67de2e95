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

//! Subscription filter compiler for RelayBus messages.
//!
//! A [`Filter`] wraps a boolean [`Predicate`] built from comparisons against
//! named message context properties. Rendering a filter normalizes the
//! predicate into disjunctive normal form, translates it into ordered
//! AND-groups of simple comparisons, and serializes those groups into the
//! `<Filter><Group><Statement .../></Group></Filter>` document the RelayBus
//! matching engine consumes.
//!
//! ```rust
//! use relaybus_filter::Filter;
//! use relaybus_filter::PropertyRef;
//!
//! let region = PropertyRef::new("order.region");
//! let total = PropertyRef::new("order.total");
//!
//! let filter = Filter::new(region.eq("us-west")).and(&Filter::new(total.gt(100)));
//! let rendered = filter.render().unwrap();
//! assert_eq!(
//!     rendered.as_str(),
//!     "<Filter><Group>\
//!      <Statement Property=\"order.region\" Operator=\"1\" Value=\"us-west\"/>\
//!      <Statement Property=\"order.total\" Operator=\"3\" Value=\"100\"/>\
//!      </Group></Filter>"
//! );
//! ```

pub mod expression;
pub mod filter;

pub use relaybus_common::common::filter::ComparisonOperator;
pub use relaybus_error::FilterError;
pub use relaybus_error::FilterResult;

pub use crate::expression::normalize::normalize;
pub use crate::expression::predicate::Predicate;
pub use crate::expression::property::PropertyRef;
pub use crate::expression::value::FilterValue;
pub use crate::filter::filter_builder::Filter;
pub use crate::filter::filter_predicate::FilterGroup;
pub use crate::filter::filter_predicate::FilterPredicate;
pub use crate::filter::filter_predicate::FilterStatement;
pub use crate::filter::filter_translator::translate;

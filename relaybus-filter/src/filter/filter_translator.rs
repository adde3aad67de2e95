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

//! Predicate-to-group translation.
//!
//! The translator walks a normalized predicate and flattens it into the
//! grouped model: each disjunct becomes one [`FilterGroup`], each conjunct
//! inside it one [`FilterStatement`]. Order is preserved throughout: OR
//! concatenates left then right, AND flattens left then right, so the group
//! ordering fixed by the normalizer's left-biased distribution survives into
//! the rendered document.
//!
//! Translation fails fast: the first unsupported node, unresolvable property
//! or unrenderable value aborts the whole predicate with no partial result.

use relaybus_common::common::filter::ComparisonOperator;
use relaybus_error::FilterError;
use relaybus_error::FilterResult;
use tracing::debug;

use crate::expression::predicate::Predicate;
use crate::expression::property::PropertyRef;
use crate::expression::value::FilterValue;
use crate::filter::filter_predicate::FilterGroup;
use crate::filter::filter_predicate::FilterPredicate;
use crate::filter::filter_predicate::FilterStatement;

/// Translates a normalized predicate into its grouped form.
///
/// Expects a tree in disjunctive normal form (see
/// [`normalize`](crate::expression::normalize::normalize)); a disjunction
/// nested under a conjunction is rejected as an unsupported node, as is a
/// bare boolean constant anywhere in the tree.
pub fn translate(node: &Predicate) -> FilterResult<FilterPredicate> {
    let groups = translate_groups(node)?;
    debug!(groups = groups.len(), "translated predicate");
    Ok(FilterPredicate::new(groups))
}

fn translate_groups(node: &Predicate) -> FilterResult<Vec<FilterGroup>> {
    match node {
        // Inclusive and exclusive or both separate disjuncts.
        Predicate::Or(left, right) | Predicate::Xor(left, right) => {
            let mut groups = translate_groups(left)?;
            groups.extend(translate_groups(right)?);
            Ok(groups)
        }
        Predicate::And(..) => Ok(vec![FilterGroup::new(translate_statements(node)?)]),
        Predicate::Comparison { property, op, value } => Ok(vec![FilterGroup::new(vec![
            translate_comparison(property, *op, value)?,
        ])]),
        Predicate::Const(_) => Err(FilterError::unsupported_node(node.to_string())),
    }
}

fn translate_statements(node: &Predicate) -> FilterResult<Vec<FilterStatement>> {
    match node {
        Predicate::And(left, right) => {
            let mut statements = translate_statements(left)?;
            statements.extend(translate_statements(right)?);
            Ok(statements)
        }
        Predicate::Comparison { property, op, value } => {
            Ok(vec![translate_comparison(property, *op, value)?])
        }
        Predicate::Or(..) | Predicate::Xor(..) | Predicate::Const(_) => {
            Err(FilterError::unsupported_node(node.to_string()))
        }
    }
}

fn translate_comparison(
    property: &PropertyRef,
    op: ComparisonOperator,
    value: &FilterValue,
) -> FilterResult<FilterStatement> {
    let identity = property.resolve()?;
    match value.render()? {
        // An existence test carries no value; it only arises from the
        // NotEqual-against-null rewrite below.
        Some(_) if op == ComparisonOperator::Exists => Err(FilterError::unsupported_node(
            Predicate::comparison(property.clone(), op, value.clone()).to_string(),
        )),
        Some(rendered) => Ok(FilterStatement::with_value(identity, op, rendered)),
        // An absent value only means "the property is set" when testing
        // inequality; every other operator has nothing to compare against.
        None if op == ComparisonOperator::NotEqual || op == ComparisonOperator::Exists => {
            Ok(FilterStatement::exists(identity))
        }
        None => Err(FilterError::null_not_supported(
            Predicate::comparison(property.clone(), op, value.clone()).to_string(),
        )),
    }
}

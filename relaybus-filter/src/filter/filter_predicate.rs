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

//! Grouped filter model and its serialized form.
//!
//! A [`FilterPredicate`] is an ordered sequence of [`FilterGroup`]s, OR-ed by
//! the matching engine; each group is an ordered sequence of
//! [`FilterStatement`]s, AND-ed by the engine. Rendering produces the exact
//! document the engine's subscription parser expects:
//!
//! ```text
//! <Filter><Group><Statement Property="..." Operator="N" Value="..."/></Group></Filter>
//! ```
//!
//! Attribute values are XML-escaped; an `Exists` statement has no `Value`
//! attribute.

use cheetah_string::CheetahString;
use relaybus_common::common::filter::ComparisonOperator;
use relaybus_common::utils::xml_utils;
use relaybus_error::FilterError;
use relaybus_error::FilterResult;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

/// One property/operator/value comparison inside a group.
///
/// `value` is `None` exactly when `operator` is `Exists`; the constructors
/// are the only way to build a statement, which keeps that invariant out of
/// callers' hands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStatement {
    property: CheetahString,
    operator: ComparisonOperator,
    value: Option<CheetahString>,
}

impl FilterStatement {
    /// A statement comparing `property` against `value`.
    pub fn with_value(
        property: impl Into<CheetahString>,
        operator: ComparisonOperator,
        value: impl Into<CheetahString>,
    ) -> Self {
        Self {
            property: property.into(),
            operator,
            value: Some(value.into()),
        }
    }

    /// An existence test on `property`; renders with no `Value` attribute.
    pub fn exists(property: impl Into<CheetahString>) -> Self {
        Self {
            property: property.into(),
            operator: ComparisonOperator::Exists,
            value: None,
        }
    }

    pub fn property(&self) -> &CheetahString {
        &self.property
    }

    pub fn operator(&self) -> ComparisonOperator {
        self.operator
    }

    pub fn value(&self) -> Option<&CheetahString> {
        self.value.as_ref()
    }

    fn write_to(&self, out: &mut String) {
        out.push_str("<Statement Property=\"");
        out.push_str(&xml_utils::escape_attribute(self.property.as_str()));
        out.push_str("\" Operator=\"");
        out.push_str(&self.operator.code().to_string());
        out.push('"');
        if let Some(value) = &self.value {
            out.push_str(" Value=\"");
            out.push_str(&xml_utils::escape_attribute(value.as_str()));
            out.push('"');
        }
        out.push_str("/>");
    }
}

/// One disjunct: a nonempty, ordered conjunction of statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    statements: Vec<FilterStatement>,
}

impl FilterGroup {
    pub fn new(statements: Vec<FilterStatement>) -> Self {
        Self { statements }
    }

    pub fn statements(&self) -> &[FilterStatement] {
        &self.statements
    }

    fn write_to(&self, out: &mut String) {
        out.push_str("<Group>");
        for statement in &self.statements {
            statement.write_to(out);
        }
        out.push_str("</Group>");
    }
}

/// The ordered disjunction of groups produced by translation.
///
/// May be empty only as an intermediate state; rendering an empty predicate
/// fails, because a constant boolean has no representation in the grouped
/// grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPredicate {
    groups: Vec<FilterGroup>,
}

impl FilterPredicate {
    pub fn new(groups: Vec<FilterGroup>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[FilterGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Serializes the predicate into the matching engine's filter document.
    pub fn render(&self) -> FilterResult<CheetahString> {
        if self.groups.is_empty() {
            return Err(FilterError::unsupported_constant("empty predicate"));
        }
        let mut out = String::new();
        out.push_str("<Filter>");
        for group in &self.groups {
            group.write_to(&mut out);
        }
        out.push_str("</Filter>");
        debug!(
            groups = self.groups.len(),
            bytes = out.len(),
            "rendered filter document"
        );
        Ok(CheetahString::from_string(out))
    }
}

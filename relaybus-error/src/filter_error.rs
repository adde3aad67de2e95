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

/// Result alias for filter compilation.
pub type FilterResult<T> = Result<T, FilterError>;

/// Error types for predicate-to-filter compilation.
///
/// All variants are raised at translate/render time; building a predicate
/// never fails. Variants that point at a specific sub-expression carry its
/// textual form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Filter has no predicate to render")]
    NullPredicate,

    #[error("Unsupported node in predicate: {0}")]
    UnsupportedNode(CheetahString),

    #[error("Left side of a comparison must be a message context property: {0}")]
    UnsupportedProperty(CheetahString),

    #[error("Unsupported value on the right side of a comparison: {0}")]
    UnsupportedValue(CheetahString),

    #[error("A constant boolean predicate has no grouped representation: {0}")]
    UnsupportedConstant(CheetahString),

    #[error("Null is only supported with the NotEqual operator: {0}")]
    NullNotSupported(CheetahString),
}

impl FilterError {
    pub fn null_predicate() -> Self {
        FilterError::NullPredicate
    }

    pub fn unsupported_node(form: impl Into<CheetahString>) -> Self {
        FilterError::UnsupportedNode(form.into())
    }

    pub fn unsupported_property(form: impl Into<CheetahString>) -> Self {
        FilterError::UnsupportedProperty(form.into())
    }

    pub fn unsupported_value(form: impl Into<CheetahString>) -> Self {
        FilterError::UnsupportedValue(form.into())
    }

    pub fn unsupported_constant(form: impl Into<CheetahString>) -> Self {
        FilterError::UnsupportedConstant(form.into())
    }

    pub fn null_not_supported(form: impl Into<CheetahString>) -> Self {
        FilterError::NullNotSupported(form.into())
    }
}

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

//! Predicate expression model.
//!
//! Predicates are immutable trees built bottom-up from comparison leaves and
//! logical connectives. Nothing is evaluated while a tree is built; values on
//! the right side of a comparison are supplied already resolved (see
//! [`value::FilterValue`]), so building and combining predicates is free of
//! side effects and the whole tree can be walked without touching caller
//! state.

pub mod normalize;
pub mod predicate;
pub mod property;
pub mod value;

pub use normalize::normalize;
pub use predicate::Predicate;
pub use property::PropertyRef;
pub use value::FilterValue;

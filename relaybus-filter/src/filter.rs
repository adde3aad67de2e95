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

//! Filter construction and rendering.
//!
//! [`Filter`](filter_builder::Filter) is the caller-facing value type: it
//! wraps one predicate, composes with `and`/`or`/`xor` without mutating its
//! operands, and renders through the fixed pipeline normalize → translate →
//! serialize. The grouped output model lives in [`filter_predicate`], the
//! predicate walk in [`filter_translator`].

pub mod filter_builder;
pub mod filter_predicate;
pub mod filter_translator;

pub use filter_builder::Filter;
pub use filter_predicate::FilterGroup;
pub use filter_predicate::FilterPredicate;
pub use filter_predicate::FilterStatement;
pub use filter_translator::translate;

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

//! # RelayBus Error Handling
//!
//! Error types shared across the RelayBus Rust crates.
//!
//! Filter compilation is a pure, synchronous transformation, so every error
//! here is non-retryable and surfaces directly to the caller of
//! `Filter::render`. Where an offending sub-expression exists, its textual
//! form is carried in the error to aid debugging.
//!
//! ```rust
//! use relaybus_error::FilterError;
//! use relaybus_error::FilterResult;
//!
//! fn reject_blank(identity: &str) -> FilterResult<()> {
//!     if identity.trim().is_empty() {
//!         return Err(FilterError::unsupported_property(identity));
//!     }
//!     Ok(())
//! }
//! # reject_blank("order.region").unwrap();
//! ```

pub mod filter_error;

pub use filter_error::FilterError;
pub use filter_error::FilterResult;

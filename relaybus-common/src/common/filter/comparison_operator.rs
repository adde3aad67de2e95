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

use serde::Deserialize;
use serde::Serialize;

/// Comparison operators accepted by the RelayBus matching engine.
///
/// `Exists` is never built by callers directly; the translator produces it by
/// rewriting a `NotEqual` comparison against a null value.
///
/// The wire codes are fixed by the matching engine's own enumeration. The
/// engine declares its operators in the order below and numbers them from 1,
/// so the whole table lives in [`ComparisonOperator::code`] and nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    Equals,
    NotEqual,
    GreaterThan,
    GreaterThanOrEquals,
    LessThan,
    LessThanOrEquals,
    Exists,
}

impl ComparisonOperator {
    /// Wire code of this operator in the matching engine's enumeration.
    pub fn code(&self) -> i32 {
        match self {
            ComparisonOperator::Equals => 1,
            ComparisonOperator::NotEqual => 2,
            ComparisonOperator::GreaterThan => 3,
            ComparisonOperator::GreaterThanOrEquals => 4,
            ComparisonOperator::LessThan => 5,
            ComparisonOperator::LessThanOrEquals => 6,
            ComparisonOperator::Exists => 7,
        }
    }

    /// Operator for a wire code, the inverse of [`code`](Self::code).
    pub fn from_code(code: i32) -> Result<Self, String> {
        match code {
            1 => Ok(ComparisonOperator::Equals),
            2 => Ok(ComparisonOperator::NotEqual),
            3 => Ok(ComparisonOperator::GreaterThan),
            4 => Ok(ComparisonOperator::GreaterThanOrEquals),
            5 => Ok(ComparisonOperator::LessThan),
            6 => Ok(ComparisonOperator::LessThanOrEquals),
            7 => Ok(ComparisonOperator::Exists),
            _ => Err(format!("unsupported operator code: {}", code)),
        }
    }

    /// Diagnostic symbol used when printing predicates.
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::Equals => "=",
            ComparisonOperator::NotEqual => "!=",
            ComparisonOperator::GreaterThan => ">",
            ComparisonOperator::GreaterThanOrEquals => ">=",
            ComparisonOperator::LessThan => "<",
            ComparisonOperator::LessThanOrEquals => "<=",
            ComparisonOperator::Exists => "EXISTS",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ComparisonOperator; 7] = [
        ComparisonOperator::Equals,
        ComparisonOperator::NotEqual,
        ComparisonOperator::GreaterThan,
        ComparisonOperator::GreaterThanOrEquals,
        ComparisonOperator::LessThan,
        ComparisonOperator::LessThanOrEquals,
        ComparisonOperator::Exists,
    ];

    #[test]
    fn codes_match_engine_enumeration() {
        assert_eq!(ComparisonOperator::Equals.code(), 1);
        assert_eq!(ComparisonOperator::NotEqual.code(), 2);
        assert_eq!(ComparisonOperator::GreaterThan.code(), 3);
        assert_eq!(ComparisonOperator::GreaterThanOrEquals.code(), 4);
        assert_eq!(ComparisonOperator::LessThan.code(), 5);
        assert_eq!(ComparisonOperator::LessThanOrEquals.code(), 6);
        assert_eq!(ComparisonOperator::Exists.code(), 7);
    }

    #[test]
    fn codes_round_trip() {
        for op in ALL {
            assert_eq!(ComparisonOperator::from_code(op.code()), Ok(op));
        }
    }

    #[test]
    fn from_code_rejects_unknown_codes() {
        assert!(ComparisonOperator::from_code(0).is_err());
        assert!(ComparisonOperator::from_code(8).is_err());
        assert!(ComparisonOperator::from_code(-1).is_err());
    }

    #[test]
    fn symbols_are_distinct() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a.symbol(), b.symbol());
            }
        }
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(ComparisonOperator::Equals.to_string(), "=");
        assert_eq!(ComparisonOperator::Exists.to_string(), "EXISTS");
    }

    #[test]
    fn serde_round_trip() {
        for op in ALL {
            let json = serde_json::to_string(&op).unwrap();
            let back: ComparisonOperator = serde_json::from_str(&json).unwrap();
            assert_eq!(op, back);
        }
    }
}

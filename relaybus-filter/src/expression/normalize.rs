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

//! Disjunctive normal form rewrite.
//!
//! `normalize` rewrites an arbitrary predicate tree so that conjunction never
//! appears above disjunction. The resulting top shape is OR-of-AND-of
//! comparisons, which the translator flattens into groups. The rewrite is
//! total and idempotent.

use crate::expression::predicate::Predicate;

/// Rewrites `node` into disjunctive normal form.
///
/// Distribution of AND over OR is left-biased: the left operand's disjuncts
/// are expanded before the right operand's, and each expansion preserves the
/// original left-to-right operand order of the AND. Group ordering in the
/// rendered filter depends on this.
///
/// `Xor` is lowered to `Or` on entry; it separates disjuncts, it does not
/// carry exclusive-or semantics.
pub fn normalize(node: Predicate) -> Predicate {
    match node {
        Predicate::Comparison { .. } | Predicate::Const(_) => node,
        Predicate::Or(left, right) | Predicate::Xor(left, right) => {
            Predicate::Or(Box::new(normalize(*left)), Box::new(normalize(*right)))
        }
        Predicate::And(left, right) => {
            let left = normalize(*left);
            let right = normalize(*right);
            if let Predicate::Or(l1, l2) = left {
                Predicate::Or(
                    Box::new(distribute(*l1, right.clone())),
                    Box::new(distribute(*l2, right)),
                )
            } else if let Predicate::Or(r1, r2) = right {
                Predicate::Or(
                    Box::new(distribute(left.clone(), *r1)),
                    Box::new(distribute(left, *r2)),
                )
            } else {
                Predicate::And(Box::new(left), Box::new(right))
            }
        }
    }
}

fn distribute(left: Predicate, right: Predicate) -> Predicate {
    normalize(Predicate::And(Box::new(left), Box::new(right)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::property::PropertyRef;

    fn leaf(name: &str) -> Predicate {
        PropertyRef::new(name).eq(1)
    }

    fn assert_no_and_above_or(node: &Predicate) {
        match node {
            Predicate::And(left, right) => {
                assert!(
                    !matches!(**left, Predicate::Or(..) | Predicate::Xor(..)),
                    "Or under And in {}",
                    node
                );
                assert!(
                    !matches!(**right, Predicate::Or(..) | Predicate::Xor(..)),
                    "Or under And in {}",
                    node
                );
                assert_no_and_above_or(left);
                assert_no_and_above_or(right);
            }
            Predicate::Or(left, right) | Predicate::Xor(left, right) => {
                assert_no_and_above_or(left);
                assert_no_and_above_or(right);
            }
            Predicate::Comparison { .. } | Predicate::Const(_) => {}
        }
    }

    #[test]
    fn test_leaves_pass_through() {
        assert_eq!(normalize(leaf("a")), leaf("a"));
        assert_eq!(normalize(Predicate::Const(false)), Predicate::Const(false));
    }

    #[test]
    fn test_plain_conjunction_kept() {
        let node = leaf("a").and(leaf("b"));
        assert_eq!(normalize(node.clone()), node);
    }

    #[test]
    fn test_left_disjunction_distributes() {
        // (a OR b) AND c  =>  (a AND c) OR (b AND c)
        let node = leaf("a").or(leaf("b")).and(leaf("c"));
        let expected = leaf("a").and(leaf("c")).or(leaf("b").and(leaf("c")));
        assert_eq!(normalize(node), expected);
    }

    #[test]
    fn test_right_disjunction_distributes() {
        // a AND (b OR c)  =>  (a AND b) OR (a AND c)
        let node = leaf("a").and(leaf("b").or(leaf("c")));
        let expected = leaf("a").and(leaf("b")).or(leaf("a").and(leaf("c")));
        assert_eq!(normalize(node), expected);
    }

    #[test]
    fn test_distribution_is_left_biased() {
        // (a OR b) AND (c OR d) expands the left disjuncts first:
        // ((a AND c) OR (a AND d)) OR ((b AND c) OR (b AND d))
        let node = leaf("a").or(leaf("b")).and(leaf("c").or(leaf("d")));
        let expected = leaf("a")
            .and(leaf("c"))
            .or(leaf("a").and(leaf("d")))
            .or(leaf("b").and(leaf("c")).or(leaf("b").and(leaf("d"))));
        assert_eq!(normalize(node), expected);
    }

    #[test]
    fn test_deeply_nested_distribution() {
        // ((a OR b) AND c) AND d has no Or under And once normalized.
        let node = leaf("a").or(leaf("b")).and(leaf("c")).and(leaf("d"));
        let normalized = normalize(node);
        assert_no_and_above_or(&normalized);
        let expected = leaf("a")
            .and(leaf("c"))
            .and(leaf("d"))
            .or(leaf("b").and(leaf("c")).and(leaf("d")));
        assert_eq!(normalized, expected);
    }

    #[test]
    fn test_xor_is_lowered_to_or() {
        let node = leaf("a").xor(leaf("b"));
        assert_eq!(normalize(node), leaf("a").or(leaf("b")));

        // Distribution treats a lowered Xor like any Or.
        let node = leaf("a").xor(leaf("b")).and(leaf("c"));
        let expected = leaf("a").and(leaf("c")).or(leaf("b").and(leaf("c")));
        assert_eq!(normalize(node), expected);
    }

    #[test]
    fn test_idempotence() {
        let nodes = [
            leaf("a"),
            leaf("a").and(leaf("b")),
            leaf("a").or(leaf("b")).and(leaf("c").or(leaf("d"))),
            leaf("a").and(leaf("b").or(leaf("c"))).or(leaf("d")),
            leaf("a").xor(leaf("b")).and(leaf("c")),
        ];
        for node in nodes {
            let once = normalize(node);
            let twice = normalize(once.clone());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_full_distribution_at_any_depth() {
        let node = leaf("a")
            .or(leaf("b").and(leaf("c").or(leaf("d"))))
            .and(leaf("e").or(leaf("f")))
            .and(leaf("g"));
        let normalized = normalize(node);
        assert_no_and_above_or(&normalized);
    }
}

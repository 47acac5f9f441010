//! Cascade weight of a selector pattern, computed from its text alone.
//!
//! | Token | Weight |
//! |---|---|
//! | exact segment | 100 each |
//! | `*` | 10 each |
//! | `**` | 1 each |
//! | `[name]` filter | 50 once |
//!
//! No compilation happens here, so an invalid pattern still gets a score:
//! an unterminated `[` is scored as literal text and repeated filters count
//! once.

use super::lexer::split_filters;

pub const EXACT_WEIGHT: u32 = 100;
pub const SINGLE_WEIGHT: u32 = 10;
pub const MULTI_WEIGHT: u32 = 1;
pub const FILTER_WEIGHT: u32 = 50;

pub fn specificity(raw: &str) -> u32 {
    let (text, filters) = split_filters(raw);

    let segments = text
        .split('.')
        .filter(|s| !s.is_empty())
        .map(|segment| match segment {
            "*" => SINGLE_WEIGHT,
            "**" => MULTI_WEIGHT,
            _ => EXACT_WEIGHT,
        });
    let filter = (filters > 0).then_some(FILTER_WEIGHT);

    total(segments.chain(filter))
}

/// Sum of weights, pinned at `u32::MAX` for absurdly long patterns.
fn total(weights: impl Iterator<Item = u32>) -> u32 {
    weights.fold(0, u32::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights() {
        assert_eq!(specificity("head.arm.hand"), 300);
        assert_eq!(specificity("head.*.hand"), 210);
        assert_eq!(specificity("head.**.hand"), 201);
        assert_eq!(specificity("[light]"), 50);
        assert_eq!(specificity("head.*[light]"), 160);
        assert_eq!(specificity("**"), 1);
    }

    #[test]
    fn test_filter_position_irrelevant() {
        assert_eq!(specificity("[light]head.*"), specificity("head.*[light]"));
        assert_eq!(specificity("[light].**"), 51);
    }

    #[test]
    fn test_ordering() {
        assert!(specificity("head.arm.hand") > specificity("head.*.hand"));
        assert!(specificity("head.*.hand") > specificity("head.**.hand"));
    }

    #[test]
    fn test_invalid_patterns_still_score() {
        assert_eq!(specificity(""), 0);
        assert_eq!(specificity("[a][b]"), 50);
        assert_eq!(specificity("a.[b"), 200);
    }

    #[test]
    fn test_multi_counts_tokens_not_segments() {
        assert_eq!(specificity("a.**.b.**.c"), 302);
    }

    #[test]
    fn test_total_saturates() {
        assert_eq!(total([u32::MAX - 60, EXACT_WEIGHT].into_iter()), u32::MAX);
        assert_eq!(total([u32::MAX, FILTER_WEIGHT].into_iter()), u32::MAX);
        assert_eq!(total([EXACT_WEIGHT, FILTER_WEIGHT].into_iter()), 150);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn weight(token: &str) -> u32 {
            match token {
                "*" => SINGLE_WEIGHT,
                "**" => MULTI_WEIGHT,
                _ => EXACT_WEIGHT,
            }
        }

        fn tokens() -> impl Strategy<Value = Vec<&'static str>> {
            prop::collection::vec(prop::sample::select(vec!["a", "arm", "*", "**"]), 0..8)
        }

        /// `tokens` joined by `.`, with `[light]` written just before token `at`.
        fn with_filter(tokens: &[&str], at: usize) -> String {
            let mut out = String::new();
            for (i, token) in tokens.iter().enumerate() {
                if i > 0 {
                    out.push('.');
                }
                if i == at {
                    out.push_str("[light]");
                }
                out.push_str(token);
            }
            if at >= tokens.len() {
                out.push_str("[light]");
            }
            out
        }

        proptest! {
            #[test]
            fn score_is_sum_of_token_weights(tokens in tokens()) {
                let expected: u32 = tokens.iter().map(|t| weight(t)).sum();
                prop_assert_eq!(specificity(&tokens.join(".")), expected);
            }

            #[test]
            fn filter_adds_fifty_wherever_it_sits(tokens in tokens(), at in 0usize..9) {
                let expected: u32 = tokens.iter().map(|t| weight(t)).sum::<u32>() + FILTER_WEIGHT;
                let raw = with_filter(&tokens, at);
                prop_assert_eq!(specificity(&raw), expected, "{}", raw);
            }
        }
    }
}

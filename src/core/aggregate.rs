//! Tokenizer/aggregator - sums the integers found in a file
//!
//! The result carries the parsed numbers in order of appearance together with
//! the two display strings used by every renderer.

use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::ParseError;
use crate::core::file_reader::{read_text, FileReadConfig, FileWarning};
use crate::core::tokenizer::{classify, integer_part, tokens, DecimalPolicy, TokenClass};

/// Options for [`parse_and_sum_with`]
#[derive(Debug, Clone, Default)]
pub struct SumOptions {
    pub decimals: DecimalPolicy,
    pub read: FileReadConfig,
}

/// Sum of the numbers found in a file, plus their display forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub total: u128,
    pub numbers: Vec<u128>,
    /// Numbers joined by ", "
    pub display_list: String,
    /// Numbers joined by " + "
    pub display_sum_expr: String,
    /// Tokens that were discarded as non-numeric
    pub skipped: usize,
}

impl AggregateResult {
    fn from_numbers(numbers: Vec<u128>, skipped: usize) -> Result<Self, ParseError> {
        let total = numbers
            .iter()
            .try_fold(0u128, |acc, &n| acc.checked_add(n))
            .ok_or(ParseError::SumOverflow)?;

        Ok(Self {
            total,
            display_list: join_numbers(&numbers, ", "),
            display_sum_expr: join_numbers(&numbers, " + "),
            numbers,
            skipped,
        })
    }
}

fn join_numbers(numbers: &[u128], sep: &str) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

fn parse_number(digits: &str, token: &str) -> Result<u128, ParseError> {
    digits
        .parse::<u128>()
        .map_err(|_| ParseError::NumberTooLarge(token.to_string()))
}

/// Aggregate already-loaded content
pub fn aggregate_text(content: &str, policy: DecimalPolicy) -> Result<AggregateResult, ParseError> {
    let mut numbers = Vec::new();
    let mut skipped = 0usize;

    for token in tokens(content) {
        match classify(token) {
            TokenClass::Integer => numbers.push(parse_number(token, token)?),
            TokenClass::Decimal => match policy {
                DecimalPolicy::Skip => {
                    debug!("skipping decimal token {:?}", token);
                    skipped += 1;
                }
                DecimalPolicy::Truncate => {
                    numbers.push(parse_number(integer_part(token), token)?);
                }
                DecimalPolicy::Reject => {
                    return Err(ParseError::DecimalToken(token.to_string()));
                }
            },
            TokenClass::Other => skipped += 1,
        }
    }

    if numbers.is_empty() {
        return Err(ParseError::NoValidNumbers);
    }

    debug!("parsed {} numbers, skipped {} tokens", numbers.len(), skipped);
    AggregateResult::from_numbers(numbers, skipped)
}

/// Read `path` and sum the integers in it using default options
pub fn parse_and_sum(path: impl AsRef<Path>) -> Result<AggregateResult, ParseError> {
    parse_and_sum_with(path, &SumOptions::default()).map(|(result, _)| result)
}

/// Read `path` and sum the integers in it.
///
/// Also returns any warnings raised while reading (lossy decoding).
pub fn parse_and_sum_with(
    path: impl AsRef<Path>,
    options: &SumOptions,
) -> Result<(AggregateResult, Vec<FileWarning>), ParseError> {
    let path = path.as_ref();
    parse_and_sum_named(path, &path.display().to_string(), options)
}

/// Like [`parse_and_sum_with`], naming the file `display` in errors and warnings
pub fn parse_and_sum_named(
    path: &Path,
    display: &str,
    options: &SumOptions,
) -> Result<(AggregateResult, Vec<FileWarning>), ParseError> {
    let text = read_text(path, display, &options.read)?;
    let result = aggregate_text(&text.content, options.decimals)?;
    Ok((result, text.warnings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sum(content: &str) -> Result<AggregateResult, ParseError> {
        aggregate_text(content, DecimalPolicy::default())
    }

    #[test]
    fn test_simple_sum() {
        let result = sum("1 2 3").unwrap();
        assert_eq!(result.numbers, vec![1, 2, 3]);
        assert_eq!(result.total, 6);
        assert_eq!(result.display_list, "1, 2, 3");
        assert_eq!(result.display_sum_expr, "1 + 2 + 3");
        assert_eq!(result.skipped, 0);
    }

    #[test]
    fn test_non_numeric_tokens_discarded() {
        let result = sum("10 20 abc 30").unwrap();
        assert_eq!(result.numbers, vec![10, 20, 30]);
        assert_eq!(result.total, 60);
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn test_mixed_whitespace() {
        let result = sum("5\n\n  7\t9").unwrap();
        assert_eq!(result.numbers, vec![5, 7, 9]);
        assert_eq!(result.total, 21);
    }

    #[test]
    fn test_order_and_duplicates_retained() {
        let result = sum("9 1 9 0 1").unwrap();
        assert_eq!(result.numbers, vec![9, 1, 9, 0, 1]);
        assert_eq!(result.total, 20);
        assert_eq!(result.display_list, "9, 1, 9, 0, 1");
    }

    #[test]
    fn test_single_number() {
        let result = sum("  42\n").unwrap();
        assert_eq!(result.display_list, "42");
        assert_eq!(result.display_sum_expr, "42");
        assert_eq!(result.total, 42);
    }

    #[test]
    fn test_leading_zeros_normalized() {
        let result = sum("007 010").unwrap();
        assert_eq!(result.numbers, vec![7, 10]);
        assert_eq!(result.display_sum_expr, "7 + 10");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(sum(""), Err(ParseError::NoValidNumbers));
        assert_eq!(sum("  \n\t\n"), Err(ParseError::NoValidNumbers));
    }

    #[test]
    fn test_no_digit_like_tokens() {
        assert_eq!(sum("abc -5 +3 1.2.3 ."), Err(ParseError::NoValidNumbers));
    }

    #[test]
    fn test_decimal_skip_policy() {
        let result = aggregate_text("3.5 4", DecimalPolicy::Skip).unwrap();
        assert_eq!(result.numbers, vec![4]);
        assert_eq!(result.total, 4);
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn test_decimal_skip_policy_only_decimals() {
        assert_eq!(
            aggregate_text("1.5 2.5", DecimalPolicy::Skip),
            Err(ParseError::NoValidNumbers)
        );
    }

    #[test]
    fn test_decimal_truncate_policy() {
        let result = aggregate_text("3.5 4 .9 7.", DecimalPolicy::Truncate).unwrap();
        assert_eq!(result.numbers, vec![3, 4, 0, 7]);
        assert_eq!(result.total, 14);
    }

    #[test]
    fn test_decimal_reject_policy() {
        assert_eq!(
            aggregate_text("4 3.5 6.5", DecimalPolicy::Reject),
            Err(ParseError::DecimalToken("3.5".to_string()))
        );
    }

    #[test]
    fn test_wide_sum() {
        let big = u64::MAX.to_string();
        let result = sum(&format!("{} {}", big, big)).unwrap();
        assert_eq!(result.total, u64::MAX as u128 * 2);
    }

    #[test]
    fn test_number_too_large() {
        let huge = "9".repeat(50);
        assert_eq!(sum(&huge), Err(ParseError::NumberTooLarge(huge.clone())));
    }

    #[test]
    fn test_sum_overflow() {
        let max = u128::MAX.to_string();
        assert_eq!(sum(&format!("{} 1", max)), Err(ParseError::SumOverflow));
    }

    #[test]
    fn test_parse_and_sum_reads_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("numbers.txt");
        fs::write(&path, "10 20 abc 30\n").unwrap();

        let result = parse_and_sum(&path).unwrap();
        assert_eq!(result.total, 60);
    }

    #[test]
    fn test_parse_and_sum_missing_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("missing.txt");

        let err = parse_and_sum(&path).unwrap_err();
        assert!(matches!(err, ParseError::FileNotFound(ref p) if p.ends_with("missing.txt")));
    }

    #[test]
    fn test_parse_and_sum_is_deterministic() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("numbers.txt");
        fs::write(&path, "3 1 4 1 5 9 2 6").unwrap();

        assert_eq!(parse_and_sum(&path).unwrap(), parse_and_sum(&path).unwrap());
    }

    #[test]
    fn test_parse_and_sum_with_options() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("numbers.txt");
        fs::write(&path, "3.5 4").unwrap();

        let options = SumOptions {
            decimals: DecimalPolicy::Truncate,
            ..Default::default()
        };
        let (result, warnings) = parse_and_sum_with(&path, &options).unwrap();
        assert_eq!(result.total, 7);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_parse_and_sum_ignores_nul_bytes() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nul.txt");
        fs::write(&path, "1 2 \0 3").unwrap();

        let result = parse_and_sum(&path).unwrap();
        assert_eq!(result.numbers, vec![1, 2, 3]);
        assert_eq!(result.skipped, 1);
    }

    #[test]
    fn test_parse_and_sum_named_uses_display_in_errors() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("latin1.txt");
        fs::write(&path, b"1 \xE9 2").unwrap();

        let err = parse_and_sum_named(&path, "latin1.txt", &SumOptions::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("File 'latin1.txt' is not valid UTF-8"));
        assert!(!message.contains(&temp.path().display().to_string()));
    }

    #[test]
    fn test_aggregate_result_serialization() {
        let result = sum("1 2").unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["numbers"], serde_json::json!([1, 2]));
        assert_eq!(json["display_sum_expr"], "1 + 2");
    }
}

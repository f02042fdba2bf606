//! JSON-lines decoding of the split cards data file.
//!
//! The data file holds one card object per line. Every line is decoded on
//! its own, so one bad record never hides the position of another. Blank
//! lines, including the newline that usually ends the file, are ignored.

use std::collections::HashSet;
use std::fmt;

use crate::error::{CatalogError, CatalogResult};
use crate::types::Card;

/// What to do with a line that cannot be used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Fail the whole batch at the first rejected line
    Strict,
    /// Skip rejected lines and report them alongside the cards
    #[default]
    Lenient,
}

/// Why a line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// The line is not a valid card object
    Malformed(String),
    /// An earlier line already used this oracle id
    DuplicateOracleId(String),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Malformed(msg) => write!(f, "{}", msg),
            RejectReason::DuplicateOracleId(id) => write!(f, "duplicate oracle_id {:?}", id),
        }
    }
}

/// A data line that did not become a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number in the source text
    pub line_number: usize,
    pub reason: RejectReason,
}

/// Result of decoding a data file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedLines {
    /// Cards in file order
    pub cards: Vec<Card>,
    /// Lines skipped under the lenient policy
    pub rejected: Vec<RejectedLine>,
}

/// Decode newline-delimited card objects.
///
/// Under [`LoadPolicy::Strict`] the first rejected line becomes
/// [`CatalogError::MalformedLine`]. Under [`LoadPolicy::Lenient`] rejected
/// lines are collected in [`ParsedLines::rejected`] and logged.
pub fn parse_card_lines(text: &str, policy: LoadPolicy) -> CatalogResult<ParsedLines> {
    let mut parsed = ParsedLines::default();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_number = index + 1;

        let outcome = match serde_json::from_str::<Card>(line) {
            Ok(card) if seen.contains(&card.oracle_id) => {
                Err(RejectReason::DuplicateOracleId(card.oracle_id))
            }
            Ok(card) => Ok(card),
            Err(e) => Err(RejectReason::Malformed(e.to_string())),
        };

        match outcome {
            Ok(card) => {
                seen.insert(card.oracle_id.clone());
                parsed.cards.push(card);
            }
            Err(reason) => match policy {
                LoadPolicy::Strict => {
                    return Err(CatalogError::MalformedLine {
                        line: line_number,
                        reason: reason.to_string(),
                    });
                }
                LoadPolicy::Lenient => {
                    tracing::warn!("Skipping line {}: {}", line_number, reason);
                    parsed.rejected.push(RejectedLine {
                        line_number,
                        reason,
                    });
                }
            },
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOLT: &str = r#"{"oracle_id":"a1","name":"Bolt","mv":1,"image":"i1","scryfall_uri":"u1","casting_costs":[1],"mana_costs":["R"]}"#;
    const FIRE_ICE: &str = r#"{"oracle_id":"b2","name":"Fire // Ice","mv":4,"image":"i2","scryfall_uri":"u2","casting_costs":[2],"mana_costs":["{1}{R}","{1}{U}"]}"#;

    #[test]
    fn test_trailing_newline_is_accepted() {
        let text = format!("{}\n", BOLT);
        let parsed = parse_card_lines(&text, LoadPolicy::Strict).unwrap();
        assert_eq!(parsed.cards.len(), 1);
        assert!(parsed.rejected.is_empty());
    }

    #[test]
    fn test_crlf_and_blank_lines() {
        let text = format!("{}\r\n\r\n   \r\n{}\r\n", BOLT, FIRE_ICE);
        let parsed = parse_card_lines(&text, LoadPolicy::Strict).unwrap();
        let names: Vec<_> = parsed.cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Bolt", "Fire // Ice"]);
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse_card_lines("", LoadPolicy::Strict).unwrap();
        assert!(parsed.cards.is_empty());
    }

    #[test]
    fn test_strict_reports_line_number() {
        let text = format!("{}\n{{not json\n{}\n", BOLT, FIRE_ICE);
        let err = parse_card_lines(&text, LoadPolicy::Strict).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_lenient_skips_bad_lines() {
        let text = format!("{}\n{{not json\n{}\n", BOLT, FIRE_ICE);
        let parsed = parse_card_lines(&text, LoadPolicy::Lenient).unwrap();
        assert_eq!(parsed.cards.len(), 2);
        assert_eq!(parsed.rejected.len(), 1);
        assert_eq!(parsed.rejected[0].line_number, 2);
        assert!(matches!(parsed.rejected[0].reason, RejectReason::Malformed(_)));
    }

    #[test]
    fn test_missing_field_is_malformed() {
        let text = r#"{"oracle_id":"c3","name":"No MV","image":"i","scryfall_uri":"u","casting_costs":[]}"#;
        let err = parse_card_lines(text, LoadPolicy::Strict).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_mana_costs_default_to_empty() {
        let text = r#"{"oracle_id":"c3","name":"Plain","mv":2,"image":"i","scryfall_uri":"u","casting_costs":[2]}"#;
        let parsed = parse_card_lines(text, LoadPolicy::Strict).unwrap();
        assert!(parsed.cards[0].mana_costs.is_empty());
    }

    #[test]
    fn test_duplicate_oracle_id_rejected() {
        let text = format!("{}\n{}\n", BOLT, BOLT);

        let parsed = parse_card_lines(&text, LoadPolicy::Lenient).unwrap();
        assert_eq!(parsed.cards.len(), 1);
        assert_eq!(
            parsed.rejected,
            vec![RejectedLine {
                line_number: 2,
                reason: RejectReason::DuplicateOracleId("a1".to_string()),
            }]
        );

        let err = parse_card_lines(&text, LoadPolicy::Strict).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedLine { line: 2, .. }));
    }

    #[test]
    fn test_reject_reason_display() {
        let reason = RejectReason::DuplicateOracleId("a1".to_string());
        assert_eq!(reason.to_string(), "duplicate oracle_id \"a1\"");
    }
}

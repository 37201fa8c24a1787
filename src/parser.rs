//! Line classification for performance logs.
//!
//! A log is a sequence of records, each one an unindented ontology header
//! followed by indented measurement lines:
//! ```text
//! Italian Food
//!              [ELPP] Time: 0.123s
//!   [Concurrent ELPP] Time: 0.087s
//! ```
use crate::common_types::{LineNumber, Seconds};
use crate::error::ParseError;

/// Parsing options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserConfiguration {
    /// Drop malformed measurement lines (with a warning) instead of aborting.
    /// Measurements found before any header are always fatal.
    pub skip_malformed: bool,
}

/// What a single line of the log stands for.
#[derive(Debug, PartialEq)]
pub(crate) enum Line<'a> {
    /// whitespace only
    Blank,
    /// starts a new ontology record (trimmed name)
    Header(&'a str),
    /// a reasoner time for the current ontology
    Measurement(&'a str, Seconds),
    /// indented line without any `[`, carries nothing we know of
    Ignored,
}

/// Classify one line. `line` is the 1-based position, used for errors.
pub(crate) fn classify(text: &str, line: LineNumber) -> Result<Line<'_>, ParseError> {
    if text.trim().is_empty() {
        return Ok(Line::Blank);
    }
    match text.chars().next() {
        Some(c) if !c.is_whitespace() && c != '[' => Ok(Line::Header(text.trim())),
        _ if text.contains('[') => {
            let (reasoner, time) = parse_measurement(text, line)?;
            Ok(Line::Measurement(reasoner, time))
        }
        _ => Ok(Line::Ignored),
    }
}

/// Extract (reasoner, time) out of a line containing a `[`.
fn parse_measurement(text: &str, line: LineNumber) -> Result<(&str, Seconds), ParseError> {
    let after_bracket = text
        .splitn(2, '[')
        .nth(1)
        .ok_or_else(|| ParseError::malformed(line, "missing '['"))?;
    let closing = after_bracket
        .find(']')
        .ok_or_else(|| ParseError::malformed(line, "missing ']'"))?;
    let reasoner = after_bracket[..closing].trim();
    if reasoner.is_empty() {
        return Err(ParseError::malformed(line, "empty reasoner name"));
    }

    let field = text
        .splitn(2, ':')
        .nth(1)
        .ok_or_else(|| ParseError::malformed(line, "missing ':' before the time"))?
        .trim();
    let number = field.strip_suffix('s').unwrap_or(field).trim();
    let time: Seconds = number
        .parse()
        .map_err(|_| ParseError::malformed(line, format!("invalid time '{}'", field)))?;
    if !time.is_finite() || time < 0.0 {
        return Err(ParseError::malformed(
            line,
            format!("time '{}' is not a non-negative duration", field),
        ));
    }
    Ok((reasoner, time))
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_lines() {
        assert_eq!(classify("", 1), Ok(Line::Blank));
        assert_eq!(classify("   \t ", 1), Ok(Line::Blank));
    }

    #[test]
    fn headers_are_trimmed() {
        assert_eq!(classify("Snomed CT  \n", 1), Ok(Line::Header("Snomed CT")));
        assert_eq!(classify("GALEN", 1), Ok(Line::Header("GALEN")));
    }

    #[test]
    fn measurement_lines() {
        assert_eq!(
            classify("             [ELPP] Time: 0.123s", 2),
            Ok(Line::Measurement("ELPP", 0.123))
        );
        assert_eq!(
            classify("  [Concurrent ELPP] Time: 2.0s", 3),
            Ok(Line::Measurement("Concurrent ELPP", 2.0))
        );
        assert_eq!(
            classify("\t[ HermiT ]: 3.25 s ", 3),
            Ok(Line::Measurement("HermiT", 3.25))
        );
    }

    #[test]
    fn unindented_bracket_is_a_measurement() {
        assert_eq!(
            classify("[Pellet]: 1.50s", 7),
            Ok(Line::Measurement("Pellet", 1.5))
        );
    }

    #[test]
    fn scientific_notation_and_missing_unit() {
        assert_eq!(
            classify("  [ELK] Time: 1.0E-4s", 1),
            Ok(Line::Measurement("ELK", 0.0001))
        );
        assert_eq!(classify("  [ELK]: 4", 1), Ok(Line::Measurement("ELK", 4.0)));
    }

    #[test]
    fn indented_lines_without_bracket_are_ignored() {
        assert_eq!(classify("   some note: 3s", 1), Ok(Line::Ignored));
    }

    #[test]
    fn malformed_lines() {
        let missing_bracket = classify("  [ELK Time: 1s", 5).unwrap_err();
        assert_eq!(missing_bracket, ParseError::malformed(5, "missing ']'"));
        let empty_name = classify("  [ ]: 1s", 6).unwrap_err();
        assert_eq!(empty_name, ParseError::malformed(6, "empty reasoner name"));
        let no_colon = classify("  [ELK] 1s", 7).unwrap_err();
        assert_eq!(no_colon.line(), 7);
        let not_a_number = classify("  [ELK]: fast", 8).unwrap_err();
        assert_eq!(
            not_a_number,
            ParseError::malformed(8, "invalid time 'fast'")
        );
        assert!(classify("  [ELK]: -1s", 9).is_err());
        assert!(classify("  [ELK]: NaNs", 10).is_err());
    }
}

use std::io::Read;

use tracing::debug;

use super::{Match, ParseError, Tournament};

/// Parse a match log.
///
/// The log is a stream of whitespace separated names read two at a time as
/// `winner loser`. Line breaks carry no meaning and repeated separators are
/// skipped. An odd number of names leaves the last winner without an
/// opponent, which is an error.
///
/// # Examples
///
/// ```
/// use eigenrank::core::parse_matches;
///
/// let tourn = parse_matches("alice bob\nbob carol\n").unwrap();
/// assert_eq!(2, tourn.len());
/// assert!(parse_matches("alice bob carol").is_err());
/// ```
pub fn parse_matches(text: &str) -> Result<Tournament, ParseError> {
    let mut tokens = text.split_whitespace();
    let mut matches = Vec::new();

    while let Some(winner) = tokens.next() {
        let loser = tokens
            .next()
            .ok_or_else(|| ParseError::OpponentlessMatch {
                winner: winner.to_string(),
            })?;
        matches.push(Match::new(winner, loser));
    }

    debug!(matches = matches.len(), "Parsed match log");
    Ok(Tournament::new(matches))
}

/// Read the whole stream and then parse it with [`parse_matches`].
pub fn read_matches<R: Read>(mut reader: R) -> Result<Tournament, ParseError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_matches(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let tourn = parse_matches("a b\nc d\n").unwrap();
        assert_eq!(
            &[Match::new("a", "b"), Match::new("c", "d")],
            tourn.matches()
        );
    }

    #[test]
    fn test_line_breaks_do_not_matter() {
        let tourn = parse_matches("a\nb c\nd").unwrap();
        assert_eq!(
            &[Match::new("a", "b"), Match::new("c", "d")],
            tourn.matches()
        );
    }

    #[test]
    fn test_repeated_separators_skipped() {
        let tourn = parse_matches("  a \t\t b\r\n\n\nc    d  \n").unwrap();
        assert_eq!(2, tourn.len());
        assert_eq!(Match::new("c", "d"), tourn.matches()[1]);
    }

    #[test]
    fn test_odd_tokens_is_opponentless() {
        let err = parse_matches("a b c").unwrap_err();
        assert!(matches!(
            err,
            ParseError::OpponentlessMatch { ref winner } if winner == "c"
        ));
        assert!(err.to_string().contains("opponentless match"));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_matches("").unwrap().is_empty());
        assert!(parse_matches(" \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_read_from_reader() {
        let input = std::io::Cursor::new("x y\ny x\n");
        let tourn = read_matches(input).unwrap();
        assert_eq!(2, tourn.len());
    }

    #[test]
    fn test_read_from_reader_odd() {
        let input = std::io::Cursor::new("x y\ny\n");
        assert!(matches!(
            read_matches(input),
            Err(ParseError::OpponentlessMatch { .. })
        ));
    }
}

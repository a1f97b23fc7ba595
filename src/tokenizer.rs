//! Quote-aware line tokenizer.
//!
//! A two-state machine consuming one character at a time. Commas split
//! tokens only while unquoted. Quote characters toggle the state and are
//! never copied into a token; there is no escaped-quote form, so `""`
//! inside a quoted cell closes and reopens quoting rather than producing a
//! literal quote. An unbalanced quote simply leaves the machine quoted until
//! the line ends, at which point the last token is flushed as usual.

use crate::constants::{BYTE_ORDER_MARK, DELIMITER, QUOTE};

/// Tokenizer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteState {
    Unquoted,
    Quoted,
}

impl QuoteState {
    fn toggle(self) -> Self {
        match self {
            QuoteState::Unquoted => QuoteState::Quoted,
            QuoteState::Quoted => QuoteState::Unquoted,
        }
    }
}

/// Incremental tokenizer for a single line
#[derive(Debug)]
pub struct LineTokenizer {
    state: QuoteState,
    current: String,
    tokens: Vec<String>,
}

impl LineTokenizer {
    pub fn new() -> Self {
        Self {
            state: QuoteState::Unquoted,
            current: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Current quoting state
    pub fn state(&self) -> QuoteState {
        self.state
    }

    /// Consume one character
    pub fn push(&mut self, ch: char) {
        match (self.state, ch) {
            (_, QUOTE) => self.state = self.state.toggle(),
            (QuoteState::Unquoted, DELIMITER) => self.flush(),
            _ => self.current.push(ch),
        }
    }

    /// Flush the final token and return all tokens, regardless of state
    pub fn finish(mut self) -> Vec<String> {
        self.flush();
        self.tokens
    }

    fn flush(&mut self) {
        self.tokens.push(trim_cell(&self.current).to_string());
        self.current.clear();
    }
}

impl Default for LineTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Trim whitespace and byte-order marks from both ends of a cell
pub fn trim_cell(cell: &str) -> &str {
    cell.trim_matches(|ch: char| ch.is_whitespace() || ch == BYTE_ORDER_MARK)
}

/// Split a data row into trimmed tokens
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut tokenizer = LineTokenizer::new();
    for ch in line.chars() {
        tokenizer.push(ch);
    }
    tokenizer.finish()
}

/// Split a header row: plain comma split, quotes stripped, cells trimmed
pub fn tokenize_header(line: &str) -> Vec<String> {
    line.split(DELIMITER)
        .map(|cell| trim_cell(cell).replace(QUOTE, ""))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_row() {
        assert_eq!(
            tokenize_line("424242, VISA ,CREDIT"),
            vec!["424242", "VISA", "CREDIT"]
        );
    }

    #[test]
    fn test_quoted_commas_preserved() {
        let tokens =
            tokenize_line(r#"123456,"Issuer, With, Commas",CREDIT,,BIGBANK,US,United States"#);
        assert_eq!(tokens.len(), 7);
        assert_eq!(tokens[1], "Issuer, With, Commas");
        assert_eq!(tokens[3], "");
        assert_eq!(tokens[6], "United States");
    }

    #[test]
    fn test_empty_line_yields_single_empty_token() {
        assert_eq!(tokenize_line(""), vec![""]);
    }

    #[test]
    fn test_trailing_comma_yields_empty_token() {
        assert_eq!(tokenize_line("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_unbalanced_quote_swallows_rest_of_line() {
        assert_eq!(
            tokenize_line(r#"1234,"open,VISA,CREDIT"#),
            vec!["1234", "open,VISA,CREDIT"]
        );
    }

    #[test]
    fn test_doubled_quote_is_not_an_escape() {
        // `""` closes then reopens quoting; no literal quote survives
        assert_eq!(
            tokenize_line(r#""say ""hi"", ok",x"#),
            vec!["say hi, ok", "x"]
        );
    }

    #[test]
    fn test_quote_adjacent_commas() {
        assert_eq!(tokenize_line(r#"a,",",b"#), vec!["a", ",", "b"]);
        assert_eq!(tokenize_line(r#""",x"#), vec!["", "x"]);
    }

    #[test]
    fn test_whitespace_inside_quotes_is_trimmed() {
        assert_eq!(tokenize_line(r#"" padded ",x"#), vec!["padded", "x"]);
    }

    #[test]
    fn test_carriage_return_trimmed() {
        assert_eq!(tokenize_line("1234,VISA\r"), vec!["1234", "VISA"]);
    }

    #[test]
    fn test_state_machine_transitions() {
        let mut tokenizer = LineTokenizer::new();
        assert_eq!(tokenizer.state(), QuoteState::Unquoted);
        tokenizer.push('"');
        assert_eq!(tokenizer.state(), QuoteState::Quoted);
        tokenizer.push(',');
        assert_eq!(tokenizer.state(), QuoteState::Quoted);
        tokenizer.push('"');
        assert_eq!(tokenizer.state(), QuoteState::Unquoted);
        tokenizer.push(',');
        assert_eq!(tokenizer.finish(), vec![",", ""]);
    }

    #[test]
    fn test_byte_order_mark_trimmed() {
        assert_eq!(tokenize_header("\u{FEFF}BIN,Brand"), vec!["BIN", "Brand"]);
        assert_eq!(tokenize_line("\u{FEFF}424242,VISA"), vec!["424242", "VISA"]);
        assert_eq!(trim_cell(" \u{FEFF} x \t"), "x");
    }

    #[test]
    fn test_header_strips_quotes_without_quote_awareness() {
        assert_eq!(
            tokenize_header(r#""BIN", "Brand" ,Type,"Country, Name""#),
            vec!["BIN", "Brand", "Type", "Country", "Name"]
        );
    }
}

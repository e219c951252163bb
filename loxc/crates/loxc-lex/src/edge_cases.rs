//! Edge case tests for loxc-lex

#[cfg(test)]
mod tests {
    use crate::{scan, LexError, Token, TokenKind};
    use proptest::prelude::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).unwrap().into_iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_whitespace_only() {
        assert!(scan("   \n\t  \r\n  ").unwrap().is_empty());
    }

    #[test]
    fn test_edge_newline_positions_are_counted() {
        assert_eq!(
            scan("\r\n+").unwrap(),
            vec![Token::new(TokenKind::Plus, 2, 1)]
        );
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = scan(&format!("var {} = 1;", name)).unwrap();
        assert_eq!(tokens[1], Token::with_text(TokenKind::Identifier, name, 4, 10000));
    }

    #[test]
    fn test_edge_unicode_is_unexpected() {
        let err = scan("var λ = 1;").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected character λ at line 1:\n\n   var λ");
        assert_eq!(err.position(), 4);
    }

    #[test]
    fn test_edge_non_ascii_whitespace_is_unexpected() {
        let err = scan("1\u{00A0}2").unwrap_err();
        assert!(matches!(err, LexError::UnexpectedCharacter { found: '\u{00A0}', .. }));
    }

    #[test]
    fn test_edge_positions_after_non_ascii() {
        let tokens = scan("\"ü\" x").unwrap();
        assert_eq!(tokens[1], Token::with_text(TokenKind::Identifier, "x", 4, 1));
    }

    #[test]
    fn test_edge_error_after_comment_line() {
        let err = scan("// fine\n  #").unwrap_err();
        assert_eq!(err.to_string(), "Unexpected character # at line 2:\n\n     #");
    }

    #[test]
    fn test_edge_first_error_wins_over_later_unterminated_string() {
        let err = scan("@ \"never closed").unwrap_err();
        assert!(matches!(err, LexError::UnexpectedCharacter { found: '@', .. }));
    }

    #[test]
    fn test_edge_unterminated_string_wins_over_later_character() {
        let err = scan("\"abc $").unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { line: 1, .. }));
    }

    #[test]
    fn test_edge_slash_before_newline_and_slash() {
        assert_eq!(kinds("/\n/"), [TokenKind::Slash, TokenKind::Slash]);
    }

    #[test]
    fn test_edge_comment_directly_after_number() {
        assert_eq!(kinds("1//2"), [TokenKind::Number]);
    }

    #[test]
    fn test_edge_dot_sequences() {
        assert_eq!(kinds(".."), [TokenKind::Dot, TokenKind::Dot]);
        assert_eq!(
            kinds("1..2"),
            [TokenKind::Number, TokenKind::Dot, TokenKind::Dot, TokenKind::Number]
        );
    }

    #[test]
    fn test_edge_keywords_back_to_back() {
        assert_eq!(
            kinds("ifelse"),
            [TokenKind::If, TokenKind::Else]
        );
    }

    #[test]
    fn test_edge_deterministic() {
        let source = "fun f(x) { return x * 2.5; } // double";
        assert_eq!(scan(source), scan(source));
    }

    // ==================== PROPERTIES ====================

    proptest! {
        #[test]
        fn prop_never_panics(source in "\\PC{0,200}") {
            let _ = scan(&source);
        }

        #[test]
        fn prop_tokens_ordered_and_disjoint(source in "[a-z0-9 (){},.;+*/=<>!\"\n-]{0,200}") {
            if let Ok(tokens) = scan(&source) {
                for pair in tokens.windows(2) {
                    prop_assert!(pair[0].end() <= pair[1].start);
                }
                let len = source.chars().count();
                for token in &tokens {
                    prop_assert!(token.length > 0);
                    prop_assert!(token.end() <= len);
                }
            }
        }

        #[test]
        fn prop_spans_match_lexemes(source in "[a-z0-9 (){},.;+*=<>!-]{0,200}") {
            let chars: Vec<char> = source.chars().collect();
            let tokens = scan(&source).unwrap();
            for token in tokens {
                let lexeme: String = chars[token.start..token.end()].iter().collect();
                match token.text() {
                    Some(text) => prop_assert_eq!(text, lexeme.as_str()),
                    None => prop_assert_eq!(token.kind.lexeme(), Some(lexeme.as_str())),
                }
            }
        }

        #[test]
        fn prop_scan_is_deterministic(source in "\\PC{0,100}") {
            prop_assert_eq!(scan(&source), scan(&source));
        }

        #[test]
        fn prop_digit_runs_are_single_numbers(input in "[0-9]{1,20}(\\.[0-9]{1,20})?") {
            let tokens = scan(&input).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::Number);
            prop_assert_eq!(tokens[0].text(), Some(input.as_str()));
        }

        #[test]
        fn prop_strings_round_trip(content in "[^\"]{0,100}") {
            let source = format!("\"{}\"", content);
            let tokens = scan(&source).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].text(), Some(content.as_str()));
            prop_assert_eq!(tokens[0].length, content.chars().count() + 2);
        }

        #[test]
        fn prop_uppercase_identifiers_are_single_tokens(input in "[A-Z_][A-Za-z0-9_]{0,50}") {
            let tokens = scan(&input).unwrap();
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
        }
    }
}

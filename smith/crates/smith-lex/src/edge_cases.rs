//! Edge case tests for smith-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Token, TokenKind};
    use proptest::prelude::*;
    use smith_util::span::{Pos, SourceFile, Span};

    fn at(row: u32, col: u32, width: u32) -> Span {
        Span::single_line(Pos::new(row, col), width)
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).iter().map(Token::kind).collect()
    }

    /// Rebuilds `source` from token texts and the skipped text between them,
    /// checking that nothing but spaces and newlines is ever skipped.
    fn reconstruct(source: &str, tokens: &[Token]) -> String {
        let file = SourceFile::new("input", source);
        let mut out = String::with_capacity(source.len());
        let mut last = 0;
        for token in tokens {
            let begin = file.offset(token.span().begin).unwrap();
            let end = file.offset(token.span().end).unwrap();
            let gap = &source[last..begin];
            assert!(
                gap.chars().all(|c| c == ' ' || c == '\n'),
                "skipped {gap:?} before {token}"
            );
            out.push_str(gap);
            out.push_str(&token.text());
            last = end;
        }
        out.push_str(&source[last..]);
        out
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_edge_only_invalid_characters() {
        let t = tokenize("#!?");
        assert_eq!(t.len(), 3);
        assert!(t.iter().all(Token::is_invalid));
        assert_eq!(t[2], Token::invalid('?', at(0, 2, 1)));
    }

    #[test]
    fn test_edge_single_char_symbol() {
        assert_eq!(tokenize("x"), vec![Token::symbol("x", at(0, 0, 1))]);
    }

    #[test]
    fn test_edge_long_symbol() {
        let name = "a".repeat(10000);
        let t = tokenize(&name);
        assert_eq!(t, vec![Token::symbol(name.as_str(), at(0, 0, 10000))]);
    }

    #[test]
    fn test_edge_trailing_dot_at_end_of_input() {
        assert_eq!(
            tokenize("3."),
            vec![
                Token::int("3", at(0, 0, 1)),
                Token::operator('.', at(0, 1, 1)),
            ]
        );
    }

    #[test]
    fn test_edge_double_dot_between_digits() {
        assert_eq!(
            tokenize("3..4"),
            vec![
                Token::int("3", at(0, 0, 1)),
                Token::operator('.', at(0, 1, 1)),
                Token::float(".4", at(0, 2, 2)),
            ]
        );
    }

    #[test]
    fn test_edge_three_part_number() {
        assert_eq!(
            tokenize("1.2.3"),
            vec![
                Token::float("1.2", at(0, 0, 3)),
                Token::float(".3", at(0, 3, 2)),
            ]
        );
    }

    #[test]
    fn test_edge_dot_after_symbol_starts_float() {
        // a digit after the dot makes it a leading-dot float, even after a name
        assert_eq!(kinds("x.5"), vec![TokenKind::Symbol, TokenKind::Float]);
        assert_eq!(
            kinds("x.y"),
            vec![TokenKind::Symbol, TokenKind::Operator, TokenKind::Symbol]
        );
    }

    #[test]
    fn test_edge_no_multi_char_operators() {
        assert_eq!(
            tokenize("==")
                .iter()
                .map(|t| t.text().into_owned())
                .collect::<Vec<_>>(),
            vec!["=", "="]
        );
        assert_eq!(kinds("-3"), vec![TokenKind::Operator, TokenKind::Int]);
        assert_eq!(kinds("**"), vec![TokenKind::Operator, TokenKind::Operator]);
    }

    #[test]
    fn test_edge_tab_indentation_is_invalid() {
        assert_eq!(
            tokenize("a\n\tb"),
            vec![
                Token::symbol("a", at(0, 0, 1)),
                Token::indent(0, at(1, 0, 0)),
                Token::invalid('\t', at(1, 0, 1)),
                Token::symbol("b", at(1, 1, 1)),
            ]
        );
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        assert_eq!(
            tokenize("a\r\nb"),
            vec![
                Token::symbol("a", at(0, 0, 1)),
                Token::invalid('\r', at(0, 1, 1)),
                Token::indent(0, at(1, 0, 0)),
                Token::symbol("b", at(1, 0, 1)),
            ]
        );
    }

    #[test]
    fn test_edge_trailing_newline() {
        assert_eq!(
            tokenize("x\n"),
            vec![
                Token::symbol("x", at(0, 0, 1)),
                Token::indent(0, at(1, 0, 0)),
            ]
        );
    }

    #[test]
    fn test_edge_leading_newlines() {
        assert_eq!(
            tokenize("\n\n y"),
            vec![
                Token::indent(1, at(2, 0, 1)),
                Token::symbol("y", at(2, 1, 1)),
            ]
        );
    }

    #[test]
    fn test_edge_whitespace_only_line() {
        assert_eq!(
            tokenize("a\n   \nb"),
            vec![
                Token::symbol("a", at(0, 0, 1)),
                Token::indent(3, at(1, 0, 3)),
                Token::indent(0, at(2, 0, 0)),
                Token::symbol("b", at(2, 0, 1)),
            ]
        );
    }

    #[test]
    fn test_edge_non_ascii_is_one_column() {
        assert_eq!(
            tokenize("é=1"),
            vec![
                Token::invalid('é', at(0, 0, 1)),
                Token::operator('=', at(0, 1, 1)),
                Token::int("1", at(0, 2, 1)),
            ]
        );
    }

    #[test]
    fn test_edge_symbol_glued_to_number() {
        assert_eq!(kinds("2x"), vec![TokenKind::Int, TokenKind::Symbol]);
        assert_eq!(kinds("x2"), vec![TokenKind::Symbol]);
    }

    #[test]
    fn test_edge_reconstruct_known_input() {
        let source = "foo(x, y)\n\n  3.max(.5)  # \n";
        assert_eq!(reconstruct(source, &tokenize(source)), source);
    }

    // ==================== PROPERTIES ====================

    fn smith_like() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_ .\n(){}\\[\\],:+*/=#\t\r-]{0,200}"
    }

    proptest! {
        #[test]
        fn prop_total_on_any_string(source in any::<String>()) {
            let tokens = tokenize(&source);
            prop_assert!(tokens.len() <= source.chars().count());
        }

        #[test]
        fn prop_lossless_span_coverage(source in smith_like()) {
            let tokens = tokenize(&source);
            prop_assert_eq!(reconstruct(&source, &tokens), source);
        }

        #[test]
        fn prop_lossless_on_any_string(source in any::<String>()) {
            let tokens = tokenize(&source);
            prop_assert_eq!(reconstruct(&source, &tokens), source);
        }

        #[test]
        fn prop_spans_are_monotonic(source in smith_like()) {
            let tokens = tokenize(&source);
            for token in &tokens {
                prop_assert!(token.span().begin <= token.span().end);
            }
            for pair in tokens.windows(2) {
                prop_assert!(
                    pair[0].span().end <= pair[1].span().begin,
                    "{} overlaps {}", pair[0], pair[1]
                );
            }
        }

        #[test]
        fn prop_only_indents_are_zero_width(source in smith_like()) {
            for token in tokenize(&source) {
                if token.span().is_empty() {
                    prop_assert_eq!(token.kind(), TokenKind::Indent);
                }
            }
        }

        #[test]
        fn prop_deterministic(source in smith_like()) {
            prop_assert_eq!(tokenize(&source), tokenize(&source));
        }
    }
}

use crate::parsers::text;

#[cfg(test)]
mod basic_tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(text::tidy(""), "");
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(text::tidy("   \n   \t   \r\n   "), "");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(text::tidy("Hello, world!"), "Hello, world!");
    }

    #[test]
    fn test_blank_line_runs_collapse() {
        let input = "Paragraph 1.\n\n\n\nParagraph 2.\n\n\nParagraph 3.";
        assert_eq!(
            text::tidy(input),
            "Paragraph 1.\n\nParagraph 2.\n\nParagraph 3."
        );
    }

    #[test]
    fn test_line_breaks_kept() {
        assert_eq!(text::tidy("Line 1\nLine 2\nLine 3"), "Line 1\nLine 2\nLine 3");
    }

    #[test]
    fn test_trailing_whitespace_and_inner_runs() {
        let input = "Hello    world!   \r\nThis    is    a test.\t";
        assert_eq!(text::tidy(input), "Hello world!\nThis is a test.");
    }

    #[test]
    fn test_indentation_is_kept() {
        let input = "* Item\n  * Nested   item";
        assert_eq!(text::tidy(input), "* Item\n  * Nested item");
    }

    #[test]
    fn test_fenced_code_untouched() {
        let input = "Intro\n```\nlet  x = 1;\n\n\nlet y  = 2;\n```\n\n\nOutro";
        assert_eq!(
            text::tidy(input),
            "Intro\n\n```\nlet  x = 1;\n\n\nlet y  = 2;\n```\n\nOutro"
        );
    }

    #[test]
    fn test_unterminated_fence() {
        let input = "```\ncode  here\n\nmore";
        assert_eq!(text::tidy(input), "```\ncode  here\n\nmore");
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_split_into_paragraphs() {
        assert_eq!(text::split_into_paragraphs("").len(), 0);

        let result = text::split_into_paragraphs("Line 1a\nLine 1b\n\nLine 2a");
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], vec!["Line 1a", "Line 1b"]);
        assert_eq!(result[1], vec!["Line 2a"]);

        let result = text::split_into_paragraphs("Before\n```rust\nfn main() {}\n\n```\nAfter");
        assert_eq!(result.len(), 3);
        assert_eq!(result[1], vec!["```rust", "fn main() {}", "", "```"]);
        assert_eq!(result[2], vec!["After"]);
    }

    #[test]
    fn test_process_paragraph() {
        assert_eq!(
            text::process_paragraph(&["a   b", "  c    d"]),
            "a b\n  c d"
        );
        assert_eq!(
            text::process_paragraph(&["```", "x    y", "```"]),
            "```\nx    y\n```"
        );
    }

    #[test]
    fn test_normalize_line() {
        assert_eq!(text::normalize_line("a   b\tc"), "a b c");
        assert_eq!(text::normalize_line("    indented   text"), "    indented text");
        assert_eq!(text::normalize_line(""), "");
    }

    #[test]
    fn test_join_paragraphs_skips_empty() {
        let paragraphs = vec!["One".to_string(), String::new(), "Two".to_string()];
        assert_eq!(text::join_paragraphs(&paragraphs), "One\n\nTwo");
    }
}

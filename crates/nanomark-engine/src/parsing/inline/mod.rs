//! # Inline Rendering
//!
//! Inline markup is rendered by a fixed, ordered list of substitution passes
//! over escaped block text. Each pass sees the output of the previous one,
//! so the order is part of the observable behavior:
//!
//! | Pass          | Markup                | Output                              |
//! |---------------|-----------------------|-------------------------------------|
//! | `Strong`      | `**text**`            | `<strong>`                          |
//! | `Emphasis`    | `*text*`              | `<em>`                              |
//! | `Underline`   | `_text_`              | `<u>`                               |
//! | `Strike`      | `~text~`              | `<del>`                             |
//! | `Code`        | `` `text` ``          | `<code>`                            |
//! | `Variable`    | `$text$`              | `<var>`                             |
//! | `Superscript` | `^text^`              | `<sup>`                             |
//! | `SmallCaps`   | `\|text\|`            | `<span class="smallcaps">`          |
//! | `Keyboard`    | `{Ctrl C}`            | nested `<kbd>`                      |
//! | `LineBreaks`  | newline / two spaces  | `<br>`                              |
//! | `Typography`  | ` - `, ` / `, `...`   | dashes, ellipses, non-breaking space |
//! | `Images`      | `![alt](src "title")` | `<img>`                             |
//! | `Links`       | `[label](url)`, URLs  | `<a>` or plain label                |
//!
//! Unmatched markup is left as literal text; no pass can fail.

pub mod kinds;

use super::ParserOptions;

use kinds::{Image, Keyboard, LineBreak, Link, Typography, delimited};

/// One inline substitution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlinePass {
    Strong,
    Emphasis,
    Underline,
    Strike,
    Code,
    Variable,
    Superscript,
    SmallCaps,
    Keyboard,
    LineBreaks,
    Typography,
    Images,
    Links,
}

impl InlinePass {
    /// Passes in the order they run. `Strong` must precede `Emphasis`.
    pub const ORDER: [InlinePass; 13] = [
        InlinePass::Strong,
        InlinePass::Emphasis,
        InlinePass::Underline,
        InlinePass::Strike,
        InlinePass::Code,
        InlinePass::Variable,
        InlinePass::Superscript,
        InlinePass::SmallCaps,
        InlinePass::Keyboard,
        InlinePass::LineBreaks,
        InlinePass::Typography,
        InlinePass::Images,
        InlinePass::Links,
    ];

    pub fn apply(self, input: &str, options: &ParserOptions) -> String {
        match self {
            InlinePass::Strong => delimited::STRONG.apply(input),
            InlinePass::Emphasis => delimited::EMPHASIS.apply(input),
            InlinePass::Underline => delimited::UNDERLINE.apply(input),
            InlinePass::Strike => delimited::STRIKE.apply(input),
            InlinePass::Code => delimited::CODE.apply(input),
            InlinePass::Variable => delimited::VARIABLE.apply(input),
            InlinePass::Superscript => delimited::SUPERSCRIPT.apply(input),
            InlinePass::SmallCaps => delimited::SMALL_CAPS.apply(input),
            InlinePass::Keyboard => Keyboard::apply(input),
            InlinePass::LineBreaks => LineBreak::apply(input, options.hard_line_breaks),
            InlinePass::Typography => Typography::apply(input),
            InlinePass::Images => Image::apply(input),
            InlinePass::Links => Link::apply(input, options.enable_links),
        }
    }
}

/// Renders inline markup in escaped block text.
pub fn render_inline(input: &str, options: &ParserOptions) -> String {
    InlinePass::ORDER
        .iter()
        .fold(input.to_string(), |text, pass| pass.apply(&text, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn render(input: &str) -> String {
        render_inline(input, &ParserOptions::default())
    }

    #[rstest]
    #[case("**strong**", "<strong>strong</strong>")]
    #[case("*em*", "<em>em</em>")]
    #[case("_under_", "<u>under</u>")]
    #[case("~gone~", "<del>gone</del>")]
    #[case("`code`", "<code>code</code>")]
    #[case("$x$", "<var>x</var>")]
    #[case("x^2^", "x<sup>2</sup>")]
    #[case("|nasa|", "<span class=\"smallcaps\">nasa</span>")]
    #[case(
        "{Ctrl Alt Del}",
        "<kbd><kbd>Ctrl</kbd>&nbsp;+ <kbd>Alt</kbd>&nbsp;+ <kbd>Del</kbd></kbd>"
    )]
    #[case("one\ntwo", "one<br>two")]
    #[case("this - that", "this&nbsp;&ndash; that")]
    #[case("![alt](a.png)", "<img src=\"a.png\" alt=\"alt\">")]
    #[case(
        "[docs](https://example.com)",
        "<a href=\"https://example.com\">docs</a>"
    )]
    fn each_pass(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(render(input), expected);
    }

    #[test]
    fn strong_runs_before_emphasis() {
        assert_eq!(
            render("**a** *b* ***c***"),
            "<strong>a</strong> <em>b</em> <strong><em>c</strong></em>"
        );
    }

    #[test]
    fn passes_are_non_greedy() {
        assert_eq!(render("*a* and *b*"), "<em>a</em> and <em>b</em>");
    }

    #[test]
    fn passes_do_not_cross_lines() {
        assert_eq!(render("*a\nb*"), "*a<br>b*");
    }

    #[test]
    fn unmatched_markup_stays_literal() {
        assert_eq!(
            render("2 * 3 and a_b and {open"),
            "2 * 3 and a_b and {open"
        );
    }

    #[test]
    fn code_content_is_still_rendered_by_earlier_passes() {
        // Code runs after emphasis, so its content is not protected
        assert_eq!(render("`*x*`"), "<code><em>x</em></code>");
    }

    #[test]
    fn hard_line_breaks_need_two_trailing_spaces() {
        let options = ParserOptions {
            hard_line_breaks: true,
            ..ParserOptions::default()
        };
        assert_eq!(
            render_inline("one  \ntwo\nthree", &options),
            "one<br>\ntwo\nthree"
        );
    }

    #[test]
    fn order_is_stable() {
        assert_eq!(InlinePass::ORDER.first(), Some(&InlinePass::Strong));
        assert_eq!(InlinePass::ORDER.last(), Some(&InlinePass::Links));
        let breaks = InlinePass::ORDER
            .iter()
            .position(|p| *p == InlinePass::LineBreaks);
        let typography = InlinePass::ORDER
            .iter()
            .position(|p| *p == InlinePass::Typography);
        assert!(breaks < typography);
    }
}

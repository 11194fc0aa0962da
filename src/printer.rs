use std::{any::Any, io};

use itertools::Itertools;

use crate::{
    color::Color,
    error::{Error, Param, Result},
};

const CSI: &str = "\u{1b}[";
const RESET: &str = "\u{1b}[0m";

/// Which standard stream [`printc`] and [`print_colored`] write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Target {
    #[default]
    Stdout,
    Stderr,
}

/// How a line is written.
///
/// The defaults are a newline terminator, no explicit flush and standard
/// output. The separator is accepted for completeness but has no effect
/// because a single value is written per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions<'a> {
    pub terminator: &'a str,
    pub separator: &'a str,
    pub flush: bool,
    /// Only used by [`printc`] and [`print_colored`]. A [`Printer`] always
    /// writes to its own sink.
    pub target: Target,
}

impl Default for PrintOptions<'_> {
    fn default() -> Self {
        PrintOptions {
            terminator: "\n",
            separator: " ",
            flush: false,
            target: Target::Stdout,
        }
    }
}

impl<'a> PrintOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn terminator(mut self, terminator: &'a str) -> Self {
        self.terminator = terminator;
        self
    }

    pub fn separator(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }

    pub fn flush(mut self, flush: bool) -> Self {
        self.flush = flush;
        self
    }

    pub fn target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }
}

/// Wrap `text` in the escape sequences for the given colors.
///
/// The foreground code always comes before the background code. Without
/// colors the text is returned as is.
pub fn colorize(text: &str, foreground: Option<Color>, background: Option<Color>) -> String {
    let codes = foreground
        .map(|c| c.foreground_code())
        .into_iter()
        .chain(background.map(|c| c.background_code()))
        .join(";");
    if codes.is_empty() {
        return text.to_string();
    }
    format!("{CSI}{codes}m{text}{RESET}")
}

/// Writes colored lines to an [`io::Write`].
pub struct Printer<W> {
    out: W,
    enabled: bool,
}

impl<W: io::Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Printer { out, enabled: true }
    }

    /// A printer that never emits escape sequences.
    pub fn plain(out: W) -> Self {
        Printer {
            out,
            enabled: false,
        }
    }

    pub fn colors_enabled(&self) -> bool {
        self.enabled
    }

    /// Write `text` followed by the terminator in a single write.
    ///
    /// [`PrintOptions::target`] is ignored, the printer always writes to
    /// its own sink.
    pub fn print(
        &mut self,
        text: &str,
        foreground: Option<Color>,
        background: Option<Color>,
        options: &PrintOptions,
    ) -> io::Result<()> {
        let mut line = if self.enabled {
            colorize(text, foreground, background)
        } else {
            text.to_string()
        };
        line.push_str(options.terminator);
        self.out.write_all(line.as_bytes())?;
        if options.flush {
            self.out.flush()?;
        }
        Ok(())
    }

    /// Like [`Printer::print`] but accepts colors of any type. A color
    /// argument that is present but not a [`Color`] fails with
    /// [`Error::TypeMismatch`] and nothing is written.
    pub fn printc(
        &mut self,
        text: &str,
        foreground: Option<&dyn Any>,
        background: Option<&dyn Any>,
        options: &PrintOptions,
    ) -> Result<()> {
        let foreground = downcast_color(foreground, Param::Foreground)?;
        let background = downcast_color(background, Param::Background)?;
        self.print(text, foreground, background, options)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Print `text` in the given colors to the stream selected by
/// `options.target`.
pub fn print_colored(
    text: &str,
    foreground: Option<Color>,
    background: Option<Color>,
    options: &PrintOptions,
) -> Result<()> {
    printc(
        text,
        foreground.as_ref().map(|c| c as &dyn Any),
        background.as_ref().map(|c| c as &dyn Any),
        options,
    )
}

/// Like [`print_colored`] but accepts colors of any type.
///
/// This is the entry point for callers that hold their arguments as
/// type-erased values. A foreground or background that is present but not
/// a [`Color`] fails with [`Error::TypeMismatch`] before anything is
/// written.
pub fn printc(
    text: &str,
    foreground: Option<&dyn Any>,
    background: Option<&dyn Any>,
    options: &PrintOptions,
) -> Result<()> {
    match options.target {
        Target::Stdout => {
            let mut printer = Printer::new(io::stdout().lock());
            printer.printc(text, foreground, background, options)
        }
        Target::Stderr => {
            let mut printer = Printer::new(io::stderr().lock());
            printer.printc(text, foreground, background, options)
        }
    }
}

fn downcast_color(value: Option<&dyn Any>, param: Param) -> Result<Option<Color>> {
    let Some(value) = value else {
        return Ok(None);
    };
    if let Some(color) = value.downcast_ref::<Color>() {
        return Ok(Some(*color));
    }
    if let Some(color) = value.downcast_ref::<Option<Color>>() {
        return Ok(*color);
    }
    Err(Error::TypeMismatch { param })
}

#[cfg(test)]
fn printed(
    text: &str,
    foreground: Option<Color>,
    background: Option<Color>,
    options: &PrintOptions,
) -> String {
    let mut printer = Printer::new(vec![]);
    printer
        .print(text, foreground, background, options)
        .expect("writing to a Vec cannot fail");
    String::from_utf8(printer.into_inner()).expect("output must be utf8")
}

#[test]
fn test_print_no_color() {
    let out = printed("Plain text.", None, None, &PrintOptions::default());
    assert_eq!(out, "Plain text.\n");
}

#[test]
fn test_print_colors() {
    #[track_caller]
    fn check(text: &str, fg: Option<Color>, bg: Option<Color>, expected: &str) {
        let out = printed(text, fg, bg, &PrintOptions::default());
        assert_eq!(out, expected);
    }

    check("Red text.", Some(Color::RED), None, "\x1b[31mRed text.\x1b[0m\n");
    check(
        "Green background.",
        None,
        Some(Color::GREEN),
        "\x1b[42mGreen background.\x1b[0m\n",
    );
    check(
        "Blue on Yellow.",
        Some(Color::BLUE),
        Some(Color::YELLOW),
        "\x1b[34;43mBlue on Yellow.\x1b[0m\n",
    );
    check(
        "Bold Cyan.",
        Some(Color::CYAN.bolded()),
        None,
        "\x1b[96mBold Cyan.\x1b[0m\n",
    );
    check(
        "On Bold Magenta.",
        None,
        Some(Color::MAGENTA.bolded()),
        "\x1b[105mOn Bold Magenta.\x1b[0m\n",
    );
    check(
        "Blue text on Yellow background",
        Some(Color::BLUE),
        Some(Color::YELLOW.bolded()),
        "\x1b[34;103mBlue text on Yellow background\x1b[0m\n",
    );
}

#[test]
fn test_print_options() {
    let no_newline = PrintOptions::new().terminator("");
    let out = printed("No newline", Some(Color::RED), None, &no_newline);
    assert_eq!(out, "\x1b[31mNo newline\x1b[0m");

    // the separator never shows up, there is only one value
    let sep = PrintOptions::new().separator("-");
    let out = printed("Hello-World", Some(Color::BLUE), None, &sep);
    assert_eq!(out, "\x1b[34mHello-World\x1b[0m\n");

    let end = PrintOptions::new().terminator(" -- The End\n").flush(true);
    let out = printed("x", None, None, &end);
    assert_eq!(out, "x -- The End\n");
}

#[test]
fn test_print_text_passthrough() {
    let text = "\x1b[1malready escaped\x1b[0m\n";
    let out = printed(text, None, None, &PrintOptions::new().terminator(""));
    assert_eq!(out, text);
}

#[test]
fn test_plain_printer() {
    let mut printer = Printer::plain(vec![]);
    assert!(!printer.colors_enabled());
    printer
        .print(
            "Blue on Yellow.",
            Some(Color::BLUE),
            Some(Color::YELLOW),
            &PrintOptions::default(),
        )
        .unwrap();
    assert_eq!(printer.into_inner(), b"Blue on Yellow.\n");
}

#[test]
fn test_colorize() {
    assert_eq!(colorize("abc", None, None), "abc");
    assert_eq!(colorize("", Some(Color::BLACK), None), "\x1b[30m\x1b[0m");
    assert_eq!(
        colorize("abc", Some(Color::WHITE.bolded()), Some(Color::BLACK.bolded())),
        "\x1b[97;100mabc\x1b[0m"
    );
}

#[test]
fn test_printc() {
    use claim::assert_ok;

    #[track_caller]
    fn check(text: &str, fg: Option<&dyn Any>, bg: Option<&dyn Any>, expected: &str) {
        let mut printer = Printer::new(vec![]);
        assert_ok!(printer.printc(text, fg, bg, &PrintOptions::default()));
        assert_eq!(printer.into_inner(), expected.as_bytes());
    }

    check("Plain text.", None, None, "Plain text.\n");
    check("Red text.", Some(&Color::RED), None, "\x1b[31mRed text.\x1b[0m\n");
    check(
        "Blue on Yellow.",
        Some(&Color::BLUE),
        Some(&Color::YELLOW),
        "\x1b[34;43mBlue on Yellow.\x1b[0m\n",
    );
    check("x", Some(&None::<Color>), Some(&Some(Color::GREEN)), "\x1b[42mx\x1b[0m\n");
}

#[test]
fn test_printc_type_mismatch() {
    use claim::{assert_err, assert_matches};

    #[track_caller]
    fn check(fg: Option<&dyn Any>, bg: Option<&dyn Any>, expected: Param) {
        let mut printer = Printer::new(vec![]);
        let err = assert_err!(printer.printc("Text", fg, bg, &PrintOptions::default()));
        assert_matches!(err, Error::TypeMismatch { param } if param == expected);
        // rejected before anything is written
        assert!(printer.into_inner().is_empty());
    }

    check(Some(&"red"), None, Param::Foreground);
    check(None, Some(&123), Param::Background);
    check(Some(&Color::RED), Some(&"yellow"), Param::Background);
    // foreground is checked first
    check(Some(&1.5), Some(&'c'), Param::Foreground);

    // the free function rejects before touching stdout
    let err = assert_err!(printc("x", Some(&"red"), None, &PrintOptions::default()));
    assert_matches!(
        err,
        Error::TypeMismatch {
            param: Param::Foreground
        }
    );
}

#[test]
fn test_downcast_color() {
    use claim::{assert_err, assert_ok_eq};

    assert_ok_eq!(downcast_color(None, Param::Foreground), None);
    assert_ok_eq!(
        downcast_color(Some(&Color::RED), Param::Foreground),
        Some(Color::RED)
    );
    assert_ok_eq!(
        downcast_color(Some(&Some(Color::CYAN)), Param::Background),
        Some(Color::CYAN)
    );
    assert_ok_eq!(
        downcast_color(Some(&None::<Color>), Param::Background),
        None
    );
    assert_err!(downcast_color(Some(&"red".to_string()), Param::Background));
}

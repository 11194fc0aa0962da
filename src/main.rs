mod demo;

use std::io;
use std::process::ExitCode;

use anyhow::{bail, Context, Result as AResult};
use argsplitter::{ArgError, ArgSplitter};
use lazy_regex::regex_captures;
use terminal_colors::{print_colored, Color, PrintOptions, Printer, Target, VERSION};

pub const USAGE: &str = include_str!("usage.txt");

fn main() -> ExitCode {
    argsplitter::main_support::report_errors(USAGE, mymain())
}

fn mymain() -> AResult<()> {
    let mut foreground = None;
    let mut background = None;
    let mut terminator = String::from("\n");
    let mut flush = false;
    let mut target = Target::Stdout;
    let mut use_colors = true;
    let mut demo = false;
    let mut text_flags = false;

    let mut args = ArgSplitter::from_env();
    while let Some(flag) = args.flag()? {
        match flag {
            "-f" | "--fg" => {
                foreground = Some(parse_color(&args.param()?)?);
                text_flags = true;
            }
            "-b" | "--bg" => {
                background = Some(parse_color(&args.param()?)?);
                text_flags = true;
            }
            "-n" => {
                terminator.clear();
                text_flags = true;
            }
            "-e" | "--end" => {
                terminator = args.param()?;
                text_flags = true;
            }
            "--flush" => flush = true,
            "--stderr" => target = Target::Stderr,
            "--color" => {
                use_colors = match args.param()?.to_lowercase().as_str() {
                    "always" => true,
                    "never" => false,
                    other => bail!("--color={other}: must be 'always' or 'never'"),
                }
            }
            "--demo" => demo = true,
            "--help" => {
                println!("Termcolors version {VERSION}");
                println!();
                println!("{USAGE}");
                return Ok(());
            }
            "--version" => {
                println!("Termcolors version {VERSION}");
                return Ok(());
            }
            _ => return Err(ArgError::unknown_flag(flag).into()),
        }
    }

    if demo {
        if text_flags {
            let msg = "--demo cannot be combined with -f, -b, -n or -e";
            return Err(ArgError::message(msg).into());
        }
        args.no_more_stashed()?;
        let out = std_sink(target);
        let mut printer = if use_colors {
            Printer::new(out)
        } else {
            Printer::plain(out)
        };
        return demo::run(&mut printer);
    }

    let text = args
        .stashed_os("TEXT")?
        .into_string()
        .map_err(|t| anyhow::anyhow!("TEXT is not valid UTF-8: {}", t.to_string_lossy()))?;
    args.no_more_stashed()?;

    let options = PrintOptions::new()
        .terminator(&terminator)
        .flush(flush)
        .target(target);
    let written = if use_colors {
        print_colored(&text, foreground, background, &options)
    } else {
        Printer::plain(std_sink(target))
            .print(&text, None, None, &options)
            .map_err(terminal_colors::Error::from)
    };
    written.with_context(|| "could not write output")?;
    Ok(())
}

fn std_sink(target: Target) -> Box<dyn io::Write> {
    match target {
        Target::Stdout => Box::new(io::stdout()),
        Target::Stderr => Box::new(io::stderr()),
    }
}

/// Parse a color name, optionally prefixed with 'bright-' or 'bold-'.
fn parse_color(value: &str) -> Result<Color, terminal_colors::Error> {
    let Some((_, prefix, name)) = regex_captures!(r"^(?:(bright|bold)-)?(.*)$"i, value) else {
        return Color::new(value, false);
    };
    Color::new(name, !prefix.is_empty())
}

#[test]
fn test_parse_color() {
    use claim::{assert_err, assert_ok_eq};

    assert_ok_eq!(parse_color("red"), Color::RED);
    assert_ok_eq!(parse_color("Cyan"), Color::CYAN);
    assert_ok_eq!(parse_color("bright-cyan"), Color::CYAN.bolded());
    assert_ok_eq!(parse_color("BOLD-White"), Color::WHITE.bolded());

    assert_err!(parse_color("orange"));
    assert_err!(parse_color("bright-"));
    assert_err!(parse_color("dim-red"));
}

#[test]
fn test_version() {
    use claim::assert_ok;

    assert_ok!(semver::Version::parse(VERSION));
}

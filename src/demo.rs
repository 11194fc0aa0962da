use std::io;

use anyhow::Result as AResult;
use terminal_colors::{printc, Color, PrintOptions, Printer};

/// Show off the colors, one sample per line.
pub fn run<W: io::Write>(printer: &mut Printer<W>) -> AResult<()> {
    let line = PrintOptions::default();
    let mut p = |text: &str, fg: Option<Color>, bg: Option<Color>| printer.print(text, fg, bg, &line);

    p(
        "--- Terminal Colors Demo ---",
        Some(Color::WHITE.bolded()),
        Some(Color::BLACK),
    )?;
    p("Hello, Red Text!", Some(Color::RED), None)?;
    p("Bright Green Text!", Some(Color::GREEN.bolded()), None)?;
    p("Green Background!", None, Some(Color::GREEN))?;
    p("Bright Green Background!", None, Some(Color::GREEN.bolded()))?;
    p(
        "Yellow Text on Blue Background!",
        Some(Color::YELLOW),
        Some(Color::BLUE),
    )?;
    p(
        "Bright Yellow Text on Bright Blue Background!",
        Some(Color::YELLOW.bolded()),
        Some(Color::BLUE.bolded()),
    )?;
    p(
        "Magenta text on Cyan background",
        Some(Color::MAGENTA),
        Some(Color::CYAN),
    )?;
    p(
        "Black text, Bright Red Background",
        Some(Color::BLACK),
        Some(Color::RED.bolded()),
    )?;

    let blank = PrintOptions::new().terminator("\n\n");
    printer.print("No color applied.", None, None, &blank)?;

    let space = PrintOptions::new().terminator(" ").flush(true);
    printer.print("This is on a new line", Some(Color::BLUE), None, &space)?;
    printer.print("and this is after a space!", Some(Color::CYAN), None, &line)?;

    let error_color = Some(Color::RED.bolded());
    if let Err(e) = Color::new("orange", false) {
        let msg = format!("Error creating color: {e}");
        printer.print(&msg, error_color, None, &line)?;
    }

    // fails before anything is written
    if let Err(e) = printc("Error with type", Some(&"red"), None, &line) {
        let msg = format!("Error using printc: {e}");
        printer.print(&msg, error_color, None, &line)?;
    }

    let msg = format!("Color object: {}", Color::RED);
    printer.print(&msg, Some(Color::BLUE), None, &line)?;

    Ok(())
}

#[test]
fn test_demo() {
    let mut printer = Printer::new(vec![]);
    run(&mut printer).unwrap();
    let out = String::from_utf8(printer.into_inner()).unwrap();
    let lines: Vec<&str> = out.split('\n').collect();

    assert_eq!(lines[0], "\x1b[97;40m--- Terminal Colors Demo ---\x1b[0m");
    assert_eq!(lines[1], "\x1b[31mHello, Red Text!\x1b[0m");
    assert_eq!(lines[8], "\x1b[30;101mBlack text, Bright Red Background\x1b[0m");
    assert_eq!(lines[9], "No color applied.");
    assert_eq!(lines[10], "");
    assert_eq!(
        lines[11],
        "\x1b[34mThis is on a new line\x1b[0m \x1b[36mand this is after a space!\x1b[0m"
    );
    assert!(lines[12].starts_with("\x1b[91mError creating color: invalid color name: 'orange'."));
    assert_eq!(
        lines[13],
        "\x1b[91mError using printc: foreground must be a Color or None\x1b[0m"
    );
    assert_eq!(
        lines[14],
        "\x1b[34mColor object: Color(name='red', bold=false)\x1b[0m"
    );
    assert_eq!(lines[15], "");
    assert_eq!(lines.len(), 16);
}

#[test]
fn test_demo_plain() {
    let mut printer = Printer::plain(vec![]);
    run(&mut printer).unwrap();
    let out = String::from_utf8(printer.into_inner()).unwrap();
    assert!(!out.contains('\x1b'));
    assert!(out.starts_with("--- Terminal Colors Demo ---\nHello, Red Text!\n"));
}

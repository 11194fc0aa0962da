use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

// Black=30 Red=31 Green=32 Yellow=33 Blue=34 Magenta=35 Cyan=36 White=37

const FOREGROUND: u8 = 30;
const BACKGROUND: u8 = 40;
/// Added to a code to select the bright variant.
const BRIGHT: u8 = 60;

/// The eight base colors, in the order of their SGR color parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ColorName {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl ColorName {
    pub const ALL: [ColorName; 8] = [
        ColorName::Black,
        ColorName::Red,
        ColorName::Green,
        ColorName::Yellow,
        ColorName::Blue,
        ColorName::Magenta,
        ColorName::Cyan,
        ColorName::White,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ColorName::Black => "black",
            ColorName::Red => "red",
            ColorName::Green => "green",
            ColorName::Yellow => "yellow",
            ColorName::Blue => "blue",
            ColorName::Magenta => "magenta",
            ColorName::Cyan => "cyan",
            ColorName::White => "white",
        }
    }

    /// Position in the color table, 0 for black up to 7 for white.
    pub const fn offset(self) -> u8 {
        self as u8
    }

    /// All valid names, lowercase, in table order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.as_str()).collect()
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ColorName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.to_lowercase();
        ColorName::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| Error::InvalidColorName {
                name: s.to_string(),
                valid: ColorName::names(),
            })
    }
}

/// One of the eight base colors, either at normal intensity or bold/bright.
///
/// Colors are plain values. [`Color::bolded`] returns a new color rather than
/// changing this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    name: ColorName,
    bold: bool,
}

impl Color {
    pub const BLACK: Color = Color::from_name(ColorName::Black);
    pub const RED: Color = Color::from_name(ColorName::Red);
    pub const GREEN: Color = Color::from_name(ColorName::Green);
    pub const YELLOW: Color = Color::from_name(ColorName::Yellow);
    pub const BLUE: Color = Color::from_name(ColorName::Blue);
    pub const MAGENTA: Color = Color::from_name(ColorName::Magenta);
    pub const CYAN: Color = Color::from_name(ColorName::Cyan);
    pub const WHITE: Color = Color::from_name(ColorName::White);

    /// The normal intensity colors, in table order.
    pub const ALL: [Color; 8] = [
        Color::BLACK,
        Color::RED,
        Color::GREEN,
        Color::YELLOW,
        Color::BLUE,
        Color::MAGENTA,
        Color::CYAN,
        Color::WHITE,
    ];

    /// Look up a color by name. The name is case-insensitive.
    ///
    /// Fails with [`Error::InvalidColorName`] if it is not one of the eight
    /// base colors.
    pub fn new(name: &str, bold: bool) -> Result<Self> {
        let name = name.parse()?;
        Ok(Color { name, bold })
    }

    pub const fn from_name(name: ColorName) -> Self {
        Color { name, bold: false }
    }

    pub const fn name(&self) -> ColorName {
        self.name
    }

    pub const fn is_bold(&self) -> bool {
        self.bold
    }

    /// The bright version of this color. Bolding a bold color is a no-op.
    #[must_use]
    pub const fn bolded(&self) -> Self {
        Color {
            name: self.name,
            bold: true,
        }
    }

    pub const fn foreground_code(&self) -> u8 {
        self.code(FOREGROUND)
    }

    pub const fn background_code(&self) -> u8 {
        self.code(BACKGROUND)
    }

    const fn code(&self, base: u8) -> u8 {
        let base = if self.bold { base + BRIGHT } else { base };
        base + self.name.offset()
    }
}

impl From<ColorName> for Color {
    fn from(name: ColorName) -> Self {
        Color::from_name(name)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Color::new(s, false)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(name='{}', bold={})", self.name, self.bold)
    }
}

#[test]
fn test_color_new() {
    use claim::{assert_ok, assert_ok_eq};

    let red = assert_ok!(Color::new("red", false));
    assert_eq!(red.name(), ColorName::Red);
    assert!(!red.is_bold());

    let blue = assert_ok!(Color::new("blue", true));
    assert_eq!(blue.name(), ColorName::Blue);
    assert!(blue.is_bold());

    assert_ok_eq!(Color::new("RED", false), Color::RED);
    assert_ok_eq!(Color::new("Magenta", false), Color::MAGENTA);
    assert_ok_eq!("cyan".parse::<Color>(), Color::CYAN);
}

#[test]
fn test_color_invalid_name() {
    use claim::{assert_err, assert_matches};

    let err = assert_err!(Color::new("orange", false));
    assert_matches!(&err, Error::InvalidColorName { name, .. } if name == "orange");
    let Error::InvalidColorName { valid, .. } = err else {
        unreachable!()
    };
    assert_eq!(
        valid,
        ["black", "red", "green", "yellow", "blue", "magenta", "cyan", "white"]
    );

    assert_err!(Color::new("", false));
    assert_err!(Color::new("bright-red", false));
}

#[test]
fn test_color_codes() {
    #[track_caller]
    fn check(name: &str, index: u8) {
        let normal = Color::new(name, false).unwrap();
        let bold = Color::new(&name.to_uppercase(), true).unwrap();
        assert_eq!(normal.foreground_code(), 30 + index, "{name}");
        assert_eq!(bold.foreground_code(), 90 + index, "{name}");
        assert_eq!(normal.background_code(), 40 + index, "{name}");
        assert_eq!(bold.background_code(), 100 + index, "{name}");
    }

    check("black", 0);
    check("red", 1);
    check("green", 2);
    check("yellow", 3);
    check("blue", 4);
    check("magenta", 5);
    check("cyan", 6);
    check("white", 7);

    assert_eq!(Color::WHITE.bolded().foreground_code(), 97);
    assert_eq!(Color::BLACK.bolded().background_code(), 100);
}

#[test]
fn test_color_constants() {
    for (color, name) in Color::ALL.iter().zip(ColorName::ALL) {
        assert_eq!(color.name(), name);
        assert!(!color.is_bold());
    }
}

#[test]
fn test_color_bolded() {
    let red = Color::RED;
    let bold_red = red.bolded();
    assert_eq!(bold_red.name(), ColorName::Red);
    assert!(bold_red.is_bold());
    assert_eq!(bold_red.foreground_code(), 91);

    // the original is untouched
    assert!(!red.is_bold());

    assert_eq!(bold_red.bolded(), bold_red);
}

#[test]
fn test_color_display() {
    assert_eq!(Color::RED.to_string(), "Color(name='red', bold=false)");
    assert_eq!(
        Color::GREEN.bolded().to_string(),
        "Color(name='green', bold=true)"
    );
}

//! Cell styles
//!
//! A [`Style`] carries only what a converted column can ask for: a bold or
//! underlined colored font, a number format and text wrapping.

mod pool;

pub use pool::StylePool;

/// Font color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Theme/default color
    #[default]
    Auto,
    /// RGB color
    Rgb { r: u8, g: u8, b: u8 },
}

impl Color {
    /// Hyperlink blue
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// ARGB hex string as written in XLSX, `None` for [`Color::Auto`]
    pub fn to_argb_hex(&self) -> Option<String> {
        match self {
            Color::Rgb { r, g, b } => Some(format!("FF{:02X}{:02X}{:02X}", r, g, b)),
            Color::Auto => None,
        }
    }
}

/// Font attributes that differ from the workbook's default font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FontStyle {
    /// Bold
    pub bold: bool,
    /// Single underline
    pub underline: bool,
    /// Font color
    pub color: Color,
}

/// Number format of a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    /// `General`
    #[default]
    General,
    /// Built-in format by id
    BuiltIn(u32),
    /// Custom format code, e.g. a column mask
    Custom(String),
}

impl NumberFormat {
    /// Built-in `m/d/yy h:mm`
    pub const ID_DATETIME: u32 = 22;
}

/// Complete cell style
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Font attributes
    pub font: FontStyle,
    /// Number format
    pub number_format: NumberFormat,
    /// Wrap text inside the cell
    pub wrap_text: bool,
}

impl Style {
    /// The default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Style of the header row: bold text
    pub fn header() -> Self {
        Self::new().bold(true)
    }

    /// Set font to bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.font.bold = bold;
        self
    }

    /// Set single underline
    pub fn underline(mut self, underline: bool) -> Self {
        self.font.underline = underline;
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font.color = color;
        self
    }

    /// Set a custom number format
    pub fn number_format<S: Into<String>>(mut self, code: S) -> Self {
        self.number_format = NumberFormat::Custom(code.into());
        self
    }

    /// Set a built-in number format
    pub fn builtin_number_format(mut self, id: u32) -> Self {
        self.number_format = NumberFormat::BuiltIn(id);
        self
    }

    /// Enable text wrapping
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.wrap_text = wrap;
        self
    }
}

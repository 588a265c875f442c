use std::fmt;

/// Broad category of a validation failure.
///
/// `Value` covers inputs of the right shape with bad content (unparseable
/// colors, oversized stop lists); `Type` covers inputs of the wrong shape.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    Value,
    Type,
}

/// A color input that could not be turned into an RGBA value.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorError {
    /// No value was given (`None` / JSON `null`).
    Missing,
    /// Keyword is not a known color name.
    UnknownName(String),
    /// String starting with `#` that is not `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa`.
    InvalidHex(String),
    /// Component sequence whose length is neither 3 nor 4.
    ComponentCount(usize),
    /// Component that is non-finite or outside `[0, 1]`.
    ComponentOutOfRange { index: usize, value: f32 },
    /// Input of a kind the parser does not accept (e.g. a JSON object).
    Unsupported(&'static str),
}

impl ColorError {
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Value
    }
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::Missing => write!(f, "color value is missing"),
            ColorError::UnknownName(name) => write!(f, "unknown color name {name:?}"),
            ColorError::InvalidHex(s) => write!(f, "invalid hex color {s:?}"),
            ColorError::ComponentCount(n) => {
                write!(f, "color needs 3 or 4 components, got {n}")
            }
            ColorError::ComponentOutOfRange { index, value } => {
                write!(f, "color component {index} is {value}, expected a value in [0, 1]")
            }
            ColorError::Unsupported(what) => write!(f, "cannot convert {what} to a color"),
        }
    }
}

impl std::error::Error for ColorError {}

/// Failure while assigning a gradient's stop collection.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientError {
    /// A stop's color could not be parsed.
    Color(ColorError),
    /// More stops than the lookup texture has texels.
    TooManyStops { len: usize, max: usize },
    /// An element of a dynamic stop list is not a color stop.
    NotAStop { index: usize, found: &'static str },
}

impl GradientError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GradientError::Color(e) => e.kind(),
            GradientError::TooManyStops { .. } => ErrorKind::Value,
            GradientError::NotAStop { .. } => ErrorKind::Type,
        }
    }
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientError::Color(e) => write!(f, "invalid color stop: {e}"),
            GradientError::TooManyStops { len, max } => {
                write!(f, "too many color stops: {len} (maximum is {max})")
            }
            GradientError::NotAStop { index, found } => {
                write!(f, "element {index} is {found}, expected a color stop")
            }
        }
    }
}

impl std::error::Error for GradientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GradientError::Color(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ColorError> for GradientError {
    fn from(e: ColorError) -> Self {
        GradientError::Color(e)
    }
}

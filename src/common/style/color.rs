use std::fmt;

/// Packed colour value the host uses for "no colour".
pub const NA_PACKED: i32 = i32::MIN;

/// An RGBA colour with 8-bit channels.
///
/// The default colour is fully transparent white, which is also what an
/// absent (NA) host colour decodes to.
///
/// # Examples
///
/// ```rust
/// use dmlcanvas::common::Colour;
///
/// let red = Colour::rgb(255, 0, 0);
/// assert_eq!(red.to_hex(), "FF0000");
/// assert_eq!(red.alpha_percent(), 100_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Colour {
    /// Alpha component (0 transparent, 255 opaque)
    pub alpha: u8,
    /// Red component (0-255)
    pub red: u8,
    /// Green component (0-255)
    pub green: u8,
    /// Blue component (0-255)
    pub blue: u8,
}

impl Colour {
    pub const TRANSPARENT_WHITE: Colour = Colour::rgba(255, 255, 255, 0);
    pub const BLACK: Colour = Colour::rgb(0, 0, 0);

    #[inline]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }

    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// Decode the host's packed colour: red in the lowest byte, then green,
    /// blue and alpha in the highest byte.
    pub const fn from_packed(packed: i32) -> Self {
        if packed == NA_PACKED {
            return Self::TRANSPARENT_WHITE;
        }
        let v = packed as u32;
        Self::rgba(
            (v & 0xFF) as u8,
            ((v >> 8) & 0xFF) as u8,
            ((v >> 16) & 0xFF) as u8,
            ((v >> 24) & 0xFF) as u8,
        )
    }

    /// Inverse of [`Colour::from_packed`].
    pub const fn to_packed(self) -> i32 {
        (self.red as u32
            | (self.green as u32) << 8
            | (self.blue as u32) << 16
            | (self.alpha as u32) << 24) as i32
    }

    /// Six upper-case hex digits, without a `#` prefix.
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Opacity scaled to DrawingML's 0..=100000 range.
    #[inline]
    pub fn alpha_percent(&self) -> u32 {
        (100_000.0 * f64::from(self.alpha) / 255.0).round() as u32
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.alpha == 0
    }
}

impl Default for Colour {
    fn default() -> Self {
        Self::TRANSPARENT_WHITE
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}{:02X}", self.to_hex(), self.alpha)
    }
}

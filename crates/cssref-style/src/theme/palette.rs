//! Syntax palette definitions.

use cssref_highlight::TokenClass;

use crate::Color;

/// Colors for highlighted declarations and the page around them.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxPalette {
    // Token colors
    /// Property names.
    pub property_name: Color,
    /// The `:` separator.
    pub colon: Color,
    /// Color literals.
    pub color: Color,
    /// Numbers and their units.
    pub number: Color,
    /// Known keywords.
    pub keyword: Color,
    /// Everything else in a value.
    pub plain_text: Color,
    /// The trailing `;`.
    pub semicolon: Color,
    /// Lines that are not declarations.
    pub fallback: Color,

    // Page colors
    /// Page background.
    pub background: Color,
    /// Code block and card background.
    pub surface: Color,
    /// Body text.
    pub text: Color,
    /// Secondary text (labels, counts).
    pub muted: Color,
    /// Headings and value chips.
    pub accent: Color,
}

impl SyntaxPalette {
    /// The dark palette used by the catalog's code blocks.
    pub fn dark() -> Self {
        Self {
            property_name: Color::from_rgb8(0x60, 0xa5, 0xfa),
            colon: Color::from_rgb8(0x9c, 0xa3, 0xaf),
            color: Color::from_rgb8(0xc0, 0x84, 0xfc),
            number: Color::from_rgb8(0xfa, 0xcc, 0x15),
            keyword: Color::from_rgb8(0xf4, 0x72, 0xb6),
            plain_text: Color::from_rgb8(0x4a, 0xde, 0x80),
            semicolon: Color::from_rgb8(0x9c, 0xa3, 0xaf),
            fallback: Color::from_rgb8(0xd1, 0xd5, 0xdb),

            background: Color::from_rgb8(0x0f, 0x17, 0x2a),
            surface: Color::from_rgb8(0x11, 0x18, 0x27),
            text: Color::from_rgb8(0xe5, 0xe7, 0xeb),
            muted: Color::from_rgb8(0x9c, 0xa3, 0xaf),
            accent: Color::from_rgb8(0x60, 0xa5, 0xfa),
        }
    }

    /// A palette for light backgrounds.
    pub fn light() -> Self {
        Self {
            property_name: Color::from_rgb8(0x1d, 0x4e, 0xd8),
            colon: Color::from_rgb8(0x6b, 0x72, 0x80),
            color: Color::from_rgb8(0x7e, 0x22, 0xce),
            number: Color::from_rgb8(0xa1, 0x62, 0x07),
            keyword: Color::from_rgb8(0xbe, 0x18, 0x5d),
            plain_text: Color::from_rgb8(0x15, 0x80, 0x3d),
            semicolon: Color::from_rgb8(0x6b, 0x72, 0x80),
            fallback: Color::from_rgb8(0x37, 0x41, 0x51),

            background: Color::from_rgb8(0xf9, 0xfa, 0xfb),
            surface: Color::from_rgb8(0xf3, 0xf4, 0xf6),
            text: Color::from_rgb8(0x11, 0x18, 0x27),
            muted: Color::from_rgb8(0x4b, 0x55, 0x63),
            accent: Color::from_rgb8(0x25, 0x63, 0xeb),
        }
    }

    /// A palette with maximum contrast on black.
    pub fn high_contrast() -> Self {
        Self {
            property_name: Color::from_rgb8(0x00, 0xff, 0xff),
            colon: Color::WHITE,
            color: Color::from_rgb8(0xff, 0x00, 0xff),
            number: Color::from_rgb8(0xff, 0xff, 0x00),
            keyword: Color::from_rgb8(0xff, 0x80, 0x00),
            plain_text: Color::from_rgb8(0x00, 0xff, 0x00),
            semicolon: Color::WHITE,
            fallback: Color::WHITE,

            background: Color::BLACK,
            surface: Color::BLACK,
            text: Color::WHITE,
            muted: Color::from_rgb8(0xe0, 0xe0, 0xe0),
            accent: Color::from_rgb8(0x00, 0xff, 0xff),
        }
    }

    /// The color for a token class.
    pub fn color_for(&self, class: TokenClass) -> Color {
        match class {
            TokenClass::PropertyName => self.property_name,
            TokenClass::Colon => self.colon,
            TokenClass::Color => self.color,
            TokenClass::Number => self.number,
            TokenClass::Keyword => self.keyword,
            TokenClass::PlainText => self.plain_text,
            TokenClass::Semicolon => self.semicolon,
        }
    }

    /// Replace the color of one token class.
    pub fn with_color(mut self, class: TokenClass, color: Color) -> Self {
        let slot = match class {
            TokenClass::PropertyName => &mut self.property_name,
            TokenClass::Colon => &mut self.colon,
            TokenClass::Color => &mut self.color,
            TokenClass::Number => &mut self.number,
            TokenClass::Keyword => &mut self.keyword,
            TokenClass::PlainText => &mut self.plain_text,
            TokenClass::Semicolon => &mut self.semicolon,
        };
        *slot = color;
        self
    }
}

impl Default for SyntaxPalette {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_palette_token_colors() {
        let palette = SyntaxPalette::dark();
        assert_eq!(palette.color_for(TokenClass::PropertyName).to_hex(), "#60a5fa");
        assert_eq!(palette.color_for(TokenClass::Color).to_hex(), "#c084fc");
        assert_eq!(palette.color_for(TokenClass::Number).to_hex(), "#facc15");
        assert_eq!(palette.color_for(TokenClass::Keyword).to_hex(), "#f472b6");
        assert_eq!(palette.color_for(TokenClass::PlainText).to_hex(), "#4ade80");
        assert_eq!(
            palette.color_for(TokenClass::Colon),
            palette.color_for(TokenClass::Semicolon)
        );
    }

    #[test]
    fn with_color_only_touches_one_class() {
        let palette = SyntaxPalette::dark().with_color(TokenClass::Keyword, Color::WHITE);
        assert_eq!(palette.keyword, Color::WHITE);
        assert_eq!(palette.number, SyntaxPalette::dark().number);
    }

    #[test]
    fn every_class_has_a_color_in_every_palette() {
        for palette in [
            SyntaxPalette::dark(),
            SyntaxPalette::light(),
            SyntaxPalette::high_contrast(),
        ] {
            for class in TokenClass::ALL {
                assert!(palette.color_for(class).is_opaque());
            }
        }
    }
}

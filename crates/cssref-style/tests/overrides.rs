//! Palette overrides as they arrive from configuration files.

use std::collections::BTreeMap;

use cssref_highlight::TokenClass;
use cssref_style::{Color, SyntaxPalette, Theme, ThemeMode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Overrides {
    theme: ThemeMode,
    palette: BTreeMap<String, Color>,
}

#[test]
fn colors_and_modes_deserialize_from_toml() {
    let parsed: Overrides = toml::from_str(
        r##"
            theme = "high-contrast"

            [palette]
            keyword = "#fff"
            number = "#11223344"
        "##,
    )
    .unwrap();

    assert_eq!(parsed.theme, ThemeMode::HighContrast);
    assert_eq!(parsed.palette["keyword"], Color::WHITE);
    assert_eq!(parsed.palette["number"], Color::from_rgba8(0x11, 0x22, 0x33, 0x44));
}

#[test]
fn invalid_color_is_rejected() {
    let result: Result<Overrides, _> = toml::from_str(
        r#"
            theme = "dark"
            [palette]
            keyword = "pink"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn overrides_flow_into_theme_variables() {
    let mut palette = SyntaxPalette::light();
    for (name, hex) in [("property-name", "#000000"), ("plain_text", "#123456")] {
        let class: TokenClass = name.parse().unwrap();
        palette = palette.with_color(class, hex.parse().unwrap());
    }

    let theme = Theme::light().with_palette(palette);
    assert_eq!(theme.mode, ThemeMode::Light);
    assert_eq!(theme.variables.get("--tok-property-name"), Some("#000000"));
    assert_eq!(theme.variables.get("tok-plain-text"), Some("#123456"));
    assert!(theme.variables.to_css_root().contains("--tok-plain-text: #123456;"));
}

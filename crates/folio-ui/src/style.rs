//! Theme-dependent stylesheets.
//!
//! Styles are a pure function of `(ThemeState, accent colour)`. The client
//! regenerates the sheet whenever the theme flips, so a single render never
//! mixes light and dark rules.

use std::fmt::Write;

use folio_core::{Breakpoint, ThemeState};

/// Colours that differ between light and dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background.
    pub page_background: &'static str,
    /// Body copy colour.
    pub text: &'static str,
    /// Header bar background.
    pub header_background: &'static str,
    /// Header bar drop shadow.
    pub header_shadow: &'static str,
    /// Inactive navigation link colour.
    pub nav_link: &'static str,
}

impl Palette {
    /// Light mode palette.
    pub const LIGHT: Self = Self {
        page_background: "#ffffff",
        text: "#41484f",
        header_background: "#ffffff",
        header_shadow: "0 2px 10px 0 rgba(0, 0, 0, 0.08)",
        nav_link: "#41484f",
    };

    /// Dark mode palette.
    pub const DARK: Self = Self {
        page_background: "#1e1e1e",
        text: "#ced4da",
        header_background: "#252525",
        header_shadow: "0 2px 10px 0 rgba(0, 0, 0, 0.45)",
        nav_link: "#ced4da",
    };

    /// Palette for a theme state.
    pub const fn for_theme(theme: ThemeState) -> Self {
        if theme.is_dark_mode_enabled {
            Self::DARK
        } else {
            Self::LIGHT
        }
    }
}

/// Wide-viewport decoration of the social link panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialPanelStyle {
    /// Panel background.
    pub background: &'static str,
    /// Border declaration; only drawn in dark mode.
    pub border: Option<String>,
}

impl SocialPanelStyle {
    /// Panel style for a theme.
    pub fn new(theme: ThemeState, accent: &str) -> Self {
        if theme.is_dark_mode_enabled {
            Self {
                background: "#2d2d2d",
                border: Some(format!("1px {accent} solid")),
            }
        } else {
            Self {
                background: "#FFFFFF",
                border: None,
            }
        }
    }

    /// Value for the CSS `border` property.
    pub fn border_css(&self) -> &str {
        self.border.as_deref().unwrap_or("none")
    }
}

/// How the social links are arranged for a viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialPanelLayout {
    /// Stacked at the bottom of the header area.
    Vertical,
    /// Fixed, bordered panel in the top-right corner.
    Horizontal,
}

impl SocialPanelLayout {
    /// Viewports at least this wide use [`Self::Horizontal`].
    pub const HORIZONTAL_FROM: Breakpoint = Breakpoint::Laptop;
}

/// How the article and its table of contents are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleLayout {
    /// Reading column and contents column next to each other.
    SideBySide,
    /// Contents column below the reading column.
    Stacked,
}

impl ArticleLayout {
    /// Viewports at most this wide use [`Self::Stacked`].
    pub const STACKED_UP_TO: Breakpoint = Breakpoint::Tablet;

    /// `flex-direction` of the article wrapper.
    pub const fn flex_direction(self) -> &'static str {
        match self {
            Self::SideBySide => "row",
            Self::Stacked => "column",
        }
    }
}

/// Article typography colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleStyle {
    /// Paragraph, list and minor heading colour.
    pub text: &'static str,
    /// Link and section heading colour.
    pub link: String,
}

impl ArticleStyle {
    /// Typography for a theme.
    pub fn new(theme: ThemeState, accent: &str) -> Self {
        Self {
            text: if theme.is_dark_mode_enabled {
                "#ced4da"
            } else {
                "#41484f"
            },
            link: accent.to_string(),
        }
    }
}

/// Full stylesheet for one theme snapshot.
pub fn stylesheet(theme: ThemeState, accent: &str) -> String {
    let mut css = String::with_capacity(8 * 1024);
    base_css(&mut css, theme);
    header_css(&mut css, theme, accent);
    social_panel_css(&mut css, theme, accent);
    article_css(&mut css, theme, accent);
    toc_css(&mut css, accent);
    css
}

fn base_css(css: &mut String, theme: ThemeState) {
    let palette = Palette::for_theme(theme);
    let _ = write!(
        css,
        r#"html {{ scroll-behavior: smooth; }}
body {{
  margin: 0;
  background-color: {bg};
  color: {text};
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
  transition: background-color 150ms ease-in;
}}
"#,
        bg = palette.page_background,
        text = palette.text,
    );
}

fn header_css(css: &mut String, theme: ThemeState, accent: &str) {
    let palette = Palette::for_theme(theme);
    let _ = write!(
        css,
        r#".folio-header {{
  position: fixed;
  top: 0;
  right: 0;
  left: 0;
  z-index: 1;
  background-color: {bg};
  padding: 10px 50px;
  display: flex;
  flex-direction: row;
  justify-content: space-between;
  align-items: center;
  box-shadow: {shadow};
}}
.folio-nav {{
  display: flex;
  flex-direction: row;
  align-items: center;
}}
.folio-nav svg {{ margin: 0 0 0 12px; }}
.folio-nav-link {{
  margin: 5px 15px;
  transition: all 150ms ease-in;
  color: {link};
  font-size: 1.1rem;
  letter-spacing: 0.1rem;
  text-decoration: none;
  border-radius: 4px;
}}
.folio-nav-link:hover {{ color: {accent}; cursor: pointer; }}
.folio-nav-link.active {{ color: {accent}; font-weight: bolder; }}
.folio-theme-toggle {{
  background: none;
  border: none;
  cursor: pointer;
  color: {accent};
  padding: 0;
}}
@media only screen and {tablet} {{
  .folio-header {{ padding: 10px 15px; }}
}}
@media only screen and {mobile_large} {{
  .folio-nav-link {{ margin: 10px; }}
}}
@media only screen and {mobile_small} {{
  .folio-nav-link {{ margin: 10px; font-size: 1.1em; }}
}}
"#,
        bg = palette.header_background,
        shadow = palette.header_shadow,
        link = palette.nav_link,
        tablet = Breakpoint::Tablet.max_width(),
        mobile_large = Breakpoint::MobileLarge.max_width(),
        mobile_small = Breakpoint::MobileSmall.max_width(),
    );
}

fn social_panel_css(css: &mut String, theme: ThemeState, accent: &str) {
    let panel = SocialPanelStyle::new(theme, accent);
    let _ = write!(
        css,
        r#".folio-social-links {{
{vertical}}}
.folio-social-links > *:not(:first-child) {{ margin-top: 30px; }}
@media {laptop} {{
  .folio-social-links {{
{horizontal}    border-radius: 4px;
    border: {border};
    box-shadow: 10px 0 50px 0 rgba(0, 0, 0, 0.05);
    background-color: {bg};
    padding: 10px 10px 8px 10px;
    z-index: 1;
  }}
  .folio-social-links > * {{ margin: 0; margin-right: 20px; }}
  .folio-social-links > *:not(:first-child) {{ margin-top: 0; }}
  .folio-social-links > *:last-child {{ margin-top: 2px; margin-right: 0; }}
}}
"#,
        vertical = layout_declarations(SocialPanelLayout::Vertical, "  "),
        horizontal = layout_declarations(SocialPanelLayout::Horizontal, "    "),
        laptop = SocialPanelLayout::HORIZONTAL_FROM.min_width(),
        border = panel.border_css(),
        bg = panel.background,
    );
}

fn layout_declarations(layout: SocialPanelLayout, indent: &str) -> String {
    let declarations: &[&str] = match layout {
        SocialPanelLayout::Vertical => &[
            "display: flex;",
            "flex-direction: column;",
            "align-self: center;",
            "position: absolute;",
            "bottom: 40px;",
        ],
        SocialPanelLayout::Horizontal => &[
            "position: fixed;",
            "flex-direction: row;",
            "justify-content: center;",
            "align-items: center;",
            "bottom: unset;",
            "top: 10px;",
            "right: 10px;",
        ],
    };
    declarations
        .iter()
        .map(|d| format!("{indent}{d}\n"))
        .collect()
}

fn article_css(css: &mut String, theme: ThemeState, accent: &str) {
    let style = ArticleStyle::new(theme, accent);
    let _ = write!(
        css,
        r#".folio-article-wrapper {{
  display: flex;
  flex-direction: {side_by_side};
  padding-top: 4rem;
}}
.folio-article-title {{
  font-size: 3rem;
  margin-bottom: 3rem;
  text-align: left;
  width: 100%;
}}
.folio-article-meta {{ color: {text}; font-size: 0.9rem; margin-bottom: 2rem; }}
.folio-markdown-container {{
  min-width: 320px;
  max-width: 980px;
  padding: 2rem;
  margin: 2rem 2rem 4rem 2rem;
}}
.folio-markdown-container p,
.folio-markdown-container h2,
.folio-markdown-container h3,
.folio-markdown-container h4,
.folio-markdown-container h5,
.folio-markdown-container h6,
.folio-markdown-container li {{
  font-size: 1rem;
  line-height: 1.5rem;
  color: {text};
}}
.folio-markdown-container p {{ margin-bottom: 1rem; margin-top: 0; }}
.folio-markdown-container h2 {{
  color: {link};
  border-bottom: 0.5px solid #c5c3c1;
  margin-top: 3rem;
  margin-bottom: 1.5rem;
  padding-bottom: 0.5rem;
  font-weight: 700;
  font-size: 2rem;
  line-height: 2.5rem;
}}
.folio-markdown-container h3 {{ font-size: 1.5rem; margin-bottom: 1rem; margin-top: 3rem; }}
.folio-markdown-container h4 {{
  font-size: 1.25rem;
  border-bottom: 0.5px solid #c5c3c1;
  margin-top: 3rem;
  margin-bottom: 1rem;
  padding-bottom: 0.25rem;
}}
.folio-markdown-container a {{
  display: inline-block;
  color: {link};
  text-decoration: underline;
  text-underline-offset: 0.15rem;
  cursor: pointer;
}}
.folio-markdown-container ul,
.folio-markdown-container ol {{ padding-left: 2rem; margin-bottom: 1.5rem; margin-top: 0; }}
.folio-markdown-container li {{ line-height: 1.75rem; }}
.folio-markdown-container table {{
  border-spacing: 0;
  width: 100%;
  overflow-x: scroll;
  margin: 2rem 0;
  border: 1px solid #c5c3c1;
  border-radius: 8px;
}}
.folio-markdown-container th,
.folio-markdown-container td {{
  border-bottom: 1px solid #d6d9de;
  text-align: left;
  padding: 0.75rem;
  hyphens: auto;
  word-break: break-word;
}}
.folio-markdown-container tbody tr:last-child td {{ border-bottom: none; }}
@media only screen and {stacked_up_to} {{
  .folio-article-wrapper {{ flex-direction: {stacked}; }}
}}
@media only screen and {mobile_large} {{
  .folio-markdown-container {{ max-width: 100%; padding: 0; margin: 1rem; }}
}}
"#,
        text = style.text,
        link = style.link,
        side_by_side = ArticleLayout::SideBySide.flex_direction(),
        stacked = ArticleLayout::Stacked.flex_direction(),
        stacked_up_to = ArticleLayout::STACKED_UP_TO.max_width(),
        mobile_large = Breakpoint::MobileLarge.max_width(),
    );
}

fn toc_css(css: &mut String, accent: &str) {
    let _ = write!(
        css,
        r#".folio-toc {{
  margin-left: 1rem;
  width: 300px;
  margin-top: 4rem;
  padding-top: 2rem;
}}
.folio-toc-title {{ font-size: 0.95rem; text-transform: uppercase; }}
.folio-toc-list {{ list-style: none; padding-left: 0; }}
.folio-toc-list li {{ margin: 1rem 0; }}
.folio-toc-list li a {{
  color: {accent};
  text-decoration: underline;
  text-underline-offset: 0.15rem;
  cursor: pointer;
}}
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCENT: &str = "#f07167";

    #[test]
    fn test_social_panel_light_to_dark() {
        let light = SocialPanelStyle::new(ThemeState::LIGHT, ACCENT);
        assert_eq!(light.background, "#FFFFFF");
        assert_eq!(light.border, None);
        assert_eq!(light.border_css(), "none");

        let dark = SocialPanelStyle::new(ThemeState::LIGHT.toggled(), ACCENT);
        assert_eq!(dark.background, "#2d2d2d");
        assert_eq!(dark.border.as_deref(), Some("1px #f07167 solid"));
    }

    #[test]
    fn test_stylesheet_reflects_one_theme() {
        let light = stylesheet(ThemeState::LIGHT, ACCENT);
        assert!(light.contains("background-color: #FFFFFF"));
        assert!(light.contains("border: none"));
        assert!(!light.contains("#2d2d2d"));
        assert!(!light.contains("#ced4da"));

        let dark = stylesheet(ThemeState::DARK, ACCENT);
        assert!(dark.contains("background-color: #2d2d2d"));
        assert!(dark.contains("border: 1px #f07167 solid"));
        assert!(!dark.contains("#41484f"));
    }

    #[test]
    fn test_stylesheet_uses_breakpoints() {
        let css = stylesheet(ThemeState::LIGHT, ACCENT);
        assert!(css.contains("@media (min-width: 1024px)"));
        assert!(css.contains("@media only screen and (max-width: 768px)"));
        assert!(css.contains("@media only screen and (max-width: 425px)"));
    }

    #[test]
    fn test_article_typography_switches_wholesale() {
        let light = ArticleStyle::new(ThemeState::LIGHT, ACCENT);
        let dark = ArticleStyle::new(ThemeState::DARK, ACCENT);
        assert_eq!(light.text, "#41484f");
        assert_eq!(dark.text, "#ced4da");
        assert_eq!(light.link, dark.link);
    }

    #[test]
    fn test_social_panel_goes_horizontal_at_laptop() {
        let css = stylesheet(ThemeState::DARK, ACCENT);
        let wide = css
            .split_once("@media (min-width: 1024px) {")
            .map(|(_, rest)| rest)
            .unwrap();
        assert!(wide.contains("position: fixed;"));
        assert!(wide.contains("flex-direction: row;"));
        assert!(wide.contains("border: 1px #f07167 solid;"));
    }

    #[test]
    fn test_article_stacks_at_tablet_and_below() {
        let css = stylesheet(ThemeState::LIGHT, ACCENT);
        assert!(css.contains(".folio-article-wrapper {\n  display: flex;\n  flex-direction: row;"));
        assert!(css.contains(
            "@media only screen and (max-width: 768px) {\n  .folio-article-wrapper { flex-direction: column; }"
        ));
    }

    #[test]
    fn test_palette_for_theme() {
        assert_eq!(Palette::for_theme(ThemeState::LIGHT), Palette::LIGHT);
        assert_eq!(Palette::for_theme(ThemeState::DARK), Palette::DARK);
    }
}

//! Draws a [`Card`] with ANSI truecolor.

use colored::{ColoredString, Colorize};
use weathercard_core::{Card, Element, Hsl, Tag};

const FRAME_CHAR: &str = "━";

pub fn draw(card: &Card) -> String {
    if !card.visible {
        return String::new();
    }

    let mut out = String::from("\n");
    for element in &card.children {
        match element.tag {
            Tag::Heading => draw_heading(&mut out, element),
            Tag::Paragraph => {
                out.push_str(&format!("  {}\n", paragraph(element)));
            }
        }
    }
    out.push('\n');
    out
}

/// Stands in for the CSS `15px` border: one frame row above and below the heading.
fn draw_heading(out: &mut String, element: &Element) {
    let width = element.text.chars().count() + 4;
    let rule = FRAME_CHAR.repeat(width);
    let rule = with_css_color(rule.as_str().normal(), element.border.as_deref());

    let mut title = format!("  {}  ", element.text).as_str().bold();
    if let Some((r, g, b)) = element.background.as_deref().and_then(css_rgb) {
        title = title.on_truecolor(r, g, b).black();
    }

    out.push_str(&format!("{rule}\n{title}\n{rule}\n"));
}

fn paragraph(element: &Element) -> ColoredString {
    match element.class {
        "errorDisplay" => element.text.as_str().red().bold(),
        "descDisplay" => element.text.as_str().italic(),
        _ => element.text.as_str().normal(),
    }
}

fn with_css_color(text: ColoredString, css: Option<&str>) -> ColoredString {
    match css.and_then(css_rgb) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text,
    }
}

fn css_rgb(css: &str) -> Option<(u8, u8, u8)> {
    Hsl::parse_css(css).map(|hsl| hsl.to_rgb())
}

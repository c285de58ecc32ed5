use std::fmt::Write;

use crate::utils::escape_html;

use super::{CardView, Line, PICTURE_SIZE_PX};

pub fn render_card(card: &CardView) -> String {
    let mut html = String::from("<div class=\"card\">\n");
    let _ = writeln!(html, "  <h2>{}</h2>", escape_html(&card.heading));

    if let Some(url) = &card.picture {
        let _ = writeln!(
            html,
            "  <img src=\"{}\" alt=\"Profile Photo\" style=\"width: {px}px; height: {px}px; \
             border-radius: 50%; margin-bottom: 15px;\">",
            escape_html(url),
            px = PICTURE_SIZE_PX
        );
    }

    for line in &card.lines {
        let _ = writeln!(html, "  {}", render_line(line));
    }

    html.push_str("</div>");
    html
}

fn render_line(line: &Line) -> String {
    match line {
        Line::Text { label, value } => {
            format!("<p><strong>{label}:</strong> {}</p>", escape_html(value))
        }
        Line::Link { label, href, text } => format!(
            "<p><strong>{label}:</strong> <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{text}</a></p>",
            escape_html(href)
        ),
        Line::Count { label, count, unit } => {
            format!("<p><strong>{label}:</strong> {count} {unit}</p>")
        }
    }
}

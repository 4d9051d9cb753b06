//! Shared HTML building blocks and value formatting for notification emails

use chrono::NaiveDate;
use std::borrow::Cow;

pub const TAGLINE: &str = "LancePay - Get paid globally, withdraw locally";

/// Greeting name used when the recipient's name is unknown
pub const DEFAULT_NAME: &str = "there";

const CONTAINER_STYLE: &str =
    "font-family: system-ui, sans-serif; max-width: 500px; margin: 0 auto; padding: 24px;";
const BANNER_STYLE: &str = "background: #10b981; color: white; padding: 24px; border-radius: 12px; text-align: center; margin: 20px 0;";
const BANNER_AMOUNT_STYLE: &str = "font-size: 32px; font-weight: bold;";
const BUTTON_STYLE: &str = "display: inline-block; background: #10b981; color: white; padding: 12px 24px; border-radius: 8px; text-decoration: none;";
const MESSAGE_BOX_STYLE: &str = "background: #f3f4f6; padding: 16px; border-radius: 8px; margin: 16px 0;";
const MUTED_STYLE: &str = "color: #666;";
const FOOTER_STYLE: &str = "color: #666; font-size: 12px;";
const SPACED_FOOTER_STYLE: &str = "color: #666; font-size: 12px; margin-top: 20px;";

/// Escape text for use in HTML content and double-quoted attributes
pub fn escape_html(input: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(input)
}

/// `$` followed by the amount with exactly two decimals
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Calendar date in the en-US short form, e.g. `3/5/2026`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Treat empty strings the same as missing values
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// The name to greet, falling back to [`DEFAULT_NAME`]
pub fn display_name(name: &Option<String>) -> &str {
    present(name).unwrap_or(DEFAULT_NAME)
}

/// Incremental builder for the common email layout.
///
/// Methods taking `text` escape it; methods taking `html` insert it as is.
pub struct HtmlBody {
    html: String,
}

impl HtmlBody {
    pub fn new() -> Self {
        Self {
            html: format!("<div style=\"{}\">\n", CONTAINER_STYLE),
        }
    }

    fn line(mut self, html: &str) -> Self {
        self.html.push_str("  ");
        self.html.push_str(html);
        self.html.push('\n');
        self
    }

    pub fn heading(self, text: &str) -> Self {
        self.line(&format!("<h2>{}</h2>", escape_html(text)))
    }

    pub fn heading_dark(self, text: &str) -> Self {
        self.line(&format!("<h2 style=\"color: #111;\">{}</h2>", escape_html(text)))
    }

    /// `Hi {name},` with the default name when absent
    pub fn greeting(self, name: &str) -> Self {
        self.line(&format!("<p>Hi {},</p>", escape_html(name)))
    }

    pub fn paragraph_html(self, html: &str) -> Self {
        self.line(&format!("<p>{}</p>", html))
    }

    /// Sentence with a bold invoice number, e.g. `... for invoice <strong>INV-1</strong>.`
    pub fn invoice_sentence(self, lead: &str, invoice_number: &str, tail: &str) -> Self {
        self.paragraph_html(&format!(
            "{} <strong>{}</strong>{}",
            escape_html(lead),
            escape_html(invoice_number),
            escape_html(tail)
        ))
    }

    /// `<p><strong>{label}:</strong> {value}</p>`
    pub fn field(self, label: &str, value: &str) -> Self {
        self.line(&format!(
            "<p><strong>{}:</strong> {}</p>",
            escape_html(label),
            escape_html(value)
        ))
    }

    /// Same as [`HtmlBody::field`], omitted when the value is absent
    pub fn optional_field(self, label: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.field(label, value),
            None => self,
        }
    }

    pub fn muted(self, text: &str) -> Self {
        self.line(&format!("<p style=\"{}\">{}</p>", MUTED_STYLE, escape_html(text)))
    }

    /// Large green block showing an amount over its currency label
    pub fn amount_banner(self, amount: f64, currency: &str) -> Self {
        self.line(&format!("<div style=\"{}\">", BANNER_STYLE))
            .line(&format!(
                "  <div style=\"{}\">{}</div>",
                BANNER_AMOUNT_STYLE,
                format_money(amount)
            ))
            .line(&format!("  <div>{}</div>", escape_html(currency)))
            .line("</div>")
    }

    pub fn button(self, href: &str, label: &str) -> Self {
        self.line(&format!(
            "<a href=\"{}\" style=\"{}\">{}</a>",
            escape_html(href),
            BUTTON_STYLE,
            escape_html(label)
        ))
    }

    /// Shaded box used for quoted user messages
    pub fn message_box(self, text: &str) -> Self {
        self.line(&format!("<div style=\"{}\">", MESSAGE_BOX_STYLE))
            .line(&format!("  <p style=\"margin: 0;\">{}</p>", escape_html(text)))
            .line("</div>")
    }

    /// Append the footer and close the container
    pub fn finish(self) -> String {
        self.finish_with(FOOTER_STYLE)
    }

    /// Like [`HtmlBody::finish`], with extra space above the footer.
    /// Used after a button or amount banner.
    pub fn finish_spaced(self) -> String {
        self.finish_with(SPACED_FOOTER_STYLE)
    }

    fn finish_with(self, footer_style: &str) -> String {
        let mut body = self.line(&format!("<p style=\"{}\">{}</p>", footer_style, TAGLINE));
        body.html.push_str("</div>\n");
        body.html
    }
}

impl Default for HtmlBody {
    fn default() -> Self {
        Self::new()
    }
}

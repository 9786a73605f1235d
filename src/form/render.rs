//! HTML rendering of forms and their messages.

use std::collections::BTreeMap;
use std::fmt::Write;

use super::{FieldKind, FormDefinition, FormErrors};
use crate::services::Message;

/// Everything shown on one form page.
pub struct Page<'a> {
    pub title: &'a str,
    pub action: &'a str,
    pub form: &'a FormDefinition,
    pub messages: &'a [Message],
    pub errors: &'a FormErrors,
    /// Values to refill text fields with, keyed by field name.
    pub values: BTreeMap<&'a str, &'a str>,
}

impl Page<'_> {
    pub fn render(&self) -> String {
        let mut html = String::new();
        let _ = write!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n",
            escape_html(self.title)
        );

        for message in self.messages {
            let _ = writeln!(
                html,
                "<div class=\"messages messages--{}\" role=\"status\">{}</div>",
                message.kind.as_str(),
                escape_html(&message.text)
            );
        }

        let _ = writeln!(
            html,
            "<form id=\"{}\" method=\"post\" action=\"{}\" accept-charset=\"UTF-8\">",
            escape_html(&self.form.id.replace('_', "-")),
            escape_html(self.action)
        );
        let _ = writeln!(
            html,
            "<input type=\"hidden\" name=\"form_id\" value=\"{}\">",
            escape_html(&self.form.id)
        );

        for field in &self.form.fields {
            match field.kind {
                FieldKind::Textfield => self.render_textfield(&mut html, field),
                FieldKind::Submit => {
                    let _ = writeln!(
                        html,
                        "<input type=\"submit\" name=\"op\" value=\"{}\">",
                        escape_html(&field.label)
                    );
                }
            }
        }

        html.push_str("</form>\n</body>\n</html>\n");
        html
    }

    fn render_textfield(&self, html: &mut String, field: &super::Field) {
        let id = format!("edit-{}", field.name.replace('_', "-"));
        let error = self.errors.get(&field.name);
        let value = self.values.get(field.name.as_str()).copied().unwrap_or("");

        let _ = writeln!(html, "<div class=\"form-item\">");
        let _ = write!(
            html,
            "<label for=\"{}\">{}</label>",
            id,
            escape_html(&field.label)
        );
        let _ = write!(
            html,
            "<input type=\"text\" id=\"{}\" name=\"{}\" value=\"{}\"",
            id,
            escape_html(&field.name),
            escape_html(value)
        );
        if field.required {
            html.push_str(" required=\"required\"");
        }
        if error.is_some() {
            html.push_str(" class=\"error\" aria-invalid=\"true\"");
        }
        html.push_str(">\n");
        if let Some(error) = error {
            let _ = writeln!(
                html,
                "<div class=\"form-item--error-message\">{}</div>",
                escape_html(error)
            );
        }
        html.push_str("</div>\n");
    }
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

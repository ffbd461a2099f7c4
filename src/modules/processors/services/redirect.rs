use actix_web::{http::header, HttpResponse};
use tracing::debug;

use crate::core::Result;
use crate::modules::processors::models::{FieldMap, ACTION_KEY};

/// Escape text for use inside HTML element content and quoted attributes
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn hidden_field(name: &str, value: &str) -> String {
    format!(
        "<input type='hidden' name='{}' value='{}'/>",
        escape_html(name),
        escape_html(value)
    )
}

/// Render the self-submitting form that carries `fields` to the processor.
///
/// `payee_action` becomes the form target and is not rendered as a field.
pub fn render_redirect_form(mut fields: FieldMap) -> Result<String> {
    let action = escape_html(&fields.take_required(ACTION_KEY)?);

    let inputs = fields
        .iter()
        .map(|(name, value)| hidden_field(name, value))
        .collect::<Vec<_>>()
        .join("\n");

    Ok(format!(
        "<html><head><meta charset='utf-8' /></head>\n\
         <body onload='document.forms[0].submit()'>\n\
         <p>Redirecting...</p>\n\
         <form method='post' action='{}'>\n\
         {}\n\
         </form></body></html>",
        action, inputs
    ))
}

/// HTML response that forwards the browser to the processor
pub fn redirect_to_processor(fields: FieldMap) -> Result<HttpResponse> {
    let field_count = fields.len();
    let body = render_redirect_form(fields)?;

    debug!(field_count, "Rendered processor redirect form");

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .body(body))
}

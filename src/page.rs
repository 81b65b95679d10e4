//! HTML rendering of the address form.
//!
//! The page is a pure function of the last [`ActionResponse`]: inputs are
//! refilled from its echoed values, fields with an error get an inline
//! message, and a non-empty message becomes a banner.

use std::fmt::Write as _;

use crate::action::ActionResponse;
use crate::address::Field;
use crate::validation::ZIP_CODE_MIN_LEN;

struct InputAttrs {
    label: &'static str,
    placeholder: &'static str,
    autocomplete: &'static str,
}

fn input_attrs(field: Field) -> InputAttrs {
    let (label, placeholder, autocomplete) = match field {
        Field::StreetAddress => ("Street Address", "123 Main St", "street-address"),
        Field::Apartment     => ("Apartment/Suite (Optional)", "Apt 4B", "address-line2"),
        Field::City          => ("City", "New York", "address-level2"),
        Field::State         => ("State", "NY", "address-level1"),
        Field::ZipCode       => ("ZIP Code", "10001", "postal-code"),
        Field::Country       => ("Country", "United States", "country-name"),
    };
    InputAttrs { label, placeholder, autocomplete }
}

/// Fields laid out side by side share a row.
const ROWS: [&[Field]; 4] = [
    &[Field::StreetAddress],
    &[Field::Apartment],
    &[Field::City, Field::State],
    &[Field::ZipCode, Field::Country],
];

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;display:flex;align-items:center;justify-content:center;min-height:100vh;margin:0;background:#f4f4f5}\
.card{background:#fff;border:1px solid #e4e4e7;border-radius:8px;padding:24px;width:100%;max-width:32rem}\
.card p.description{color:#71717a;margin-top:0}\
.row{display:grid;grid-template-columns:repeat(auto-fit,minmax(0,1fr));gap:16px;margin-bottom:16px}\
label{display:block;font-weight:500;margin-bottom:4px}\
input{width:100%;box-sizing:border-box;padding:8px;border:1px solid #d4d4d8;border-radius:6px}\
input.error{border-color:#ef4444}\
p.field-error{color:#ef4444;font-size:.875rem;margin:4px 0 0}\
.alert{border-radius:6px;padding:12px;margin-bottom:16px;border:1px solid #d4d4d8}\
.alert.destructive{border-color:#ef4444;color:#b91c1c}\
button{width:100%;padding:10px;border:0;border-radius:6px;background:#18181b;color:#fff;font-weight:500}\
button:disabled{opacity:.6}";

const PENDING_SCRIPT: &str = "\
document.getElementById('address-form').addEventListener('submit',function(){\
var b=this.querySelector('button[type=submit]');b.disabled=true;b.textContent='Saving...';});";

/// Renders the full page for `state`.
pub fn render(state: &ActionResponse) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Address Information</title>\n");
    let _ = writeln!(html, "<style>{STYLE}</style>");
    html.push_str("</head>\n<body>\n<main class=\"card\">\n");
    html.push_str("<h1>Address Information</h1>\n");
    html.push_str(
        "<p class=\"description\">Please enter your shipping address details below.</p>\n",
    );
    html.push_str("<form id=\"address-form\" method=\"post\" action=\"/\" autocomplete=\"on\">\n");

    for row in ROWS {
        html.push_str("<div class=\"row\">\n");
        for &field in row {
            render_field(&mut html, field, state);
        }
        html.push_str("</div>\n");
    }

    render_banner(&mut html, state);

    html.push_str("<button type=\"submit\">Save Address</button>\n</form>\n</main>\n");
    let _ = writeln!(html, "<script>{PENDING_SCRIPT}</script>");
    html.push_str("</body>\n</html>\n");
    html
}

fn render_field(html: &mut String, field: Field, state: &ActionResponse) {
    let attrs_of = input_attrs(field);
    let name = field.name();
    let value = state.inputs.as_ref().and_then(|i| i.get(field)).unwrap_or_default();
    let error = state.errors.as_ref().and_then(|e| e.get(&field));

    let mut attrs = String::new();
    if field.is_required() {
        attrs.push_str(" required");
    }
    if field == Field::ZipCode {
        let _ = write!(attrs, " minlength=\"{ZIP_CODE_MIN_LEN}\"");
    }
    if error.is_some() {
        attrs.push_str(" class=\"error\" aria-invalid=\"true\"");
    }

    html.push_str("<div>\n");
    let _ = writeln!(html, "<label for=\"{name}\">{}</label>", attrs_of.label);
    let _ = writeln!(
        html,
        "<input id=\"{name}\" name=\"{name}\" type=\"text\" value=\"{}\" placeholder=\"{}\" \
         autocomplete=\"{}\" aria-describedby=\"{name}-error\"{attrs}>",
        escape(value),
        attrs_of.placeholder,
        attrs_of.autocomplete,
    );
    if let Some(message) = error {
        let _ = writeln!(
            html,
            "<p id=\"{name}-error\" class=\"field-error\">{}</p>",
            escape(message),
        );
    }
    html.push_str("</div>\n");
}

fn render_banner(html: &mut String, state: &ActionResponse) {
    if state.message.is_empty() {
        return;
    }
    let message = escape(&state.message);
    if state.success {
        let _ = writeln!(
            html,
            "<div class=\"alert\" role=\"status\"><span aria-hidden=\"true\">&#10003;</span> {message}</div>",
        );
    } else {
        let _ = writeln!(html, "<div class=\"alert destructive\" role=\"alert\">{message}</div>");
    }
}

/// Escapes text for use in element content and double-quoted attributes.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '"'  => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _    => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::FormData;
    use crate::validation::FieldErrors;

    #[test]
    fn initial_page_has_empty_inputs_and_no_banner() {
        let html = render(&ActionResponse::initial());

        for field in Field::ALL {
            assert!(html.contains(&format!("id=\"{field}\" name=\"{field}\" type=\"text\" value=\"\"")));
        }
        assert!(html.contains("<h1>Address Information</h1>"));
        assert!(html.contains("<button type=\"submit\">Save Address</button>"));
        assert!(!html.contains("role=\"alert\""));
        assert!(!html.contains("role=\"status\""));
        assert!(!html.contains("class=\"field-error\""));
    }

    #[test]
    fn failed_submission_refills_inputs_and_shows_errors() {
        let state = ActionResponse::invalid(
            FieldErrors::from([(Field::ZipCode, "ZIP code must be at least 5 characters".to_owned())]),
            FormData::default()
                .with(Field::City, "New York")
                .with(Field::ZipCode, "123"),
        );
        let html = render(&state);

        assert!(html.contains("value=\"New York\""));
        assert!(html.contains("value=\"123\""));
        assert!(html.contains(
            "<p id=\"zipCode-error\" class=\"field-error\">ZIP code must be at least 5 characters</p>"
        ));
        assert!(!html.contains("id=\"city-error\""));
        assert!(html.contains("<div class=\"alert destructive\" role=\"alert\">Please fix the errors in form</div>"));
    }

    #[test]
    fn success_resets_the_form() {
        let html = render(&ActionResponse::saved());

        assert!(html.contains("role=\"status\""));
        assert!(html.contains("Address saved successfully!"));
        assert!(!html.contains("value=\"New York\""));
    }

    #[test]
    fn echoed_values_are_escaped() {
        let state = ActionResponse::invalid(
            FieldErrors::new(),
            FormData::default().with(Field::StreetAddress, "\"><script>alert(1)</script>"),
        );
        let html = render(&state);

        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;\""));
    }

    #[test]
    fn only_apartment_is_not_required() {
        let html = render(&ActionResponse::initial());
        assert!(html.contains("autocomplete=\"address-line2\" aria-describedby=\"apartment-error\">"));
        assert!(html.contains("aria-describedby=\"zipCode-error\" required minlength=\"5\">"));
    }
}

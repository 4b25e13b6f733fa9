use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, FormData, HtmlFormElement};
use yew::prelude::*;

use crate::config;
use crate::dom::{self, Listener};

/// What a visitor typed into the contact form. Missing fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Inquiry {
    pub fn from_form(form: &HtmlFormElement) -> Result<Self, JsValue> {
        let data = FormData::new_with_form(form)?;
        let field = |key: &str| data.get(key).as_string().unwrap_or_default();
        Ok(Self {
            name: field("name"),
            company: field("company"),
            email: field("email"),
            phone: field("phone"),
            message: field("message"),
        })
    }

    pub fn subject(&self) -> String {
        if self.company.is_empty() {
            format!("{} — {}", config::INQUIRY_SUBJECT_PREFIX, self.name)
        } else {
            format!(
                "{} — {} ({})",
                config::INQUIRY_SUBJECT_PREFIX,
                self.name,
                self.company
            )
        }
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nCompany: {}\nEmail: {}\nPhone: {}\n\nRequirements:\n{}\n",
            self.name, self.company, self.email, self.phone, self.message
        )
    }

    /// Draft addressed to `recipient`, subject and body percent-encoded.
    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_component(&self.subject()),
            encode_component(&self.body())
        )
    }
}

/// Characters a browser's `encodeURIComponent` leaves as they are but
/// `urlencoding` escapes.
const KEPT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encodes `raw` the same way `encodeURIComponent` does.
pub fn encode_component(raw: &str) -> String {
    // Every '%' in the output starts an escape, so a match is always a whole escape.
    KEPT_MARKS
        .into_iter()
        .fold(urlencoding::encode(raw).into_owned(), |out, (escaped, mark)| {
            out.replace(escaped, mark)
        })
}

#[hook]
pub fn use_contact_form() {
    use_effect_with_deps(
        move |_| {
            let listener = dom::bound("contact form", bind());
            move || drop(listener)
        },
        (),
    );
}

fn bind() -> Result<Option<Listener>, JsValue> {
    let Some(form) = dom::query("#contactForm").and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(None);
    };

    let target = form.clone();
    let listener = Listener::new(&form, "submit", move |e| {
        e.prevent_default();
        // Delivery is left to the visitor's mail client.
        let sent = Inquiry::from_form(&target).and_then(|inquiry| {
            let Some(window) = window() else {
                return Ok(());
            };
            window
                .location()
                .set_href(&inquiry.mailto(config::INQUIRY_RECIPIENT))
        });
        if let Err(err) = sent {
            log::warn!("contact form redirect failed: {:?}", err);
        }
    })?;
    Ok(Some(listener))
}

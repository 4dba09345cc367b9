//! Contact form controller for `#contactForm`.

use portfolio_core::form::{INVALID_SUMMARY, SENDING_LABEL};
use portfolio_core::{
    FieldError, FieldKind, FormField, Rejection, RelayErrorBody, SiteConfig, SubmitOutcome,
    Submission, Timings, is_valid_email, prepare_submission,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Element, Event, FormData, Headers, HtmlButtonElement, HtmlFormElement,
    HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Request, RequestInit, Response,
};

use crate::dom;
use crate::error::WebError;

const CONTROLS: &str = "input[name], textarea[name], select[name]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "form-message form-message--success",
            Self::Error => "form-message form-message--error",
        }
    }
}

fn control_value(el: &Element) -> String {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn to_field(el: &Element) -> Option<FormField> {
    let name = el.get_attribute("name")?;
    let input_type = el.get_attribute("type").unwrap_or_default();
    if matches!(input_type.as_str(), "submit" | "button" | "reset") {
        return None;
    }
    if matches!(input_type.as_str(), "checkbox" | "radio")
        && !el
            .dyn_ref::<HtmlInputElement>()
            .is_some_and(HtmlInputElement::checked)
    {
        return None;
    }
    let mut field = FormField::new(
        name,
        FieldKind::from_control(&el.tag_name(), &input_type),
        control_value(el),
    );
    field.required = el.has_attribute("required");
    Some(field)
}

fn collect_fields(form: &Element) -> Vec<(Element, FormField)> {
    dom::query_all_in(form, CONTROLS)
        .into_iter()
        .filter_map(|el| to_field(&el).map(|field| (el, field)))
        .collect()
}

fn show_field_error(field: &Element, error: &FieldError) {
    let _ = field.class_list().add_1("error");
    let Some(parent) = field.parent_element() else {
        return;
    };
    let span = dom::query(&parent, ".error-message").or_else(|| {
        let span = dom::document()?.create_element("span").ok()?;
        span.set_class_name("error-message");
        parent.append_child(&span).ok()?;
        Some(span)
    });
    if let Some(span) = span {
        span.set_text_content(Some(&error.to_string()));
    }
}

fn clear_field_error(field: &Element) {
    let _ = field.class_list().remove_1("error");
    if let Some(span) = field
        .parent_element()
        .and_then(|parent| dom::query(&parent, ".error-message"))
    {
        span.remove();
    }
}

/// Float a toast at the bottom of the page, replacing any current one.
pub fn show_toast(kind: ToastKind, message: &str, timings: Timings) {
    let Some(doc) = dom::document() else {
        return;
    };
    let fade = timings.toast_fade_ms;
    if let Ok(Some(existing)) = doc.query_selector(".form-message") {
        let _ = existing.class_list().add_1("fade-out");
        dom::set_timeout(fade, move || existing.remove());
    }
    let Ok(toast) = doc.create_element("div") else {
        return;
    };
    toast.set_class_name(kind.class());
    let _ = toast.set_attribute("role", if kind == ToastKind::Error { "alert" } else { "status" });
    toast.set_text_content(Some(message));
    if let Some(body) = doc.body()
        && body.append_child(&toast).is_ok()
    {
        dom::set_timeout(timings.toast_lifetime_ms, move || {
            let _ = toast.class_list().add_1("fade-out");
            dom::set_timeout(fade, move || {
                if toast.parent_element().is_some() {
                    toast.remove();
                }
            });
        });
    }
}

/// Add the off-screen honeypot input when the markup does not carry one.
fn ensure_honeypot(form: &Element, name: &str) -> Result<(), WebError> {
    if dom::query(form, &format!("input[name=\"{name}\"]")).is_some() {
        return Ok(());
    }
    let doc = dom::document().ok_or(WebError::Unavailable("document"))?;
    let input = doc
        .create_element("input")
        .map_err(|e| WebError::js(&e))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|e| WebError::js(&e))?;
    input.set_type("text");
    input.set_name(name);
    input.set_tab_index(-1);
    input.set_autocomplete("off");
    let _ = input.set_attribute("aria-hidden", "true");
    let _ = input
        .style()
        .set_css_text("position:absolute;left:-9999px;top:-9999px;");
    form.append_child(&input).map_err(|e| WebError::js(&e))?;
    log::debug!("added honeypot field `{name}`");
    Ok(())
}

fn form_data(submission: &Submission) -> Result<FormData, WebError> {
    let data = FormData::new().map_err(|e| WebError::js(&e))?;
    for (name, value) in &submission.fields {
        data.append_with_str(name, value)
            .map_err(|e| WebError::js(&e))?;
    }
    Ok(data)
}

/// Build the relay POST: form-encoded body, JSON answers preferred.
///
/// # Errors
/// Returns an error when the browser rejects the request parts.
pub fn build_request(endpoint: &str, submission: &Submission) -> Result<Request, WebError> {
    let headers = Headers::new().map_err(|e| WebError::js(&e))?;
    headers
        .set("Accept", "application/json")
        .map_err(|e| WebError::js(&e))?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&form_data(submission)?.into());
    Request::new_with_str_and_init(endpoint, &init).map_err(|e| WebError::js(&e))
}

/// Map a relay response onto an outcome, joining any error messages it sent.
#[allow(clippy::future_not_send)]
pub async fn classify_response(response: &Response) -> SubmitOutcome {
    if response.ok() {
        return SubmitOutcome::Sent;
    }
    let body = dom::response_body(response)
        .await
        .ok()
        .and_then(|text| serde_json::from_str::<RelayErrorBody>(&text).ok())
        .unwrap_or_default();
    log::warn!("form relay answered HTTP {}", response.status());
    SubmitOutcome::Relay(body.joined())
}

#[allow(clippy::future_not_send)]
async fn post(endpoint: &str, submission: &Submission) -> Result<Response, WebError> {
    let win = dom::window().ok_or(WebError::Unavailable("window"))?;
    let request = build_request(endpoint, submission)?;
    let value = JsFuture::from(win.fetch_with_request(&request))
        .await
        .map_err(|e| WebError::js(&e))?;
    value.dyn_into::<Response>().map_err(|e| WebError::js(&e))
}

/// Send the submission and classify what the relay said.
#[allow(clippy::future_not_send)]
pub async fn submit(endpoint: &str, submission: &Submission) -> SubmitOutcome {
    match post(endpoint, submission).await {
        Ok(response) => classify_response(&response).await,
        Err(err) => {
            log::error!("form submission failed: {err}");
            SubmitOutcome::Network
        }
    }
}

/// The submit button while a request is in flight.
struct BusyButton {
    button: HtmlButtonElement,
    label: String,
}

impl BusyButton {
    fn begin(form: &Element) -> Option<Self> {
        let button = dom::query(form, ".btn-primary")?
            .dyn_into::<HtmlButtonElement>()
            .ok()?;
        let label = button.text_content().unwrap_or_default();
        button.set_disabled(true);
        button.set_text_content(Some(SENDING_LABEL));
        Some(Self { button, label })
    }

    fn restore(self) {
        self.button.set_disabled(false);
        self.button.set_text_content(Some(&self.label));
    }
}

fn handle_submit(form: &HtmlFormElement, config: &SiteConfig) {
    let fields = collect_fields(form);
    for (el, _) in &fields {
        clear_field_error(el);
    }
    let plain: Vec<FormField> = fields.iter().map(|(_, f)| f.clone()).collect();

    let submission = match prepare_submission(&plain, &config.honeypot_field) {
        Ok(submission) => submission,
        Err(Rejection::Invalid(report)) => {
            for (el, field) in &fields {
                if let Some(err) = report.error_for(&field.name) {
                    show_field_error(el, err);
                }
            }
            show_toast(ToastKind::Error, INVALID_SUMMARY, config.timings);
            return;
        }
        Err(rejection @ Rejection::Spam) => {
            show_toast(ToastKind::Error, rejection.message(), config.timings);
            return;
        }
    };

    let busy = BusyButton::begin(form);
    let form = form.clone();
    let endpoint = crate::paths::site_path(&config.form_endpoint);
    let timings = config.timings;
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = submit(&endpoint, &submission).await;
        if outcome.is_success() {
            form.reset();
            show_toast(ToastKind::Success, &outcome.message(), timings);
        } else {
            show_toast(ToastKind::Error, &outcome.message(), timings);
        }
        if let Some(busy) = busy {
            busy.restore();
        }
    });
}

fn wire_live_feedback(form: &Element, honeypot: &str) -> Result<(), WebError> {
    let inputs = dom::query_all_in(form, "input[required], textarea[required]");
    for input in inputs {
        if input.get_attribute("name").as_deref() == Some(honeypot) {
            continue;
        }
        let on_blur = {
            let input = input.clone();
            Closure::wrap(Box::new(move || {
                let value = control_value(&input);
                if value.trim().is_empty() {
                    return;
                }
                clear_field_error(&input);
                let is_email = input.get_attribute("type").as_deref() == Some("email");
                if is_email && !is_valid_email(value.trim()) {
                    show_field_error(&input, &FieldError::InvalidEmail);
                }
            }) as Box<dyn FnMut()>)
        };
        input
            .add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())
            .map_err(|e| WebError::js(&e))?;
        on_blur.forget();

        let on_input = {
            let input = input.clone();
            Closure::wrap(Box::new(move || {
                if input.class_list().contains("error") && !control_value(&input).trim().is_empty()
                {
                    clear_field_error(&input);
                }
            }) as Box<dyn FnMut()>)
        };
        input
            .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())
            .map_err(|e| WebError::js(&e))?;
        on_input.forget();
    }
    Ok(())
}

/// Take over submission of `#contactForm`.
///
/// # Errors
/// Returns [`WebError::MissingElement`] when the page has no contact form.
pub fn wire_contact_form(config: &SiteConfig) -> Result<(), WebError> {
    let form = dom::require_id("contactForm")?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| WebError::MissingElement("contactForm"))?;
    ensure_honeypot(&form, &config.honeypot_field)?;
    wire_live_feedback(&form, &config.honeypot_field)?;

    let on_submit = {
        let form = form.clone();
        let config = config.clone();
        Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            handle_submit(&form, &config);
        }) as Box<dyn FnMut(Event)>)
    };
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(|e| WebError::js(&e))?;
    on_submit.forget();
    log::debug!("contact form wired");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_classes() {
        assert_eq!(ToastKind::Success.class(), "form-message form-message--success");
        assert_eq!(ToastKind::Error.class(), "form-message form-message--error");
    }
}

use portfolio_core::form::{GENERIC_FAILURE, SENDING_LABEL};
use portfolio_core::{SiteConfig, SubmitOutcome, Submission};
use portfolio_web::{dom, form};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Event, EventInit, HtmlButtonElement, HtmlInputElement, HtmlTextAreaElement, Response,
    ResponseInit,
};

const FORM: &str = r#"
<form id="contactForm" novalidate>
    <div class="form-group"><input name="name" type="text" required></div>
    <div class="form-group"><input name="email" type="email" required></div>
    <div class="form-group"><textarea name="message" required></textarea></div>
    <button type="submit" class="btn-primary">Send</button>
</form>"#;

fn submit() {
    let form = dom::require_id("contactForm").expect("form");
    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).expect("event");
    form.dispatch_event(&event).expect("dispatch");
}

fn set_input(selector: &str, value: &str) {
    let el = dom::document()
        .and_then(|doc| doc.query_selector(selector).ok().flatten())
        .expect("control");
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

#[wasm_bindgen_test]
fn invalid_submissions_show_field_errors() {
    crate::mount_point("form-host").set_inner_html(FORM);
    form::wire_contact_form(&SiteConfig::default()).expect("wired");

    assert!(dom::document()
        .and_then(|doc| doc.query_selector("input[name=\"honeypot\"]").ok().flatten())
        .is_some());

    submit();
    assert_eq!(dom::query_all(".error-message").len(), 3);
    assert!(!dom::query_all(".form-message--error").is_empty());

    set_input("input[name=\"name\"]", "Ada");
    set_input("input[name=\"email\"]", "ada@example.com");
    set_input("textarea[name=\"message\"]", "too short");
    submit();
    let errors = dom::query_all(".error-message");
    assert_eq!(errors.len(), 1);
    assert!(errors[0]
        .text_content()
        .unwrap_or_default()
        .contains("10"));
}

fn fill_valid() {
    set_input("input[name=\"name\"]", "Ada");
    set_input("input[name=\"email\"]", "ada@example.com");
    set_input("textarea[name=\"message\"]", "Hello there, about your work.");
}

fn button() -> HtmlButtonElement {
    dom::document()
        .and_then(|doc| doc.query_selector("#contactForm .btn-primary").ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        .expect("submit button")
}

fn clear_toasts() {
    for toast in dom::query_all(".form-message") {
        toast.remove();
    }
}

fn error_toast_text() -> Option<String> {
    dom::query_all(".form-message--error")
        .last()
        .and_then(|toast| toast.text_content())
}

fn response(status: u16, body: &str) -> Response {
    let init = ResponseInit::new();
    init.set_status(status);
    Response::new_with_opt_str_and_init(Some(body), &init).expect("response")
}

#[wasm_bindgen_test]
fn relay_request_is_a_post_accepting_json() {
    let submission = Submission {
        fields: vec![("name".into(), "Ada".into()), ("email".into(), "ada@example.com".into())],
    };
    let request = form::build_request("https://relay.example/f/abc", &submission).expect("request");
    assert_eq!(request.method(), "POST");
    assert_eq!(request.url(), "https://relay.example/f/abc");
    assert_eq!(
        request.headers().get("Accept").ok().flatten().as_deref(),
        Some("application/json")
    );
}

#[wasm_bindgen_test]
async fn relay_responses_map_to_outcomes() {
    assert_eq!(form::classify_response(&response(200, "{}")).await, SubmitOutcome::Sent);

    let errors = r#"{"errors":[{"message":"email is invalid"},{"message":"slow down"}]}"#;
    assert_eq!(
        form::classify_response(&response(422, errors)).await,
        SubmitOutcome::Relay(Some("email is invalid, slow down".into()))
    );
    assert_eq!(
        form::classify_response(&response(500, "<html>oops</html>")).await,
        SubmitOutcome::Relay(None)
    );
}

#[wasm_bindgen_test]
async fn filled_honeypot_is_dropped_with_a_generic_error() {
    crate::mount_point("form-host").set_inner_html(FORM);
    form::wire_contact_form(&SiteConfig::default()).expect("wired");
    clear_toasts();

    fill_valid();
    set_input("input[name=\"honeypot\"]", "https://spam.example");
    submit();

    // Never reaches the network: the button is left alone.
    let button = button();
    assert!(!button.disabled());
    assert_eq!(button.text_content().unwrap_or_default(), "Send");
    assert_eq!(error_toast_text().as_deref(), Some(GENERIC_FAILURE));
    assert!(dom::query_all(".error-message").is_empty());
}

#[wasm_bindgen_test]
async fn failed_relay_restores_the_button() {
    crate::mount_point("form-host").set_inner_html(FORM);
    let config = SiteConfig {
        form_endpoint: "/no-such-relay".to_string(),
        ..SiteConfig::default()
    };
    form::wire_contact_form(&config).expect("wired");
    clear_toasts();

    fill_valid();
    submit();
    let button = button();
    assert!(button.disabled());
    assert_eq!(button.text_content().unwrap_or_default(), SENDING_LABEL);

    for _ in 0..50 {
        if !button.disabled() {
            break;
        }
        dom::sleep_ms(50).await.expect("sleep");
    }
    assert!(!button.disabled());
    assert_eq!(button.text_content().unwrap_or_default(), "Send");
    assert_eq!(error_toast_text().as_deref(), Some(GENERIC_FAILURE));
}

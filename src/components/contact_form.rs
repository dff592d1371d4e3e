use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::{self, ContactError, ContactForm, FieldErrors};

#[derive(Clone, Debug, PartialEq)]
enum Status {
    Idle,
    Sending,
    Sent,
    Failed,
}

/// Where the form lands once a submission resolves. Field errors reported
/// back by the submit path go to the inputs and leave the form editable.
fn settle(result: Result<(), ContactError>) -> (Status, Option<FieldErrors>) {
    match result {
        Ok(()) => (Status::Sent, None),
        Err(ContactError::Invalid(field_errors)) => (Status::Idle, Some(field_errors)),
        Err(_) => (Status::Failed, None),
    }
}

#[function_component(ContactFormView)]
pub fn contact_form_view() -> Html {
    let form = use_state(ContactForm::default);
    let errors = use_state(FieldErrors::default);
    let status = use_state(|| Status::Idle);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { name: input.value(), ..(*form).clone() });
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { email: input.value(), ..(*form).clone() });
        })
    };
    let on_phone = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { phone: input.value(), ..(*form).clone() });
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactForm { message: input.value(), ..(*form).clone() });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == Status::Sending {
                return;
            }
            if let Err(field_errors) = form.validate() {
                errors.set(field_errors);
                return;
            }
            errors.set(FieldErrors::default());
            status.set(Status::Sending);

            let submission = (*form).clone();
            let form = form.clone();
            let errors = errors.clone();
            let status = status.clone();
            spawn_local(async move {
                let result = contact::submit(submission, config::contact_channel()).await;
                if let Err(err) = &result {
                    log!("Contact submission failed:", err.to_string());
                }
                let (next, field_errors) = settle(result);
                if let Some(field_errors) = field_errors {
                    errors.set(field_errors);
                }
                status.set(next.clone());
                if next == Status::Sent {
                    form.set(ContactForm::default());
                    gloo_timers::future::TimeoutFuture::new(5_000).await;
                    status.set(Status::Idle);
                }
            });
        })
    };

    if *status == Status::Sent {
        return html! {
            <div class="contact-success">
                <h4>{"Thank You!"}</h4>
                <p>{"Your message has been sent successfully. We'll contact you within 24 hours to discuss your project."}</p>
            </div>
        };
    }

    let sending = *status == Status::Sending;
    let field_error = |message: Option<&'static str>| match message {
        Some(message) => html! { <p class="field-error">{message}</p> },
        None => html! {},
    };

    html! {
        <form class="contact-form" {onsubmit} novalidate=true>
            <div class="form-row">
                <label for="contact-name">{"Full Name *"}</label>
                <input
                    id="contact-name"
                    type="text"
                    name="user_name"
                    placeholder="Enter your full name"
                    value={form.name.clone()}
                    oninput={on_name}
                    class={classes!(errors.name.is_some().then_some("invalid"))}
                />
                { field_error(errors.name) }
            </div>
            <div class="form-row">
                <label for="contact-email">{"Email Address *"}</label>
                <input
                    id="contact-email"
                    type="email"
                    name="user_email"
                    placeholder="your@email.com"
                    value={form.email.clone()}
                    oninput={on_email}
                    class={classes!(errors.email.is_some().then_some("invalid"))}
                />
                { field_error(errors.email) }
            </div>
            <div class="form-row">
                <label for="contact-phone">{"Phone Number"}</label>
                <input
                    id="contact-phone"
                    type="tel"
                    name="phone"
                    placeholder="+91 98765 43210"
                    value={form.phone.clone()}
                    oninput={on_phone}
                />
            </div>
            <div class="form-row">
                <label for="contact-message">{"Project Details *"}</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="5"
                    placeholder="Tell us about your vision, property size, special requirements..."
                    value={form.message.clone()}
                    oninput={on_message}
                    class={classes!(errors.message.is_some().then_some("invalid"))}
                />
                { field_error(errors.message) }
            </div>
            if *status == Status::Failed {
                <p class="submit-error">{"Failed to send message. Please try again or contact us directly."}</p>
            }
            <button type="submit" class="contact-submit" disabled={sending}>
                { if sending { "Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}

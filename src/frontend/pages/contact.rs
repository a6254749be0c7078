use crate::{
    config::SiteConfig,
    contact::{ContactField, ContactFormData, ContactFormState, SubmitStatus},
    content::{tel_href, CONTACT, CONTACT_SOCIAL_LINKS, SERVICES},
    error::ContactError,
    frontend::{browser::sleep, use_site_config},
    logging::log_event,
};
use gloo_net::http::Request;
use log::Level;
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

enum FormAction {
    Update(ContactField, String),
    Submit,
    Finish(Result<(), ContactError>),
}

#[derive(Default, PartialEq)]
struct ContactForm(ContactFormState);

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = self.0.clone();
        match action {
            FormAction::Update(field, value) => state.update(field, value),
            FormAction::Submit => {
                if let Err(error) = state.begin_submit() {
                    log_event(
                        Level::Warn,
                        "contact_rejected_locally",
                        json!({ "reason": error.class(), "detail": error.to_string() }),
                    );
                }
            }
            FormAction::Finish(outcome) => state.finish(outcome),
        }
        Rc::new(Self(state))
    }
}

async fn deliver(config: &SiteConfig, payload: &ContactFormData) -> Result<(), ContactError> {
    let Some(endpoint) = config.contact_endpoint.as_ref() else {
        sleep(config.contact_simulated_delay).await;
        return Ok(());
    };

    let response = Request::post(endpoint.as_str())
        .json(payload)
        .map_err(|error| ContactError::Network(error.to_string()))?
        .send()
        .await
        .map_err(|error| ContactError::Network(error.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(ContactError::Rejected {
            status: response.status(),
        })
    }
}

fn event_value(event: &Event) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    target
        .dyn_ref::<HtmlSelectElement>()
        .map(HtmlSelectElement::value)
}

fn field_id(field: ContactField) -> &'static str {
    match field {
        ContactField::FirstName => "contact-first-name",
        ContactField::LastName => "contact-last-name",
        ContactField::Email => "contact-email",
        ContactField::Phone => "contact-phone",
        ContactField::Service => "contact-service",
        ContactField::Message => "contact-message",
    }
}

fn contact_details() -> Html {
    let rows = [
        ("Phone", CONTACT.phone, tel_href(CONTACT.phone)),
        ("Email", CONTACT.email, format!("mailto:{}", CONTACT.email)),
        ("WhatsApp", CONTACT.whatsapp, tel_href(CONTACT.whatsapp)),
    ];

    html! {
        <aside class="contact-details">
            <ul class="contact-list">
                { for rows.into_iter().map(|(label, value, href)| html! {
                    <li>
                        <span class="muted">{ label }</span>
                        <a href={href}>{ value }</a>
                    </li>
                }) }
                <li>
                    <span class="muted">{ "Address" }</span>
                    <span>{ CONTACT.address }</span>
                </li>
            </ul>
            <div class="social-row">
                { for CONTACT_SOCIAL_LINKS.iter().map(|link| html! {
                    <a
                        class="social-button"
                        href={link.href}
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label={link.label}
                    >
                        <span aria-hidden="true">{ link.icon.glyph() }</span>
                    </a>
                }) }
            </div>
        </aside>
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let config = use_site_config();
    let form = use_reducer(ContactForm::default);

    let on_field = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = event_value(&event) {
                form.dispatch(FormAction::Update(field, value));
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            form.dispatch(FormAction::Submit);
        })
    };

    // Delivery starts once the reducer has accepted the submit.
    {
        let form = form.clone();
        let config = config.clone();
        let payload = form.0.pending_payload().cloned();
        use_effect_with(payload, move |payload| {
            if let Some(payload) = payload.clone() {
                log_event(
                    Level::Info,
                    "contact_submit_started",
                    json!({ "endpoint": config.contact_endpoint.as_ref().map(|url| url.as_str()) }),
                );
                spawn_local(async move {
                    let outcome = deliver(&config, &payload).await;
                    match &outcome {
                        Ok(()) => log_event(Level::Info, "contact_submit_succeeded", json!({})),
                        Err(error) => log_event(
                            Level::Error,
                            "contact_submit_failed",
                            json!({ "reason": error.class(), "detail": error.to_string() }),
                        ),
                    }
                    form.dispatch(FormAction::Finish(outcome));
                });
            }
        });
    }

    let state = &form.0;
    let input = |field: ContactField, kind: &'static str| {
        html! {
            <label class="field" for={field_id(field)}>
                <span>{ field.label() }{ if field.required() { " *" } else { "" } }</span>
                <input
                    id={field_id(field)}
                    type={kind}
                    value={state.data.get(field).to_string()}
                    required={field.required()}
                    disabled={state.is_submitting()}
                    oninput={on_field(field).reform(|event: InputEvent| Event::from(event))}
                />
            </label>
        }
    };

    let feedback = match &state.status {
        SubmitStatus::Idle => Html::default(),
        SubmitStatus::Submitting => html! { <p class="form-status">{ "Sending…" }</p> },
        SubmitStatus::Success => html! {
            <p class="form-status is-success" role="status">
                { "Thanks! Your message is on its way." }
            </p>
        },
        SubmitStatus::Failed(reason) => html! {
            <p class="form-status is-error" role="alert">{ reason.clone() }</p>
        },
    };

    html! {
        <section class="page contact" aria-labelledby="contact-heading">
            <div class="contact-form-panel">
                <h1 id="contact-heading">{ "Let's work together" }</h1>
                <p class="muted">{ "Tell me about your project and I'll get back to you soon." }</p>
                <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                    <div class="field-row">
                        { input(ContactField::FirstName, "text") }
                        { input(ContactField::LastName, "text") }
                    </div>
                    <div class="field-row">
                        { input(ContactField::Email, "email") }
                        { input(ContactField::Phone, "tel") }
                    </div>
                    <label class="field" for={field_id(ContactField::Service)}>
                        <span>{ ContactField::Service.label() }</span>
                        <select
                            id={field_id(ContactField::Service)}
                            disabled={state.is_submitting()}
                            onchange={on_field(ContactField::Service)}
                        >
                            <option value="" selected={state.data.service.is_empty()}>{ "Select a service" }</option>
                            { for SERVICES.iter().map(|service| html! {
                                <option value={*service} selected={state.data.service == *service}>{ *service }</option>
                            }) }
                        </select>
                    </label>
                    <label class="field" for={field_id(ContactField::Message)}>
                        <span>{ ContactField::Message.label() }{ " *" }</span>
                        <textarea
                            id={field_id(ContactField::Message)}
                            rows="6"
                            value={state.data.message.clone()}
                            required=true
                            disabled={state.is_submitting()}
                            oninput={on_field(ContactField::Message).reform(|event: InputEvent| Event::from(event))}
                        />
                    </label>
                    <button type="submit" class="button button-primary" disabled={state.is_submitting()}>
                        { if state.is_submitting() { "Sending…" } else { "Send message" } }
                    </button>
                    { feedback }
                </form>
            </div>
            { contact_details() }
        </section>
    }
}

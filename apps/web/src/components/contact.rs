use crate::host::WindowBrowser;
use dioxus::prelude::*;
use folio::domain::constants::CONTACT_FORM_ID;
use folio::domain::contact::{ContactForm, Fields};
use folio::features::contact::FieldErrors;

#[component]
pub(crate) fn Contact() -> Element {
    let site = use_context::<folio::Site>();
    let mut form = use_signal(ContactForm::default);
    let mut errors = use_signal(FieldErrors::default);
    let desk = site.contact.clone();

    let message_for = move |field: Fields| errors.read().get(field).map(|e| e.to_string());
    let group_class = move |field: Fields| {
        if errors.read().failed().contains(field) { "form-group error" } else { "form-group" }
    };

    rsx! {
        section { id: "contact", class: "contact",
            div { class: "container",
                h2 { class: "section-title", "Get In Touch" }
                form {
                    id: CONTACT_FORM_ID,
                    class: "contact-form",
                    novalidate: true,
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        let outcome = desk.submit(&mut form.write(), &WindowBrowser);
                        errors.set(outcome.errors());
                    },
                    div { class: group_class(Fields::NAME),
                        label { r#for: "name", "Name" }
                        input {
                            r#type: "text",
                            id: "name",
                            name: "name",
                            value: "{form.read().name}",
                            oninput: move |evt: FormEvent| form.write().name = evt.value(),
                        }
                        if let Some(message) = message_for(Fields::NAME) {
                            span { class: "error-message", "{message}" }
                        }
                    }
                    div { class: group_class(Fields::EMAIL),
                        label { r#for: "email", "Email" }
                        input {
                            r#type: "email",
                            id: "email",
                            name: "email",
                            value: "{form.read().email}",
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                        if let Some(message) = message_for(Fields::EMAIL) {
                            span { class: "error-message", "{message}" }
                        }
                    }
                    div { class: group_class(Fields::SUBJECT),
                        label { r#for: "subject", "Subject" }
                        input {
                            r#type: "text",
                            id: "subject",
                            name: "subject",
                            value: "{form.read().subject}",
                            oninput: move |evt: FormEvent| form.write().subject = evt.value(),
                        }
                        if let Some(message) = message_for(Fields::SUBJECT) {
                            span { class: "error-message", "{message}" }
                        }
                    }
                    div { class: group_class(Fields::MESSAGE),
                        label { r#for: "message", "Message" }
                        textarea {
                            id: "message",
                            name: "message",
                            rows: "5",
                            value: "{form.read().message}",
                            oninput: move |evt: FormEvent| form.write().message = evt.value(),
                        }
                        if let Some(message) = message_for(Fields::MESSAGE) {
                            span { class: "error-message", "{message}" }
                        }
                    }
                    button { r#type: "submit", class: "btn btn-primary", "Send Message" }
                }
            }
        }
    }
}

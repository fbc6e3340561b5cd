use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::content::site::OWNER_EMAIL;
use crate::error::RelayError;
use crate::relay;
use crate::state::contact::{ContactController, Field, SubmissionStatus};

pub enum ContactFormMsg {
    Update(Field, String),
    Submit,
    Finished(Result<(), RelayError>),
}

pub struct ContactForm {
    controller: ContactController,
}

/// `mailto:` link offered when the relay fails, with the subject carried over.
pub fn mailto_fallback(subject: &str) -> String {
    if subject.trim().is_empty() {
        format!("mailto:{}", OWNER_EMAIL)
    } else {
        format!("mailto:{}?subject={}", OWNER_EMAIL, urlencoding::encode(subject))
    }
}

pub fn invalid_field_message(field: Field) -> String {
    match field {
        Field::Email => "Please enter a valid email address.".to_string(),
        other => format!("Please fill in the {} field.", other.label().to_lowercase()),
    }
}

impl Component for ContactForm {
    type Message = ContactFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: ContactController::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Update(field, value) => {
                self.controller.update(field, value);
                true
            }
            ContactFormMsg::Submit => {
                let Some(params) = self.controller.begin_submit() else {
                    log::debug!("submit refused: {:?}", self.controller.status());
                    return true;
                };
                ctx.link().send_future(async move {
                    ContactFormMsg::Finished(relay::submit_contact(params).await)
                });
                true
            }
            ContactFormMsg::Finished(result) => {
                match &result {
                    Ok(()) => log::info!("contact message sent"),
                    Err(e) => log::error!("contact dispatch failed: {}", e),
                }
                self.controller.finish(&result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let form = self.controller.form();
        let pending = self.controller.is_pending();

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });

        let input = |field: Field, kind: &'static str| {
            let oninput = ctx.link().callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                ContactFormMsg::Update(field, input.value())
            });
            html! {
                <div class="form-field">
                    <label>{field.label()}</label>
                    <input
                        type={kind}
                        name={field.label().to_lowercase()}
                        value={form.get(field).to_string()}
                        {oninput}
                        required={true}
                    />
                </div>
            }
        };

        let on_message = ctx.link().callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            ContactFormMsg::Update(Field::Message, area.value())
        });

        html! {
            <form class="contact-form" {onsubmit}>
                <h3>{"Send Me a Message"}</h3>
                <div class="form-row">
                    { input(Field::Name, "text") }
                    { input(Field::Email, "email") }
                </div>
                { input(Field::Subject, "text") }
                <div class="form-field">
                    <label>{Field::Message.label()}</label>
                    <textarea
                        name="message"
                        rows="5"
                        value={form.message.clone()}
                        oninput={on_message}
                        required={true}
                    />
                </div>
                <button type="submit" class="submit-button" disabled={pending}>
                    <span class="icon-send"></span>
                    { if pending { "Sending..." } else { "Send Message" } }
                </button>
                {
                    match self.controller.status() {
                        SubmissionStatus::Success => html! {
                            <p class="form-status success">{"Thank you for reaching out."}</p>
                        },
                        SubmissionStatus::Error => html! {
                            <p class="form-status error">
                                {"Failed to send message. Please try again or "}
                                <a href={mailto_fallback(&form.subject)}>{"email me directly"}</a>
                                {"."}
                            </p>
                        },
                        SubmissionStatus::Invalid(field) => html! {
                            <p class="form-status error">{invalid_field_message(field)}</p>
                        },
                        SubmissionStatus::Idle | SubmissionStatus::Pending => html! {},
                    }
                }
            </form>
        }
    }
}

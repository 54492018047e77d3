use gloo_timers::callback::Timeout;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::anchors::scroll_behavior;
use crate::config;
use crate::contact::form::{validate, ContactForm, Field, Validation};
use crate::contact::submit::{self, SubmitError, INVALID_MESSAGE, SUCCESS_MESSAGE};
use crate::dom;
use crate::motion::Motion;

#[derive(Clone, Debug, PartialEq)]
enum Status {
    Idle,
    Success(String),
    Error(String),
}

pub enum Msg {
    Edit(Field, String),
    Submit,
    Submitted(Result<(), SubmitError>),
}

pub struct ContactFormView {
    form: ContactForm,
    validation: Validation,
    status: Status,
    sending: bool,
    reduced_motion: bool,
    field_refs: Vec<NodeRef>,
    status_ref: NodeRef,
    status_scroll: Option<Timeout>,
}

impl ContactFormView {
    fn field_ref(&self, field: Field) -> &NodeRef {
        let idx = Field::ALL.iter().position(|f| *f == field).unwrap_or(0);
        &self.field_refs[idx]
    }

    fn field_view(&self, ctx: &Context<Self>, field: Field) -> Html {
        let invalid = self.validation.is_invalid(field);
        let value = self.form.get(field).to_string();
        let name = field.name();

        let control = if field == Field::Message {
            let oninput = ctx.link().callback(move |e: InputEvent| {
                Msg::Edit(field, e.target_unchecked_into::<HtmlTextAreaElement>().value())
            });
            html! {
                <textarea
                    ref={self.field_ref(field).clone()}
                    id={name}
                    name={name}
                    rows="5"
                    value={value}
                    aria-invalid={invalid.to_string()}
                    {oninput}
                />
            }
        } else {
            let input_mode = match field {
                Field::Email => "email",
                Field::Phone => "tel",
                _ => "text",
            };
            let oninput = ctx.link().callback(move |e: InputEvent| {
                Msg::Edit(field, e.target_unchecked_into::<HtmlInputElement>().value())
            });
            html! {
                <input
                    ref={self.field_ref(field).clone()}
                    id={name}
                    name={name}
                    type="text"
                    inputmode={input_mode}
                    value={value}
                    aria-invalid={invalid.to_string()}
                    {oninput}
                />
            }
        };

        html! {
            <div class={classes!("form-field", invalid.then(|| "is-invalid"))}>
                <label for={name}>{field.label()}</label>
                { control }
                <span class="form-field__error">{field.hint()}</span>
            </div>
        }
    }
}

impl Component for ContactFormView {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let reduced_motion = ctx
            .link()
            .context::<Motion>(Callback::noop())
            .map(|(motion, _)| motion.reduced)
            .unwrap_or(false);

        Self {
            form: ContactForm::default(),
            validation: Validation::default(),
            status: Status::Idle,
            sending: false,
            reduced_motion,
            field_refs: Field::ALL.iter().map(|_| NodeRef::default()).collect(),
            status_ref: NodeRef::default(),
            status_scroll: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                self.form.set(field, value);
                self.validation.clear(field);
                self.status = Status::Idle;
                true
            }
            Msg::Submit => {
                if self.sending {
                    return false;
                }

                let validation = validate(&self.form);
                if let Some(first) = validation.first_invalid() {
                    self.validation = validation;
                    self.status = Status::Error(INVALID_MESSAGE.to_string());
                    if let Some(el) = self.field_ref(first).cast::<Element>() {
                        dom::focus(&el);
                    }
                    return true;
                }

                self.validation = validation;
                self.sending = true;
                self.status = Status::Idle;

                let form = self.form.clone();
                ctx.link().send_future(async move {
                    Msg::Submitted(submit::submit(config::get_form_endpoint(), &form).await)
                });
                true
            }
            Msg::Submitted(Ok(())) => {
                log::info!("Contact request sent");
                self.sending = false;
                self.status = Status::Success(SUCCESS_MESSAGE.to_string());
                self.form = ContactForm::default();
                self.validation = Validation::default();

                let status_ref = self.status_ref.clone();
                let behavior = scroll_behavior(self.reduced_motion);
                self.status_scroll = Some(Timeout::new(config::STATUS_SCROLL_DELAY_MS, move || {
                    if let Some(el) = status_ref.cast::<Element>() {
                        dom::scroll_into_view_nearest(&el, behavior);
                    }
                }));
                true
            }
            Msg::Submitted(Err(e)) => {
                gloo_console::error!("Form submission error:", format!("{:?}", e));
                self.sending = false;
                self.status = Status::Error(e.to_string());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        let (status_text, status_class) = match &self.status {
            Status::Idle => (String::new(), None),
            Status::Success(text) => (text.clone(), Some("is-success")),
            Status::Error(text) => (text.clone(), Some("is-error")),
        };

        html! {
            <form id="contactForm" class="contact-form" {onsubmit}>
                <div class="contact-form__grid">
                    { for Field::ALL.iter().map(|f| self.field_view(ctx, *f)) }
                </div>
                <button type="submit" class="btn btn--primary" disabled={self.sending}>
                    if self.sending {
                        <span>{"Invio in corso..."}</span>
                    } else {
                        <span>{"Invia richiesta"}</span>
                    }
                </button>
                <p
                    ref={self.status_ref.clone()}
                    id="formStatus"
                    class={classes!("form-status", status_class)}
                    role="status"
                    aria-live="polite"
                >
                    {status_text}
                </p>
            </form>
        }
    }
}

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::motion as defaults;
use crate::content::{section, CONTACT_CHANNELS, OFFICE_ADDRESS};
use crate::error::SubmitError;
use crate::i18n::use_locale;
use crate::motion::{element, use_motion, Ease, EntranceSpec, EntryVector, Motion, Props, Repeat, Timing};
use crate::submission::{ContactSubmission, Field, FormAction, SinkHandle};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    /// Where submissions go; logs to the console unless replaced.
    #[prop_or_default]
    pub sink: SinkHandle,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let locale = use_locale();
    let motion = use_context::<Motion>();
    let form = use_reducer(ContactSubmission::default);
    let status = use_state(|| None::<Result<(), SubmitError>>);
    let title_ref = use_node_ref();
    let form_ref = use_node_ref();
    let info_ref = use_node_ref();

    {
        let title_ref = title_ref.clone();
        let form_ref = form_ref.clone();
        let info_ref = info_ref.clone();
        use_motion(locale.direction(), move |scope, direction| {
            let timing = Timing::new(defaults::ENTRANCE_DURATION, Ease::Power3Out);
            scope.entrance(
                element(&title_ref),
                EntranceSpec::reveal(EntryVector::FromBelow(defaults::TITLE_RISE).hidden(*direction), timing),
            );
            scope.entrance(
                element(&form_ref),
                EntranceSpec::reveal(EntryVector::FromLeading(defaults::SLIDE_DISTANCE).hidden(*direction), timing),
            );
            scope.entrance(
                element(&info_ref),
                EntranceSpec::reveal(EntryVector::FromTrailing(defaults::SLIDE_DISTANCE).hidden(*direction), timing),
            );
        });
    }

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| form.dispatch(FormAction::Set(field, value)))
    };
    let input_value = |field: Field| {
        on_input(field).reform(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            input.value()
        })
    };
    let textarea_value = |field: Field| {
        on_input(field).reform(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            input.value()
        })
    };

    let on_submit = {
        let form = form.clone();
        let status = status.clone();
        let sink = props.sink.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let result = sink.send(&form);
            if result.is_ok() {
                if let Some(motion) = &motion {
                    motion.animate(
                        element(&form_ref),
                        None,
                        Props::new().scale(0.95),
                        Timing::new(defaults::PULSE_DURATION, Ease::Power2Out)
                            .repeat(Repeat::Times { count: 1, yoyo: true }),
                    );
                }
                form.dispatch(FormAction::Clear);
            }
            status.set(Some(result));
        })
    };

    let status_line = match &*status {
        None => html! {},
        Some(Ok(())) => html! { <p class="form-status ok">{ locale.t("messageSent") }</p> },
        Some(Err(err)) => html! { <p class="form-status error">{ locale.t(err.message_key()) }</p> },
    };

    html! {
        <section id={section::CONTACT} class="section">
            <div class="container">
                <div ref={title_ref} class="section-heading">
                    <h2>{ locale.t("contactTitle") }</h2>
                    <p>{ locale.t("contactSubtitle") }</p>
                </div>

                <div class="split">
                    <form ref={form_ref} class="contact-form" onsubmit={on_submit} novalidate=true>
                        <div class="field-row">
                            <div class="field">
                                <label for="contact-name">{ locale.t("nameLabel") }</label>
                                <input id="contact-name" type="text" name="name" required=true
                                    value={form.name.clone()} oninput={input_value(Field::Name)} />
                            </div>
                            <div class="field">
                                <label for="contact-email">{ locale.t("emailLabel") }</label>
                                <input id="contact-email" type="email" name="email" required=true
                                    value={form.email.clone()} oninput={input_value(Field::Email)} />
                            </div>
                        </div>

                        <div class="field">
                            <label for="contact-phone">{ locale.t("phoneLabel") }</label>
                            <input id="contact-phone" type="tel" name="phone"
                                value={form.phone.clone()} oninput={input_value(Field::Phone)} />
                        </div>

                        <div class="field">
                            <label for="contact-message">{ locale.t("messageLabel") }</label>
                            <textarea id="contact-message" name="message" rows="6" required=true
                                value={form.message.clone()} oninput={textarea_value(Field::Message)} />
                        </div>

                        <button type="submit" class="btn-primary">
                            { locale.t("sendMessage") }
                            <span aria-hidden="true">{" ➤"}</span>
                        </button>
                        { status_line }
                    </form>

                    <div ref={info_ref}>
                        { for CONTACT_CHANNELS.iter().map(|channel| html! {
                            <div class="channel" key={channel.title_key}>
                                <div class="channel-icon">{ channel.icon }</div>
                                <div>
                                    <h3>{ locale.t(channel.title_key) }</h3>
                                    { for channel.details.iter().map(|detail| html! { <p>{ *detail }</p> }) }
                                </div>
                            </div>
                        }) }

                        <div class="map-placeholder">
                            <span aria-hidden="true">{"📍"}</span>
                            <p>{ locale.t("interactiveMap") }</p>
                            <p>{ OFFICE_ADDRESS }</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

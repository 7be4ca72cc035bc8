use yew::prelude::*;

use crate::config::motion as defaults;
use crate::content::{section, SERVICES};
use crate::i18n::{use_locale, Direction};
use crate::motion::{children, element, use_motion, Ease, EntranceSpec, EntryVector, HoverSpec, Props, Timing};

#[function_component(Services)]
pub fn services() -> Html {
    let locale = use_locale();
    let title_ref = use_node_ref();
    let cards_ref = use_node_ref();

    {
        let title_ref = title_ref.clone();
        let cards_ref = cards_ref.clone();
        use_motion((), move |scope, _| {
            scope.entrance(
                element(&title_ref),
                EntranceSpec::reveal(
                    EntryVector::FromBelow(defaults::TITLE_RISE).hidden(Direction::Ltr),
                    Timing::new(defaults::ENTRANCE_DURATION, Ease::Power3Out),
                ),
            );

            let cards = children(&cards_ref);
            scope.stagger(
                cards.clone(),
                element(&cards_ref),
                EntranceSpec::reveal(
                    EntryVector::FromBelow(defaults::CARD_RISE).hidden(Direction::Ltr),
                    Timing::new(defaults::CARD_DURATION, Ease::Power3Out),
                ),
                defaults::STAGGER_STEP,
            );

            let lift = HoverSpec {
                rest: Props::new().scale(1.0),
                active: Props::new().scale(1.05),
                timing: Timing::new(defaults::HOVER_DURATION, Ease::Power2Out),
            };
            for card in cards {
                scope.hover(&card, Some(card.clone()), lift);
            }
        });
    }

    html! {
        <section id={section::SERVICES} class="section muted">
            <div class="container">
                <div ref={title_ref} class="section-heading">
                    <h2>{ locale.t("servicesTitle") }</h2>
                    <p>{ locale.t("servicesSubtitle") }</p>
                </div>

                <div ref={cards_ref} class="grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="service-card" key={service.title_key}>
                            <div class="service-icon" style={format!("background: {};", service.accent)}>
                                { service.icon }
                            </div>
                            <h3>{ locale.t(service.title_key) }</h3>
                            <p>{ locale.t(service.description_key) }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

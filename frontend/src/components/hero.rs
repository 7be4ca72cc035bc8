use yew::prelude::*;

use crate::content::{section, HERO_IMAGE};
use crate::i18n::use_locale;
use crate::motion::{element, use_motion, Ease, EntryVector, Motion, Props, Repeat, Sequence, Timing};

#[function_component(Hero)]
pub fn hero() -> Html {
    let locale = use_locale();
    let motion = use_context::<Motion>();
    let title_ref = use_node_ref();
    let subtitle_ref = use_node_ref();
    let description_ref = use_node_ref();
    let buttons_ref = use_node_ref();
    let image_ref = use_node_ref();

    {
        let refs = [
            title_ref.clone(),
            subtitle_ref.clone(),
            description_ref.clone(),
            buttons_ref.clone(),
        ];
        let image_ref = image_ref.clone();
        use_motion(locale.direction(), move |scope, direction| {
            let [title, subtitle, description, buttons] = refs;
            let mut timeline = Sequence::new(0.5);

            // (node, start state, duration, gap after the previous step)
            let steps = [
                (&title, EntryVector::FromBelow(100.0).hidden(*direction), 1.0, 0.0),
                (&subtitle, EntryVector::FromBelow(50.0).hidden(*direction), 0.8, -0.5),
                (&description, EntryVector::FromBelow(30.0).hidden(*direction), 0.8, -0.3),
                (&buttons, EntryVector::FromBelow(30.0).hidden(*direction), 0.8, -0.3),
                (&image_ref, EntryVector::FromTrailing(100.0).hidden(*direction), 1.0, -0.8),
            ];
            for (node, from, duration, gap) in steps {
                let at = timeline.then(duration, gap);
                scope.animate(
                    element(node),
                    Some(from),
                    from.settled(),
                    Timing::new(duration, Ease::Power3Out).delay(at),
                );
            }

            scope.animate(
                element(&image_ref),
                None,
                Props::new().y(-20.0),
                Timing::new(3.0, Ease::Power2InOut)
                    .delay(2.0)
                    .repeat(Repeat::Forever { yoyo: true }),
            );
        });
    }

    let scroll_to = |id: &'static str| {
        let motion = motion.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(motion) = &motion {
                motion.scroll_to_section(id);
            }
        })
    };

    html! {
        <section class="hero">
            <div class="container">
                <div class="split">
                    <div>
                        <h2 ref={subtitle_ref} class="eyebrow">{ locale.t("heroSubtitle") }</h2>
                        <h1 ref={title_ref}>{ locale.t("heroTitle") }</h1>
                        <p ref={description_ref} class="lead">{ locale.t("heroDescription") }</p>
                        <div ref={buttons_ref} class="actions">
                            <button class="btn-primary" onclick={scroll_to(section::CONTACT)}>
                                { locale.t("getStarted") }
                                <span aria-hidden="true">{ if locale.is_rtl() { "←" } else { "→" } }</span>
                            </button>
                            <button class="btn-outline" onclick={scroll_to(section::ABOUT)}>
                                <span aria-hidden="true">{"▶"}</span>
                                { locale.t("learnMore") }
                            </button>
                        </div>
                    </div>

                    <div ref={image_ref} class="media">
                        <img src={HERO_IMAGE} alt="Digital marketing team" />
                        <div class="floating-card top">
                            <strong>{"150+"}</strong>
                            <span>{ locale.t("clientsServed") }</span>
                        </div>
                        <div class="floating-card bottom">
                            <strong>{"98%"}</strong>
                            <span>{ locale.t("successRate") }</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

use yew::prelude::*;

use crate::config::motion as defaults;
use crate::content::{section, ABOUT_IMAGE, STATS};
use crate::i18n::use_locale;
use crate::motion::{
    children, element, find, use_motion, CounterSpec, Ease, EntranceSpec, EntryVector, Timing, ViewportBand,
};

#[function_component(About)]
pub fn about() -> Html {
    let locale = use_locale();
    let content_ref = use_node_ref();
    let image_ref = use_node_ref();
    let stats_ref = use_node_ref();

    {
        let content_ref = content_ref.clone();
        let image_ref = image_ref.clone();
        let stats_ref = stats_ref.clone();
        use_motion(locale.direction(), move |scope, direction| {
            let slide = Timing::new(defaults::ENTRANCE_DURATION, Ease::Power3Out);
            scope.entrance(
                element(&content_ref),
                EntranceSpec::reveal(EntryVector::FromLeading(defaults::SLIDE_DISTANCE).hidden(*direction), slide),
            );
            scope.entrance(
                element(&image_ref),
                EntranceSpec::reveal(EntryVector::FromTrailing(defaults::SLIDE_DISTANCE).hidden(*direction), slide),
            );

            let stats = children(&stats_ref);
            scope.stagger(
                stats.clone(),
                element(&stats_ref),
                EntranceSpec::reveal(
                    EntryVector::FromBelow(defaults::TITLE_RISE).hidden(*direction),
                    Timing::new(defaults::CARD_DURATION, Ease::Power3Out),
                ),
                defaults::STAGGER_STEP,
            );

            for ((index, stat), data) in stats.iter().enumerate().zip(STATS) {
                let spec = CounterSpec {
                    timing: Timing::new(defaults::COUNTER_DURATION, Ease::Power2Out)
                        .delay(index as f64 * defaults::STAGGER_STEP),
                    band: ViewportBand::new(defaults::VIEWPORT_START, defaults::VIEWPORT_END),
                };
                scope.counter(find(stat, ".counter"), data.value, Some(stat.clone()), spec);
            }
        });
    }

    html! {
        <section id={section::ABOUT} class="section muted about">
            <div class="container">
                <div class="split">
                    <div ref={content_ref}>
                        <h2>{ locale.t("aboutTitle") }</h2>
                        <h3>{ locale.t("aboutSubtitle") }</h3>
                        <p>{ locale.t("aboutDescription") }</p>

                        <div ref={stats_ref} class="stats">
                            { for STATS.iter().map(|stat| html! {
                                <div class="stat" key={stat.label_key}>
                                    <div class="stat-icon">{ stat.icon }</div>
                                    <div class="counter">{ stat.value }</div>
                                    <div class="stat-label">{ locale.t(stat.label_key) }</div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div ref={image_ref} class="media">
                        <img src={ABOUT_IMAGE} alt="About us" />
                        <div class="floating-card top">
                            <strong>{"🏆"}</strong>
                            <span>{ locale.t("awardWinning") }</span>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

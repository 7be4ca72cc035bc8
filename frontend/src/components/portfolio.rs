use yew::prelude::*;

use crate::config::motion as defaults;
use crate::content::{section, PROJECTS};
use crate::i18n::{use_locale, Direction};
use crate::motion::{children, element, find, use_motion, Ease, EntranceSpec, EntryVector, HoverSpec, Props, Timing};

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let locale = use_locale();
    let title_ref = use_node_ref();
    let grid_ref = use_node_ref();

    {
        let title_ref = title_ref.clone();
        let grid_ref = grid_ref.clone();
        use_motion((), move |scope, _| {
            scope.entrance(
                element(&title_ref),
                EntranceSpec::reveal(
                    EntryVector::FromBelow(defaults::TITLE_RISE).hidden(Direction::Ltr),
                    Timing::new(defaults::ENTRANCE_DURATION, Ease::Power3Out),
                ),
            );

            let projects = children(&grid_ref);
            scope.stagger(
                projects.clone(),
                element(&grid_ref),
                EntranceSpec::reveal(
                    EntryVector::FromBelow(defaults::CARD_RISE).hidden(Direction::Ltr),
                    Timing::new(defaults::CARD_DURATION, Ease::Power3Out),
                ),
                defaults::STAGGER_STEP,
            );

            let reveal_overlay = HoverSpec {
                rest: Props::new().opacity(0.0),
                active: Props::new().opacity(1.0),
                timing: Timing::new(defaults::HOVER_DURATION, Ease::Power2Out),
            };
            for project in projects {
                scope.hover(&project, find(&project, ".overlay"), reveal_overlay);
            }
        });
    }

    html! {
        <section id={section::PORTFOLIO} class="section">
            <div class="container">
                <div ref={title_ref} class="section-heading">
                    <h2>{ locale.t("portfolioTitle") }</h2>
                    <p>{ locale.t("portfolioSubtitle") }</p>
                </div>

                <div ref={grid_ref} class="grid">
                    { for PROJECTS.iter().map(|project| html! {
                        <div class="project" key={project.title}>
                            <img src={project.image} alt={project.title} />
                            <div class="overlay">
                                <div>
                                    <div class="category">{ project.category }</div>
                                    <h3>{ project.title }</h3>
                                    <p>{ project.outcome }</p>
                                    <button>
                                        { locale.t("viewProject") }
                                        <span aria-hidden="true">{" ↗"}</span>
                                    </button>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

use log::debug;
use yew::prelude::*;

use crate::components::{about::About, contact::Contact, footer::Footer, header::Header, hero::Hero,
    portfolio::Portfolio, services::Services};
use crate::config::motion as defaults;
use crate::motion::{body, Ease, Motion, Props, Timing};

/// The whole single-page site.
#[function_component(Home)]
pub fn home() -> Html {
    let motion = use_context::<Motion>();

    use_effect_with_deps(
        move |_| {
            match motion {
                Some(motion) => motion.animate(
                    body(),
                    Some(Props::new().opacity(0.0)),
                    Props::new().opacity(1.0),
                    Timing::new(defaults::ENTRANCE_DURATION, Ease::Power2Out),
                ),
                None => {
                    debug!("No motion provider, showing page without fade-in");
                    if let Some(body) = body() {
                        let _ = body.style().remove_property("opacity");
                    }
                }
            }
            || ()
        },
        (),
    );

    html! {
        <div class="page">
            <Header />
            <main>
                <Hero />
                <Services />
                <Portfolio />
                <About />
                <Contact />
            </main>
            <Footer />
        </div>
    }
}

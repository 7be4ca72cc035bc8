use yew::prelude::*;

use crate::config::motion as defaults;
use crate::content::{section, COPYRIGHT_YEAR, EMAIL, OFFICE_ADDRESS, PHONE, SOCIAL_LINKS};
use crate::i18n::{use_locale, Direction};
use crate::motion::{
    children, element, use_motion, Ease, EntranceSpec, EntryVector, HoverSpec, Motion, Props, Timing, ViewportBand,
};

#[function_component(Footer)]
pub fn footer() -> Html {
    let locale = use_locale();
    let motion = use_context::<Motion>();
    let footer_ref = use_node_ref();
    let socials_ref = use_node_ref();

    {
        let footer_ref = footer_ref.clone();
        let socials_ref = socials_ref.clone();
        use_motion((), move |scope, _| {
            scope.entrance(
                element(&footer_ref),
                EntranceSpec::reveal(
                    EntryVector::FromBelow(defaults::TITLE_RISE).hidden(Direction::Ltr),
                    Timing::new(defaults::ENTRANCE_DURATION, Ease::Power3Out),
                )
                .band(ViewportBand::new(defaults::FOOTER_VIEWPORT_START, defaults::VIEWPORT_END)),
            );

            let grow = HoverSpec {
                rest: Props::new().scale(1.0),
                active: Props::new().scale(1.1),
                timing: Timing::new(defaults::ICON_HOVER_DURATION, Ease::Power2Out),
            };
            for icon in children(&socials_ref) {
                scope.hover(&icon, Some(icon.clone()), grow);
            }
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
        <footer ref={footer_ref} class="site-footer">
            <div class="container">
                <div class="columns">
                    <div>
                        <div class="brand">
                            <div class="brand-mark">{"Q"}</div>
                            <span>{ locale.t("brandName") }</span>
                        </div>
                        <p>{ locale.t("footerTagline") }</p>
                        <ul>
                            <li>{"📍 "}{ OFFICE_ADDRESS }</li>
                            <li>{"📞 "}{ PHONE }</li>
                            <li>{"✉️ "}{ EMAIL }</li>
                        </ul>
                    </div>

                    <div>
                        <h3>{ locale.t("quickLinks") }</h3>
                        <ul>
                            { for section::NAV.iter().map(|&id| html! {
                                <li key={id}>
                                    <button class="footer-link" onclick={scroll_to(id)}>{ locale.t(id) }</button>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h3>{ locale.t("followUs") }</h3>
                        <div ref={socials_ref} class="socials">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a class="social" key={social.name} href={social.href} aria-label={social.name}>
                                    { social.glyph }
                                </a>
                            }) }
                        </div>
                    </div>
                </div>

                <div class="copyright">
                    <p>{ format!("© {} {}. {}", COPYRIGHT_YEAR, locale.t("brandName"), locale.t("allRightsReserved")) }</p>
                </div>
            </div>
        </footer>
    }
}

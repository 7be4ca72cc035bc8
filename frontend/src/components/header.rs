use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::motion as defaults;
use crate::content::section;
use crate::i18n::{use_locale, Direction};
use crate::motion::{element, use_motion, Ease, EntryVector, Motion, Props, Timing};

const SCROLLED_AFTER: f64 = 50.0;

#[function_component(Header)]
pub fn header() -> Html {
    let locale = use_locale();
    let motion = use_context::<Motion>();
    let header_ref = use_node_ref();
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let pending_switch = use_mut_ref(|| None::<Timeout>);

    {
        let header_ref = header_ref.clone();
        use_motion((), move |scope, _| {
            scope.animate(
                element(&header_ref),
                Some(EntryVector::FromAbove(100.0).hidden(Direction::Ltr)),
                Props::new().y(0.0).opacity(1.0),
                Timing::new(defaults::ENTRANCE_DURATION, Ease::Power3Out).delay(0.2),
            );
        });
    }

    // Fade the header out, switch, fade back in.
    let toggle_language = {
        let locale = locale.clone();
        let motion = motion.clone();
        let header_ref = header_ref.clone();
        let pending_switch = pending_switch.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            let fade = Timing::new(defaults::LANGUAGE_FADE, Ease::Power2Out);

            let Some(motion) = motion.clone() else {
                locale.toggle();
                return;
            };
            motion.animate(element(&header_ref), None, Props::new().opacity(0.0), fade);

            let locale = locale.clone();
            let header_ref = header_ref.clone();
            let switch = Timeout::new((defaults::LANGUAGE_FADE * 1000.0) as u32, move || {
                locale.toggle();
                motion.animate(element(&header_ref), None, Props::new().opacity(1.0), fade);
            });
            *pending_switch.borrow_mut() = Some(switch);
        })
    };

    let nav_to = |id: &'static str| {
        let motion = motion.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(motion) = &motion {
                motion.scroll_to_section(id);
            }
            menu_open.set(false);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let links = |extra: &'static str| {
        section::NAV
            .iter()
            .map(|&id| {
                let class = if id == section::CONTACT {
                    classes!("nav-link", "nav-cta", extra)
                } else {
                    classes!("nav-link", extra)
                };
                html! {
                    <button class={class} onclick={nav_to(id)}>{ locale.t(id) }</button>
                }
            })
            .collect::<Html>()
    };

    let language_button = html! {
        <button class="language-toggle" title={locale.language().other().native_name()} onclick={toggle_language}>
            <span aria-hidden="true">{"🌐"}</span>
            <span>{ locale.t("switchLanguage") }</span>
        </button>
    };

    html! {
        <header ref={header_ref} class={classes!("site-header", (scroll_y > SCROLLED_AFTER).then(|| "scrolled"))}>
            <div class="container">
                <div class="bar">
                    <div class="brand">
                        <div class="brand-mark">{"Q"}</div>
                        <span>{ locale.t("brandName") }</span>
                    </div>

                    <nav class="site-nav">
                        { links("") }
                        { language_button.clone() }
                    </nav>

                    <button class="burger" aria-label={locale.t("menu")} onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>

                if *menu_open {
                    <div class="mobile-menu">
                        { links("mobile") }
                        { language_button }
                    </div>
                }
            </div>
        </header>
    }
}

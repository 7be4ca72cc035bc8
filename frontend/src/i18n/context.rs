use log::{info, warn};
use web_sys::window;
use yew::prelude::*;

use super::{Direction, DocumentRoot, Locale, LocaleAction, LocaleStore};
use crate::config;
use crate::error::LocaleError;

/// The live `<html>` element.
pub struct HtmlRoot;

impl DocumentRoot for HtmlRoot {
    fn apply(&self, lang: &str, dir: Direction) {
        if let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = root.set_attribute("lang", lang);
            let _ = root.set_attribute("dir", dir.as_attr());
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct LocaleContext {
    store: UseReducerHandle<LocaleStore>,
}

impl LocaleContext {
    pub fn language(&self) -> Locale {
        self.store.language()
    }

    pub fn is_rtl(&self) -> bool {
        self.store.is_right_to_left()
    }

    pub fn direction(&self) -> Direction {
        self.store.direction()
    }

    pub fn t<'k>(&self, key: &'k str) -> &'k str {
        self.store.translate(key)
    }

    pub fn set_language(&self, code: &str) -> Result<(), LocaleError> {
        let mut next = *self.store;
        match next.set_language(code, &HtmlRoot) {
            Ok(changed) => {
                if changed {
                    info!("Switching language to {}", next.language());
                }
                self.store.dispatch(LocaleAction::Set(next.language()));
                Ok(())
            }
            Err(err) => {
                warn!("Ignoring language switch: {}", err);
                Err(err)
            }
        }
    }

    pub fn toggle(&self) {
        let target = self.language().other();
        // Both locales are always supported, so this cannot fail.
        let _ = self.set_language(target.code());
    }
}

#[derive(Properties, PartialEq)]
pub struct LocaleProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LocaleProvider)]
pub fn locale_provider(props: &LocaleProviderProps) -> Html {
    let store = use_reducer(|| LocaleStore::new(config::DEFAULT_LOCALE));

    {
        let store = store.clone();
        use_effect_with_deps(
            move |_| {
                store.propagate(&HtmlRoot);
                || ()
            },
            (),
        );
    }

    let context = LocaleContext { store };

    html! {
        <ContextProvider<LocaleContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<LocaleContext>>
    }
}

#[hook]
pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().expect("use_locale must be used inside <LocaleProvider>")
}

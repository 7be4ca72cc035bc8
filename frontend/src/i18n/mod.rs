//! Active language, derived writing direction and translation lookup.
//!
//! [`LocaleStore`] is plain data so it can be exercised without a browser.
//! [`context`] wraps it in a Yew reducer and pushes `lang`/`dir` onto the
//! document root whenever the language changes.

pub mod context;
pub mod translations;

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use yew::Reducible;

use crate::error::LocaleError;

pub use context::{use_locale, LocaleProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    #[cfg(test)]
    pub const ALL: &'static [Locale] = &[Locale::En, Locale::Ar];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ar => "العربية",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Locale::Ar => Direction::Rtl,
            Locale::En => Direction::Ltr,
        }
    }

    /// The locale the header toggle switches to.
    pub fn other(self) -> Locale {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            other => Err(LocaleError::Unsupported(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_attr(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

/// Receives the document-level `lang` and `dir` attributes.
pub trait DocumentRoot {
    fn apply(&self, lang: &str, dir: Direction);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocaleStore {
    locale: Locale,
}

impl LocaleStore {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn language(&self) -> Locale {
        self.locale
    }

    pub fn direction(&self) -> Direction {
        self.locale.direction()
    }

    pub fn is_right_to_left(&self) -> bool {
        self.direction().is_rtl()
    }

    /// Unknown keys come back unchanged so a gap in a table shows up on
    /// the page instead of failing.
    pub fn translate<'k>(&self, key: &'k str) -> &'k str {
        translations::lookup(self.locale, key).unwrap_or(key)
    }

    /// Switches the active locale and propagates `lang`/`dir` to `root`.
    ///
    /// Unsupported codes are rejected and leave the store untouched.
    /// Returns whether the locale actually changed.
    pub fn set_language(
        &mut self,
        code: &str,
        root: &impl DocumentRoot,
    ) -> Result<bool, LocaleError> {
        let locale: Locale = code.parse()?;
        let changed = locale != self.locale;
        self.locale = locale;
        self.propagate(root);
        Ok(changed)
    }

    pub fn propagate(&self, root: &impl DocumentRoot) {
        root.apply(self.locale.code(), self.direction());
    }
}

pub enum LocaleAction {
    Set(Locale),
}

impl Reducible for LocaleStore {
    type Action = LocaleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LocaleAction::Set(locale) if locale == self.locale => self,
            LocaleAction::Set(locale) => Rc::new(LocaleStore::new(locale)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingRoot {
        writes: RefCell<Vec<(String, Direction)>>,
    }

    impl DocumentRoot for RecordingRoot {
        fn apply(&self, lang: &str, dir: Direction) {
            self.writes.borrow_mut().push((lang.to_string(), dir));
        }
    }

    fn snapshot(store: &LocaleStore) -> Vec<String> {
        translations::KEYS
            .iter()
            .map(|key| store.translate(key).to_string())
            .collect()
    }

    #[test]
    fn starts_in_english_left_to_right() {
        let store = LocaleStore::default();
        assert_eq!(store.language(), Locale::En);
        assert!(!store.is_right_to_left());
        assert_eq!(store.translate("heroTitle"), "Digital Marketing Excellence");
    }

    #[test]
    fn switching_to_arabic_flips_direction_and_document() {
        let root = RecordingRoot::default();
        let mut store = LocaleStore::default();

        assert_eq!(store.set_language("ar", &root), Ok(true));
        assert!(store.is_right_to_left());
        assert_eq!(store.translate("contact"), "اتصل بنا");
        assert_eq!(*root.writes.borrow(), vec![("ar".to_string(), Direction::Rtl)]);
    }

    #[test]
    fn unsupported_code_is_rejected_without_side_effects() {
        let root = RecordingRoot::default();
        let mut store = LocaleStore::new(Locale::Ar);

        let err = store.set_language("fr", &root).unwrap_err();
        assert_eq!(err, LocaleError::Unsupported("fr".to_string()));
        assert_eq!(store.language(), Locale::Ar);
        assert!(root.writes.borrow().is_empty());

        assert!(store.set_language("", &root).is_err());
        assert!(store.set_language("AR", &root).is_err());
    }

    #[test]
    fn setting_the_same_language_twice_changes_nothing() {
        let root = RecordingRoot::default();
        let mut store = LocaleStore::default();

        assert_eq!(store.set_language("ar", &root), Ok(true));
        let before = store;
        assert_eq!(store.set_language("ar", &root), Ok(false));
        assert_eq!(store, before);

        let writes = root.writes.borrow();
        assert_eq!(writes[0], writes[1]);
    }

    #[test]
    fn round_trip_restores_direction_and_text() {
        let root = RecordingRoot::default();
        let mut store = LocaleStore::default();
        let original = snapshot(&store);

        store.set_language("ar", &root).unwrap();
        assert_ne!(snapshot(&store), original);
        store.set_language("en", &root).unwrap();

        assert!(!store.is_right_to_left());
        assert_eq!(snapshot(&store), original);
    }

    #[test]
    fn reducer_keeps_the_same_state_for_repeat_actions() {
        let state = Rc::new(LocaleStore::default());
        let same = state.clone().reduce(LocaleAction::Set(Locale::En));
        assert!(Rc::ptr_eq(&state, &same));

        let switched = state.reduce(LocaleAction::Set(Locale::Ar));
        assert_eq!(switched.language(), Locale::Ar);
    }

    #[test]
    fn other_toggles_between_the_two_locales() {
        assert_eq!(Locale::En.other(), Locale::Ar);
        assert_eq!(Locale::Ar.other().other(), Locale::Ar);
        assert_eq!("ar".parse::<Locale>().unwrap().to_string(), "ar");
    }

    proptest! {
        #[test]
        fn every_key_translates_to_non_empty_text(index in 0..translations::KEYS.len(), rtl in any::<bool>()) {
            let store = LocaleStore::new(if rtl { Locale::Ar } else { Locale::En });
            let key = translations::KEYS[index];
            prop_assert!(!store.translate(key).is_empty());
        }

        #[test]
        fn unknown_keys_fall_back_to_themselves(key in "[a-zA-Z_.]{0,24}", rtl in any::<bool>()) {
            prop_assume!(!translations::KEYS.contains(&key.as_str()));
            let store = LocaleStore::new(if rtl { Locale::Ar } else { Locale::En });
            prop_assert_eq!(store.translate(&key), key.as_str());
        }

        #[test]
        fn direction_is_rtl_only_for_arabic(codes in proptest::collection::vec(prop_oneof![Just("en"), Just("ar")], 1..8)) {
            let root = RecordingRoot::default();
            let mut store = LocaleStore::default();
            for code in &codes {
                store.set_language(code, &root).unwrap();
                prop_assert_eq!(store.is_right_to_left(), *code == "ar");
            }
        }
    }
}

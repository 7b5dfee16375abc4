use super::*;
use crate::test_support::FakeElement;
use crate::util::storage::MemoryStore;

const KEY: &str = "portfolio-theme";

// =============================================================
// Helpers
// =============================================================

fn buttons() -> Vec<(FakeElement, Option<String>)> {
    Theme::ALL
        .into_iter()
        .map(|theme| (FakeElement::new(), Some(theme.as_str().to_owned())))
        .collect()
}

fn active_buttons(buttons: &[(FakeElement, Option<String>)]) -> Vec<String> {
    buttons
        .iter()
        .filter(|(button, _)| button.has_class("active"))
        .filter_map(|(_, name)| name.clone())
        .collect()
}

// =============================================================
// Theme names and tokens
// =============================================================

#[test]
fn default_theme_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn names_parse_back_to_themes() {
    for theme in Theme::ALL {
        assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        assert_eq!(theme.to_string(), theme.as_str());
    }
}

#[test]
fn unknown_name_fails_to_parse() {
    assert_eq!("sepia".parse::<Theme>(), Err(ThemeError::Unknown("sepia".into())));
    assert!("Dark".parse::<Theme>().is_err());
}

#[test]
fn variants_layer_on_dark() {
    assert_eq!(Theme::Light.class_tokens(), ["light"]);
    assert_eq!(Theme::Dark.class_tokens(), ["dark"]);
    assert_eq!(Theme::Neon.class_tokens(), ["dark", "theme-neon"]);
    assert_eq!(Theme::Gradient.class_tokens(), ["dark", "theme-gradient"]);
}

// =============================================================
// Loading
// =============================================================

#[test]
fn load_without_stored_value_uses_fallback() {
    let controller = ThemeController::load(MemoryStore::new(), KEY, Theme::Dark);
    assert_eq!(controller.current(), Theme::Dark);
}

#[test]
fn load_restores_stored_theme() {
    let controller = ThemeController::load(MemoryStore::with(KEY, "gradient"), KEY, Theme::Dark);
    assert_eq!(controller.current(), Theme::Gradient);
}

#[test]
fn load_with_garbage_value_uses_fallback() {
    let controller = ThemeController::load(MemoryStore::with(KEY, "sepia"), KEY, Theme::Light);
    assert_eq!(controller.current(), Theme::Light);
}

// =============================================================
// set_theme
// =============================================================

#[test]
fn set_theme_applies_mapping_buttons_and_storage() {
    for theme in Theme::ALL {
        let store = MemoryStore::new();
        let mut controller = ThemeController::load(&store, KEY, Theme::Dark);
        let root = FakeElement::new().with_classes(&["light", "theme-neon", "page"]);
        let buttons = buttons();

        let applied = controller.set_theme(theme.as_str(), &root, &buttons).unwrap();

        assert_eq!(applied, theme);
        let mut expected: Vec<String> = theme.class_tokens().iter().map(|c| (*c).to_owned()).collect();
        expected.push("page".to_owned());
        expected.sort();
        assert_eq!(root.classes(), expected);
        assert_eq!(active_buttons(&buttons), vec![theme.as_str().to_owned()]);
        assert_eq!(store.load(KEY).as_deref(), Some(theme.as_str()));
    }
}

#[test]
fn set_theme_twice_is_idempotent() {
    let store = MemoryStore::new();
    let mut controller = ThemeController::load(&store, KEY, Theme::Dark);
    let root = FakeElement::new();
    let buttons = buttons();

    controller.set_theme("neon", &root, &buttons).unwrap();
    let once = (root.classes(), active_buttons(&buttons), store.load(KEY));
    controller.set_theme("neon", &root, &buttons).unwrap();
    let twice = (root.classes(), active_buttons(&buttons), store.load(KEY));

    assert_eq!(once, twice);
}

#[test]
fn unknown_theme_leaves_everything_untouched() {
    let store = MemoryStore::new();
    let mut controller = ThemeController::load(&store, KEY, Theme::Dark);
    let root = FakeElement::new();
    let buttons = buttons();
    controller.set_theme("light", &root, &buttons).unwrap();

    let err = controller.set_theme("sepia", &root, &buttons).unwrap_err();

    assert_eq!(err, ThemeError::Unknown("sepia".into()));
    assert_eq!(controller.current(), Theme::Light);
    assert_eq!(root.classes(), vec!["light".to_owned()]);
    assert_eq!(active_buttons(&buttons), vec!["light".to_owned()]);
    assert_eq!(store.load(KEY).as_deref(), Some("light"));
}

#[test]
fn button_without_declared_theme_is_never_active() {
    let buttons = vec![(FakeElement::new().with_classes(&["active"]), None)];
    sync_buttons(&buttons, Theme::Dark);
    assert!(!buttons[0].0.has_class("active"));
}

#[test]
fn render_reflects_loaded_theme() {
    let controller = ThemeController::load(MemoryStore::with(KEY, "light"), KEY, Theme::Dark);
    let root = FakeElement::new().with_classes(&["dark"]);
    let buttons = buttons();
    controller.render(&root, &buttons);
    assert_eq!(root.classes(), vec!["light".to_owned()]);
    assert_eq!(active_buttons(&buttons), vec!["light".to_owned()]);
}

#[test]
fn rescanned_buttons_all_reflect_change() {
    let store = MemoryStore::new();
    let mut controller = ThemeController::load(&store, KEY, Theme::Dark);
    let root = FakeElement::new();
    let initial = buttons();
    controller.set_theme("dark", &root, &initial).unwrap();

    let mut rescanned = buttons();
    rescanned.push((FakeElement::new(), Some("light".to_owned())));
    controller.set_theme("light", &root, &rescanned).unwrap();

    assert_eq!(active_buttons(&rescanned), vec!["light".to_owned(), "light".to_owned()]);
}

use super::*;

#[test]
fn from_stored_defaults_to_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("DARK")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
}

#[test]
fn from_stored_reads_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn toggled_flips_and_round_trips_through_storage_value() {
    for theme in [Theme::Light, Theme::Dark] {
        let next = theme.toggled();
        assert_ne!(next, theme);
        assert_eq!(Theme::from_stored(Some(next.as_str())), next);
        assert_eq!(next.toggled(), theme);
    }
}

#[test]
fn toggle_label_names_the_other_mode() {
    assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
    assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
}

#[test]
fn from_is_dark_matches_is_dark() {
    assert!(Theme::from_is_dark(true).is_dark());
    assert!(!Theme::from_is_dark(false).is_dark());
}

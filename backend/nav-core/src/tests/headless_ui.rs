use crate::ui::{HeadlessUi, SelectOption, UiState, Widget};

#[test]
fn given_headless_ui_when_setters_called_then_snapshot_reflects_them() {
    let ui = HeadlessUi::new();

    ui.set_options(Widget::Source, vec![SelectOption::new("Library")]);
    ui.set_options(Widget::Destination, vec![SelectOption::placeholder("Loading")]);
    ui.set_message("Path: A → B");
    ui.set_error_style(true);

    let snapshot = ui.snapshot();
    assert_eq!(snapshot.options(Widget::Source)[0].value, "Library");
    assert!(!snapshot.options(Widget::Source)[0].disabled);
    assert!(snapshot.options(Widget::Destination)[0].disabled);
    assert_eq!(snapshot.options(Widget::Destination)[0].value, "");
    assert_eq!(snapshot.message, "Path: A → B");
    assert!(snapshot.error_style);
    assert_eq!(snapshot.mutations, 4);
}

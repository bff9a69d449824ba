//! Tests for the state module.

use std::time::Duration;

use rust_decimal::Decimal;

use super::{App, Focus, FormMode};
use crate::commands::{AppCommand, InputContext};
use crate::constants::DELETED_MESSAGE;
use crate::domain::{Category, Field, FieldError};
use crate::test_utils::{AppMother, ExpenseMother};

// ========================================================================
// Test Helper Functions
// ========================================================================

/// Types `text` into the active form field.
fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.execute_command(AppCommand::TypeChar(c));
    }
}

/// Fills the whole form through commands, leaving focus on the category.
fn fill_form(app: &mut App, description: &str, amount: &str, category: Option<Category>) {
    app.form.clear();
    type_text(app, description);
    app.execute_command(AppCommand::NextField);
    type_text(app, amount);
    app.execute_command(AppCommand::NextField);
    while app.form.category != category {
        app.execute_command(AppCommand::NextCategory);
    }
}

fn descriptions(app: &App) -> Vec<&str> {
    app.store
        .records()
        .iter()
        .map(|r| r.description.as_str())
        .collect()
}

// ========================================================================
// Submit (create) Tests
// ========================================================================

#[test]
fn test_submit_appends_record_and_clears_form() {
    let mut app = AppMother::empty();
    fill_form(&mut app, "Milk", "3", Some(Category::Other));

    app.execute_command(AppCommand::Submit);

    assert_eq!(app.store.len(), 1);
    assert_eq!(
        app.store.records()[0].to_draft(),
        ExpenseMother::draft("Milk", 3, Category::Other)
    );
    assert_eq!(app.form.description, "");
    assert_eq!(app.form.amount, "");
    assert_eq!(app.form.category, None);
    assert_eq!(app.form.mode, FormMode::Idle);
}

#[test]
fn test_submit_with_empty_description_is_rejected() {
    let mut app = AppMother::fruit_and_other();
    fill_form(&mut app, "", "3", Some(Category::Other));

    assert_eq!(app.submit(), None);

    assert_eq!(
        app.form.errors.description,
        Some(FieldError::Required(Field::Description))
    );
    assert_eq!(descriptions(&app), vec!["A", "B"]);
    assert_eq!(app.form.amount, "3", "typed values survive a rejection");
}

#[test]
fn test_amount_boundaries() {
    struct TestCase {
        amount: &'static str,
        expected_error: Option<FieldError>,
    }

    let cases = [
        TestCase {
            amount: "11",
            expected_error: Some(FieldError::OutOfRange { max: Decimal::TEN }),
        },
        TestCase {
            amount: "10",
            expected_error: None,
        },
        TestCase {
            amount: "5",
            expected_error: None,
        },
        TestCase {
            amount: "",
            expected_error: Some(FieldError::Required(Field::Amount)),
        },
    ];

    for case in &cases {
        let mut app = AppMother::empty();
        fill_form(&mut app, "Cheese", case.amount, Some(Category::Other));
        app.execute_command(AppCommand::Submit);

        assert_eq!(
            app.form.errors.amount, case.expected_error,
            "amount {:?}",
            case.amount
        );
        let expected_len = usize::from(case.expected_error.is_none());
        assert_eq!(app.store.len(), expected_len, "amount {:?}", case.amount);
    }
}

#[test]
fn test_placeholder_category_is_rejected() {
    let mut app = AppMother::empty();
    fill_form(&mut app, "Soap", "2", None);

    app.execute_command(AppCommand::Submit);

    assert_eq!(
        app.form.errors.category,
        Some(FieldError::Required(Field::Category))
    );
    assert!(app.store.is_empty());
}

#[test]
fn test_configured_max_amount_is_honoured() {
    let mut app = AppMother::empty();
    app.config.max_amount = Decimal::from(50);
    fill_form(&mut app, "Basket", "42", Some(Category::Fruits));

    assert!(app.submit().is_some());
    assert_eq!(app.store.records()[0].amount, Decimal::from(42));
}

// ========================================================================
// Filter Tests
// ========================================================================

#[test]
fn test_filter_selects_matching_records() {
    let mut app = AppMother::fruit_and_other();

    app.set_filter(Some(Category::Fruits));
    let visible: Vec<_> = app.visible_records().into_iter().cloned().collect();
    assert_eq!(visible.len(), 1);
    assert_eq!(
        visible[0].to_draft(),
        ExpenseMother::draft("A", 1, Category::Fruits)
    );

    app.set_filter(None);
    let names: Vec<_> = app
        .visible_records()
        .into_iter()
        .map(|r| r.description.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn test_filter_commands_cycle_and_reset_selection() {
    let mut app = AppMother::fruit_and_other();
    app.ui.focus = Focus::Table;
    app.execute_command(AppCommand::MoveDown);
    app.execute_command(AppCommand::MoveDown);
    assert_eq!(app.ui.selected_row, Some(1));

    app.execute_command(AppCommand::NextFilter);
    assert_eq!(app.filter, Some(Category::Fruits));
    assert_eq!(app.ui.selected_row, Some(0));

    app.execute_command(AppCommand::NextFilter);
    assert_eq!(app.filter, Some(Category::Vegetables));
    assert_eq!(app.ui.selected_row, None, "empty view has no selection");

    app.execute_command(AppCommand::PrevFilter);
    app.execute_command(AppCommand::PrevFilter);
    assert_eq!(app.filter, None);
}

// ========================================================================
// Edit Tests
// ========================================================================

#[test]
fn test_edit_replaces_record_in_place() {
    let mut app = AppMother::fruit_and_other();
    app.ui.focus = Focus::Table;
    app.ui.selected_row = Some(0);

    app.execute_command(AppCommand::EditSelected);
    assert_eq!(app.ui.focus, Focus::Form);
    assert_eq!(app.form.description, "A");
    assert_eq!(app.form.amount, "1");
    assert_eq!(app.form.category, Some(Category::Fruits));

    app.execute_command(AppCommand::NextField);
    app.execute_command(AppCommand::Backspace);
    type_text(&mut app, "7");
    app.execute_command(AppCommand::Submit);

    assert_eq!(app.store.len(), 2);
    let first = &app.store.records()[0];
    assert_eq!(first.description, "A");
    assert_eq!(first.amount, Decimal::from(7));
    assert_eq!(first.category, Category::Fruits);
    assert_eq!(app.form.mode, FormMode::Idle);
    assert_eq!(app.form.description, "");
}

#[test]
fn test_invalid_edit_keeps_editing_state() {
    let mut app = AppMother::fruit_and_other();
    let id = app.store.records()[1].id;
    app.edit(id);

    app.execute_command(AppCommand::NextField);
    type_text(&mut app, "9");
    app.execute_command(AppCommand::Submit);

    assert!(matches!(
        app.form.errors.amount,
        Some(FieldError::OutOfRange { .. })
    ));
    assert_eq!(app.form.mode, FormMode::Editing(id));
    assert_eq!(app.store.records()[1].amount, Decimal::from(2));
}

#[test]
fn test_dismiss_cancels_edit_then_leaves_form() {
    let mut app = AppMother::fruit_and_other();
    let id = app.store.records()[0].id;
    app.edit(id);
    assert_eq!(app.input_context(), InputContext::Form);

    app.execute_command(AppCommand::Dismiss);
    assert_eq!(app.form.mode, FormMode::Idle);
    assert_eq!(app.form.description, "");
    assert_eq!(app.ui.focus, Focus::Form);
    assert_eq!(descriptions(&app), vec!["A", "B"]);

    app.execute_command(AppCommand::Dismiss);
    assert_eq!(app.input_context(), InputContext::Table);
}

#[test]
fn test_edit_under_filter_targets_visible_record() {
    let mut app = AppMother::with_records(vec![
        ExpenseMother::draft("Loaf", 4, Category::Bread),
        ExpenseMother::draft("Kiwi", 2, Category::Fruits),
    ]);
    app.ui.focus = Focus::Table;
    app.set_filter(Some(Category::Fruits));
    let rows = app.visible_records().len();
    app.ui.clamp_selection(rows);

    app.execute_command(AppCommand::EditSelected);
    assert_eq!(app.form.description, "Kiwi");

    app.execute_command(AppCommand::NextField);
    app.execute_command(AppCommand::Backspace);
    type_text(&mut app, "3");
    app.execute_command(AppCommand::Submit);

    assert_eq!(app.store.records()[0].amount, Decimal::from(4));
    assert_eq!(app.store.records()[1].amount, Decimal::from(3));
}

// ========================================================================
// Delete Tests
// ========================================================================

#[tokio::test]
async fn test_delete_under_filter_removes_visible_record() {
    let mut app = AppMother::with_records(vec![
        ExpenseMother::draft("Loaf", 4, Category::Bread),
        ExpenseMother::draft("Kiwi", 2, Category::Fruits),
        ExpenseMother::draft("Pear", 1, Category::Fruits),
    ]);
    app.ui.focus = Focus::Table;
    app.execute_command(AppCommand::NextFilter);
    assert_eq!(app.ui.selected_row, Some(0));

    // Filtered row 0 is "Kiwi"; store position 0 ("Loaf") must survive.
    app.execute_command(AppCommand::DeleteSelected);

    assert_eq!(descriptions(&app), vec!["Loaf", "Pear"]);
    assert_eq!(app.ui.selected_row, Some(0));
    assert_eq!(app.notification.message(), Some(DELETED_MESSAGE));
}

#[tokio::test]
async fn test_deleting_edited_record_cancels_edit() {
    let mut app = AppMother::fruit_and_other();
    let id = app.store.records()[0].id;
    app.edit(id);

    assert!(app.delete(id).is_some());

    assert_eq!(app.form.mode, FormMode::Idle);
    assert_eq!(app.form.description, "");
    assert_eq!(descriptions(&app), vec!["B"]);
}

#[test]
#[should_panic(expected = "Tokio 1.x runtime")]
fn test_delete_outside_runtime_panics() {
    let mut app = AppMother::fruit_and_other();
    let id = app.store.records()[0].id;
    app.delete(id);
}

#[test]
fn test_table_actions_on_empty_view_do_nothing() {
    let mut app = AppMother::empty();
    app.ui.focus = Focus::Table;

    app.execute_command(AppCommand::DeleteSelected);
    app.execute_command(AppCommand::EditSelected);

    assert_eq!(app.notification.message(), None);
    assert_eq!(app.form.mode, FormMode::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_delete_banner_hides_after_duration() {
    let mut app = AppMother::fruit_and_other();
    let id = app.store.records()[0].id;

    app.delete(id);
    assert_eq!(app.notification.message(), Some(DELETED_MESSAGE));

    tokio::time::sleep(Duration::from_millis(2_900)).await;
    app.process_messages();
    assert_eq!(app.notification.message(), Some(DELETED_MESSAGE));

    tokio::time::sleep(Duration::from_millis(200)).await;
    app.process_messages();
    assert_eq!(app.notification.message(), None);
}

#[tokio::test(start_paused = true)]
async fn test_second_delete_restarts_banner_timer() {
    let mut app = AppMother::fruit_and_other();
    let first = app.store.records()[0].id;
    let second = app.store.records()[1].id;

    app.delete(first);
    tokio::time::sleep(Duration::from_secs(2)).await;
    app.delete(second);

    tokio::time::sleep(Duration::from_millis(1_500)).await;
    app.process_messages();
    assert_eq!(
        app.notification.message(),
        Some(DELETED_MESSAGE),
        "restarted timer still running"
    );

    tokio::time::sleep(Duration::from_millis(1_600)).await;
    app.process_messages();
    assert_eq!(app.notification.message(), None);
}

// ========================================================================
// Application Control
// ========================================================================

#[test]
fn test_quit_sets_exit() {
    let mut app = AppMother::empty();
    app.execute_command(AppCommand::Quit);
    assert!(app.exit);
}

#[test]
fn test_category_keys_only_apply_on_category_field() {
    let mut app = AppMother::empty();
    app.execute_command(AppCommand::NextCategory);
    assert_eq!(app.form.category, None);

    app.execute_command(AppCommand::PrevField);
    assert_eq!(app.form.active_field, Field::Category);
    app.execute_command(AppCommand::PrevCategory);
    assert_eq!(app.form.category, Some(Category::Other));
}

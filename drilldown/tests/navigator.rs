use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use drilldown::{
    layout, render::render_to_buffer, Buffer, Config, Dataset, Entry, Event, EventResult, Key,
    Modifiers, MouseButton, Navigator, Rect, Record,
};

const WIDTH: u16 = 20;
const HEIGHT: u16 = 15;

fn dataset() -> Dataset {
    vec![
        Entry::branch(
            Record::new().field("text", "Buildings"),
            vec![
                Entry::leaf(
                    Record::new().field("text", "New building"),
                    Record::new()
                        .field("text", "New building")
                        .field("permit-type", "R"),
                ),
                Entry::branch(
                    Record::new().field("text", "Extensions"),
                    vec![Entry::leaf(
                        Record::new().field("text", "Extension"),
                        Record::new()
                            .field("text", "Extension")
                            .field("permit-type", "R"),
                    )],
                ),
            ],
        ),
        Entry::branch(
            Record::new().field("text", "Demolition"),
            vec![Entry::leaf(
                Record::new().field("text", "Full demolition"),
                Record::new()
                    .field("text", "Full demolition")
                    .field("permit-type", "P"),
            )],
        ),
        Entry::leaf(
            Record::new().field("text", "Advice"),
            Record::new()
                .field("text", "Advice")
                .field("permit-type", "neuvonta"),
        ),
    ]
}

type SelectLog = Rc<RefCell<Vec<Option<String>>>>;

/// Navigator with zero-duration slides (committed by the internal tick
/// on the next event) and a log of every on_select notification.
fn navigator(speed: Duration) -> (Navigator, SelectLog) {
    let log: SelectLog = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let config = Config::new()
        .width(WIDTH)
        .speed(speed)
        .base_model(Record::new().field("title", "Select operation"))
        .on_select(move |record| {
            sink.borrow_mut()
                .push(record.and_then(|r| r.get("text")).map(str::to_string));
        });
    (Navigator::new(config), log)
}

fn instant_navigator() -> (Navigator, SelectLog) {
    let (mut nav, log) = navigator(Duration::ZERO);
    nav.reset(dataset());
    nav.tick();
    (nav, log)
}

fn click(nav: &mut Navigator, id: &str) -> EventResult {
    nav.handle_event(&Event::Click {
        target: Some(id.to_string()),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    })
}

fn click_row(nav: &mut Navigator, index: usize) -> EventResult {
    let id = nav.row_ids()[index].clone();
    let result = click(nav, &id);
    nav.tick();
    result
}

fn render(nav: &Navigator) -> Buffer {
    let root = nav.element();
    let result = layout(&root, Rect::from_size(WIDTH, HEIGHT));
    let mut buf = Buffer::new(WIDTH, HEIGHT);
    render_to_buffer(&root, &result, &mut buf);
    buf
}

fn buffers_equal(a: &Buffer, b: &Buffer) -> bool {
    a.diff(b).count() == 0
}

// =============================================================================
// Reset and root page
// =============================================================================

#[test]
fn test_reset_clears_stack_and_renders_root_rows() {
    let (nav, log) = instant_navigator();

    assert_eq!(nav.depth(), 0);
    assert!(nav.selected().is_none());
    assert_eq!(nav.row_ids().len(), 3);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_reset_then_go_start_is_identity() {
    let (mut nav, _log) = instant_navigator();
    let initial = render(&nav);

    click_row(&mut nav, 0);
    click_row(&mut nav, 1);
    nav.go_start();
    nav.tick();

    assert_eq!(nav.depth(), 0);
    assert!(nav.selected().is_none());
    assert!(buffers_equal(&initial, &render(&nav)));
}

#[test]
fn test_reset_with_active_selection_notifies_clear() {
    let (mut nav, log) = instant_navigator();

    click_row(&mut nav, 2); // leaf at root level
    assert_eq!(log.borrow().as_slice(), [Some("Advice".to_string())]);

    nav.reset(dataset());
    nav.tick();
    assert_eq!(
        log.borrow().as_slice(),
        [Some("Advice".to_string()), None]
    );
    assert!(nav.selected().is_none());
}

// =============================================================================
// Branch navigation
// =============================================================================

#[test]
fn test_branch_clicks_grow_stack_in_order() {
    let (mut nav, log) = instant_navigator();

    click_row(&mut nav, 0); // Buildings
    assert_eq!(nav.depth(), 1);
    click_row(&mut nav, 1); // Extensions
    assert_eq!(nav.depth(), 2);

    let stack: Vec<_> = nav
        .stack()
        .iter()
        .map(|r| r.get("text").unwrap().to_string())
        .collect();
    assert_eq!(stack, ["Buildings", "Extensions"]);
    assert!(log.borrow().is_empty(), "branch clicks never select");
}

#[test]
fn test_branch_click_shows_child_rows() {
    let (mut nav, _log) = instant_navigator();

    click_row(&mut nav, 0); // Buildings
    assert_eq!(nav.row_ids().len(), 2);

    click_row(&mut nav, 1); // Extensions
    assert_eq!(nav.row_ids().len(), 1);
}

#[test]
fn test_click_on_unknown_target_is_ignored() {
    let (mut nav, log) = instant_navigator();

    let result = click(&mut nav, "not-a-row");
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(nav.depth(), 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_click_outside_any_row_is_ignored() {
    let (mut nav, _log) = instant_navigator();

    let result = nav.handle_event(&Event::Click {
        target: None,
        x: 0,
        y: 0,
        button: MouseButton::Left,
    });
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(nav.depth(), 0);
}

// =============================================================================
// Leaf selection
// =============================================================================

#[test]
fn test_leaf_click_sets_selection_and_notifies_once() {
    let (mut nav, log) = instant_navigator();

    click_row(&mut nav, 0); // Buildings
    click_row(&mut nav, 0); // New building (leaf)

    assert_eq!(nav.depth(), 2, "leaf entry still grows the stack");
    let selected = nav.selected().expect("selection set");
    assert_eq!(selected.get("permit-type"), Some("R"));
    assert_eq!(log.borrow().as_slice(), [Some("New building".to_string())]);
}

#[test]
fn test_back_after_leaf_clears_selection() {
    let (mut nav, log) = instant_navigator();

    click_row(&mut nav, 0);
    click_row(&mut nav, 0); // leaf
    assert!(nav.back());
    nav.tick();

    assert!(nav.selected().is_none());
    assert_eq!(nav.depth(), 1);
    assert_eq!(
        log.borrow().as_slice(),
        [Some("New building".to_string()), None]
    );
    // The preceding branch page is showing again
    assert_eq!(nav.row_ids().len(), 2);
}

// =============================================================================
// Back
// =============================================================================

#[test]
fn test_back_on_empty_stack_is_noop() {
    let (mut nav, log) = instant_navigator();
    let before = render(&nav);

    assert!(!nav.back());
    nav.tick();

    assert_eq!(nav.depth(), 0);
    assert!(log.borrow().is_empty());
    assert!(buffers_equal(&before, &render(&nav)));
}

#[test]
fn test_back_from_branch_does_not_notify() {
    let (mut nav, log) = instant_navigator();

    click_row(&mut nav, 0);
    assert!(nav.back());
    nav.tick();

    assert_eq!(nav.depth(), 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_n_clicks_then_n_backs_restores_root_state() {
    let (mut nav, _log) = instant_navigator();
    let initial = render(&nav);

    click_row(&mut nav, 0); // Buildings
    click_row(&mut nav, 1); // Extensions
    assert!(nav.back());
    nav.tick();
    assert!(nav.back());
    nav.tick();

    assert_eq!(nav.depth(), 0);
    assert!(nav.selected().is_none());
    assert!(buffers_equal(&initial, &render(&nav)));
}

// =============================================================================
// Transition serialization
// =============================================================================

#[test]
fn test_clicks_during_slide_are_dropped() {
    let (mut nav, log) = navigator(Duration::from_secs(3600));
    nav.reset(dataset());

    // The slide-in never completes, so every click is dropped.
    assert!(nav.is_sliding());
    let result = nav.handle_event(&Event::Click {
        target: Some("anything".to_string()),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    });
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(nav.depth(), 0);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_forward_slide_drops_second_click() {
    let (mut nav, _log) = navigator(Duration::from_millis(25));
    nav.reset(dataset());
    std::thread::sleep(Duration::from_millis(80));
    nav.tick();
    assert!(!nav.is_sliding());

    let rows = nav.row_ids();
    click(&mut nav, &rows[0]);
    assert!(nav.is_sliding());

    // Second click mid-slide: no observable effect on the stack.
    let result = click(&mut nav, &rows[1]);
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(nav.depth(), 1);

    std::thread::sleep(Duration::from_millis(80));
    nav.tick();
    assert!(!nav.is_sliding());
    assert_eq!(nav.depth(), 1);
}

#[test]
fn test_back_during_slide_is_dropped() {
    let (mut nav, _log) = navigator(Duration::from_secs(3600));
    nav.reset(dataset());

    assert!(!nav.back());
    assert_eq!(nav.depth(), 0);
}

// =============================================================================
// Key bindings
// =============================================================================

#[test]
fn test_backspace_goes_back() {
    let (mut nav, _log) = instant_navigator();

    click_row(&mut nav, 0);
    let result = nav.handle_event(&Event::Key {
        key: Key::Backspace,
        modifiers: Modifiers::new(),
    });
    nav.tick();

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(nav.depth(), 0);
}

#[test]
fn test_home_returns_to_start() {
    let (mut nav, _log) = instant_navigator();

    click_row(&mut nav, 0);
    click_row(&mut nav, 1);
    let result = nav.handle_event(&Event::Key {
        key: Key::Home,
        modifiers: Modifiers::new(),
    });
    nav.tick();

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(nav.depth(), 0);
    assert_eq!(nav.row_ids().len(), 3);
}

// =============================================================================
// Nav controls
// =============================================================================

#[test]
fn test_nav_back_button_routes_to_back() {
    let (mut nav, _log) = instant_navigator();

    click_row(&mut nav, 0);
    let result = click(&mut nav, drilldown::NAV_BACK_ID);
    nav.tick();

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(nav.depth(), 0);
}

#[test]
fn test_nav_back_button_on_root_is_ignored() {
    let (mut nav, _log) = instant_navigator();

    let result = click(&mut nav, drilldown::NAV_BACK_ID);
    assert_eq!(result, EventResult::Ignored);
}

#[test]
fn test_nav_start_button_resets() {
    let (mut nav, _log) = instant_navigator();

    click_row(&mut nav, 0);
    click_row(&mut nav, 0); // leaf
    let result = click(&mut nav, drilldown::NAV_START_ID);
    nav.tick();

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(nav.depth(), 0);
    assert!(nav.selected().is_none());
}

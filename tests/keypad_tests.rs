//! End-to-end keypad scenarios, driven by key names the way a surface
//! would forward them.

use abacus::adapter::{render, render_if_changed, Frame, Keypad, KeypadConfig, RecordingSurface};
use abacus::api;
use chrono::{DateTime, Duration, Utc};
use stillwater::effect::Effect;

fn at(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(1_700_000_000_000 + ms).unwrap()
}

fn run(keys: &[&str]) -> Frame {
    let mut keypad = Keypad::default();
    let mut frame = keypad.frame();
    for key in keys {
        if let Some(next) = keypad.key(key, at(0)) {
            frame = next;
        }
    }
    frame
}

#[test]
fn chained_operations_have_no_precedence() {
    assert_eq!(run(&["2", "+", "3", "*", "4", "="]).text, "20");
}

#[test]
fn fractional_results_are_clean() {
    assert_eq!(run(&["0", ".", "1", "+", "0", ".", "2", "="]).text, "0.3");
    assert_eq!(run(&["1", "/", "4", "="]).text, "0.25");
    assert_eq!(run(&["1", "0", "/", "2", "="]).text, "5");
}

#[test]
fn operator_pressed_twice_is_replaced() {
    assert_eq!(run(&["5", "+", "*", "3", "="]).text, "15");
}

#[test]
fn equals_without_second_operand_keeps_display() {
    assert_eq!(run(&["8", "-", "="]).text, "8");
}

#[test]
fn repeated_decimal_points_are_ignored() {
    assert_eq!(run(&["1", ".", ".", "5", "."]).text, "1.5");
}

#[test]
fn backspace_falls_back_to_zero() {
    assert_eq!(run(&["7", "Backspace"]).text, "0");
    assert_eq!(run(&["7", "Backspace", "Backspace"]).text, "0");
}

#[test]
fn long_entries_switch_to_exponential() {
    let keys: Vec<String> = "1234567890123".chars().map(String::from).collect();
    let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
    assert_eq!(run(&keys).text, "1.234568e+12");
}

#[test]
fn unknown_keys_are_ignored() {
    assert_eq!(run(&["4", "Shift", "x", "2"]).text, "42");
}

#[test]
fn divide_by_zero_recovers_after_delay() {
    let config = KeypadConfig::default().with_error_dismiss(std::time::Duration::from_millis(1500));
    let mut keypad = Keypad::new(config);
    for key in ["5", "/", "0", "="] {
        keypad.key(key, at(0));
    }
    assert_eq!(keypad.frame().text, "Error");
    assert_eq!(keypad.accumulator().entry().as_str(), "0");

    keypad.tick(at(0) + Duration::milliseconds(1000));
    assert_eq!(keypad.frame().text, "Error");

    keypad.tick(at(0) + Duration::milliseconds(1500));
    assert_eq!(keypad.frame().text, "0");
    assert!(keypad.accumulator().pending_operator().is_none());
}

#[test]
fn independent_keypads_do_not_share_state() {
    let mut left = Keypad::default();
    let mut right = Keypad::default();
    left.key("3", at(0));
    right.key("9", at(0));
    assert_eq!(left.frame().text, "3");
    assert_eq!(right.frame().text, "9");
}

#[test]
fn keypad_and_api_agree_on_results() {
    let reply = api::handle(r#"{"num1": "10", "num2": 4, "operator": "/"}"#);
    assert_eq!(reply.status, 200);
    assert_eq!(reply.body, r#"{"result":2.5}"#);
    assert_eq!(run(&["1", "0", "/", "4", "="]).text, "2.5");
}

#[tokio::test]
async fn frames_reach_the_surface() {
    let surface = RecordingSurface::new();
    let mut keypad = Keypad::default();

    for key in ["9", "*", "9", "="] {
        if let Some(frame) = keypad.key(key, at(0)) {
            render(frame).run(&surface).await.unwrap();
        }
    }
    render_if_changed(keypad.tick(at(500)))
        .run(&surface)
        .await
        .unwrap();

    let frames = surface.frames();
    assert_eq!(frames.len(), 5);
    assert_eq!(frames[3].text, "81");
    assert!(frames[3].pressed.is_some());
    assert!(frames[4].pressed.is_none());
}

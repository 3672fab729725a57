//! Key bindings and paste

use super::common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use task_review::app::Focus;
use task_review::config::RenderPolicy;
use task_review_sdk::Strategy;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[tokio::test]
async fn test_typing_then_analyze_with_ctrl_r() {
    let api = Arc::new(FakeApi {
        tasks: Some(vec![scored("Typed", 0.8)]),
        ..Default::default()
    });
    let mut app = app_with(api.clone(), RenderPolicy::LatestRequest);
    assert_eq!(app.focus, Focus::Input);

    // 'q' is text while editing
    for c in "[{}q".chars() {
        app.handle_key(press(KeyCode::Char(c)));
    }
    assert!(!app.should_quit);
    app.handle_key(press(KeyCode::Backspace));
    app.handle_key(press(KeyCode::Char(']')));
    assert_eq!(app.input.text(), "[{}]");

    app.handle_key(ctrl('r'));
    settle(&mut app).await;
    assert_eq!(api.call_count(), 1);
    assert_eq!(app.review.as_ref().unwrap().view.cards()[0].heading, "Typed");
}

#[tokio::test]
async fn test_results_navigation_and_expand() {
    let api = Arc::new(FakeApi {
        tasks: Some(vec![scored("one", 0.9), scored("two", 0.5), scored("three", 0.1)]),
        ..Default::default()
    });
    let mut app = app_with(api, RenderPolicy::LatestRequest).with_input("[{}, {}, {}]");

    app.handle_key(press(KeyCode::Esc));
    assert_eq!(app.focus, Focus::Results);
    app.handle_key(press(KeyCode::Char('a')));
    settle(&mut app).await;

    app.handle_key(press(KeyCode::Char('j')));
    app.handle_key(press(KeyCode::Down));
    app.handle_key(press(KeyCode::Down));
    assert_eq!(app.selected_card, 2);
    app.handle_key(press(KeyCode::Char('k')));
    assert_eq!(app.selected_card, 1);

    app.handle_key(press(KeyCode::Enter));
    assert_eq!(app.expanded_card, Some(1));
    app.handle_key(press(KeyCode::Esc));
    assert_eq!(app.expanded_card, None);

    app.handle_key(press(KeyCode::Char('q')));
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_strategy_cycling_wraps() {
    let api = Arc::new(FakeApi::default());
    let mut app = app_with(api, RenderPolicy::LatestRequest);
    app.handle_key(press(KeyCode::Esc));

    app.handle_key(press(KeyCode::BackTab));
    assert_eq!(app.strategy, Strategy::Deadline);
    app.handle_key(press(KeyCode::Tab));
    assert_eq!(app.strategy, Strategy::Smart);
    app.handle_key(ctrl('t'));
    assert_eq!(app.strategy, Strategy::Fastest);
}

#[tokio::test]
async fn test_paste_moves_focus_to_input() {
    let api = Arc::new(FakeApi::default());
    let mut app = app_with(api, RenderPolicy::LatestRequest);
    app.handle_key(press(KeyCode::Esc));

    app.handle_paste("[\r\n  {\"title\": \"pasted\"}\r\n]");
    assert_eq!(app.focus, Focus::Input);
    assert_eq!(app.input.text(), "[\n  {\"title\": \"pasted\"}\n]");
}

#[tokio::test]
async fn test_clear_input() {
    let api = Arc::new(FakeApi::default());
    let mut app = app_with(api, RenderPolicy::LatestRequest).with_input("[1]");
    app.handle_key(press(KeyCode::Esc));
    app.handle_key(press(KeyCode::Char('c')));
    assert!(app.input.text().is_empty());

    app.handle_key(press(KeyCode::Char('s')));
    assert_eq!(
        banner(&app).as_deref(),
        Some("Paste tasks JSON into the textarea.")
    );
}

#[tokio::test]
async fn test_x_dismisses_banner_early() {
    let api = Arc::new(FakeApi::default());
    let mut app = app_with(api.clone(), RenderPolicy::LatestRequest).with_input("{}");
    app.handle_key(press(KeyCode::Esc));

    app.handle_key(press(KeyCode::Char('a')));
    assert_eq!(banner(&app).as_deref(), Some("JSON must be an array of tasks."));

    app.handle_key(press(KeyCode::Char('x')));
    assert!(banner(&app).is_none());
    assert_eq!(api.call_count(), 0);
}

//! Drawing the screen with a test backend

use super::common::*;
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use task_review::app::App;
use task_review::config::RenderPolicy;
use task_review::ui::ui;

fn draw(app: &App) -> String {
    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[tokio::test]
async fn test_empty_result_shows_placeholder() {
    let api = Arc::new(FakeApi {
        tasks: Some(Vec::new()),
        ..Default::default()
    });
    let mut app = app_with(api, RenderPolicy::LatestRequest).with_input("[]");
    app.submit_for_analysis();
    settle(&mut app).await;

    let screen = draw(&app);
    assert!(screen.contains("No tasks to show."));
    assert!(screen.contains("Task Review v"));
}

#[tokio::test]
async fn test_cards_show_priority_and_score() {
    let api = Arc::new(FakeApi {
        tasks: Some(vec![scored("Fix login", 0.75), scored("Tidy docs", 0.449)]),
        ..Default::default()
    });
    let mut app = app_with(api, RenderPolicy::LatestRequest).with_input("[{}, {}]");
    app.submit_for_analysis();
    settle(&mut app).await;

    let screen = draw(&app);
    assert!(screen.contains("[HIGH] Fix login  75%"));
    assert!(screen.contains("[LOW] Tidy docs  45%"));
    assert!(screen.contains("No due date"));
}

#[tokio::test]
async fn test_banner_and_expanded_card_are_drawn() {
    let api = Arc::new(FakeApi {
        tasks: Some(vec![scored("Fix login", 0.9)]),
        ..Default::default()
    });
    let mut app = app_with(api, RenderPolicy::LatestRequest).with_input("[{}]");
    app.submit_for_analysis();
    settle(&mut app).await;

    app.toggle_expanded();
    app.notifications.error("Network error: timed out");

    let screen = draw(&app);
    assert!(screen.contains("Details [Esc] Close"));
    assert!(screen.contains("Network error: timed out"));
}

mod helpers;

use anyhow::Result;
use chrono::{TimeZone, Utc};
use helpers::{fixture_ids, TestStore};
use runboard::application::{NoteFeed, RunViewer};
use runboard::infrastructure::HtmlWriter;
use runboard::ports::{HtmlPresenter, Theme};
use runboard::util::time::RelativeTime;

#[test]
fn given_fixture_feed_when_rendering_page_then_contains_every_note() -> Result<()> {
    // Arrange
    let test_store = TestStore::new()?;
    let root_run = RunViewer::new(test_store.open()?).view_run(fixture_ids::ROOT)?;
    let clock = RelativeTime::at(Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap());
    let views = NoteFeed::new(test_store.open()?).feed(&root_run, false, &clock)?;
    let presenter = HtmlPresenter::new();

    // Act
    let html = presenter.render_page("Notes: training_pipeline", &views);

    // Assert
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("<title>Notes: training_pipeline</title>"));
    assert!(html.contains("https://avatars.example.com/ada.png"));
    assert!(html.contains("Grace:"));
    assert!(html.contains(r#"<code style="color: #212121">abcdef</code>"#));
    assert!(html.contains(r#"<code style="color: #9e9e9e">zzzzzz</code>"#));
    assert!(!html.contains(fixture_ids::ROOT), "full ids must not be displayed");
    Ok(())
}

#[test]
fn given_custom_theme_when_rendering_then_uses_theme_colors() -> Result<()> {
    let test_store = TestStore::new()?;
    let root_run = RunViewer::new(test_store.open()?).view_run(fixture_ids::ROOT)?;
    let views = NoteFeed::new(test_store.open()?).feed(&root_run, true, &RelativeTime::new())?;
    let theme = Theme {
        emphasized: "#ff0000".to_string(),
        ..Theme::default()
    };
    let presenter = HtmlPresenter::with_theme(theme, 32);

    let html = presenter.render_page("Notes", &views);

    assert!(html.contains(r#"<code style="color: #ff0000">abcdef</code>"#));
    assert!(html.contains(r#"width="32""#));
    Ok(())
}

#[test]
fn given_rendered_page_when_writing_to_file_then_file_matches() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("notes.html");
    let html = HtmlPresenter::new().render_page("Notes", &[]);

    HtmlWriter::new().write_to(&path, &html)?;

    assert_eq!(std::fs::read_to_string(&path)?, html);
    Ok(())
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use fieldui::{DemoApp, DemoOptions, StoryCatalog, Theme, ThemeMode};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use serde_json::json;

fn catalog() -> StoryCatalog {
    StoryCatalog::from_value(json!({
        "title": "Demo",
        "stories": [
            {
                "name": "Search",
                "description": "clearable",
                "args": { "clearable": true, "defaultValue": "abc" }
            },
            {
                "name": "Secret",
                "args": {
                    "label": "Password",
                    "type": "password",
                    "showPasswordToggle": true,
                    "defaultValue": "pw"
                }
            },
            { "name": "Spinner", "args": { "loading": true, "defaultValue": "busy" } }
        ]
    }))
    .unwrap()
}

fn render(app: &mut DemoApp) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    terminal.draw(|frame| app.draw(frame)).unwrap();
    terminal.backend().buffer().clone()
}

fn find(buf: &Buffer, glyph: &str) -> Option<(u16, u16)> {
    let area = buf.area;
    (area.y..area.bottom())
        .flat_map(|y| (area.x..area.right()).map(move |x| (x, y)))
        .find(|&(x, y)| buf[(x, y)].symbol() == glyph)
}

fn click(x: u16, y: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    }
}

fn screen(buf: &Buffer) -> String {
    let area = buf.area;
    (area.y..area.bottom())
        .map(|y| {
            (area.x..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn page_shows_title_stories_and_help() {
    let mut app = DemoApp::new(catalog(), DemoOptions::default());
    let buf = render(&mut app);
    let text = screen(&buf);
    assert!(text.contains("Demo"));
    assert!(text.contains("» Search"));
    assert!(text.contains("Secret"));
    assert!(text.contains("Actions:"));
    assert!(text.contains("light mode"));
}

#[test]
fn clicking_clear_icon_clears_the_field() {
    let mut app = DemoApp::new(catalog(), DemoOptions::default());
    let buf = render(&mut app);
    let (x, y) = find(&buf, "×").expect("clear icon on screen");
    app.handle_mouse(click(x, y));
    assert_eq!(app.field(0).map(|field| field.value()), Some(""));
    assert_eq!(app.status_message(), "Cleared Search");
}

#[test]
fn clicking_toggle_reveals_password_and_focuses_field() {
    let mut app = DemoApp::new(catalog(), DemoOptions::default());
    let buf = render(&mut app);
    let (x, y) = find(&buf, "◉").expect("toggle icon on screen");
    app.handle_mouse(click(x, y));
    assert_eq!(app.focused(), 1);
    assert!(app.field(1).is_some_and(|field| field.password_visible()));
    let buf = render(&mut app);
    assert!(screen(&buf).contains("pw"));
}

#[test]
fn loading_story_ignores_typing_and_spins() {
    let mut app = DemoApp::new(catalog(), DemoOptions::default());
    app.handle_key(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
    assert_eq!(app.story_name(app.focused()), Some("Spinner"));
    app.handle_key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE));
    assert_eq!(app.field(2).map(|field| field.value()), Some("busy"));

    let first = render(&mut app);
    app.on_tick();
    let second = render(&mut app);
    assert!(find(&first, "⠋").is_some());
    assert!(find(&second, "⠙").is_some());
}

#[test]
fn dark_mode_repaints_the_page() {
    let mut app = DemoApp::new(catalog(), DemoOptions::default().with_title("Custom"));
    app.handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
    assert_eq!(app.theme_mode(), ThemeMode::Dark);
    let buf = render(&mut app);
    assert_eq!(buf[(79, 39)].bg, Theme::dark().background);
    assert!(screen(&buf).contains("Custom"));
    assert!(screen(&buf).contains("dark mode"));
}

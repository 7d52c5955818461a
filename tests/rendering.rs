use fieldui::presentation::{FieldView, Theme, field_height};
use fieldui::{FieldIcon, FieldProps, InputField, Size, Variant};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

fn row(buf: &Buffer, y: u16) -> String {
    (buf.area.x..buf.area.right())
        .map(|x| buf[(x, y)].symbol())
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn draw(field: &InputField, width: u16) -> (Buffer, Rect) {
    let tree = field.render();
    let height = field_height(&tree, width);
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    let theme = Theme::light();
    FieldView::new(&tree, &theme).render(area, &mut buf);
    (buf, area)
}

fn password_field() -> InputField {
    InputField::new(
        FieldProps::new()
            .with_type("password")
            .with_clearable(true)
            .with_password_toggle(true)
            .with_default_value("secret"),
    )
}

#[test]
fn toggle_is_drawn_left_of_clear() {
    let field = password_field();
    let tree = field.render();
    let theme = Theme::light();
    let layout = FieldView::new(&tree, &theme).layout(Rect::new(0, 0, 30, 3));
    let toggle = layout.toggle.expect("toggle rect");
    let clear = layout.clear.expect("clear rect");
    assert!(toggle.x < clear.x);
    assert!(layout.input.right() <= toggle.x);

    let (buf, _) = draw(&field, 30);
    assert_eq!(buf[(clear.x, clear.y)].symbol(), "×");
    assert_eq!(buf[(toggle.x, toggle.y)].symbol(), "◉");
}

#[test]
fn password_is_masked_until_revealed() {
    let mut field = password_field();
    let (buf, _) = draw(&field, 30);
    assert!(row(&buf, 1).contains("••••••"));
    assert!(!row(&buf, 1).contains("secret"));

    assert!(field.activate(FieldIcon::Toggle));
    let (buf, _) = draw(&field, 30);
    assert!(row(&buf, 1).contains("secret"));
    assert!(row(&buf, 1).contains("○"));
}

#[test]
fn invalid_email_draws_label_and_error() {
    let field = InputField::new(
        FieldProps::new()
            .with_label("Email")
            .with_type("email")
            .with_invalid(true)
            .with_helper_text("never shown")
            .with_error_message("Please enter a valid email address"),
    );
    let (buf, area) = draw(&field, 40);
    assert_eq!(row(&buf, 0), "Email");
    assert_eq!(row(&buf, area.bottom() - 1), "Please enter a valid email address");
    let all = (0..area.height).map(|y| row(&buf, y)).collect::<Vec<_>>().join("\n");
    assert!(!all.contains("never shown"));
    assert_eq!(buf[(0, 1)].fg, Theme::light().error);
}

#[test]
fn required_label_gets_marker() {
    let field = InputField::new(FieldProps::new().with_label("Company").with_required(true));
    let (buf, _) = draw(&field, 30);
    assert_eq!(row(&buf, 0), "Company *");
}

#[test]
fn placeholder_shows_for_empty_value() {
    let field = InputField::new(FieldProps::new().with_placeholder("Jane Doe"));
    let (buf, _) = draw(&field, 30);
    assert!(row(&buf, 1).contains("Jane Doe"));
}

#[test]
fn spinner_takes_the_trailing_slot_while_loading() {
    let field = InputField::new(
        FieldProps::new()
            .with_clearable(true)
            .with_default_value("abc")
            .with_loading(true),
    );
    let tree = field.render();
    let theme = Theme::light();
    let layout = FieldView::new(&tree, &theme).layout(Rect::new(0, 0, 30, 3));
    assert!(layout.spinner.is_some());
    assert!(layout.clear.is_none() && layout.toggle.is_none());
    let (buf, _) = draw(&field, 30);
    assert!(!row(&buf, 1).contains('×'));
}

#[test]
fn variants_and_sizes_change_geometry_only() {
    let base = FieldProps::new().with_default_value("value");
    let outlined = InputField::new(base.clone());
    let ghost = InputField::new(base.clone().with_variant(Variant::Ghost));
    let large = InputField::new(base.with_variant(Variant::Filled).with_size(Size::Lg));

    assert_eq!(field_height(&outlined.render(), 30), 3);
    assert_eq!(field_height(&ghost.render(), 30), 1);
    assert_eq!(field_height(&large.render(), 30), 3);

    let (buf, _) = draw(&ghost, 30);
    assert!(row(&buf, 0).contains("value"));
    let (buf, _) = draw(&large, 30);
    assert_eq!(row(&buf, 1).trim(), "value");
    assert_eq!(buf[(0, 1)].bg, Theme::light().fill);
}

#[test]
fn long_values_keep_the_tail_visible() {
    let field = InputField::new(
        FieldProps::new()
            .with_variant(Variant::Ghost)
            .with_size(Size::Sm)
            .with_default_value("abcdefghijklmnop"),
    );
    let (buf, _) = draw(&field, 8);
    assert_eq!(row(&buf, 0), "jklmnop");
}

#[test]
fn short_areas_clip_without_leaving_the_widget() {
    let fields = [
        InputField::new(FieldProps::new().with_label("Name").with_default_value("abc")),
        password_field(),
        InputField::new(
            FieldProps::new()
                .with_label("Large")
                .with_size(Size::Lg)
                .with_loading(true)
                .with_helper_text("Checking"),
        ),
    ];
    let theme = Theme::light();
    for field in &fields {
        let tree = field.render();
        for height in 0..field_height(&tree, 20) {
            let area = Rect::new(0, 0, 20, height);
            let mut buf = Buffer::empty(area);
            let view = FieldView::new(&tree, &theme).focused(true);
            let layout = view.layout(area);
            for rect in [Some(layout.input), layout.spinner, layout.toggle, layout.clear]
                .into_iter()
                .flatten()
                .filter(|rect| !rect.is_empty())
            {
                assert!(rect.bottom() <= area.bottom(), "{rect:?} outside {area:?}");
            }
            if let Some(cursor) = view.cursor(area) {
                assert!(area.contains(cursor));
            }
            view.render(area, &mut buf);
        }
    }
}

#[test]
fn clipped_field_keeps_label_and_drops_text_row() {
    let field = InputField::new(FieldProps::new().with_label("Name").with_default_value("abc"));
    let area = Rect::new(0, 0, 20, 2);
    let mut buf = Buffer::empty(area);
    let theme = Theme::light();
    FieldView::new(&field.render(), &theme).render(area, &mut buf);
    assert_eq!(row(&buf, 0), "Name");
    assert!(!row(&buf, 1).contains("abc"));
}

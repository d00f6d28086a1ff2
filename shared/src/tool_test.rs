use super::*;

#[test]
fn flag_resolution_prefers_rectangle_then_ellipse_then_triangle() {
    assert_eq!(ShapeMode::from_flags(true, true, true), ShapeMode::Rectangle);
    assert_eq!(ShapeMode::from_flags(false, true, true), ShapeMode::Ellipse);
    assert_eq!(ShapeMode::from_flags(false, false, true), ShapeMode::Triangle);
    assert_eq!(ShapeMode::from_flags(false, false, false), ShapeMode::Freehand);
}

#[test]
fn freehand_has_no_preview_shape() {
    let anchor = Point::new(0.0, 0.0);
    assert!(ShapeMode::Freehand.shape(anchor, Point::new(4.0, 4.0)).is_none());
    assert!(matches!(
        ShapeMode::Rectangle.shape(anchor, Point::new(4.0, 4.0)),
        Some(Shape::Rectangle { .. })
    ));
    assert!(matches!(
        ShapeMode::Ellipse.shape(anchor, Point::new(4.0, 4.0)),
        Some(Shape::Ellipse { .. })
    ));
    assert!(matches!(
        ShapeMode::Triangle.shape(anchor, Point::new(4.0, 4.0)),
        Some(Shape::Triangle { .. })
    ));
}

#[test]
fn eraser_uses_background_without_touching_stored_color() {
    let mut tools = ToolConfig {
        color: "#ff0000".to_string(),
        ..ToolConfig::default()
    };
    assert_eq!(tools.effective_color("white"), "#ff0000");

    tools.pen = PenMode::Eraser;
    assert!(tools.is_erasing());
    assert_eq!(tools.effective_color("white"), "white");
    assert_eq!(tools.color, "#ff0000");

    tools.pen = PenMode::Pen;
    assert_eq!(tools.effective_color("white"), "#ff0000");
}

#[test]
fn line_width_accepts_what_the_canvas_accepts() {
    assert_eq!(parse_line_width("12"), Some(12.0));
    assert_eq!(parse_line_width(" 2.5 "), Some(2.5));
    assert_eq!(parse_line_width("0"), None);
    assert_eq!(parse_line_width("-3"), None);
    assert_eq!(parse_line_width("NaN"), None);
    assert_eq!(parse_line_width("inf"), None);
    assert_eq!(parse_line_width(""), None);
    assert_eq!(parse_line_width("wide"), None);
}

#[test]
fn tool_config_deserializes_partially() {
    let tools: ToolConfig =
        serde_json::from_str(r#"{"shape":"triangle","pen":"eraser"}"#).expect("tools");
    assert_eq!(tools.shape, ShapeMode::Triangle);
    assert_eq!(tools.pen, PenMode::Eraser);
    assert_eq!(tools.color, DEFAULT_COLOR);
    assert_eq!(tools.line_width, DEFAULT_LINE_WIDTH);
}

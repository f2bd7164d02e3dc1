mod common;

use common::fixtures::*;
use common::{TestResult, error_count, render, render_some};
use serde_json::{Map, Value, json};
use wicker::{BuildResult, Composer, Interpreter, RenderError, Widget};

fn shout(config: &Map<String, Value>, _ctx: &dyn Composer) -> BuildResult {
    let text = config.get("text").and_then(Value::as_str).unwrap_or_default();
    Ok(Some(Widget::Text {
        content: text.to_uppercase(),
        style: None,
        align: None,
    }))
}

fn exploding(_config: &Map<String, Value>, _ctx: &dyn Composer) -> BuildResult {
    Err(RenderError::build("boom"))
}

fn fixed_text(_config: &Map<String, Value>, _ctx: &dyn Composer) -> BuildResult {
    Ok(Some(Widget::Text {
        content: "replaced".to_string(),
        style: None,
        align: None,
    }))
}

#[test]
fn test_missing_type_field_becomes_error_node() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let widget = render_some(&json!({ "text": "no type here" }))?;
    assert_eq!(widget.error_message(), Some("missing type field"));
    Ok(())
}

#[test]
fn test_empty_type_field_becomes_error_node() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let widget = render_some(&json!({ "type": "" }))?;
    assert_eq!(widget.error_message(), Some("missing type field"));
    Ok(())
}

#[test]
fn test_non_string_type_field_becomes_error_node() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let widget = render_some(&json!({ "type": 42 }))?;
    assert_eq!(widget.error_message(), Some("missing type field"));
    Ok(())
}

#[test]
fn test_non_object_config_becomes_error_node() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    for config in [json!(null), json!("text"), json!([1, 2, 3]), json!(7)] {
        let widget = render_some(&config)?;
        assert_eq!(widget.error_message(), Some("missing type field"));
    }
    Ok(())
}

#[test]
fn test_unknown_type_names_the_tag() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let widget = render_some(&json!({ "type": "bogus" }))?;
    assert_eq!(widget.error_message(), Some("unknown widget type: bogus"));
    Ok(())
}

#[test]
fn test_type_lookup_is_case_sensitive() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let widget = render_some(&json!({ "type": "Text", "text": "hi" }))?;
    assert_eq!(widget.error_message(), Some("unknown widget type: Text"));
    Ok(())
}

#[test]
fn test_builder_fault_is_contained_as_parse_error() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut interpreter = Interpreter::new();
    interpreter.register("exploding", exploding);

    let config = column_of(vec![
        text_node("before"),
        json!({ "type": "exploding" }),
        text_node("after"),
    ]);
    let widget = interpreter.render_node(&config).ok_or("no widget")?;
    let children = widget.children();
    assert_eq!(children.len(), 3);
    assert_eq!(children[1].error_message(), Some("parse error: boom"));
    assert!(!children[0].is_error());
    assert!(!children[2].is_error());
    Ok(())
}

#[test]
fn test_faults_do_not_escape_nesting() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut interpreter = Interpreter::new();
    interpreter.register("exploding", exploding);

    let config = container_with(column_of(vec![json!({ "type": "exploding" })]));
    let widget = interpreter.render_node(&config).ok_or("no widget")?;
    assert!(!widget.is_error());
    assert_eq!(widget.kind(), "container");
    assert_eq!(error_count(&widget), 1);
    Ok(())
}

#[test]
fn test_custom_widget_registration() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut interpreter = Interpreter::new();
    interpreter.register("shout", shout);

    let config = json!({ "type": "shout", "text": "hello" });
    let widget = interpreter.render_node(&config).ok_or("no widget")?;
    match widget {
        Widget::Text { content, .. } => assert_eq!(content, "HELLO"),
        other => panic!("expected a text widget, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_reregistering_a_stock_tag_replaces_it() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = text_node("original");
    let mut interpreter = Interpreter::new();

    let before = interpreter.render_node(&config).ok_or("no widget")?;
    match before {
        Widget::Text { content, .. } => assert_eq!(content, "original"),
        other => panic!("expected a text widget, got {:?}", other),
    }

    interpreter.register("text", fixed_text);
    let after = interpreter.render_node(&config).ok_or("no widget")?;
    match after {
        Widget::Text { content, .. } => assert_eq!(content, "replaced"),
        other => panic!("expected a text widget, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_children_render_in_order() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = column_of(vec![text_node("a"), text_node("b"), text_node("c")]);
    let widget = render_some(&config)?;
    let contents: Vec<&str> = widget
        .children()
        .iter()
        .filter_map(|child| match child {
            Widget::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(contents, ["a", "b", "c"]);
    Ok(())
}

#[test]
fn test_non_object_children_are_dropped() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = json!({
        "type": "column",
        "children": [text_node("kept"), 42, "stray", null, text_node("also kept")]
    });
    let widget = render_some(&config)?;
    assert_eq!(widget.children().len(), 2);
    assert_eq!(error_count(&widget), 0);
    Ok(())
}

#[test]
fn test_children_rendering_nothing_are_omitted() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    // A text node without text and a button without a label both produce
    // no widget at all, not an error.
    let config = json!({
        "type": "column",
        "children": [text_node("kept"), { "type": "text" }, { "type": "button" }]
    });
    let widget = render_some(&config)?;
    assert_eq!(widget.children().len(), 1);
    assert_eq!(error_count(&widget), 0);
    Ok(())
}

#[test]
fn test_object_child_without_type_is_an_error_node() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = column_of(vec![json!({ "text": "typeless" })]);
    let widget = render_some(&config)?;
    let children = widget.children();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].error_message(), Some("missing type field"));
    Ok(())
}

#[test]
fn test_column_of_text_and_button_renders_cleanly() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = column_of(vec![
        text_node("Hello, world"),
        log_button("Tap me", "button tapped"),
    ]);
    let widget = render_some(&config)?;
    assert_eq!(widget.kind(), "column");
    assert_eq!(widget.children().len(), 2);
    assert_eq!(error_count(&widget), 0);
    assert_eq!(widget.children()[1].kind(), "button");
    Ok(())
}

#[test]
fn test_missing_children_field_renders_nothing() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    assert!(render(&json!({ "type": "column" })).is_none());
    assert!(render(&json!({ "type": "row" })).is_none());
    Ok(())
}

#[test]
fn test_child_slot_stays_empty_when_child_renders_nothing() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = container_with(json!({ "type": "column" }));
    let widget = render_some(&config)?;
    match widget {
        Widget::Container { child, .. } => assert!(child.is_none()),
        other => panic!("expected a container, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_render_document_parses_and_renders() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let document = r#"{ "type": "text", "text": "from a document" }"#;
    let interpreter = Interpreter::new();
    let widget = interpreter.render_document(document)?.ok_or("no widget")?;
    match widget {
        Widget::Text { content, .. } => assert_eq!(content, "from a document"),
        other => panic!("expected a text widget, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_render_document_rejects_malformed_json() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let interpreter = Interpreter::new();
    let error = interpreter
        .render_document(r#"{ "type": "text", "#)
        .unwrap_err();
    assert!(matches!(error, RenderError::Json(_)));
    Ok(())
}

#[test]
fn test_render_is_deterministic() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = column_of(vec![
        text_node("stable"),
        row_of(vec![log_button("Go", "went"), text_node("tail")]),
    ]);
    let first = render(&config);
    let second = render(&config);
    assert_eq!(first, second);
    Ok(())
}

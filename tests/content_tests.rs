mod common;

use common::fixtures::*;
use common::{TestResult, render, render_some};
use serde_json::json;
use wicker::style::{BoxFit, Color, FontStyle, FontWeight, TextAlign};
use wicker::{IconGlyph, ImageSource, Widget};

#[test]
fn test_text_without_content_renders_nothing() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    assert!(render(&json!({ "type": "text" })).is_none());
    assert!(render(&json!({ "type": "text", "text": 42 })).is_none());
    Ok(())
}

#[test]
fn test_text_empty_string_still_renders() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let widget = render_some(&text_node(""))?;
    match widget {
        Widget::Text { content, .. } => assert_eq!(content, ""),
        other => panic!("expected a text widget, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_text_with_style_and_alignment() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut config = styled_text(
        "headline",
        json!({ "color": "#112233", "fontSize": 24, "fontWeight": "bold", "fontStyle": "italic" }),
    );
    config["textAlign"] = json!("center");

    let widget = render_some(&config)?;
    match widget {
        Widget::Text { content, style, align } => {
            assert_eq!(content, "headline");
            assert_eq!(align, Some(TextAlign::Center));
            let style = style.ok_or("style should resolve")?;
            assert_eq!(style.color, Some(Color::rgb(0x11, 0x22, 0x33)));
            assert_eq!(style.font_size, Some(24.0));
            assert_eq!(style.font_weight, Some(FontWeight::BOLD));
            assert_eq!(style.font_style, Some(FontStyle::Italic));
        }
        other => panic!("expected a text widget, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_text_invalid_style_values_degrade() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = styled_text(
        "resilient",
        json!({ "color": "notacolor", "fontWeight": 450, "fontSize": "12" }),
    );
    let widget = render_some(&config)?;
    match widget {
        Widget::Text { style, .. } => {
            let style = style.ok_or("style should resolve")?;
            assert_eq!(style.color, None);
            assert_eq!(style.font_weight, None);
            assert_eq!(style.font_size, Some(12.0));
        }
        other => panic!("expected a text widget, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_multibyte_color_value_degrades_to_unset() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    // Multi-byte strings can hit the six-byte hex length without being six
    // hex digits; they must resolve to unset like any other bad color.
    let widget = render_some(&styled_text("resilient", json!({ "color": "#a€ab" })))?;
    match widget {
        Widget::Text { style, .. } => {
            let style = style.ok_or("style should resolve")?;
            assert_eq!(style.color, None);
        }
        other => panic!("expected a text widget, got {:?}", other),
    }

    let widget = render_some(&json!({ "type": "container", "color": "#日本" }))?;
    match widget {
        Widget::Container { color, .. } => assert_eq!(color, None),
        other => panic!("expected a container widget, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_rich_text_spans() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = json!({
        "type": "richText",
        "spans": [
            { "text": "plain, " },
            { "text": "bold", "style": { "fontWeight": "bold" } }
        ]
    });
    let widget = render_some(&config)?;
    match widget {
        Widget::RichText { spans, align } => {
            assert_eq!(spans.len(), 2);
            assert_eq!(spans[0].text, "plain, ");
            assert!(spans[0].style.is_none());
            assert_eq!(spans[1].text, "bold");
            let style = spans[1].style.clone().ok_or("span style should resolve")?;
            assert_eq!(style.font_weight, Some(FontWeight::BOLD));
            assert_eq!(align, TextAlign::Start);
        }
        other => panic!("expected a rich text widget, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_rich_text_skips_unusable_spans() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = json!({
        "type": "richText",
        "spans": [
            { "text": "kept" },
            { "style": { "fontWeight": "bold" } },
            42,
            { "text": "also kept" }
        ]
    });
    let widget = render_some(&config)?;
    match widget {
        Widget::RichText { spans, .. } => {
            let texts: Vec<&str> = spans.iter().map(|span| span.text.as_str()).collect();
            assert_eq!(texts, ["kept", "also kept"]);
        }
        other => panic!("expected a rich text widget, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_rich_text_without_usable_spans_renders_nothing() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    assert!(render(&json!({ "type": "richText" })).is_none());
    assert!(render(&json!({ "type": "richText", "spans": [] })).is_none());
    assert!(render(&json!({ "type": "richText", "spans": [42, { "no": "text" }] })).is_none());
    Ok(())
}

#[test]
fn test_rich_text_alignment() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = json!({
        "type": "richText",
        "textAlign": "justify",
        "spans": [{ "text": "filler" }]
    });
    let widget = render_some(&config)?;
    match widget {
        Widget::RichText { align, .. } => assert_eq!(align, TextAlign::Justify),
        other => panic!("expected a rich text widget, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_image_requires_a_source() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    assert!(render(&json!({ "type": "image" })).is_none());
    assert!(render(&json!({ "type": "image", "width": 32 })).is_none());
    Ok(())
}

#[test]
fn test_image_url_source() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = json!({
        "type": "image",
        "url": "https://example.com/cat.png",
        "width": 320,
        "height": 240,
        "fit": "cover"
    });
    let widget = render_some(&config)?;
    match widget {
        Widget::Image { source, width, height, fit } => {
            assert_eq!(source, ImageSource::Url("https://example.com/cat.png".to_string()));
            assert_eq!(width, Some(320.0));
            assert_eq!(height, Some(240.0));
            assert_eq!(fit, Some(BoxFit::Cover));
        }
        other => panic!("expected an image, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_image_prefers_url_over_asset() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = json!({
        "type": "image",
        "url": "https://example.com/logo.png",
        "asset": "images/logo.png"
    });
    let widget = render_some(&config)?;
    match widget {
        Widget::Image { source, .. } => {
            assert_eq!(source, ImageSource::Url("https://example.com/logo.png".to_string()));
        }
        other => panic!("expected an image, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_image_asset_source() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = json!({ "type": "image", "asset": "images/logo.png" });
    let widget = render_some(&config)?;
    match widget {
        Widget::Image { source, fit, .. } => {
            assert_eq!(source, ImageSource::Asset("images/logo.png".to_string()));
            assert_eq!(fit, None);
        }
        other => panic!("expected an image, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_image_placeholder_size() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let bare = render_some(&json!({ "type": "image", "url": "u" }))?;
    assert_eq!(bare.placeholder_size(), Some((100.0, 100.0)));

    let half = render_some(&json!({ "type": "image", "url": "u", "width": 50 }))?;
    assert_eq!(half.placeholder_size(), Some((50.0, 100.0)));

    let text = render_some(&text_node("not an image"))?;
    assert_eq!(text.placeholder_size(), None);
    Ok(())
}

#[test]
fn test_icon_known_names() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    for (name, glyph) in [
        ("star", IconGlyph::Star),
        ("arrow-back", IconGlyph::ArrowBack),
        ("arrowBack", IconGlyph::ArrowBack),
        ("back", IconGlyph::ArrowBack),
        ("done", IconGlyph::Check),
    ] {
        let widget = render_some(&json!({ "type": "icon", "icon": name }))?;
        match widget {
            Widget::Icon { glyph: resolved, .. } => assert_eq!(resolved, glyph),
            other => panic!("expected an icon, got {:?}", other),
        }
    }
    Ok(())
}

#[test]
fn test_icon_unmapped_name_falls_back_to_help() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let widget = render_some(&json!({ "type": "icon", "icon": "flux-capacitor" }))?;
    match widget {
        Widget::Icon { glyph, .. } => assert_eq!(glyph, IconGlyph::Help),
        other => panic!("expected an icon, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_icon_without_name_renders_nothing() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    assert!(render(&json!({ "type": "icon" })).is_none());
    assert!(render(&json!({ "type": "icon", "size": 24 })).is_none());
    Ok(())
}

#[test]
fn test_icon_size_and_color() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let config = json!({ "type": "icon", "icon": "settings", "size": 24, "color": "teal" });
    let widget = render_some(&config)?;
    match widget {
        Widget::Icon { glyph, size, color } => {
            assert_eq!(glyph, IconGlyph::Settings);
            assert_eq!(size, Some(24.0));
            assert_eq!(color, Some(Color::rgb(0, 128, 128)));
        }
        other => panic!("expected an icon, got {:?}", other),
    }
    Ok(())
}

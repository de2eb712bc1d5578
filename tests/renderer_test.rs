use chrono::{FixedOffset, TimeZone, Utc};
use go_include::entry::Entry;
use go_include::renderer::{render_source, GenerationContext, MiniJinjaRenderer, TemplateRenderer};

fn entry(name: &str, content: &str, comment: &str) -> Entry {
    Entry {
        name: name.to_string(),
        content: content.to_string(),
        comment: comment.to_string(),
    }
}

#[test]
fn test_timestamp_format() {
    let utc = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 6).unwrap();
    assert_eq!(
        GenerationContext::new(&utc, "main", vec![]).timestamp,
        "2024-03-09T14:05:06Z"
    );

    let offset = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 9, 14, 5, 6)
        .unwrap();
    assert_eq!(
        GenerationContext::new(&offset, "main", vec![]).timestamp,
        "2024-03-09T14:05:06+02:00"
    );
}

#[test]
fn test_render_entries() {
    let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 6).unwrap();
    let context = GenerationContext::new(
        &now,
        "assets",
        vec![
            entry("A", "hello` + \"`\" + `world", "A was sourced from text file a.txt"),
            entry("Logo", "iVBORw0KGgo=", ""),
        ],
    );

    let rendered = render_source(&MiniJinjaRenderer::new(), &context).unwrap();
    assert_eq!(
        rendered,
        "// Generated code. DO NOT EDIT.\n\
         // Generated on 2024-03-09T14:05:06Z\n\
         \n\
         package assets\n\
         \n\
         // A was sourced from text file a.txt\n\
         const A = `hello` + \"`\" + `world`\n\
         \n\
         const Logo = `iVBORw0KGgo=`\n"
    );
}

#[test]
fn test_render_without_entries() {
    let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 6).unwrap();
    let context = GenerationContext::new(&now, "main", vec![]);

    let rendered = render_source(&MiniJinjaRenderer::new(), &context).unwrap();
    assert_eq!(
        rendered,
        "// Generated code. DO NOT EDIT.\n// Generated on 2024-03-09T14:05:06Z\n\npackage main\n"
    );
}

#[test]
fn test_content_is_not_interpreted() {
    let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 6).unwrap();
    let context = GenerationContext::new(
        &now,
        "main",
        vec![entry("Page", "<b>{{ name }}</b> & {% raw %}", "")],
    );

    let rendered = render_source(&MiniJinjaRenderer::new(), &context).unwrap();
    assert!(rendered.ends_with("const Page = `<b>{{ name }}</b> & {% raw %}`\n"));
}

#[test]
fn test_minijinja_renderer() {
    let engine = MiniJinjaRenderer::new();
    let context = serde_json::json!({ "name": "<gopher>" });

    let result = engine.render("Hello {{ name }}!", &context).unwrap();
    assert_eq!(result, "Hello <gopher>!");
    assert!(engine.render("{% if %}", &context).is_err());
}

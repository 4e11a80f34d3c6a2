use std::fs;
use std::path::Path;

use autodoc_core::types::{Field, FieldType, SchemaKind, SchemaNode};
use autodoc_renderer::{RenderError, SchemaContext, TemplateLoadError, TemplateSet};
use tempfile::TempDir;

fn write_template(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create template subdir");
    }
    fs::write(path, content).expect("write template");
}

fn widget_node() -> SchemaNode {
    SchemaNode {
        name: "acme_widget".to_string(),
        kind: SchemaKind::Resource,
        fields: vec![
            Field {
                name: "size".to_string(),
                field_type: FieldType::Int,
                description: "Widget size.".to_string(),
                required: true,
                optional: false,
                computed: false,
                fields: vec![],
            },
            Field {
                name: "color".to_string(),
                field_type: FieldType::String,
                description: "Widget color.".to_string(),
                required: false,
                optional: true,
                computed: false,
                fields: vec![],
            },
        ],
    }
}

#[test]
fn loads_templates_recursively_with_stripped_names() {
    let root = TempDir::new().expect("root");
    write_template(root.path(), "mkdocs.yml.template", "site_name: x");
    write_template(root.path(), "nested/deep/resource.md.template", "# r");
    write_template(root.path(), "notes.txt", "not a template");

    let set = TemplateSet::load(root.path(), ".template").expect("load");
    assert_eq!(set.names(), ["mkdocs.yml", "resource.md"]);
    assert!(set.contains("resource.md"));
    assert!(!set.contains("notes.txt"));
}

#[test]
fn duplicate_name_across_subdirectories_fails_load() {
    let root = TempDir::new().expect("root");
    write_template(root.path(), "a/resource.md.template", "first");
    write_template(root.path(), "b/resource.md.template", "second");

    let err = TemplateSet::load(root.path(), ".template").expect_err("must fail");
    match err {
        TemplateLoadError::Duplicate { name, first, second } => {
            assert_eq!(name, "resource.md");
            assert_ne!(first, second);
        }
        other => panic!("expected Duplicate, got {other:?}"),
    }
}

#[test]
fn syntax_error_fails_load_with_tera_diagnostics() {
    let root = TempDir::new().expect("root");
    write_template(root.path(), "broken.md.template", "{% if unclosed %}");

    let err = TemplateSet::load(root.path(), ".template").expect_err("must fail");
    assert!(matches!(err, TemplateLoadError::Parse(_)));
    assert!(
        err.to_string().contains("broken.md"),
        "parse diagnostics should name the template: {err}"
    );
}

#[test]
fn missing_root_directory_fails_load() {
    let root = TempDir::new().expect("root");
    let missing = root.path().join("nope");

    let err = TemplateSet::load(&missing, ".template").expect_err("must fail");
    assert!(matches!(err, TemplateLoadError::Io { .. }));
}

#[test]
fn templates_may_include_one_another() {
    let root = TempDir::new().expect("root");
    write_template(root.path(), "partials/header.md.template", "## {{ name }}");
    write_template(
        root.path(),
        "resource.md.template",
        "{% include \"header.md\" %}\nbody",
    );

    let set = TemplateSet::load(root.path(), ".template").expect("load");
    let ctx = SchemaContext::from_node(&widget_node());
    let out = set
        .render("resource.md", &ctx.to_tera_context().expect("ctx"))
        .expect("render");
    assert!(out.starts_with("## acme_widget"));
}

#[test]
fn render_unknown_name_is_template_not_found() {
    let root = TempDir::new().expect("root");
    write_template(root.path(), "index.md.template", "hi");

    let set = TemplateSet::load(root.path(), ".template").expect("load");
    let ctx = tera::Context::new();
    let err = set.render("resource.md", &ctx).expect_err("must fail");
    match err {
        RenderError::TemplateNotFound { name } => assert_eq!(name, "resource.md"),
        other => panic!("expected TemplateNotFound, got {other:?}"),
    }
}

#[test]
fn render_with_absent_variable_is_render_error() {
    let root = TempDir::new().expect("root");
    write_template(root.path(), "index.md.template", "{{ no_such_field }}");

    let set = TemplateSet::load(root.path(), ".template").expect("load");
    let err = set
        .render("index.md", &tera::Context::new())
        .expect_err("must fail");
    assert!(matches!(err, RenderError::Render { .. }));
}

#[test]
fn schema_context_renders_field_loop() {
    let root = TempDir::new().expect("root");
    write_template(
        root.path(),
        "resource.md.template",
        "# {{ name }} ({{ kind }})\n{% for field in fields %}- `{{ field.name }}` ({{ field.type }}){% if field.required %} required{% endif %}\n{% endfor %}",
    );

    let set = TemplateSet::load(root.path(), ".template").expect("load");
    let ctx = SchemaContext::from_node(&widget_node());
    let out = set
        .render("resource.md", &ctx.to_tera_context().expect("ctx"))
        .expect("render");

    assert!(out.contains("# acme_widget (resource)"));
    assert!(out.contains("- `size` (int) required"));
    assert!(out.contains("- `color` (string)"));
}

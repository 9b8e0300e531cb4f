use pagegen::builtin::ADMIN_TEMPLATE;
use pagegen::component::{ComponentBody, ComponentDescriptor, GeneratorSet};
use pagegen::error::Error;
use pagegen::renderer::{render_component, MiniJinjaRenderer, TemplateRenderer};

#[test]
fn test_minijinja_renderer() {
    let renderer = MiniJinjaRenderer::new();
    let context = serde_json::json!({ "name": "Inbox" });

    let result = renderer.render("<h1>{{ name }}</h1>", &context).unwrap();
    assert_eq!(result, "<h1>Inbox</h1>");
}

#[test]
fn test_trailing_newline_is_kept() {
    let renderer = MiniJinjaRenderer::new();
    let context = serde_json::json!({ "name": "Inbox" });

    let result = renderer.render("{{ name }}\n", &context).unwrap();
    assert_eq!(result, "Inbox\n");
}

#[test]
fn test_undefined_variable_is_an_error() {
    let renderer = MiniJinjaRenderer::new();
    let context = serde_json::json!({ "name": "Inbox" });

    match renderer.render("{{ title }}", &context) {
        Err(Error::MinijinjaError(_)) => (),
        other => panic!("Expected MinijinjaError, got {:?}", other),
    }
}

#[test]
fn test_render_admin_component() {
    let renderer = MiniJinjaRenderer::new();
    let set = GeneratorSet::admin("src/admin", "jsx", ADMIN_TEMPLATE, ["dashboard"]);

    let content = render_component(&renderer, &set.components[0]).unwrap();
    let expected = "import React from 'react';

const Dashboard = () => {
    return (
        <div>
            <h1>Dashboard</h1>
            <p>This is the Dashboard page.</p>
        </div>
    );
};

export default Dashboard;";
    assert_eq!(content, expected);
}

#[test]
fn test_render_literal_component() {
    let renderer = MiniJinjaRenderer::new();
    // Literal content is never treated as a template.
    let component = ComponentDescriptor {
        name: "Home".to_string(),
        file_name: "Home.js".to_string(),
        body: ComponentBody::Literal("<p>{{ not a variable }}</p>".to_string()),
    };

    let content = render_component(&renderer, &component).unwrap();
    assert_eq!(content, "<p>{{ not a variable }}</p>");
}

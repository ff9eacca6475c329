use pyinit::error::Error;
use pyinit::project::{License, ProjectSpec, TemplateContext};
use pyinit::renderer::{MiniJinjaRenderer, TemplateRenderer};
use pyinit::templates::{self, TEMPLATES};

fn project(license: License) -> ProjectSpec {
    ProjectSpec {
        name: "demo".to_string(),
        description: "A demo project.".to_string(),
        author: "Test Author".to_string(),
        email: "test@example.com".to_string(),
        license,
        year: 2024,
        create_venv: false,
        init_git: false,
        setup_ci: false,
        interactive: false,
    }
}

#[test]
fn test_every_template_renders() {
    let engine = MiniJinjaRenderer::new();
    let context = TemplateContext::from_project(&project(License::Mit));

    for (id, _) in TEMPLATES {
        let text = engine.render(id, &context).unwrap();
        assert!(!text.is_empty(), "{id} rendered empty");
        assert!(!text.contains("{{"), "{id} has unresolved placeholders");
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let engine = MiniJinjaRenderer::new();
    let context = TemplateContext::from_project(&project(License::Gpl3));

    for (id, _) in TEMPLATES {
        assert_eq!(engine.render(id, &context).unwrap(), engine.render(id, &context).unwrap());
    }
}

#[test]
fn test_license_bodies() {
    let engine = MiniJinjaRenderer::new();
    for (license, marker) in [
        (License::Mit, "MIT License"),
        (License::Apache2, "Apache License, Version 2.0"),
        (License::Gpl3, "GNU General Public License"),
    ] {
        let context = TemplateContext::from_project(&project(license));
        let text = engine.render(templates::license_template(license), &context).unwrap();
        assert!(text.contains(marker));
        assert!(text.contains("2024 Test Author"));
    }
}

#[test]
fn test_source_stub() {
    let engine = MiniJinjaRenderer::new();
    let context = TemplateContext::from_project(&project(License::Mit));
    let text = engine.render(templates::SOURCE_INIT, &context).unwrap();
    assert_eq!(
        text,
        "\"\"\"Demo: A demo project.\"\"\"\n\n__author__ = \"Test Author\"\n\
         __email__ = \"test@example.com\"\n__license__ = \"MIT\"\n__version__ = \"0.1.0\"\n"
    );
}

#[test]
fn test_quotes_in_metadata_stay_inside_string_literals() {
    let engine = MiniJinjaRenderer::new();
    let mut project = project(License::Mit);
    project.description = r#"The "best" tool \ ever"#.to_string();
    project.author = r#"Jane "JD" Doe"#.to_string();
    let context = TemplateContext::from_project(&project);

    let pyproject = engine.render(templates::PYPROJECT, &context).unwrap();
    assert!(pyproject.contains(r#"description = "The \"best\" tool \\ ever""#));
    assert!(pyproject.contains(r#"authors = ["Jane \"JD\" Doe <test@example.com>"]"#));

    let init = engine.render(templates::SOURCE_INIT, &context).unwrap();
    assert!(init.starts_with(r#""""Demo: The \"best\" tool \\ ever""""#));
    assert!(init.contains(r#"__author__ = "Jane \"JD\" Doe""#));
}

#[test]
fn test_makefile_keeps_tabs() {
    let engine = MiniJinjaRenderer::new();
    let context = TemplateContext::from_project(&project(License::Mit));
    let text = engine.render(templates::MAKEFILE, &context).unwrap();
    assert!(text.contains("test:\n\tpytest tests\n"));
}

#[test]
fn test_template_not_found() {
    let engine = MiniJinjaRenderer::new();
    let context = TemplateContext::from_project(&project(License::Mit));
    match engine.render("setup.py", &context) {
        Err(Error::TemplateNotFound { template }) => assert_eq!(template, "setup.py"),
        other => panic!("expected TemplateNotFound, got {other:?}"),
    }
}

#[test]
fn test_missing_variable() {
    let engine = MiniJinjaRenderer::new();
    let mut context = TemplateContext::from_project(&project(License::Mit));
    context.remove("email");

    match engine.render(templates::PYPROJECT, &context) {
        Err(Error::MissingVariable { template, variable }) => {
            assert_eq!(template, templates::PYPROJECT);
            assert_eq!(variable, "email");
        }
        other => panic!("expected MissingVariable, got {other:?}"),
    }
}

#[test]
fn test_empty_context_reports_first_missing_name() {
    let engine = MiniJinjaRenderer::new();
    match engine.render(templates::README, &TemplateContext::new()) {
        Err(Error::MissingVariable { variable, .. }) => assert_eq!(variable, "author"),
        other => panic!("expected MissingVariable, got {other:?}"),
    }
}

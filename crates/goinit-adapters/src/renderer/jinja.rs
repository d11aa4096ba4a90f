//! Template renderer using minijinja.
//!
//! The whole [`Configuration`] is the render context, so templates address
//! fields directly: `{{ project_name }}`, `{% if use_docker %}`,
//! `{% if router == "chi" %}`. Undefined behavior is strict: a template that
//! names a field the configuration does not have fails instead of rendering
//! an empty string.
//!
//! Block tags on their own line leave no blank line behind (`trim_blocks` and
//! `lstrip_blocks`), which keeps generated Go and Makefiles tidy.

use std::sync::OnceLock;

use minijinja::{Environment, ErrorKind, UndefinedBehavior};

use goinit_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{Configuration, TemplateId},
    error::GoinitResult,
};

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env
    })
}

/// Minijinja-backed [`TemplateRenderer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MiniJinjaRenderer;

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        id: &TemplateId,
        source: &[u8],
        config: &Configuration,
    ) -> GoinitResult<String> {
        let text = std::str::from_utf8(source).map_err(|e| ApplicationError::TemplateParse {
            template: id.to_string(),
            reason: format!("not valid UTF-8: {e}"),
        })?;

        environment()
            .render_named_str(id.as_str(), text, config)
            .map_err(|err| template_error(id, &err).into())
    }
}

fn template_error(id: &TemplateId, err: &minijinja::Error) -> ApplicationError {
    let template = id.to_string();
    let reason = err.to_string();

    match err.kind() {
        ErrorKind::SyntaxError | ErrorKind::BadEscape => {
            ApplicationError::TemplateParse { template, reason }
        }
        _ => ApplicationError::TemplateRender { template, reason },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use goinit_core::{
        domain::{Feature, Router},
        error::GoinitError,
    };

    fn config() -> Configuration {
        Configuration::builder("myapi", "example.com/myapi")
            .go_version("1.26.0")
            .router(Router::Chi)
            .feature(Feature::Docker, true)
            .build()
    }

    fn render(source: &str) -> GoinitResult<String> {
        MiniJinjaRenderer::new().render(
            &TemplateId::from_static("test.tmpl"),
            source.as_bytes(),
            &config(),
        )
    }

    #[test]
    fn substitutes_fields() {
        assert_eq!(
            render("module {{ module }} ({{ project_name }})").unwrap(),
            "module example.com/myapi (myapi)"
        );
    }

    #[test]
    fn selectors_compare_as_strings() {
        let out = render(r#"{% if router == "chi" %}chi{% else %}other{% endif %}"#).unwrap();
        assert_eq!(out, "chi");
    }

    #[test]
    fn toggles_drive_conditionals() {
        let out = render("{% if use_docker %}docker{% endif %}{% if use_redis %}redis{% endif %}")
            .unwrap();
        assert_eq!(out, "docker");
    }

    #[test]
    fn keeps_trailing_newline() {
        assert_eq!(render("go {{ go_version }}\n").unwrap(), "go 1.26.0\n");
    }

    #[test]
    fn block_lines_leave_no_blank_lines() {
        let out = render("a\n{% if use_docker %}\nb\n{% endif %}\nc\n").unwrap();
        assert_eq!(out, "a\nb\nc\n");
    }

    #[test]
    fn malformed_template_is_parse_error() {
        let err = render("{% if use_docker %}unterminated").unwrap_err();

        assert!(matches!(
            err,
            GoinitError::Application(ApplicationError::TemplateParse { .. })
        ));
        assert_eq!(err.template_id(), Some("test.tmpl"));
    }

    #[test]
    fn unknown_field_is_render_error() {
        let err = render("{{ no_such_field }}").unwrap_err();

        assert!(matches!(
            err,
            GoinitError::Application(ApplicationError::TemplateRender { .. })
        ));
        assert_eq!(err.template_id(), Some("test.tmpl"));
    }

    #[test]
    fn invalid_utf8_is_parse_error() {
        let err = MiniJinjaRenderer::new()
            .render(
                &TemplateId::from_static("bin.tmpl"),
                &[0xff, 0xfe],
                &config(),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            GoinitError::Application(ApplicationError::TemplateParse { .. })
        ));
    }
}

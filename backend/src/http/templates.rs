//! Server-side HTML rendering.
//!
//! Every `*.html` file in the page directory is compiled into a [`Tera`]
//! instance at startup. Pages are rendered to a `String` in full before a
//! response is built, so a template failure never produces a half-written
//! body.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::{Context, Tera, Value};

use crate::models::CoursePage;

pub const COURSES_TEMPLATE: &str = "courses.html";

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Template directory is not valid UTF-8: {0}")]
    InvalidPath(PathBuf),

    #[error("Failed to load templates: {0}")]
    Load(#[source] tera::Error),

    #[error("Failed to render {template}: {source}")]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },
}

/// `[start, start + 1, ..., end]`, empty when `end < start`.
pub fn seq(start: i64, end: i64) -> Vec<i64> {
    (start..=end).collect()
}

/// Template-facing wrapper around [`seq`]: `seq(start=1, end=total_pages)`.
fn seq_function(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let bound = |name: &str| -> tera::Result<i64> {
        args.get(name)
            .and_then(Value::as_i64)
            .ok_or_else(|| tera::Error::msg(format!("seq: `{name}` must be an integer")))
    };

    let values = seq(bound("start")?, bound("end")?);
    Ok(Value::Array(values.into_iter().map(Value::from).collect()))
}

/// Compiled page templates.
#[derive(Debug)]
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Compile every `*.html` file in `page_dir`.
    pub fn load(page_dir: &Path) -> Result<Self, TemplateError> {
        let pattern = page_dir.join("*.html");
        let pattern = pattern
            .to_str()
            .ok_or_else(|| TemplateError::InvalidPath(page_dir.to_path_buf()))?;

        let tera = Tera::new(pattern).map_err(TemplateError::Load)?;
        Ok(Self::from_tera(tera))
    }

    /// Wrap an already populated [`Tera`], registering the helper functions.
    pub fn from_tera(mut tera: Tera) -> Self {
        tera.register_function("seq", seq_function);
        Self { tera }
    }

    pub fn has_template(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|t| t == name)
    }

    /// Render the course listing page.
    pub fn render_courses(&self, page: &CoursePage) -> Result<String, TemplateError> {
        let context = Context::from_serialize(page).map_err(|source| TemplateError::Render {
            template: COURSES_TEMPLATE.to_string(),
            source,
        })?;
        self.render(COURSES_TEMPLATE, &context)
    }

    pub fn render(&self, template: &str, context: &Context) -> Result<String, TemplateError> {
        self.tera
            .render(template, context)
            .map_err(|source| TemplateError::Render {
                template: template.to_string(),
                source,
            })
    }
}

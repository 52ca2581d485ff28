//! HTML view rendering via `minijinja`.
//!
//! Five templates make up the web surface: `layout.html` (the shared page
//! shell) and the `index`, `show`, `new`, and `edit` views that extend it.
//! The built-in set is compiled into the binary; [`ViewEngine::from_dir`]
//! loads the same file names from disk so the pages can be restyled
//! without recompiling. Template names end in `.html`, which turns on
//! HTML auto-escaping.

use minijinja::Environment;
use serde::Serialize;

use crate::error::WebError;

/// Every template the engine must provide.
pub const TEMPLATE_NAMES: [&str; 5] = [
    "layout.html",
    "index.html",
    "show.html",
    "new.html",
    "edit.html",
];

const BUILTIN_TEMPLATES: [(&str, &str); 5] = [
    ("layout.html", include_str!("../templates/layout.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("show.html", include_str!("../templates/show.html")),
    ("new.html", include_str!("../templates/new.html")),
    ("edit.html", include_str!("../templates/edit.html")),
];

/// Renders the HTML views.
///
/// Wraps a `minijinja` [`Environment`] with every view pre-loaded.
pub struct ViewEngine {
    env: Environment<'static>,
}

impl ViewEngine {
    /// Create an engine with the templates compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Template`] if a built-in template fails to parse.
    pub fn builtin() -> Result<Self, WebError> {
        let mut env = Environment::new();
        for (name, source) in BUILTIN_TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| WebError::Template(format!("failed to add {name}: {e}")))?;
        }
        Ok(Self { env })
    }

    /// Create an engine loading every template in [`TEMPLATE_NAMES`] from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Template`] if a file is missing or fails to parse.
    pub fn from_dir(dir: &str) -> Result<Self, WebError> {
        let mut env = Environment::new();
        for name in TEMPLATE_NAMES {
            let source = load_template(dir, name)?;
            env.add_template_owned(name, source)
                .map_err(|e| WebError::Template(format!("failed to add {name}: {e}")))?;
        }
        Ok(Self { env })
    }

    /// Render a named view with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::Template`] if the view is unknown or rendering fails.
    pub fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, WebError> {
        self.env
            .get_template(name)
            .map_err(|e| WebError::Template(format!("missing {name} template: {e}")))?
            .render(ctx)
            .map_err(|e| WebError::Template(format!("{name} render failed: {e}")))
    }
}

/// Read a template file from disk.
fn load_template(dir: &str, filename: &str) -> Result<String, WebError> {
    let path = format!("{dir}/{filename}");
    std::fs::read_to_string(&path)
        .map_err(|e| WebError::Template(format!("failed to read {path}: {e}")))
}

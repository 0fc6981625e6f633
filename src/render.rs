// render.rs
use std::collections::BTreeMap;

use tera::Tera;

/// Per-request key-value mapping handed to the view renderer.
/// Built fresh for each request and dropped once the body is produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderContext {
    entries: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// The view-rendering collaborator. Handlers name a view and supply a
/// context; they never see the template's internal format.
pub trait Render: Send + Sync {
    fn render(&self, view: &str, ctx: &RenderContext) -> Result<String, tera::Error>;
}

/// Tera-backed renderer. Views are addressed by bare name; `"index"`
/// resolves to `index.html` in the template directory.
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    /// Loads every template under `templates/` once, at startup.
    pub fn from_dir(glob: &str) -> Result<Self, tera::Error> {
        let tera = Tera::new(glob)?;
        Ok(Self { tera })
    }

    #[cfg(test)]
    fn from_raw(name: &str, body: &str) -> Self {
        let mut tera = Tera::default();
        tera.add_raw_template(name, body).unwrap();
        Self { tera }
    }
}

impl Render for TeraRenderer {
    fn render(&self, view: &str, ctx: &RenderContext) -> Result<String, tera::Error> {
        let mut tera_ctx = tera::Context::new();
        for (key, value) in ctx.iter() {
            tera_ctx.insert(key, value);
        }
        self.tera.render(&format!("{view}.html"), &tera_ctx)
    }
}

//! Markup for both regions, rendered through tera with HTML autoescaping.

use tera::Tera;

pub const CARD_TEMPLATE: &str = "users/card.html";
pub const LIST_TEMPLATE: &str = "users/list.html";
pub const LOADING_TEMPLATE: &str = "users/loading.html";
pub const ERROR_TEMPLATE: &str = "users/error.html";
pub const PAGE_ITEM_TEMPLATE: &str = "pagination/item.html";

const TEMPLATES: &[(&str, &str)] = &[
    (
        CARD_TEMPLATE,
        r#"<div class="card mb-2">
  <div class="card-body">
    <h5 class="card-title">{{ name }}</h5>{% if email %}
    <h6 class="card-subtitle mb-2 text-muted">{{ email }}</h6>{% endif %}
    <p class="card-text"><small class="text-muted">ID: {{ id }}</small></p>
  </div>
</div>"#,
    ),
    (
        LIST_TEMPLATE,
        r#"{% if cards | length == 0 %}<div class="text-muted">{{ empty_text }}</div>{% else %}{% for card in cards %}{% if not loop.first %}
{% endif %}{{ card | safe }}{% endfor %}{% endif %}"#,
    ),
    (
        LOADING_TEMPLATE,
        r#"<div class="text-center py-4"><div class="spinner-border" role="status"><span class="visually-hidden">Loading...</span></div></div>"#,
    ),
    (
        ERROR_TEMPLATE,
        r#"<div class="alert alert-danger">Failed to load users: {{ message }}</div>"#,
    ),
    (
        PAGE_ITEM_TEMPLATE,
        r##"<li class="page-item{% if disabled %} disabled{% endif %}{% if active %} active{% endif %}"><a class="page-link" href="#" data-page="{{ target }}"{% if active %} aria-current="page"{% endif %}>{{ label }}</a></li>"##,
    ),
];

/// Holds the compiled templates. Build once and share.
#[derive(Debug)]
pub struct Renderer {
    pub(crate) tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }
}

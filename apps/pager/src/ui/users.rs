//! List-region markup: user cards plus the loading, empty and error states.

use shared::domain::UserRecord;
use tera::Context;

use super::templates::{
    Renderer, CARD_TEMPLATE, ERROR_TEMPLATE, LIST_TEMPLATE, LOADING_TEMPLATE,
};

pub const NO_NAME_PLACEHOLDER: &str = "(no name)";
pub const EMPTY_PAGE_TEXT: &str = "No users on this page.";

impl Renderer {
    pub fn render_users(&self, users: &[UserRecord]) -> Result<String, tera::Error> {
        let cards = users
            .iter()
            .map(|user| self.render_card(user))
            .collect::<Result<Vec<_>, _>>()?;

        let mut context = Context::new();
        context.insert("cards", &cards);
        context.insert("empty_text", EMPTY_PAGE_TEXT);
        self.tera.render(LIST_TEMPLATE, &context)
    }

    fn render_card(&self, user: &UserRecord) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert(
            "name",
            &user
                .display_name()
                .unwrap_or_else(|| NO_NAME_PLACEHOLDER.to_string()),
        );
        context.insert("email", &user.email());
        context.insert("id", &user.id().unwrap_or_default());
        self.tera.render(CARD_TEMPLATE, &context)
    }

    pub fn render_loading(&self) -> Result<String, tera::Error> {
        self.tera.render(LOADING_TEMPLATE, &Context::new())
    }

    pub fn render_error(&self, message: &str) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("message", message);
        self.tera.render(ERROR_TEMPLATE, &context)
    }
}

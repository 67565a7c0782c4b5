//! Pagination-region controls.

use shared::domain::PageNumber;
use tera::Context;

use super::templates::{Renderer, PAGE_ITEM_TEMPLATE};
use crate::controller::state::PagingState;

pub const PREVIOUS_LABEL: &str = "Previous";
pub const NEXT_LABEL: &str = "Next";
/// Numbered controls stop here; Previous and Next still step past it.
pub const MAX_PAGE_CONTROLS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Previous,
    Page,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageControl {
    pub kind: ControlKind,
    pub label: String,
    pub target: PageNumber,
    pub disabled: bool,
    pub active: bool,
}

impl PageControl {
    /// Disabled controls and the control for the page already shown do nothing.
    pub fn triggers_fetch(&self, current_page: PageNumber) -> bool {
        !self.disabled && self.target != current_page
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pagination {
    pub controls: Vec<PageControl>,
    pub html: String,
}

/// Controls for `current_page`, bounded by what `state` knows about the total.
pub fn page_controls(state: &PagingState, current_page: PageNumber) -> Vec<PageControl> {
    let view = PagingState {
        current_page,
        ..state.clone()
    };
    let total_pages = view.total_pages();
    let current = current_page.get();

    let mut controls = Vec::new();
    controls.push(PageControl {
        kind: ControlKind::Previous,
        label: PREVIOUS_LABEL.to_string(),
        target: PageNumber::new(current.saturating_sub(1)),
        disabled: current == 1,
        active: false,
    });
    controls.extend((1..=total_pages.min(MAX_PAGE_CONTROLS)).map(|page| PageControl {
        kind: ControlKind::Page,
        label: page.to_string(),
        target: PageNumber::new(page),
        disabled: false,
        active: page == current,
    }));
    controls.push(PageControl {
        kind: ControlKind::Next,
        label: NEXT_LABEL.to_string(),
        target: PageNumber::new(total_pages.min(current.saturating_add(1))),
        disabled: view.total_known() && current >= total_pages,
        active: false,
    });
    controls
}

impl Renderer {
    pub fn render_pagination(
        &self,
        state: &PagingState,
        current_page: PageNumber,
    ) -> Result<Pagination, tera::Error> {
        let controls = page_controls(state, current_page);
        let html = controls
            .iter()
            .map(|control| self.render_page_item(control))
            .collect::<Result<Vec<_>, _>>()?
            .join("\n");
        Ok(Pagination { controls, html })
    }

    fn render_page_item(&self, control: &PageControl) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("disabled", &control.disabled);
        context.insert("active", &control.active);
        context.insert("target", &control.target.get());
        context.insert("label", &control.label);
        self.tera.render(PAGE_ITEM_TEMPLATE, &context)
    }
}

//! Terminal commands and their mapping onto rendered controls.

use shared::domain::PageNumber;

use crate::ui::{ControlKind, PageControl};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerCommand {
    GoTo(PageNumber),
    Next,
    Previous,
    Reload,
    Quit,
}

pub fn parse_command(input: &str) -> Option<PagerCommand> {
    let input = input.trim().to_ascii_lowercase();
    match input.as_str() {
        "n" | "next" => Some(PagerCommand::Next),
        "p" | "prev" | "previous" => Some(PagerCommand::Previous),
        "r" | "reload" => Some(PagerCommand::Reload),
        "q" | "quit" | "exit" => Some(PagerCommand::Quit),
        other => other
            .parse::<u32>()
            .ok()
            .filter(|page| *page > 0)
            .map(|page| PagerCommand::GoTo(PageNumber::new(page))),
    }
}

/// Finds the control a navigation command stands for. Only controls that are
/// currently rendered can be activated, so nothing resolves after a failed load.
pub fn resolve_control(command: PagerCommand, controls: &[PageControl]) -> Option<&PageControl> {
    match command {
        PagerCommand::GoTo(page) => controls
            .iter()
            .find(|control| control.kind == ControlKind::Page && control.target == page),
        PagerCommand::Next => controls.iter().find(|c| c.kind == ControlKind::Next),
        PagerCommand::Previous => controls.iter().find(|c| c.kind == ControlKind::Previous),
        PagerCommand::Reload | PagerCommand::Quit => None,
    }
}

//! Rendering for the list and pagination regions.

pub mod pagination;
pub mod regions;
pub mod templates;
pub mod users;

pub use pagination::{page_controls, ControlKind, PageControl, Pagination};
pub use regions::{MemoryRegions, PagerRegions, RegionsSnapshot};
pub use templates::Renderer;

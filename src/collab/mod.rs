//! External collaborators: name generation and card artwork.
//!
//! Both sit behind traits so a game can run with no network at all, using
//! [`FixedCatalogue`] and [`LogRenderer`].

pub mod render;
pub mod source;

pub use render::{render_catalogue, LogRenderer, Renderer};
pub use source::{
    list_prompt, parse_name_list, CatalogueSource, FixedCatalogue, GeneratedCatalogue,
    RetryingSource, TextGenerator,
};

//! Core library for the Event Showcase site.
//!
//! The stateful piece is the asset carousel: a [`SlideIndexController`]
//! holding a wrap-around cursor over an immutable [`Catalog`], with viewports
//! that follow it through synchronous notifications. The remaining modules
//! hold the built-in content, the 3D placeholder visuals, the navigation
//! chrome state and the configuration read by the command line host.

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod nav;
pub mod render;
pub mod visuals;

pub use carousel::{SlideIndexController, SubscriptionId};
pub use catalog::{Catalog, Item};
pub use config::{AppConfig, CarouselConfig, NavbarConfig};
pub use error::{Result, ShowcaseError};
pub use nav::{NavbarState, Section};
pub use render::{
    resolve, AssetViewport, Caption, CaptionViewport, Showcase, Slide, Viewport,
};
pub use visuals::{AssetVisual, VisualRegistry};

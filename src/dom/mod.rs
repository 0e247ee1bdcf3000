//! # Dioxus views
//!
//! The [`Stateful`] component runs a [`StatefulDirective`](crate::directive::StatefulDirective)
//! over a [`DomContainer`], turning each attached view into dioxus nodes.
//!
//! - [`DomTemplate`]: loader/error/content templates, called with the [`StatefulContext`](crate::context::StatefulContext)
//! - [`DomConfig`] and [`use_stateful_config`]: application wide loader and error components
//! - [`DefaultLoader`] / [`DefaultError`]: what is shown when nothing else is configured

mod component;
mod container;
mod converters;
mod defaults;

pub use component::{use_stateful_config, Stateful};
pub use container::{DomConfig, DomContainer, DomDirective, DomTemplate, ViewComponent};
pub use defaults::{DefaultError, DefaultLoader};

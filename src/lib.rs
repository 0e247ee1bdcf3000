//! # dioxus-stateful
//!
//! Shows a loader, an error view or some content depending on the state of an
//! asynchronous operation.
//!
//! The operation's status is a [`ResultState`](state::ResultState):
//! `{ is_loading, error, result }`. A [`StatefulDirective`](directive::StatefulDirective)
//! keeps exactly one view attached to a [`ViewContainer`](container::ViewContainer)
//! for it, with `is_loading` taking precedence over `error`, and both over the
//! result. The [`Stateful`](dom::Stateful) component does the same inside a
//! dioxus application.
//!
//! ## Core Concepts
//!
//! - [`ResultState`](state::ResultState) / [`PartialResultState`](state::PartialResultState): the input, complete or possibly unassigned
//! - [`StatefulContext`](context::StatefulContext): what templates are called with
//! - [`Template`](container::Template) / [`ViewContainer`](container::ViewContainer): where and how views are attached
//! - [`StatefulConfig`](config::StatefulConfig): replaces the default loader and error views
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use dioxus_stateful::prelude::*;
//!
//! #[component]
//! fn Answer(state: ResultState<u32, String>) -> Element {
//!     rsx! {
//!         Stateful {
//!             state,
//!             loader_template: move |_| rsx! { "Thinking..." },
//!             content: move |ctx: StatefulContext<u32, String>| rsx! {
//!                 "The answer is {ctx.result.unwrap_or_default()}"
//!             },
//!         }
//!     }
//! }
//! ```

pub mod config;
pub mod container;
pub mod context;
pub mod directive;
pub mod dom;
pub mod error;
pub mod state;

pub use error::{Error, Result};

/// Prelude module that re-exports commonly used types and traits.
///
/// ```rust
/// use dioxus_stateful::prelude::*;
/// ```
pub mod prelude {
    pub use super::config::StatefulConfig;
    pub use super::container::{Template, ViewContainer};
    pub use super::context::StatefulContext;
    pub use super::directive::{MountedView, StatefulDirective};
    pub use super::dom::{
        use_stateful_config, DefaultError, DefaultLoader, DomConfig, DomContainer, DomDirective,
        DomTemplate, Stateful, ViewComponent,
    };
    pub use super::error::Error;
    pub use super::state::{PartialResultState, ResultState};
}

use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

use crate::{context::StatefulContext, directive::StatefulDirective, state::ResultState};

use super::container::{DomConfig, DomContainer, DomTemplate};

/// Provides the loader/error configuration to every [`Stateful`] component below.
///
/// Call it once, at the root of the application.
///
/// # Examples
///
/// ```rust,ignore
/// use dioxus_stateful::prelude::*;
///
/// #[component]
/// fn Spinner() -> Element {
///     rsx! { span { class: "loading loading-spinner" } }
/// }
///
/// fn App() -> Element {
///     use_stateful_config(DomConfig::new().with_loader_component(Spinner));
///     rsx! { Router::<Route> {} }
/// }
/// ```
pub fn use_stateful_config(config: DomConfig) -> DomConfig {
    use_context_provider(|| config)
}

/// Displays a loader, an error view or the `content` depending on `state`.
///
/// - While `state.is_loading`: the `loader_template`, else the loader
///   component of the configuration, else [`DefaultLoader`](super::DefaultLoader)
/// - On `state.error`: the `error_template`, else the error component of the
///   configuration, else [`DefaultError`](super::DefaultError)
/// - Otherwise: `content`
///
/// Templates are called with the [`StatefulContext`] of the current state.
/// The configuration is the `config` prop if given, else the one provided by
/// [`use_stateful_config`], else the defaults. It is read when the component
/// is created.
///
/// A loader or error view survives state changes that keep it on screen, its
/// hooks included. Content is rebuilt for each new state.
///
/// # Examples
///
/// ```rust,ignore
/// use dioxus_stateful::prelude::*;
///
/// #[component]
/// fn Balance(account: String) -> Element {
///     let balance = use_resource(move || fetch_balance(account.clone()));
///
///     rsx! {
///         Stateful {
///             state: ResultState::from(balance.read().clone()),
///             error_template: move |ctx: StatefulContext<u64, String>| rsx! {
///                 span { class: "text-error", "{ctx.error.unwrap_or_default()}" }
///             },
///             content: move |ctx: StatefulContext<u64, String>| rsx! {
///                 span { "{ctx.result.unwrap_or_default()} sat" }
///             },
///         }
///     }
/// }
/// ```
#[component]
pub fn Stateful<R: Clone + PartialEq + 'static, E: Clone + PartialEq + 'static>(
    state: ResultState<R, E>,
    content: Callback<StatefulContext<R, E>, Element>,
    loader_template: Option<Callback<StatefulContext<R, E>, Element>>,
    error_template: Option<Callback<StatefulContext<R, E>, Element>>,
    config: Option<DomConfig>,
) -> Element {
    log::debug!("Stateful Rendered");

    let provided_config = try_use_context::<DomConfig>();
    let directive = use_hook(move || {
        let config = config.or(provided_config).unwrap_or_default();
        Rc::new(RefCell::new(StatefulDirective::new(
            DomContainer::default(),
            DomTemplate::Render(content),
            config,
        )))
    });

    use_drop(|| log::debug!("Stateful Dropped"));

    let mut directive = directive.borrow_mut();
    // Callbacks keep their identity across renders, only adding or removing
    // a template is a change.
    if directive.loader_template().is_some() != loader_template.is_some() {
        directive.set_loader_template(loader_template.map(DomTemplate::Render))?;
    }
    if directive.error_template().is_some() != error_template.is_some() {
        directive.set_error_template(error_template.map(DomTemplate::Render))?;
    }
    directive.set_state(state);
    directive.render()
}

//! Conversions from dioxus reactive types to [`ResultState`].
//!
//! The current value is read, so the caller subscribes to the source like
//! with any other read.

use dioxus::{
    hooks::Resource,
    signals::{ReadOnlySignal, Readable},
};

use crate::state::ResultState;

/// A pending resource is loading, a finished one is resolved or failed.
///
/// ```rust,ignore
/// use dioxus_stateful::prelude::*;
///
/// #[component]
/// fn UserName(user_id: String) -> Element {
///     let name = use_resource(move || fetch_user_name(user_id.clone()));
///
///     rsx! {
///         Stateful {
///             state: name.into(),
///             content: move |ctx: StatefulContext<String, String>| rsx! { {ctx.result} },
///         }
///     }
/// }
/// ```
impl<R: Clone + 'static, E: Clone + 'static> From<Resource<Result<R, E>>> for ResultState<R, E> {
    fn from(value: Resource<Result<R, E>>) -> Self {
        (*value.read()).clone().into()
    }
}

impl<R: Clone + 'static, E: Clone + 'static> From<ReadOnlySignal<Option<Result<R, E>>>> for ResultState<R, E> {
    fn from(value: ReadOnlySignal<Option<Result<R, E>>>) -> Self {
        (*value.read()).clone().into()
    }
}

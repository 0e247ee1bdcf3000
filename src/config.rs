/// Replaces the built-in loader and error views.
///
/// `C` is the component type of the [`ViewContainer`](crate::container::ViewContainer)
/// in use. The configuration is read once, when a directive is built, and never
/// changes afterwards.
///
/// ```rust
/// use dioxus_stateful::prelude::*;
///
/// let config = StatefulConfig::new().with_error_component("CustomError");
/// assert_eq!(config.loader_component, None);
/// assert_eq!(config.error_component, Some("CustomError"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatefulConfig<C> {
    pub loader_component: Option<C>,
    pub error_component: Option<C>,
}

impl<C> Default for StatefulConfig<C> {
    fn default() -> Self {
        Self {
            loader_component: None,
            error_component: None,
        }
    }
}

impl<C> StatefulConfig<C> {
    /// No override: the container's default views are used
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the default loader with `component`
    pub fn with_loader_component(mut self, component: C) -> Self {
        self.loader_component = Some(component);
        self
    }

    /// Replaces the default error view with `component`
    pub fn with_error_component(mut self, component: C) -> Self {
        self.error_component = Some(component);
        self
    }
}

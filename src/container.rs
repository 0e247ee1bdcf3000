/// A fragment of UI that can be instantiated with a context `C`.
///
/// This is the capability a template override must offer. The directive calls
/// [`is_instantiable`](Template::is_instantiable) when an override is supplied
/// and rejects the ones that fail it.
pub trait Template<C> {
    /// What an instantiation produces
    type Output;

    fn instantiate(&self, context: &C) -> Self::Output;

    /// Whether [`instantiate`](Template::instantiate) can be called on this template.
    #[inline(always)]
    fn is_instantiable(&self) -> bool {
        true
    }
}

/// A mount point where views are attached.
///
/// The directive only uses four operations: clearing every attached view,
/// attaching a template instantiated with a context, attaching a component,
/// and asking for the built-in fallbacks.
///
/// # Examples
///
/// ```rust
/// use dioxus_stateful::prelude::*;
///
/// struct Names(&'static str);
/// impl Template<()> for Names {
///     type Output = &'static str;
///     fn instantiate(&self, _: &()) -> &'static str {
///         self.0
///     }
/// }
///
/// #[derive(Default)]
/// struct Log(Vec<&'static str>);
/// impl ViewContainer<()> for Log {
///     type Template = Names;
///     type Component = &'static str;
///     type ViewRef = usize;
///
///     fn clear(&mut self) {
///         self.0.clear();
///     }
///     fn create_embedded_view(&mut self, template: &Names, context: &()) -> usize {
///         self.0.push(template.instantiate(context));
///         self.0.len() - 1
///     }
///     fn create_component(&mut self, component: &&'static str) -> usize {
///         self.0.push(*component);
///         self.0.len() - 1
///     }
///     fn len(&self) -> usize {
///         self.0.len()
///     }
///     fn default_loader_component() -> &'static str {
///         "loading"
///     }
///     fn default_error_component() -> &'static str {
///         "error"
///     }
/// }
/// ```
pub trait ViewContainer<C> {
    type Template: Template<C>;
    /// Something the container knows how to build without a context
    type Component;
    /// Handle to an attached view
    type ViewRef;

    /// Detaches every view
    fn clear(&mut self);

    fn create_embedded_view(&mut self, template: &Self::Template, context: &C) -> Self::ViewRef;

    fn create_component(&mut self, component: &Self::Component) -> Self::ViewRef;

    /// Number of attached views
    fn len(&self) -> usize;

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Loader used when neither a template nor a configured component is given
    fn default_loader_component() -> Self::Component;

    /// Error view used when neither a template nor a configured component is given
    fn default_error_component() -> Self::Component;
}

use dioxus::prelude::*;

use crate::{
    config::StatefulConfig,
    container::{Template, ViewContainer},
    context::StatefulContext,
    directive::StatefulDirective,
};

use super::defaults::{DefaultError, DefaultLoader};

/// A component usable as a loader or error view: no props, rendered as its own scope.
pub type ViewComponent = fn() -> Element;

/// Configuration of the dioxus views
pub type DomConfig = StatefulConfig<ViewComponent>;

/// The directive driving a [`DomContainer`]
pub type DomDirective<R, E> = StatefulDirective<R, E, DomContainer<R, E>>;

/// A template override for the [`Stateful`](super::Stateful) component.
///
/// `Render` is called with the current [`StatefulContext`] every time the
/// view renders. `Static` is an element rendered as is; an element that
/// already failed to render cannot be used as a template.
#[derive(Clone, PartialEq)]
pub enum DomTemplate<R: 'static, E: 'static> {
    Render(Callback<StatefulContext<R, E>, Element>),
    Static(Element),
}

impl<R: Clone + 'static, E: Clone + 'static> Template<StatefulContext<R, E>>
    for DomTemplate<R, E>
{
    type Output = Element;

    fn instantiate(&self, context: &StatefulContext<R, E>) -> Element {
        match self {
            DomTemplate::Render(render) => render.call(context.clone()),
            DomTemplate::Static(element) => element.clone(),
        }
    }

    fn is_instantiable(&self) -> bool {
        !matches!(self, DomTemplate::Static(Err(_)))
    }
}

impl<R: 'static, E: 'static> From<Callback<StatefulContext<R, E>, Element>> for DomTemplate<R, E> {
    fn from(value: Callback<StatefulContext<R, E>, Element>) -> Self {
        Self::Render(value)
    }
}

impl<R: 'static, E: 'static> From<Element> for DomTemplate<R, E> {
    fn from(value: Element) -> Self {
        Self::Static(value)
    }
}

#[derive(Clone)]
enum DomViewSource<R: 'static, E: 'static> {
    Embedded(DomTemplate<R, E>),
    Component(ViewComponent),
}

#[derive(Clone)]
struct DomView<R: 'static, E: 'static> {
    key: u64,
    source: DomViewSource<R, E>,
}

impl<R: Clone + 'static, E: Clone + 'static> DomView<R, E> {
    fn render(&self, context: &StatefulContext<R, E>) -> Element {
        match &self.source {
            DomViewSource::Embedded(template) => template.instantiate(context),
            DomViewSource::Component(component) => {
                #[allow(non_snake_case)]
                let AttachedComponent = *component;
                rsx! {
                    AttachedComponent {}
                }
            }
        }
    }
}

/// The [`ViewContainer`] of the [`Stateful`](super::Stateful) component.
///
/// Each attached view receives a key that is never reused, so dioxus builds
/// a new scope when a view is attached again and keeps the existing one as
/// long as the view stays attached.
pub struct DomContainer<R: 'static, E: 'static> {
    views: Vec<DomView<R, E>>,
    next_key: u64,
}

impl<R: 'static, E: 'static> Default for DomContainer<R, E> {
    fn default() -> Self {
        Self {
            views: Vec::new(),
            next_key: 0,
        }
    }
}

impl<R: Clone + 'static, E: Clone + 'static> DomContainer<R, E> {
    fn attach(&mut self, source: DomViewSource<R, E>) -> u64 {
        let key = self.next_key;
        self.next_key += 1;
        self.views.push(DomView { key, source });
        key
    }

    /// Keys of the attached views, in attachment order
    pub fn keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.views.iter().map(|view| view.key)
    }

    /// Renders the attached views with `context`
    pub fn render(&self, context: &StatefulContext<R, E>) -> Element {
        rsx! {
            for view in self.views.iter() {
                AttachedView { key: "{view.key}", {view.render(context)} }
            }
        }
    }
}

impl<R: Clone + 'static, E: Clone + 'static> ViewContainer<StatefulContext<R, E>>
    for DomContainer<R, E>
{
    type Template = DomTemplate<R, E>;
    type Component = ViewComponent;
    type ViewRef = u64;

    fn clear(&mut self) {
        self.views.clear();
    }

    fn create_embedded_view(
        &mut self,
        template: &DomTemplate<R, E>,
        _context: &StatefulContext<R, E>,
    ) -> u64 {
        self.attach(DomViewSource::Embedded(template.clone()))
    }

    fn create_component(&mut self, component: &ViewComponent) -> u64 {
        self.attach(DomViewSource::Component(*component))
    }

    fn len(&self) -> usize {
        self.views.len()
    }

    fn default_loader_component() -> ViewComponent {
        DefaultLoader
    }

    fn default_error_component() -> ViewComponent {
        DefaultError
    }
}

impl<R, E> DomDirective<R, E>
where
    R: Clone + PartialEq + 'static,
    E: Clone + PartialEq + 'static,
{
    /// Renders the attached view, nothing before the first state
    pub fn render(&self) -> Element {
        match self.context() {
            Some(context) => self.container().render(context),
            None => rsx! {},
        }
    }
}

#[component]
fn AttachedView(children: Element) -> Element {
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{directive::MountedView, state::ResultState};

    fn content_template() -> DomTemplate<u32, String> {
        // Never rendered by these tests
        DomTemplate::Static(VNode::empty())
    }

    fn custom_error() -> Element {
        rsx! { "custom" }
    }

    #[test]
    fn keys_are_never_reused() {
        let mut container = DomContainer::<u32, String>::default();
        let loader = <DomContainer<u32, String> as ViewContainer<StatefulContext<u32, String>>>::default_loader_component();
        assert_eq!(container.create_component(&loader), 0);
        container.clear();
        assert!(container.is_empty());
        assert_eq!(container.create_component(&loader), 1);
        assert_eq!(container.keys().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn remount_gets_a_new_key() {
        let mut directive: DomDirective<u32, String> = StatefulDirective::new(
            DomContainer::<u32, String>::default(),
            content_template(),
            DomConfig::new().with_error_component(custom_error),
        );

        directive.set_state(ResultState::loading());
        assert_eq!(directive.mounted_ref(), Some(&0));

        directive.set_state(ResultState::failed("a".into()));
        assert_eq!(directive.mounted(), Some(MountedView::Error));
        assert_eq!(directive.mounted_ref(), Some(&1));

        directive.set_state(ResultState::failed("b".into()));
        assert_eq!(directive.mounted_ref(), Some(&1));
        assert_eq!(directive.container().keys().collect::<Vec<_>>(), vec![1]);

        directive.set_state(ResultState::loading());
        assert_eq!(directive.mounted_ref(), Some(&2));
    }
}

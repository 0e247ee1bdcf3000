use crate::{
    config::StatefulConfig,
    container::{Template, ViewContainer},
    context::StatefulContext,
    error::{Error, Result},
    state::{PartialResultState, ResultState},
};


/// Which of the three views is attached to the container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountedView {
    Loader,
    Error,
    Content,
}

/// The handle of the attached view, tagged with the branch that attached it.
/// Holding a single value makes a loader and an error handle coexisting
/// impossible.
#[derive(Debug)]
enum Mounted<H> {
    Empty,
    Loader(H),
    Error(H),
    Content(H),
}

impl<H> Mounted<H> {
    fn view(&self) -> Option<MountedView> {
        match self {
            Mounted::Empty => None,
            Mounted::Loader(_) => Some(MountedView::Loader),
            Mounted::Error(_) => Some(MountedView::Error),
            Mounted::Content(_) => Some(MountedView::Content),
        }
    }

    fn handle(&self) -> Option<&H> {
        match self {
            Mounted::Empty => None,
            Mounted::Loader(h) | Mounted::Error(h) | Mounted::Content(h) => Some(h),
        }
    }
}

/// Keeps exactly one of a loader, an error or a content view attached to a
/// [`ViewContainer`], according to the last [`ResultState`] it was given.
///
/// - `is_loading` attaches the loader: the loader template if one was set,
///   else the configured loader component, else the container's default one.
/// - otherwise an `error` attaches the error view, chosen the same way.
/// - otherwise the content template is attached with the current
///   [`StatefulContext`].
///
/// Loading takes precedence over an error, both take precedence over the
/// content. A loader or error view that is already attached is left in place
/// when a new state lands in the same branch. Every other transition clears
/// the whole container before attaching the new view.
///
/// Nothing is attached until a first state is given.
pub struct StatefulDirective<R, E, V>
where
    V: ViewContainer<StatefulContext<R, E>>,
{
    container: V,
    template: V::Template,
    config: StatefulConfig<V::Component>,
    context: Option<StatefulContext<R, E>>,
    loader_template: Option<V::Template>,
    error_template: Option<V::Template>,
    mounted: Mounted<V::ViewRef>,
}

impl<R, E, V> StatefulDirective<R, E, V>
where
    R: Clone + PartialEq,
    E: Clone + PartialEq,
    V: ViewContainer<StatefulContext<R, E>>,
{
    /// `template` is the content template, attached once the state is
    /// resolved. `config` is read as is, it is never looked up again.
    pub fn new(container: V, template: V::Template, config: StatefulConfig<V::Component>) -> Self {
        Self {
            container,
            template,
            config,
            context: None,
            loader_template: None,
            error_template: None,
            mounted: Mounted::Empty,
        }
    }

    /// Sets the state and updates the container.
    ///
    /// A state equal to the current one is ignored.
    pub fn set_state(&mut self, state: ResultState<R, E>) {
        if self
            .context
            .as_ref()
            .is_some_and(|context| context.implicit == state)
        {
            log::debug!("StatefulDirective - state unchanged, skipping update");
            return;
        }
        self.context = Some(state.into());
        self.update_view();
    }

    /// Same as [`set_state`](Self::set_state) for a state whose fields may be
    /// unset. Returns [`Error::InvalidInput`] if one is, without touching the
    /// container.
    pub fn try_set_state(&mut self, state: PartialResultState<R, E>) -> Result<()> {
        let state = ResultState::try_from(state).inspect_err(|e| log::error!("{e}"))?;
        self.set_state(state);
        Ok(())
    }

    /// Overrides the loader view with a template, or goes back to the
    /// component with `None`. An attached loader is replaced.
    pub fn set_loader_template(&mut self, template: Option<V::Template>) -> Result<()> {
        assert_template::<StatefulContext<R, E>, _>("loader_template", template.as_ref())?;
        self.loader_template = template;
        if let Mounted::Loader(_) = self.mounted {
            self.mounted = Mounted::Empty;
        }
        self.update_view();
        Ok(())
    }

    /// Overrides the error view with a template, or goes back to the
    /// component with `None`. An attached error view is replaced.
    pub fn set_error_template(&mut self, template: Option<V::Template>) -> Result<()> {
        assert_template::<StatefulContext<R, E>, _>("error_template", template.as_ref())?;
        self.error_template = template;
        if let Mounted::Error(_) = self.mounted {
            self.mounted = Mounted::Empty;
        }
        self.update_view();
        Ok(())
    }

    fn update_view(&mut self) {
        let Some(context) = &self.context else {
            return;
        };

        if context.is_loading {
            if let Mounted::Loader(_) = self.mounted {
                return;
            }
            log::debug!("StatefulDirective - mounting loader");
            self.container.clear();
            let view = match (&self.loader_template, &self.config.loader_component) {
                (Some(template), _) => self.container.create_embedded_view(template, context),
                (None, Some(component)) => self.container.create_component(component),
                (None, None) => self
                    .container
                    .create_component(&V::default_loader_component()),
            };
            self.mounted = Mounted::Loader(view);
        } else if context.error.is_some() {
            if let Mounted::Error(_) = self.mounted {
                return;
            }
            log::debug!("StatefulDirective - mounting error view");
            self.container.clear();
            let view = match (&self.error_template, &self.config.error_component) {
                (Some(template), _) => self.container.create_embedded_view(template, context),
                (None, Some(component)) => self.container.create_component(component),
                (None, None) => self
                    .container
                    .create_component(&V::default_error_component()),
            };
            self.mounted = Mounted::Error(view);
        } else {
            log::debug!("StatefulDirective - mounting content");
            self.mounted = Mounted::Empty;
            self.container.clear();
            let view = self.container.create_embedded_view(&self.template, context);
            self.mounted = Mounted::Content(view);
        }
    }

    /// The attached view, `None` before the first state
    pub fn mounted(&self) -> Option<MountedView> {
        self.mounted.view()
    }

    /// Handle of the attached view
    pub fn mounted_ref(&self) -> Option<&V::ViewRef> {
        self.mounted.handle()
    }

    /// The context templates are instantiated with, `None` before the first state
    pub fn context(&self) -> Option<&StatefulContext<R, E>> {
        self.context.as_ref()
    }

    /// The container the views are attached to
    pub fn container(&self) -> &V {
        &self.container
    }

    /// The configuration given at construction
    pub fn config(&self) -> &StatefulConfig<V::Component> {
        &self.config
    }

    /// The loader template override, if any
    pub fn loader_template(&self) -> Option<&V::Template> {
        self.loader_template.as_ref()
    }

    /// The error template override, if any
    pub fn error_template(&self) -> Option<&V::Template> {
        self.error_template.as_ref()
    }
}

fn assert_template<C, T: Template<C>>(property: &'static str, template: Option<&T>) -> Result<()> {
    match template {
        Some(template) if !template.is_instantiable() => {
            let error = Error::InvalidTemplate { property };
            log::error!("{error}");
            Err(error)
        }
        _ => Ok(()),
    }
}

use crate::state::ResultState;

/// The context handed to every template the directive instantiates.
///
/// `implicit` is the whole state, the other fields are its parts, so a
/// template can bind whichever it needs:
///
/// ```rust
/// use dioxus_stateful::prelude::*;
///
/// let ctx = StatefulContext::from(ResultState::<u32, String>::resolved(42));
/// assert_eq!(ctx.result, Some(42));
/// assert!(!ctx.is_loading);
/// assert_eq!(ctx.implicit, ResultState::resolved(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StatefulContext<R, E> {
    pub implicit: ResultState<R, E>,
    pub is_loading: bool,
    pub error: Option<E>,
    pub result: Option<R>,
}

impl<R: Clone, E: Clone> From<ResultState<R, E>> for StatefulContext<R, E> {
    fn from(state: ResultState<R, E>) -> Self {
        Self {
            is_loading: state.is_loading,
            error: state.error.clone(),
            result: state.result.clone(),
            implicit: state,
        }
    }
}

impl<R, E> StatefulContext<R, E> {
    /// The whole state, same as `implicit`
    pub fn state(&self) -> &ResultState<R, E> {
        &self.implicit
    }
}

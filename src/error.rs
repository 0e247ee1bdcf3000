use thiserror::Error;

/// Errors raised when an input of the [`StatefulDirective`](crate::directive::StatefulDirective)
/// is rejected. The directive is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The state was missing one or more fields. `null` is allowed, unset is not.
    #[error("input must be a ResultState (isLoading/error/result must be assigned, null is allowed), but {missing:?} were never assigned")]
    InvalidInput { missing: Vec<&'static str> },
    /// A template override cannot be instantiated
    #[error("{property} must be an instantiable template")]
    InvalidTemplate { property: &'static str },
}

pub type Result<T> = core::result::Result<T, Error>;

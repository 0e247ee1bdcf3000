use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// The status of an asynchronous operation, as handed to the
/// [`StatefulDirective`](crate::directive::StatefulDirective).
///
/// No combination of fields is forbidden. When several are set, the directive
/// gives precedence to `is_loading`, then to `error`, then to `result`.
///
/// Any `Some` error counts as an error, whatever it holds: `Some(String::new())`
/// or `Some(0)` still shows the error view. Map such values to `None` before
/// building the state if they mean "no error".
///
/// # Serialized form
///
/// Keys are `isLoading`, `error` and `result`. All three must be present,
/// `null` being allowed for `error` and `result`:
///
/// ```rust
/// use dioxus_stateful::prelude::*;
///
/// let state: ResultState<u32, String> =
///     serde_json::from_str(r#"{"isLoading":false,"error":null,"result":42}"#).unwrap();
/// assert_eq!(state, ResultState::resolved(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "R: Deserialize<'de>, E: Deserialize<'de>")
)]
pub struct ResultState<R, E> {
    pub is_loading: bool,
    #[serde(deserialize_with = "present_nullable")]
    pub error: Option<E>,
    #[serde(deserialize_with = "present_nullable")]
    pub result: Option<R>,
}

impl<R, E> ResultState<R, E> {
    /// The operation is in flight
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            error: None,
            result: None,
        }
    }

    /// The operation failed with `error`
    pub fn failed(error: E) -> Self {
        Self {
            is_loading: false,
            error: Some(error),
            result: None,
        }
    }

    /// The operation completed with `result`
    pub fn resolved(result: R) -> Self {
        Self {
            is_loading: false,
            error: None,
            result: Some(result),
        }
    }

    /// Borrows the error and the result.
    ///
    /// # Returns
    ///
    /// A `ResultState` of references with the same `is_loading`
    ///
    /// ```rust
    /// use dioxus_stateful::prelude::*;
    ///
    /// let state = ResultState::<u32, String>::failed("timeout".to_owned());
    /// let borrowed = state.as_ref();
    /// assert_eq!(borrowed.error.map(String::as_str), Some("timeout"));
    /// assert_eq!(borrowed.result, None);
    /// ```
    pub fn as_ref(&self) -> ResultState<&R, &E> {
        ResultState {
            is_loading: self.is_loading,
            error: self.error.as_ref(),
            result: self.result.as_ref(),
        }
    }
}

impl<R, E> From<core::result::Result<R, E>> for ResultState<R, E> {
    #[inline(always)]
    fn from(value: core::result::Result<R, E>) -> Self {
        match value {
            Ok(r) => Self::resolved(r),
            Err(e) => Self::failed(e),
        }
    }
}

/// `None` means the value is not there yet, which is what a dioxus
/// `Resource` reads as while its future is pending.
impl<R, E> From<Option<core::result::Result<R, E>>> for ResultState<R, E> {
    #[inline(always)]
    fn from(value: Option<core::result::Result<R, E>>) -> Self {
        match value {
            Some(r) => r.into(),
            None => Self::loading(),
        }
    }
}

/// A [`ResultState`] whose fields may not have been assigned yet.
///
/// Each field is wrapped in an extra [`Option`]: the outer `None` is "unset",
/// while `Some(None)` is an explicit null. This is the boundary form of the
/// state, for values assembled field by field or deserialized from a source
/// that may omit keys. Turning it into a [`ResultState`] is where the
/// "every field is assigned" rule is checked.
///
/// ```rust
/// use dioxus_stateful::prelude::*;
///
/// let partial = PartialResultState::<u32, String>::new()
///     .is_loading(false)
///     .error(None);
/// let err = ResultState::try_from(partial).unwrap_err();
/// assert_eq!(err, Error::InvalidInput { missing: vec!["result"] });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "R: Deserialize<'de>, E: Deserialize<'de>")
)]
pub struct PartialResultState<R, E> {
    #[serde(default)]
    pub is_loading: Option<bool>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub error: Option<Option<E>>,
    #[serde(default, deserialize_with = "explicit_null")]
    pub result: Option<Option<R>>,
}

impl<R, E> Default for PartialResultState<R, E> {
    fn default() -> Self {
        Self {
            is_loading: None,
            error: None,
            result: None,
        }
    }
}

impl<R, E> PartialResultState<R, E> {
    /// A state where no field is assigned yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `is_loading`
    pub fn is_loading(mut self, is_loading: bool) -> Self {
        self.is_loading = Some(is_loading);
        self
    }

    /// Assigns `error`, `None` being an explicit null
    pub fn error(mut self, error: Option<E>) -> Self {
        self.error = Some(error);
        self
    }

    /// Assigns `result`, `None` being an explicit null
    pub fn result(mut self, result: Option<R>) -> Self {
        self.result = Some(result);
        self
    }

    /// Names of the fields that were never assigned, in declaration order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.is_loading.is_none() {
            missing.push("isLoading");
        }
        if self.error.is_none() {
            missing.push("error");
        }
        if self.result.is_none() {
            missing.push("result");
        }
        missing
    }
}

impl<R, E> TryFrom<PartialResultState<R, E>> for ResultState<R, E> {
    type Error = Error;

    fn try_from(value: PartialResultState<R, E>) -> Result<Self> {
        match value {
            PartialResultState {
                is_loading: Some(is_loading),
                error: Some(error),
                result: Some(result),
            } => Ok(Self {
                is_loading,
                error,
                result,
            }),
            partial => Err(Error::InvalidInput {
                missing: partial.missing_fields(),
            }),
        }
    }
}

impl<R, E> From<ResultState<R, E>> for PartialResultState<R, E> {
    fn from(value: ResultState<R, E>) -> Self {
        Self {
            is_loading: Some(value.is_loading),
            error: Some(value.error),
            result: Some(value.result),
        }
    }
}

/// The key must be present but may be `null`.
///
/// Using `deserialize_with` stops serde from treating a missing `Option`
/// field as `None`.
fn present_nullable<'de, D, T>(deserializer: D) -> core::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// Only called when the key is present, so `null` becomes `Some(None)` and a
/// missing key falls back to the `default` of `None`.
fn explicit_null<'de, D, T>(deserializer: D) -> core::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_from_results() {
        let ok: ResultState<u8, &str> = Ok::<u8, &str>(1).into();
        assert_eq!(ok, ResultState::resolved(1));

        let err: ResultState<u8, &str> = Err::<u8, &str>("boom").into();
        assert_eq!(err, ResultState::failed("boom"));

        let pending: ResultState<u8, &str> = None::<core::result::Result<u8, &str>>.into();
        assert_eq!(pending, ResultState::loading());
    }

    #[test]
    fn explicit_falsy_values_are_assigned() {
        let partial = PartialResultState::<u32, String>::new()
            .is_loading(false)
            .error(None)
            .result(Some(0));
        assert_eq!(
            ResultState::try_from(partial),
            Ok(ResultState {
                is_loading: false,
                error: None,
                result: Some(0),
            })
        );
    }

    #[test]
    fn every_unset_field_is_reported() {
        let err = ResultState::try_from(PartialResultState::<u32, String>::new()).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidInput {
                missing: vec!["isLoading", "error", "result"]
            }
        );
    }

    #[test]
    fn deserialize_requires_every_key() {
        let full: ResultState<u32, String> =
            serde_json::from_str(r#"{"isLoading":true,"error":null,"result":null}"#).unwrap();
        assert_eq!(full, ResultState::loading());

        let missing =
            serde_json::from_str::<ResultState<u32, String>>(r#"{"isLoading":true,"error":null}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn deserialize_partial_distinguishes_null_from_missing() {
        let partial: PartialResultState<u32, String> =
            serde_json::from_str(r#"{"error":null,"result":7}"#).unwrap();
        assert_eq!(partial.is_loading, None);
        assert_eq!(partial.error, Some(None));
        assert_eq!(partial.result, Some(Some(7)));
        assert_eq!(partial.missing_fields(), vec!["isLoading"]);
    }

    #[test]
    fn serialize_uses_camel_case() {
        let json = serde_json::to_string(&ResultState::<u32, String>::failed("net".into())).unwrap();
        assert_eq!(json, r#"{"isLoading":false,"error":"net","result":null}"#);
    }
}

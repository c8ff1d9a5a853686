//! Type-erased functions
//!
//! A `TypedFunction` stores a callable behind the single shape
//! `Fn(&[ArgValue]) -> Status`. The real parameter types are captured once,
//! at construction, as a `Signature`.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use tinyshell_core::prelude::*;
use tracing::{error, warn};

/// Uniform call shape every registered function is erased to
pub type Handler = Box<dyn Fn(&[ArgValue]) -> Status + Send + Sync>;

/// A callable whose parameter types determine its signature at compile time.
///
/// Implemented for `Fn(A, B, ..) -> Status` with up to eight parameters,
/// where every parameter type implements `FromArg`.
pub trait IntoTypedFn<Args>: Send + Sync + 'static {
    fn signature() -> Signature;
    fn into_handler(self) -> Handler;
}

macro_rules! impl_into_typed_fn {
    ($($ty:ident $val:ident),*) => {
        impl<F, $($ty,)*> IntoTypedFn<($($ty,)*)> for F
        where
            F: Fn($($ty),*) -> Status + Send + Sync + 'static,
            $($ty: FromArg + 'static,)*
        {
            fn signature() -> Signature {
                Signature::new(vec![$(<$ty as FromArg>::TAG),*])
            }

            #[allow(unused_mut, unused_variables)]
            fn into_handler(self) -> Handler {
                Box::new(move |args: &[ArgValue]| {
                    let mut iter = args.iter();
                    $(
                        let Some($val) = iter.next().and_then(<$ty as FromArg>::from_arg) else {
                            return status::ERROR;
                        };
                    )*
                    (self)($($val),*)
                })
            }
        }
    };
}

impl_into_typed_fn!();
impl_into_typed_fn!(A a);
impl_into_typed_fn!(A a, B b);
impl_into_typed_fn!(A a, B b, C c);
impl_into_typed_fn!(A a, B b, C c, D d);
impl_into_typed_fn!(A a, B b, C c, D d, E e);
impl_into_typed_fn!(A a, B b, C c, D d, E e, G g);
impl_into_typed_fn!(A a, B b, C c, D d, E e, G g, H h);
impl_into_typed_fn!(A a, B b, C c, D d, E e, G g, H h, I i);

/// One registered command: name, description, signature and callable
pub struct TypedFunction {
    name: String,
    description: String,
    signature: Signature,
    handler: Handler,
}

impl TypedFunction {
    pub fn new<F, Args>(name: impl Into<String>, description: impl Into<String>, func: F) -> Self
    where
        F: IntoTypedFn<Args>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            signature: F::signature(),
            handler: func.into_handler(),
        }
    }

    /// Wrap a callable that reads its arguments from the slice directly.
    ///
    /// The caller vouches that `signature` describes what `handler` expects.
    pub fn from_raw<H>(
        name: impl Into<String>,
        description: impl Into<String>,
        signature: Signature,
        handler: H,
    ) -> Self
    where
        H: Fn(&[ArgValue]) -> Status + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            signature,
            handler: Box::new(handler),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn arity(&self) -> usize {
        self.signature.len()
    }

    /// True when `args` has the declared count and types
    pub fn accepts(&self, args: &[ArgValue]) -> bool {
        args.len() == self.arity()
            && args
                .iter()
                .zip(self.signature.tags())
                .all(|(arg, tag)| arg.tag() == *tag)
    }

    /// Run the callable, catching any panic it raises.
    ///
    /// Arguments that do not match the signature are refused with
    /// `status::ERROR` without running the callable.
    pub fn try_invoke(&self, args: &[ArgValue]) -> Result<Status, ShellError> {
        if !self.accepts(args) {
            warn!(
                function = %self.name,
                expected = %self.signature,
                received = args.len(),
                "refusing call with arguments that do not match the signature"
            );
            return Ok(status::ERROR);
        }

        panic::catch_unwind(AssertUnwindSafe(|| (self.handler)(args))).map_err(|payload| {
            let (message, code) = match payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
            {
                Some(msg) => (msg, status::EXECUTION_FAULT),
                None => ("opaque panic payload".to_string(), status::EXECUTION_FAULT_OPAQUE),
            };
            error!(function = %self.name, %message, "function faulted during execution");
            ShellError::ExecutionFault {
                function: self.name.clone(),
                message,
                status: code,
            }
        })
    }

    /// Run the callable and report the outcome as a status code
    pub fn invoke(&self, args: &[ArgValue]) -> Status {
        self.try_invoke(args).unwrap_or_else(|e| e.status())
    }
}

impl fmt::Debug for TypedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedFunction")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

//! Callbacks wrapped with a declared call shape.
//!
//! A wrapped callback resolves every invocation against its stack and
//! forwards the resolved positional values. Each call takes its own
//! argument snapshot and its own resolver; the wrapper itself holds only
//! the immutable stack and configuration, so it can be shared across
//! threads when the callback can.
//!
//! ```
//! use argy::{args, SlotStack, Value};
//!
//! let identify = SlotStack::from_shorthand("[string] [number]")?
//!     .wrap(|values: Vec<Value>| values);
//!
//! assert_eq!(identify.call(args![23])?, vec![Value::Undefined, Value::from(23)]);
//! # Ok::<(), argy::ArgyError>(())
//! ```

use std::marker::PhantomData;
use std::sync::Arc;

use crate::config::ResolverConfig;
use crate::error::Result;
use crate::resolver::Resolver;
use crate::stack::SlotStack;
use crate::value::{Arguments, Value};

/// A callback that receives resolved positional values.
#[derive(Debug, Clone)]
pub struct Wrapped<F> {
    stack: Arc<SlotStack>,
    config: ResolverConfig,
    callback: F,
}

impl<F> Wrapped<F> {
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn stack(&self) -> &SlotStack {
        &self.stack
    }

    /// Resolve `args` and invoke the callback with the resolved values.
    pub fn call<R>(&self, args: impl Into<Arguments>) -> Result<R>
    where
        F: Fn(Vec<Value>) -> R,
    {
        let values = Resolver::new(&self.stack, args)
            .with_config(self.config.clone())
            .resolve()?;
        Ok((self.callback)(values))
    }
}

/// A callback that receives a caller-supplied receiver and resolved values.
pub struct WrappedMethod<T: ?Sized, F> {
    stack: Arc<SlotStack>,
    config: ResolverConfig,
    callback: F,
    _receiver: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> WrappedMethod<T, F> {
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn stack(&self) -> &SlotStack {
        &self.stack
    }

    /// Resolve `args` and invoke the callback with `receiver` unchanged.
    pub fn call<R>(&self, receiver: &T, args: impl Into<Arguments>) -> Result<R>
    where
        F: Fn(&T, Vec<Value>) -> R,
    {
        let values = Resolver::new(&self.stack, args)
            .with_config(self.config.clone())
            .resolve()?;
        Ok((self.callback)(receiver, values))
    }
}

impl<T: ?Sized, F: Clone> Clone for WrappedMethod<T, F> {
    fn clone(&self) -> Self {
        Self {
            stack: Arc::clone(&self.stack),
            config: self.config.clone(),
            callback: self.callback.clone(),
            _receiver: PhantomData,
        }
    }
}

impl SlotStack {
    /// Wrap `callback` so each call is resolved against this stack.
    pub fn wrap<F, R>(self, callback: F) -> Wrapped<F>
    where
        F: Fn(Vec<Value>) -> R,
    {
        Wrapped {
            stack: Arc::new(self),
            config: ResolverConfig::default(),
            callback,
        }
    }

    /// Wrap a callback that also takes a receiver, passed through from each
    /// call.
    pub fn wrap_method<T, F, R>(self, callback: F) -> WrappedMethod<T, F>
    where
        T: ?Sized,
        F: Fn(&T, Vec<Value>) -> R,
    {
        WrappedMethod {
            stack: Arc::new(self),
            config: ResolverConfig::default(),
            callback,
            _receiver: PhantomData,
        }
    }
}

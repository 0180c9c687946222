//! Scope frames and the RAII guard that pops them

use indexmap::IndexMap;

use super::Environment;
use crate::value::Value;

/// Stable index of a frame in the environment's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub(super) usize);

impl FrameId {
    /// The global frame, which exists for the environment's whole life.
    pub const GLOBAL: FrameId = FrameId(0);

    /// Raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One lexical scope: its bindings plus a link to the enclosing scope.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Bindings in definition order
    pub values: IndexMap<String, Value>,

    /// Enclosing frame, `None` only for the global frame
    pub enclosing: Option<FrameId>,
}

impl Frame {
    pub(super) fn new(enclosing: Option<FrameId>) -> Self {
        Self {
            values: IndexMap::new(),
            enclosing,
        }
    }
}

/// RAII guard that automatically pops a frame when dropped.
///
/// The frame is popped however the guard goes out of scope, including an
/// early return through `?`.
///
/// # Example
///
/// ```
/// use sapling::{Environment, Value};
///
/// let mut env = Environment::new();
/// env.define("x", Value::Number(1.0));
///
/// {
///     let mut guard = env.scope_guard();
///     guard.define("y", Value::Number(2.0));
///     // y is visible here
/// }
/// // guard dropped, frame popped, y is gone
/// assert!(!env.contains("y"));
/// assert!(env.contains("x"));
/// ```
pub struct ScopeGuard<'a> {
    env: &'a mut Environment,
}

impl Environment {
    /// Create a scope guard that pushes a frame now and pops it on drop.
    pub fn scope_guard(&mut self) -> ScopeGuard<'_> {
        self.push_frame();
        ScopeGuard { env: self }
    }
}

impl<'a> Drop for ScopeGuard<'a> {
    fn drop(&mut self) {
        self.env.pop_frame();
    }
}

impl<'a> std::ops::Deref for ScopeGuard<'a> {
    type Target = Environment;

    fn deref(&self) -> &Self::Target {
        self.env
    }
}

impl<'a> std::ops::DerefMut for ScopeGuard<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.env
    }
}

//! Runtime environment managing variable bindings

mod frame;

pub use frame::{Frame, FrameId, ScopeGuard};

use crate::error::RuntimeError;
use crate::token::Token;
use crate::value::Value;

/// The runtime environment: a chain of lexical scope frames.
///
/// Frames live in an arena and refer to their enclosing frame by index, so
/// no frame owns another. Lookup and assignment start at the current frame
/// and walk outward through the `enclosing` links to the global frame.
///
/// # Example
///
/// ```
/// use sapling::{Environment, Value};
///
/// let mut env = Environment::new();
///
/// // Global scope
/// env.define("x", Value::Number(1.0));
///
/// // Enter a new scope
/// env.push_frame();
/// env.define("y", Value::Number(2.0));
/// env.define("x", Value::Number(10.0)); // Shadows outer x
///
/// assert_eq!(env.lookup("x"), Some(&Value::Number(10.0))); // Gets inner x
/// assert_eq!(env.lookup("y"), Some(&Value::Number(2.0)));
///
/// // Exit scope
/// env.pop_frame();
///
/// assert_eq!(env.lookup("x"), Some(&Value::Number(1.0))); // Back to outer x
/// assert_eq!(env.lookup("y"), None); // y is gone
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    /// Frame arena; index 0 is the global frame
    frames: Vec<Frame>,

    /// The innermost active frame
    current: FrameId,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Create an environment holding only an empty global frame.
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::new(None)],
            current: FrameId::GLOBAL,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Frame Management (Scope Entry/Exit)
    // ═══════════════════════════════════════════════════════════════════

    /// Enter a new scope chained to the current one.
    pub fn push_frame(&mut self) -> FrameId {
        let id = FrameId(self.frames.len());
        self.frames.push(Frame::new(Some(self.current)));
        self.current = id;
        id
    }

    /// Exit the current scope, discarding its bindings.
    ///
    /// Does nothing at the global scope (the global frame is never popped).
    pub fn pop_frame(&mut self) {
        if let Some(parent) = self.frame(self.current).enclosing {
            // Frames are strictly nested, so the current frame is the newest
            self.frames.truncate(self.current.0);
            self.current = parent;
        }
    }

    /// Identifier of the innermost active frame.
    pub fn current_frame(&self) -> FrameId {
        self.current
    }

    /// Get the current scope depth (number of frames in the chain).
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    /// Check if we're at global scope.
    pub fn is_global_scope(&self) -> bool {
        self.current == FrameId::GLOBAL
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Definition
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` in the current frame.
    ///
    /// Always succeeds. An existing binding of the same name in the same
    /// frame is overwritten; bindings in enclosing frames are shadowed.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        let current = self.current;
        self.frame_mut(current).values.insert(name.into(), value);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Read the variable named by `name`, walking outward through the chain.
    ///
    /// # Errors
    ///
    /// `UndefinedVariable` tagged with the token's line if no frame binds it.
    pub fn get(&self, name: &Token) -> Result<Value, RuntimeError> {
        self.lookup(&name.lexeme)
            .cloned()
            .ok_or_else(|| RuntimeError::undefined_variable(name))
    }

    /// Look up a binding by name, innermost first.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.chain().find_map(|frame| frame.values.get(name))
    }

    /// Check if a binding exists anywhere in the chain.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Check if a binding exists in the current (innermost) scope only.
    pub fn contains_in_current_scope(&self, name: &str) -> bool {
        self.frame(self.current).values.contains_key(name)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Assignment (Mutation)
    // ═══════════════════════════════════════════════════════════════════

    /// Overwrite the nearest existing binding of `name`.
    ///
    /// Never creates a binding.
    ///
    /// # Errors
    ///
    /// `UndefinedVariable` tagged with the token's line if no frame binds it.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), RuntimeError> {
        let owner = self
            .chain_ids()
            .find(|&id| self.frame(id).values.contains_key(&name.lexeme));

        match owner {
            Some(id) => {
                if let Some(slot) = self.frame_mut(id).values.get_mut(&name.lexeme) {
                    *slot = value;
                }
                Ok(())
            }
            None => Err(RuntimeError::undefined_variable(name)),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Frames from the current one out to the global frame.
    pub fn chain(&self) -> impl Iterator<Item = &Frame> {
        self.chain_ids().map(|id| self.frame(id))
    }

    fn chain_ids(&self) -> impl Iterator<Item = FrameId> + '_ {
        std::iter::successors(Some(self.current), |&id| self.frame(id).enclosing)
    }

    /// Get all binding names in the current scope, in definition order.
    pub fn names_in_current_scope(&self) -> Vec<&str> {
        self.frame(self.current)
            .values
            .keys()
            .map(String::as_str)
            .collect()
    }

    /// Get the number of visible and shadowed bindings across the chain.
    pub fn len(&self) -> usize {
        self.chain().map(|frame| frame.values.len()).sum()
    }

    /// Check if the environment holds no bindings.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every frame and binding (reset to initial state).
    pub fn clear(&mut self) {
        self.frames.clear();
        self.frames.push(Frame::new(None));
        self.current = FrameId::GLOBAL;
    }

    fn frame(&self, id: FrameId) -> &Frame {
        &self.frames[id.0]
    }

    fn frame_mut(&mut self, id: FrameId) -> &mut Frame {
        &mut self.frames[id.0]
    }
}

//! Value representation for runtime values

mod display;
mod impls;

use std::sync::Arc;

/// Runtime value of a Sapling expression.
///
/// The language is dynamically typed with four kinds of value. Strings are
/// `Arc`-wrapped so that reading a variable clones a pointer, not the text.
#[derive(Clone, Default)]
pub enum Value {
    /// The absent value `nil`
    #[default]
    Nil,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// Double-precision number; the only numeric kind
    Number(f64),

    /// Immutable string
    String(Arc<String>),
}


//! # Syntax Output
//!
//! The parser reports the winning derivation as a stream of events to an
//! [`OutputListener`]:
//!
//! - `enter(position, name)` opens a frame
//! - `exit()` closes the innermost open frame
//! - `tap(position, value)` adds a leaf (an `enter` immediately followed by
//!   an `exit`)
//!
//! Events for a span of input are delivered as soon as the parser has
//! committed to it, so a listener sees a prefix of the tree even if a later
//! token fails to parse.
//!
//! [`SyntaxTreeBuilder`] assembles the events into a [`SyntaxTreeNode`];
//! [`NoopListener`] discards them.

pub mod builder;
pub mod node;

pub use builder::SyntaxTreeBuilder;
pub use node::SyntaxTreeNode;

use crate::error::SyntaxTreeError;

/// Receiver of tree-construction events.
///
/// `P` is the position type of the token source being parsed. Every method
/// defaults to doing nothing, so listeners implement only what they need.
///
/// # Example
///
/// ```rust
/// use parsley::syntax::OutputListener;
/// use parsley::error::SyntaxTreeError;
///
/// /// Collects leaf values
/// #[derive(Default)]
/// struct Leaves(Vec<String>);
///
/// impl<P> OutputListener<P> for Leaves {
///     fn tap(&mut self, _position: &P, value: &str) -> Result<(), SyntaxTreeError> {
///         self.0.push(value.to_string());
///         Ok(())
///     }
/// }
/// ```
pub trait OutputListener<P> {
    /// Open a frame named `name`
    ///
    /// # Errors
    ///
    /// Returns an error if the listener can not accept the event.
    fn enter(&mut self, position: &P, name: &str) -> Result<(), SyntaxTreeError> {
        let _ = (position, name);
        Ok(())
    }

    /// Close the innermost open frame
    ///
    /// # Errors
    ///
    /// Returns an error if the listener can not accept the event.
    fn exit(&mut self) -> Result<(), SyntaxTreeError> {
        Ok(())
    }

    /// Add a leaf `value`
    ///
    /// # Errors
    ///
    /// Returns an error if the listener can not accept the event.
    fn tap(&mut self, position: &P, value: &str) -> Result<(), SyntaxTreeError> {
        self.enter(position, value)?;
        self.exit()
    }
}

impl<P, L: OutputListener<P> + ?Sized> OutputListener<P> for &mut L {
    fn enter(&mut self, position: &P, name: &str) -> Result<(), SyntaxTreeError> {
        (**self).enter(position, name)
    }

    fn exit(&mut self) -> Result<(), SyntaxTreeError> {
        (**self).exit()
    }

    fn tap(&mut self, position: &P, value: &str) -> Result<(), SyntaxTreeError> {
        (**self).tap(position, value)
    }
}

/// Listener that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl<P> OutputListener<P> for NoopListener {}

use crate::error::SyntaxTreeError;
use crate::syntax::{OutputListener, SyntaxTreeNode};
use smallvec::SmallVec;

/// Listener that assembles parser output into a [`SyntaxTreeNode`].
///
/// Nodes are attached to their parent when they are exited, so the
/// finished tree is owned by the builder until [`finish`](Self::finish).
///
/// # Example
///
/// ```rust
/// use parsley::syntax::{OutputListener, SyntaxTreeBuilder};
///
/// let mut builder = SyntaxTreeBuilder::new();
/// builder.enter(&0, "sum")?;
/// builder.tap(&0, "1")?;
/// builder.tap(&2, "2")?;
/// builder.exit()?;
///
/// let tree = builder.finish()?;
/// assert_eq!(tree.value(), "sum");
/// assert_eq!(tree.children().len(), 2);
/// # Ok::<(), parsley::error::SyntaxTreeError>(())
/// ```
#[derive(Debug)]
pub struct SyntaxTreeBuilder<P> {
    stack: SmallVec<[SyntaxTreeNode<P>; 8]>,
    root: Option<SyntaxTreeNode<P>>,
}

impl<P> SyntaxTreeBuilder<P> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stack: SmallVec::new(),
            root: None,
        }
    }

    /// Number of nodes entered but not yet exited
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Take the finished tree.
    ///
    /// # Errors
    ///
    /// Returns an error if a node is still open or nothing was built.
    pub fn finish(self) -> Result<SyntaxTreeNode<P>, SyntaxTreeError> {
        if !self.stack.is_empty() {
            return Err(SyntaxTreeError::Unclosed {
                open: self.stack.len(),
            });
        }
        self.root.ok_or(SyntaxTreeError::Empty)
    }
}

impl<P> Default for SyntaxTreeBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone> OutputListener<P> for SyntaxTreeBuilder<P> {
    fn enter(&mut self, position: &P, name: &str) -> Result<(), SyntaxTreeError> {
        if self.stack.is_empty() && self.root.is_some() {
            return Err(SyntaxTreeError::MultipleRoots);
        }
        self.stack
            .push(SyntaxTreeNode::new(name.to_string(), position.clone(), Vec::new()));
        Ok(())
    }

    fn exit(&mut self) -> Result<(), SyntaxTreeError> {
        let node = self.stack.pop().ok_or(SyntaxTreeError::UnmatchedExit)?;
        match self.stack.last_mut() {
            Some(parent) => parent.push_child(node),
            None => self.root = Some(node),
        }
        Ok(())
    }
}

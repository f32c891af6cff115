use std::fmt;

/// A node of a syntax tree built from parser output.
///
/// Rule frames and token types become inner nodes or leaves named after
/// them; token values become leaves holding the value.
///
/// `Display` writes one node per line, indented by four spaces per depth.
/// The alternate form (`{:#}`) also writes each node's position.
///
/// Right-recursive grammars yield one level per token, so dropping,
/// comparing, cloning and printing walk the tree without recursion.
#[derive(Debug)]
pub struct SyntaxTreeNode<P> {
    value: String,
    position: P,
    children: Vec<SyntaxTreeNode<P>>,
}

impl<P> SyntaxTreeNode<P> {
    #[must_use]
    pub fn new(value: String, position: P, children: Vec<Self>) -> Self {
        Self {
            value,
            position,
            children,
        }
    }

    /// Rule name, token type or token value
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn position(&self) -> &P {
        &self.position
    }

    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }
}

impl<P: fmt::Display> fmt::Display for SyntaxTreeNode<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![(self, 0usize)];
        while let Some((node, depth)) = pending.pop() {
            for _ in 0..depth {
                f.write_str("    ")?;
            }
            f.write_str(&node.value)?;
            if f.alternate() {
                write!(f, " at {}", node.position)?;
            }
            f.write_str("\n")?;
            pending.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        }
        Ok(())
    }
}

impl<P: PartialEq> PartialEq for SyntaxTreeNode<P> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.value != right.value
                || left.position != right.position
                || left.children.len() != right.children.len()
            {
                return false;
            }
            pending.extend(left.children.iter().zip(&right.children));
        }
        true
    }
}

impl<P: Eq> Eq for SyntaxTreeNode<P> {}

impl<P: Clone> Clone for SyntaxTreeNode<P> {
    fn clone(&self) -> Self {
        // Open copies below the root: source node and its children cloned so far
        let mut open: Vec<(&Self, Vec<Self>)> = Vec::new();
        let mut root_children = Vec::with_capacity(self.children.len());

        loop {
            let (source, cloned) = match open.last_mut() {
                Some((source, cloned)) => (*source, cloned),
                None => (self, &mut root_children),
            };
            if let Some(child) = source.children.get(cloned.len()) {
                open.push((child, Vec::with_capacity(child.children.len())));
                continue;
            }

            let Some((source, children)) = open.pop() else {
                break;
            };
            let copy = Self::new(source.value.clone(), source.position.clone(), children);
            match open.last_mut() {
                Some((_, siblings)) => siblings.push(copy),
                None => root_children.push(copy),
            }
        }

        Self::new(self.value.clone(), self.position.clone(), root_children)
    }
}

impl<P> Drop for SyntaxTreeNode<P> {
    // Detach descendants onto a worklist so each node drops without children
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

//! Name resolution during rendering.
//!
//! A [`ScopeStack`] borrows every value it holds: the root value handed to
//! the renderer and, above it, the section values pushed while walking. All
//! of them live in the caller's data, so the stack never clones a value and
//! must not outlive the render call that built it.

use std::ops::{Deref, DerefMut};

use smallvec::SmallVec;
use stache_value::Value;

/// Chain of borrowed scopes, root first, innermost last.
///
/// The root is pushed at construction and can never be popped, so the stack
/// is never empty.
#[derive(Clone, Debug)]
pub struct ScopeStack<'v> {
    scopes: SmallVec<[&'v Value; 8]>,
}

impl<'v> ScopeStack<'v> {
    pub fn new(root: &'v Value) -> Self {
        let mut scopes = SmallVec::new();
        scopes.push(root);
        ScopeStack { scopes }
    }

    /// Number of scopes, root included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// The most recently pushed scope (the root if nothing was pushed).
    #[inline]
    pub fn innermost(&self) -> &'v Value {
        self.scopes[self.scopes.len() - 1]
    }

    #[inline]
    pub fn push(&mut self, value: &'v Value) {
        self.scopes.push(value);
    }

    /// Remove the innermost scope.
    ///
    /// Returns `None` instead of popping the root.
    #[inline]
    pub fn pop(&mut self) -> Option<&'v Value> {
        if self.scopes.len() > 1 {
            self.scopes.pop()
        } else {
            None
        }
    }

    /// Find `name` in the innermost scope that is an object containing it.
    ///
    /// Scopes that aren't objects (list elements that are strings, say) are
    /// passed over.
    pub fn resolve(&self, name: &str) -> Option<&'v Value> {
        self.scopes
            .iter()
            .rev()
            .copied()
            .find_map(|scope| scope.get(name))
    }

    /// Push `value` for as long as the returned guard lives.
    ///
    /// The guard derefs to the stack, so nested lookups and pushes go through
    /// it; dropping it pops exactly the scope pushed here, on every exit path.
    pub fn enter(&mut self, value: &'v Value) -> ScopeGuard<'_, 'v> {
        self.push(value);
        ScopeGuard { stack: self }
    }
}

/// Pops its scope on drop. See [`ScopeStack::enter`].
#[derive(Debug)]
pub struct ScopeGuard<'s, 'v> {
    stack: &'s mut ScopeStack<'v>,
}

impl Drop for ScopeGuard<'_, '_> {
    fn drop(&mut self) {
        self.stack.pop();
    }
}

impl<'v> Deref for ScopeGuard<'_, 'v> {
    type Target = ScopeStack<'v>;

    fn deref(&self) -> &Self::Target {
        self.stack
    }
}

impl DerefMut for ScopeGuard<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.stack
    }
}

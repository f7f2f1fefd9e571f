//! Typed views over the concrete syntax tree.
//!
//! Every wrapper is a cheap handle around a [`SyntaxNode`] or
//! [`SyntaxToken`]; accessors return `None` when the corresponding part is
//! missing from a tree that contains errors.

mod nodes;
mod tokens;
mod traits;

use core::marker::PhantomData;

use crate::{
  syntax_node::{SyntaxNode, SyntaxNodeChildren, SyntaxToken},
  SmolStr, SyntaxKind,
};

pub use self::{nodes::*, tokens::*, traits::*};

/// The main trait to go from untyped `SyntaxNode`  to a typed ast. The
/// conversion itself has zero runtime cost: ast and syntax nodes have exactly
/// the same representation: a pointer to the tree root and a pointer to the
/// node itself.
pub trait AstNode {
  fn can_cast(kind: SyntaxKind) -> bool
  where
    Self: Sized;

  fn cast(syntax: SyntaxNode) -> Option<Self>
  where
    Self: Sized;

  fn syntax(&self) -> &SyntaxNode;
}

/// Like `AstNode`, but wraps tokens rather than interior nodes.
pub trait AstToken {
  fn can_cast(token: SyntaxKind) -> bool
  where
    Self: Sized;

  fn cast(syntax: SyntaxToken) -> Option<Self>
  where
    Self: Sized;

  fn syntax(&self) -> &SyntaxToken;

  fn text(&self) -> &SmolStr {
    self.syntax().text()
  }
}

/// An iterator over `SyntaxNode` children of a particular AST type.
#[derive(Debug, Clone)]
pub struct AstChildren<N> {
  inner: SyntaxNodeChildren,
  ph: PhantomData<N>,
}

impl<N> AstChildren<N> {
  fn new(parent: &SyntaxNode) -> Self {
    AstChildren {
      inner: parent.children(),
      ph: PhantomData,
    }
  }
}

impl<N: AstNode> Iterator for AstChildren<N> {
  type Item = N;

  fn next(&mut self) -> Option<N> {
    self.inner.by_ref().find_map(N::cast)
  }
}

mod support {
  use super::{AstChildren, AstNode, AstToken, SyntaxKind, SyntaxNode, SyntaxToken};

  pub(super) fn child<N: AstNode>(parent: &SyntaxNode) -> Option<N> {
    parent.children().find_map(N::cast)
  }

  pub(super) fn children<N: AstNode>(parent: &SyntaxNode) -> AstChildren<N> {
    AstChildren::new(parent)
  }

  /// Descends through the children of the given kinds, in order, and returns
  /// the first `N` below the last of them.
  pub(super) fn nested_child<N: AstNode>(parent: &SyntaxNode, path: &[SyntaxKind]) -> Option<N> {
    let mut node = parent.clone();
    for &kind in path {
      node = node.children().find(|it| it.kind() == kind)?;
    }

    child(&node)
  }

  pub(super) fn token(parent: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    parent
      .children_with_tokens()
      .filter_map(|it| it.into_token())
      .find(|it| it.kind() == kind)
  }

  pub(super) fn token_any_of(parent: &SyntaxNode, kinds: &[SyntaxKind]) -> Option<SyntaxToken> {
    parent
      .children_with_tokens()
      .filter_map(|it| it.into_token())
      .find(|it| kinds.contains(&it.kind()))
  }

  pub(super) fn token_kind<T: AstToken>(parent: &SyntaxNode) -> Option<T> {
    parent
      .children_with_tokens()
      .filter_map(|it| it.into_token())
      .find_map(T::cast)
  }
}

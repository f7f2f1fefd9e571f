//! Concrete syntax tree of Apex source, built on top of rowan.
//!
//! The tree is lossless: every byte of the input, trivia and malformed
//! tokens included, belongs to exactly one token of the tree.

use rowan::{GreenNodeBuilder, Language};

use crate::{SmolStr, SyntaxError, SyntaxKind};

pub use rowan::GreenNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ApexLanguage {}

impl Language for ApexLanguage {
  type Kind = SyntaxKind;

  fn kind_from_raw(raw: rowan::SyntaxKind) -> SyntaxKind {
    SyntaxKind::from(raw.0)
  }

  fn kind_to_raw(kind: SyntaxKind) -> rowan::SyntaxKind {
    rowan::SyntaxKind(kind.into())
  }
}

pub type SyntaxNode = rowan::SyntaxNode<ApexLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<ApexLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<ApexLanguage>;
pub type SyntaxNodeChildren = rowan::SyntaxNodeChildren<ApexLanguage>;
pub type SyntaxElementChildren = rowan::SyntaxElementChildren<ApexLanguage>;

/// Accumulates green nodes and the errors reported while building them.
#[derive(Default)]
pub struct SyntaxTreeBuilder {
  errors: Vec<SyntaxError>,
  inner: GreenNodeBuilder<'static>,
}

impl SyntaxTreeBuilder {
  pub(crate) fn finish_raw(self) -> (GreenNode, Vec<SyntaxError>) {
    let green = self.inner.finish();
    (green, self.errors)
  }

  pub fn token(&mut self, kind: SyntaxKind, text: SmolStr) {
    let kind = ApexLanguage::kind_to_raw(kind);
    self.inner.token(kind, text)
  }

  pub fn start_node(&mut self, kind: SyntaxKind) {
    let kind = ApexLanguage::kind_to_raw(kind);
    self.inner.start_node(kind)
  }

  pub fn finish_node(&mut self) {
    self.inner.finish_node()
  }

  pub fn error(&mut self, error: SyntaxError) {
    self.errors.push(error)
  }
}

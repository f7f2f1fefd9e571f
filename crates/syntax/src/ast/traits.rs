//! Various traits that are implemented by ast nodes.

use crate::{
  ast::{support, AstNode, ModifierList, Name},
  SyntaxKind,
};

pub trait NameOwner: AstNode {
  fn name(&self) -> Option<Name> {
    support::child(self.syntax())
  }
}

pub trait ModifierOwner: AstNode {
  fn modifier_list(&self) -> Option<ModifierList> {
    support::child(self.syntax())
  }

  /// Whether the keyword modifier `kw` (`public`, `static`, ...) is present.
  fn has_modifier(&self, kw: SyntaxKind) -> bool {
    self.modifier_list().map_or(false, |it| it.has(kw))
  }
}

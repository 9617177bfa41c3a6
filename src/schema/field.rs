//! # Field Descriptors
//!
//! One `FieldDef` per record member. The descriptor fixes the field's
//! external name at construction time:
//!
//! - An explicit [`FieldDef::rename`] wins.
//! - Otherwise the name is derived from the identifier by a deterministic
//!   rule: `snake_case` converted to `PascalCase` (`some_message` becomes
//!   `SomeMessage`).
//!
//! Identifiers starting with `_` mark internal-only fields: they are never
//! emitted and never populated by decoding, regardless of policy.

use crate::types::FieldKind;

/// When encoding writes a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitPolicy {
    /// Emit regardless of value.
    Always,
    /// Skip the field when its value equals the kind's zero value.
    OmitIfEmpty,
    /// Exclude from encoding entirely; the field still receives decoded
    /// input.
    Never,
}

/// Descriptor for one record member.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    ident: String,
    external: String,
    kind: FieldKind,
    policy: EmitPolicy,
}

impl FieldDef {
    /// New descriptor with a derived external name and the `Always`
    /// policy.
    pub fn new(ident: impl Into<String>, kind: FieldKind) -> Self {
        let ident = ident.into();
        let external = pascal_case(&ident);
        Self {
            ident,
            external,
            kind,
            policy: EmitPolicy::Always,
        }
    }

    /// Overrides the derived external name.
    pub fn rename(mut self, name: impl Into<String>) -> Self {
        self.external = name.into();
        self
    }

    /// Switches the policy to [`EmitPolicy::OmitIfEmpty`].
    pub fn omit_if_empty(mut self) -> Self {
        self.policy = EmitPolicy::OmitIfEmpty;
        self
    }

    /// Switches the policy to [`EmitPolicy::Never`].
    pub fn never_emitted(mut self) -> Self {
        self.policy = EmitPolicy::Never;
        self
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// The key this field uses in documents.
    pub fn external_name(&self) -> &str {
        &self.external
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub fn policy(&self) -> EmitPolicy {
        self.policy
    }

    /// Internal-only fields (identifier starting with `_`) are invisible
    /// to both directions of the codec.
    pub fn is_hidden(&self) -> bool {
        self.ident.starts_with('_')
    }
}

/// `snake_case` to `PascalCase`, ASCII-only on the segment heads.
fn pascal_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len());
    for segment in ident.split('_') {
        let mut chars = segment.chars();
        if let Some(head) = chars.next() {
            out.push(head.to_ascii_uppercase());
            out.extend(chars);
        }
    }
    out
}

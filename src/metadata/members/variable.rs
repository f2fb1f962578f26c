/// Whether a decompiler variable stands for an IL local or an IL argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    /// An entry of the method's local variable signature
    Local,
    /// A method argument (including `this`)
    Argument,
}

/// A variable as produced by the decompiler.
///
/// Variables that map to an IL slot carry its index. Variables the decompiler introduced
/// itself normally have a name; one with neither is an upstream defect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceVariable {
    /// The name from debug info or the decompiler, may be blank
    pub name: Option<String>,
    /// Index of the underlying IL local or argument
    pub slot: Option<u32>,
    /// Local or argument
    pub kind: VariableKind,
}

impl SourceVariable {
    /// An unnamed IL local
    #[must_use]
    pub fn local(slot: u32) -> Self {
        SourceVariable {
            name: None,
            slot: Some(slot),
            kind: VariableKind::Local,
        }
    }

    /// An unnamed IL argument
    #[must_use]
    pub fn argument(slot: u32) -> Self {
        SourceVariable {
            name: None,
            slot: Some(slot),
            kind: VariableKind::Argument,
        }
    }

    /// Attach a name
    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// True if this variable stands for an IL local
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.kind == VariableKind::Local
    }
}

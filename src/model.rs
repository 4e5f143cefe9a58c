//! Declaration model for a parsed package listing — renderer-agnostic.

use serde::Serialize;

/// Public surface of one Go package, as listed by `go doc -all`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    pub name: String,
    /// Path from the `// import "..."` comment on the package line
    pub import_path: Option<String>,
    pub doc: String,

    pub variables: Vec<Variable>,
    pub variable_blocks: Vec<VariableBlock>,
    pub constants: Vec<Variable>,
    pub constant_blocks: Vec<VariableBlock>,

    pub functions: Vec<Function>,

    pub types: Vec<Type>,
    pub structs: Vec<Struct>,
    pub interfaces: Vec<Interface>,
}

/// A function, or a method when owned by a [`Struct`] or [`Type`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    pub name: String,
    pub doc: String,
    /// The literal declaration line
    pub definition: String,
}

/// A single `var` or `const` declaration, top-level or inside a block.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    pub name: String,
    pub doc: String,
    pub definition: String,
    pub value: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// A parenthesized `var ( ... )` or `const ( ... )` group.
///
/// The block carries one doc string for all of its variables.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct VariableBlock {
    pub variables: Vec<Variable>,
    pub doc: String,
}

/// A named type that is neither a struct nor an interface.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Type {
    pub doc: String,
    pub name: String,
    pub definition: String,
    pub functions: Vec<Function>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Struct {
    pub doc: String,
    pub name: String,
    /// Full multi-line declaration, field list included
    pub definition: String,
    pub functions: Vec<Function>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    pub doc: String,
    pub name: String,
    /// Full multi-line declaration, method set included
    pub definition: String,
    /// Method signatures, parsed like variable declarations
    pub values: Vec<Variable>,
}

// -- Documentable -------------------------------------------------------------

/// Anything that continuation lines can be appended to.
pub trait Documentable {
    fn doc_mut(&mut self) -> &mut String;

    /// Append one newline-terminated fragment to the doc.
    fn append_doc(&mut self, fragment: &str) {
        let doc = self.doc_mut();
        doc.push_str(fragment);
        doc.push('\n');
    }
}

impl Documentable for Function {
    fn doc_mut(&mut self) -> &mut String {
        &mut self.doc
    }
}

impl Documentable for Variable {
    fn doc_mut(&mut self) -> &mut String {
        &mut self.doc
    }
}

impl Documentable for VariableBlock {
    fn doc_mut(&mut self) -> &mut String {
        &mut self.doc
    }
}

impl Documentable for Type {
    fn doc_mut(&mut self) -> &mut String {
        &mut self.doc
    }
}

impl Documentable for Struct {
    fn doc_mut(&mut self) -> &mut String {
        &mut self.doc
    }
}

impl Documentable for Interface {
    fn doc_mut(&mut self) -> &mut String {
        &mut self.doc
    }
}

// -- Focus --------------------------------------------------------------------

/// Which of the two value lists a declaration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Var,
    Const,
}

impl ValueKind {
    /// Declaration keyword, e.g. `var`.
    pub fn keyword(self) -> &'static str {
        match self {
            ValueKind::Var => "var",
            ValueKind::Const => "const",
        }
    }

    /// Name of the listing section holding this kind.
    pub fn section(self) -> &'static str {
        match self {
            ValueKind::Var => "variables",
            ValueKind::Const => "constants",
        }
    }
}

/// Declaration that methods are attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Struct(usize),
    Type(usize),
}

/// Tagged reference to the entity continuation lines are routed to.
///
/// Indices point into the owning vectors of a [`Package`]; entries are
/// only ever appended, so a focus stays valid for the whole parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Function(usize),
    Value(ValueKind, usize),
    Block(ValueKind, usize),
    Type(usize),
    Struct(usize),
    Interface(usize),
    Method(Owner, usize),
}

impl Package {
    pub fn values_mut(&mut self, kind: ValueKind) -> &mut Vec<Variable> {
        match kind {
            ValueKind::Var => &mut self.variables,
            ValueKind::Const => &mut self.constants,
        }
    }

    pub fn blocks_mut(&mut self, kind: ValueKind) -> &mut Vec<VariableBlock> {
        match kind {
            ValueKind::Var => &mut self.variable_blocks,
            ValueKind::Const => &mut self.constant_blocks,
        }
    }

    /// Append a top-level value and return its focus.
    pub fn push_value(&mut self, kind: ValueKind, value: Variable) -> Focus {
        let values = self.values_mut(kind);
        values.push(value);
        Focus::Value(kind, values.len() - 1)
    }

    /// Open a new, empty block and return its focus.
    pub fn push_block(&mut self, kind: ValueKind) -> Focus {
        let blocks = self.blocks_mut(kind);
        blocks.push(VariableBlock::default());
        Focus::Block(kind, blocks.len() - 1)
    }

    /// Method list of an owner, if the owner exists.
    pub fn methods_mut(&mut self, owner: Owner) -> Option<&mut Vec<Function>> {
        match owner {
            Owner::Struct(i) => self.structs.get_mut(i).map(|s| &mut s.functions),
            Owner::Type(i) => self.types.get_mut(i).map(|t| &mut t.functions),
        }
    }

    /// Resolve a focus to the entity it names.
    pub fn documentable_mut(&mut self, focus: Focus) -> Option<&mut dyn Documentable> {
        match focus {
            Focus::Function(i) => self.functions.get_mut(i).map(|f| f as &mut dyn Documentable),
            Focus::Value(kind, i) => self
                .values_mut(kind)
                .get_mut(i)
                .map(|v| v as &mut dyn Documentable),
            Focus::Block(kind, i) => self
                .blocks_mut(kind)
                .get_mut(i)
                .map(|b| b as &mut dyn Documentable),
            Focus::Type(i) => self.types.get_mut(i).map(|t| t as &mut dyn Documentable),
            Focus::Struct(i) => self.structs.get_mut(i).map(|s| s as &mut dyn Documentable),
            Focus::Interface(i) => self
                .interfaces
                .get_mut(i)
                .map(|it| it as &mut dyn Documentable),
            Focus::Method(owner, i) => self
                .methods_mut(owner)
                .and_then(|methods| methods.get_mut(i))
                .map(|f| f as &mut dyn Documentable),
        }
    }

    /// Append a doc fragment to the focused entity.
    ///
    /// Returns `false` when there is no focus or it no longer resolves.
    pub fn append_doc(&mut self, focus: Option<Focus>, fragment: &str) -> bool {
        match focus.and_then(|f| self.documentable_mut(f)) {
            Some(entity) => {
                entity.append_doc(fragment);
                true
            }
            None => false,
        }
    }
}

//! TYPES section state machine.
//!
//! `go doc -all` lists each type followed by the declarations grouped under
//! it: typed constants and variables, constructors, and methods. Every line
//! goes through two passes:
//!
//! - **Pass A** finishes whatever the previous line opened (a struct field
//!   list, an interface method set, a value block, a buffered method).
//! - **Pass B** looks for a new opener on the current line.
//!
//! Methods and constructors attach to the most recently opened struct or
//! named type, which is how receivers get associated with their owner. An
//! interface has no function list, so opening one clears the owner.

use super::decl;
use crate::model::{Focus, Function, Interface, Owner, Package, Struct, Type, ValueKind};

/// What the previous line left open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    None,
    Struct,
    Interface,
    Value(ValueKind),
    Block(ValueKind),
    Func,
    Type,
    Docs,
}

/// Whether Pass A consumed the line.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Consumed,
    Next,
}

struct TypeParser<'a> {
    pkg: &'a mut Package,
    kind: Kind,
    last_owner: Option<Owner>,
    /// Raw `func` line waiting to be attached to its owner
    pending: Option<String>,
    focus: Option<Focus>,
}

/// Parse the types section into `pkg`.
pub fn parse(pkg: &mut Package, section: &str) {
    let mut parser = TypeParser::new(pkg);
    for line in section.split('\n') {
        parser.process_line(line);
    }
    parser.finish();
}

impl<'a> TypeParser<'a> {
    fn new(pkg: &'a mut Package) -> Self {
        TypeParser {
            pkg,
            kind: Kind::None,
            last_owner: None,
            pending: None,
            focus: None,
        }
    }

    fn process_line(&mut self, line: &str) {
        if line.trim_end() == "}" {
            self.close_body();
            return;
        }
        if self.pass_a(line) == Flow::Consumed {
            return;
        }
        self.pass_b(line);
    }

    /// Attach a method declared on the very last line.
    fn finish(&mut self) {
        if self.kind == Kind::Func {
            self.attach_pending();
            self.kind = Kind::None;
        }
    }

    /// `}` ends the open struct or interface body.
    fn close_body(&mut self) {
        match self.kind {
            Kind::Struct => {
                if let Some(s) = self.pkg.structs.last_mut() {
                    s.definition.push('}');
                }
            }
            Kind::Interface => {
                if let Some(i) = self.pkg.interfaces.last_mut() {
                    i.definition.push('}');
                }
            }
            _ => tracing::trace!(state = ?self.kind, "closing brace outside a body"),
        }
        self.kind = Kind::None;
    }

    // -- Pass A ---------------------------------------------------------------

    fn pass_a(&mut self, line: &str) -> Flow {
        match self.kind {
            Kind::None => Flow::Next,
            Kind::Struct => {
                if let Some(s) = self.pkg.structs.last_mut() {
                    s.definition.push_str(line);
                    s.definition.push('\n');
                }
                Flow::Consumed
            }
            Kind::Interface => {
                if let Some(i) = self.pkg.interfaces.last_mut() {
                    i.definition.push_str(line);
                    i.definition.push('\n');
                    if !decl::is_comment_or_blank(line) {
                        i.values.push(decl::parse_variable(line));
                    }
                }
                Flow::Consumed
            }
            Kind::Value(kind) => {
                let len = self.pkg.values_mut(kind).len();
                if len > 0 {
                    self.focus = Some(Focus::Value(kind, len - 1));
                }
                self.kind = Kind::None;
                Flow::Next
            }
            Kind::Block(kind) => {
                if line.trim_end() == ")" {
                    self.kind = Kind::None;
                } else if !decl::is_comment_or_blank(line) {
                    if let Some(block) = self.pkg.blocks_mut(kind).last_mut() {
                        block.variables.push(decl::parse_variable(line));
                    }
                }
                Flow::Consumed
            }
            Kind::Func => {
                self.attach_pending();
                self.kind = Kind::None;
                Flow::Next
            }
            Kind::Type => {
                if !self.pkg.types.is_empty() {
                    self.focus = Some(Focus::Type(self.pkg.types.len() - 1));
                }
                self.kind = Kind::None;
                Flow::Next
            }
            Kind::Docs => {
                self.kind = Kind::None;
                Flow::Next
            }
        }
    }

    /// Turn the buffered `func` line into a method of the current owner.
    fn attach_pending(&mut self) {
        let pending = self.pending.take();
        let Some(owner) = self.last_owner else {
            tracing::trace!(line = ?pending, "dropping function without an owner type");
            self.focus = None;
            return;
        };
        let Some(methods) = self.pkg.methods_mut(owner) else {
            self.focus = None;
            return;
        };

        let mut func = Function::default();
        if let Some(line) = pending {
            func.name = decl::function_name(&line);
            func.definition = line.trim().to_string();
        }
        methods.push(func);
        self.focus = Some(Focus::Method(owner, methods.len() - 1));
    }

    // -- Pass B ---------------------------------------------------------------

    fn pass_b(&mut self, line: &str) {
        if line.starts_with("type ") {
            self.open_type(line);
            return;
        }

        for kind in [ValueKind::Var, ValueKind::Const] {
            let keyword = kind.keyword();
            let Some(rest) = line.strip_prefix(keyword) else {
                continue;
            };
            if rest.starts_with(" (") {
                self.focus = Some(self.pkg.push_block(kind));
                self.kind = Kind::Block(kind);
                return;
            }
            if rest.starts_with(' ') {
                self.pkg.push_value(kind, decl::parse_variable(line));
                self.kind = Kind::Value(kind);
                return;
            }
        }

        if line.starts_with("func ") {
            self.pending = Some(line.to_string());
            self.kind = Kind::Func;
            return;
        }

        if decl::is_continuation(line) {
            if !self.pkg.append_doc(self.focus, decl::doc_fragment(line)) {
                tracing::trace!(line, "dropping doc line without a declaration");
            }
            self.kind = Kind::Docs;
            return;
        }

        if !line.is_empty() {
            tracing::trace!(line, "ignoring unrecognized line in types section");
        }
    }

    fn open_type(&mut self, line: &str) {
        let name = line.split_whitespace().nth(1).unwrap_or_default().to_string();

        if line.contains("struct {") {
            self.pkg.structs.push(Struct {
                name,
                definition: format!("{}\n", line),
                ..Default::default()
            });
            let index = self.pkg.structs.len() - 1;
            self.focus = Some(Focus::Struct(index));
            self.last_owner = Some(Owner::Struct(index));
            self.kind = Kind::Struct;
        } else if line.contains("interface {") {
            self.pkg.interfaces.push(Interface {
                name,
                definition: format!("{}\n", line),
                ..Default::default()
            });
            self.focus = Some(Focus::Interface(self.pkg.interfaces.len() - 1));
            // Functions listed under an interface have no owner to join
            self.last_owner = None;
            self.kind = Kind::Interface;
        } else {
            self.pkg.types.push(Type {
                name,
                definition: line.to_string(),
                ..Default::default()
            });
            self.last_owner = Some(Owner::Type(self.pkg.types.len() - 1));
            self.kind = Kind::Type;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_types(section: &str) -> Package {
        let mut pkg = Package::default();
        parse(&mut pkg, section);
        pkg
    }

    // -- transitions ----------------------------------------------------------

    #[test]
    fn pass_b_opens_struct() {
        let mut pkg = Package::default();
        let mut p = TypeParser::new(&mut pkg);
        p.pass_b("type Foo struct {");
        assert_eq!(p.kind, Kind::Struct);
        assert_eq!(p.last_owner, Some(Owner::Struct(0)));
        assert_eq!(p.focus, Some(Focus::Struct(0)));
        assert_eq!(pkg.structs[0].name, "Foo");
        assert_eq!(pkg.structs[0].definition, "type Foo struct {\n");
    }

    #[test]
    fn pass_b_opens_interface_without_owning_methods() {
        let mut pkg = Package::default();
        let mut p = TypeParser::new(&mut pkg);
        p.pass_b("type Runner interface {");
        assert_eq!(p.kind, Kind::Interface);
        assert_eq!(p.last_owner, None);
        assert_eq!(pkg.interfaces[0].name, "Runner");
    }

    #[test]
    fn pass_b_opens_plain_type() {
        let mut pkg = Package::default();
        let mut p = TypeParser::new(&mut pkg);
        p.pass_b("type ST string");
        assert_eq!(p.kind, Kind::Type);
        assert_eq!(p.last_owner, Some(Owner::Type(0)));
        assert_eq!(p.focus, None);
        assert_eq!(pkg.types[0].definition, "type ST string");
    }

    #[test]
    fn pass_a_type_takes_focus() {
        let mut pkg = Package::default();
        let mut p = TypeParser::new(&mut pkg);
        p.pass_b("type ST string");
        assert_eq!(p.pass_a("    ST docs."), Flow::Next);
        assert_eq!(p.kind, Kind::None);
        assert_eq!(p.focus, Some(Focus::Type(0)));
    }

    #[test]
    fn pass_b_buffers_method() {
        let mut pkg = Package::default();
        let mut p = TypeParser::new(&mut pkg);
        p.pass_b("func (t *ST) Run()");
        assert_eq!(p.kind, Kind::Func);
        assert_eq!(p.pending.as_deref(), Some("func (t *ST) Run()"));
    }

    #[test]
    fn pass_a_func_attaches_to_last_owner() {
        let mut pkg = Package::default();
        let mut p = TypeParser::new(&mut pkg);
        p.pass_b("type ST string");
        p.pass_a("");
        p.pass_b("func (t *ST) Run() error");
        assert_eq!(p.pass_a(""), Flow::Next);
        assert_eq!(p.kind, Kind::None);
        assert_eq!(p.focus, Some(Focus::Method(Owner::Type(0), 0)));
        assert_eq!(p.pending, None);
        assert_eq!(pkg.types[0].functions[0].name, "Run");
        assert_eq!(pkg.types[0].functions[0].definition, "func (t *ST) Run() error");
    }

    #[test]
    fn pass_a_func_without_owner_drops_method() {
        let mut pkg = Package::default();
        let mut p = TypeParser::new(&mut pkg);
        p.pass_b("func (t *ST) Run()");
        p.pass_a("");
        assert_eq!(p.focus, None);
        assert!(pkg.types.is_empty());
        assert!(pkg.functions.is_empty());
    }

    #[test]
    fn pass_a_struct_consumes_fields() {
        let mut pkg = Package::default();
        let mut p = TypeParser::new(&mut pkg);
        p.pass_b("type S struct {");
        assert_eq!(p.pass_a("\tName string"), Flow::Consumed);
        assert_eq!(p.kind, Kind::Struct);
        assert_eq!(pkg.structs[0].definition, "type S struct {\n\tName string\n");
    }

    #[test]
    fn pass_a_interface_collects_signatures() {
        let mut pkg = Package::default();
        let mut p = TypeParser::new(&mut pkg);
        p.pass_b("type I interface {");
        p.pass_a("\t// Get returns it.");
        p.pass_a("\tGet() string");
        assert_eq!(pkg.interfaces[0].values.len(), 1);
        assert_eq!(pkg.interfaces[0].values[0].name, "Get()");
        assert_eq!(
            pkg.interfaces[0].definition,
            "type I interface {\n\t// Get returns it.\n\tGet() string\n"
        );
    }

    #[test]
    fn pass_a_value_takes_focus() {
        let mut pkg = Package::default();
        let mut p = TypeParser::new(&mut pkg);
        p.pass_b("var SS1Var SimpleStruct1");
        assert_eq!(p.kind, Kind::Value(ValueKind::Var));
        p.pass_a("    SS1Var docs.");
        assert_eq!(p.focus, Some(Focus::Value(ValueKind::Var, 0)));
        assert_eq!(p.kind, Kind::None);
    }

    #[test]
    fn pass_a_docs_resets_state() {
        let mut pkg = Package::default();
        let mut p = TypeParser::new(&mut pkg);
        p.kind = Kind::Docs;
        assert_eq!(p.pass_a("type T int"), Flow::Next);
        assert_eq!(p.kind, Kind::None);
    }

    #[test]
    fn closing_brace_outside_body_resets() {
        let mut pkg = Package::default();
        let mut p = TypeParser::new(&mut pkg);
        p.kind = Kind::Docs;
        p.process_line("}");
        assert_eq!(p.kind, Kind::None);
    }

    // -- whole sections -------------------------------------------------------

    #[test]
    fn struct_with_methods() {
        let pkg = parse_types(
            "type Foo struct {\n\tA int\n}\n    Foo docs.\n\nfunc (t *Foo) Bar() string\n    Bar docs.\n\n",
        );
        assert!(pkg.functions.is_empty());
        let foo = &pkg.structs[0];
        assert_eq!(foo.name, "Foo");
        assert_eq!(foo.definition, "type Foo struct {\n\tA int\n}");
        assert_eq!(foo.doc, "Foo docs.\n");
        assert_eq!(foo.functions.len(), 1);
        assert_eq!(foo.functions[0].name, "Bar");
        assert_eq!(foo.functions[0].doc, "Bar docs.\n");
    }

    #[test]
    fn methods_follow_the_latest_owner() {
        let pkg = parse_types(
            "type A struct {\n}\n\nfunc (a A) One()\n\ntype B int\n\nfunc (b B) Two()\n\nfunc (b B) Three()\n",
        );
        assert_eq!(pkg.structs[0].functions.len(), 1);
        assert_eq!(pkg.structs[0].functions[0].name, "One");
        let names: Vec<&str> = pkg.types[0].functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Two", "Three"]);
    }

    #[test]
    fn constructor_attaches_to_type() {
        let pkg = parse_types("type Client struct {\n}\n\nfunc NewClient(addr string) *Client\n    NewClient docs.\n");
        let func = &pkg.structs[0].functions[0];
        assert_eq!(func.name, "NewClient");
        assert_eq!(func.definition, "func NewClient(addr string) *Client");
        assert_eq!(func.doc, "NewClient docs.\n");
    }

    #[test]
    fn constructor_under_interface_is_not_owned_by_previous_struct() {
        let pkg = parse_types(
            "type Server struct {\n}\n\nfunc (s *Server) Start()\n    Start docs.\n\ntype Logger interface {\n\tLog(msg string)\n}\n    Logger docs.\n\nfunc NewLogger() Logger\n    NewLogger docs.\n",
        );
        let names: Vec<&str> = pkg.structs[0].functions.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Start"]);
        assert_eq!(pkg.structs[0].functions[0].doc, "Start docs.\n");
        assert_eq!(pkg.interfaces[0].doc, "Logger docs.\n");
        assert!(pkg.functions.is_empty());
    }

    #[test]
    fn pass_b_interface_clears_owner() {
        let mut pkg = Package::default();
        let mut p = TypeParser::new(&mut pkg);
        p.pass_b("type ST string");
        assert_eq!(p.last_owner, Some(Owner::Type(0)));
        p.pass_a("");
        p.pass_b("type Logger interface {");
        assert_eq!(p.last_owner, None);
    }

    #[test]
    fn typed_constant_block() {
        let pkg = parse_types(
            "type Kind int\n    Kind docs.\n\nconst (\n\tSmall Kind = iota\n\t// Large is big.\n\tLarge\n)\n    Kinds docs.\n\nfunc (k Kind) String() string\n",
        );
        assert_eq!(pkg.types[0].doc, "Kind docs.\n");
        let block = &pkg.constant_blocks[0];
        let names: Vec<&str> = block.variables.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["Small", "Large"]);
        assert_eq!(block.doc, "Kinds docs.\n");
        assert_eq!(pkg.types[0].functions[0].name, "String");
    }

    #[test]
    fn typed_single_constant() {
        let pkg = parse_types("type Mode int\n\nconst Default Mode = 1\n    Default docs.\n");
        assert_eq!(pkg.constants[0].name, "Default");
        assert_eq!(pkg.constants[0].type_name, "Mode = 1");
        assert_eq!(pkg.constants[0].doc, "Default docs.\n");
    }

    #[test]
    fn method_on_last_line_is_kept() {
        let pkg = parse_types("type T int\nfunc (t T) Last()");
        assert_eq!(pkg.types[0].functions[0].name, "Last");
    }

    #[test]
    fn interface_doc_after_body() {
        let pkg = parse_types("type SI interface {\n\tRun(text string)\n\tGet() string\n}\n    SI docs.\n");
        let si = &pkg.interfaces[0];
        assert_eq!(si.definition, "type SI interface {\n\tRun(text string)\n\tGet() string\n}");
        assert_eq!(si.doc, "SI docs.\n");
        assert_eq!(si.values.len(), 2);
        assert_eq!(si.values[1].definition, "Get() string");
    }
}

//! Declaration rendering over a derived descriptor.

use hwvecgen_core::descriptor::{Descriptor, Shape};
use hwvecgen_core::ops::{BinaryOp, Conversion, MASK_QUERIES, OPERATORS, OperatorSpec, UnaryOp};

use crate::Config;

/// Renders one type declaration into an owned text block.
///
/// Concrete shapes get the full operator surface from the catalogue, with
/// scalar-broadcast overloads interleaved directly after their
/// vector-vector counterpart. The erased shape gets the minimal surface:
/// storage field, display string, constructor, storage bridge.
pub struct Renderer<'a> {
    desc: &'a Descriptor,
    config: &'a Config,
    out: String,
}

impl<'a> Renderer<'a> {
    pub fn render(desc: &'a Descriptor, config: &'a Config) -> String {
        let mut renderer = Renderer {
            desc,
            config,
            out: String::new(),
        };
        match &desc.shape {
            Shape::Erased => renderer.emit_erased(),
            Shape::Concrete { siblings, .. } => renderer.emit_concrete(siblings),
        }
        renderer.out
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn inline_attr(&mut self) {
        if self.config.inlining {
            self.line("    [MethodImpl(AggressiveInlining)]");
        }
    }

    fn emit_erased(&mut self) {
        let name = &self.desc.name;
        let storage = self.desc.width.storage();

        self.blank();
        self.line("[DebuggerDisplay(\"{\" + nameof(DebuggerString) + \"}\")]");
        self.line(&format!("public readonly struct {name}"));
        self.line("{");
        self.line(&format!("    public readonly {storage} Value;"));
        self.blank();
        self.line("    internal string DebuggerString => Value.ToString();");
        self.line("    public override string ToString() => DebuggerString;");
        self.blank();
        self.line(&format!("    public {name}({storage} value)"));
        self.line("    {");
        self.line("        Value = value;");
        self.line("    }");
        self.blank();
        self.line(&format!(
            "    public static implicit operator {storage}({name} vector) => vector.Value;"
        ));
        self.line(&format!(
            "    public static implicit operator {name}({storage} vector) => new {name}(vector);"
        ));
        self.line("}");
    }

    fn emit_concrete(&mut self, siblings: &'a [String; 2]) {
        let name = self.desc.name.clone();
        let storage = self.desc.width.storage();
        let debug = self
            .desc
            .debug_string()
            .expect("concrete descriptor has a debug string");

        self.blank();
        self.line("[DebuggerDisplay(\"{\" + nameof(DebuggerString) + \"}\")]");
        self.line(&format!(
            "public readonly struct {name} : IEquatable<{name}>"
        ));
        self.line("{");
        self.line(&format!("    public readonly {storage} Value;"));
        self.blank();
        self.line(&format!("    internal string DebuggerString => $\"{debug}\";"));
        self.line("    public override string ToString() => DebuggerString;");
        self.blank();
        self.inline_attr();
        self.line(&format!("    public {name}({storage} value)"));
        self.line("    {");
        self.line("        Value = value;");
        self.line("    }");

        self.emit_mask_queries();
        self.emit_equality(&name);

        for op in OPERATORS {
            match op {
                OperatorSpec::Conversion(conversion) => {
                    self.emit_conversion(&name, *conversion, siblings);
                }
                OperatorSpec::Increment => self.emit_step(&name, "++", "Add"),
                OperatorSpec::Decrement => self.emit_step(&name, "--", "Subtract"),
                OperatorSpec::Unary(unary) => self.emit_unary(&name, unary),
                OperatorSpec::Binary(binary) => self.emit_binary(&name, binary),
            }
        }

        self.line("}");
    }

    fn emit_mask_queries(&mut self) {
        self.blank();
        for query in MASK_QUERIES {
            let name = query.name;
            if query.indexed {
                self.line(&format!(
                    "    public bool {name}(int index) => Vector.{name}(this, index);"
                ));
            } else {
                self.line(&format!("    public bool {name}() => Vector.{name}(this);"));
            }
        }
    }

    /// Value equality is compare-equal reduced via AllTrue. Two vectors are
    /// unequal unless every lane compares equal, so NaN lanes never compare
    /// equal to anything, including themselves.
    fn emit_equality(&mut self, name: &str) {
        self.blank();
        self.line("    public override bool Equals(object? obj)");
        self.line(&format!("        => obj is {name} other && Equals(other);"));
        self.blank();
        self.line("    public override int GetHashCode()");
        self.line("        => Value.GetHashCode();");
        self.blank();
        self.line(&format!("    public bool Equals({name} obj)"));
        self.line("        => (this == obj).AllTrue();");
    }

    fn emit_conversion(&mut self, name: &str, conversion: Conversion, siblings: &[String; 2]) {
        let storage = self.desc.width.storage();
        let any = self.desc.any_name.clone();

        self.blank();
        match conversion {
            Conversion::Storage => {
                self.inline_attr();
                self.line(&format!(
                    "    public static implicit operator {storage}({name} vector) => vector.Value;"
                ));
                self.inline_attr();
                self.line(&format!(
                    "    public static implicit operator {name}({storage} vector) => new {name}(vector);"
                ));
            }
            Conversion::Erased => {
                self.inline_attr();
                self.line(&format!(
                    "    public static implicit operator {any}({name} vector) => vector.Value;"
                ));
                self.inline_attr();
                self.line(&format!(
                    "    public static implicit operator {name}({any} vector) => vector.Value;"
                ));
            }
            Conversion::Siblings => {
                for sibling in siblings {
                    self.inline_attr();
                    self.line(&format!(
                        "    public static explicit operator {sibling}({name} vector) => new {sibling}(vector);"
                    ));
                }
            }
        }
    }

    fn emit_step(&mut self, name: &str, symbol: &str, primitive: &str) {
        let constants = self.desc.width.constants();
        self.blank();
        self.inline_attr();
        self.line(&format!(
            "    public static {name} operator {symbol}({name} left) => Vector.{primitive}(left, Vector.{constants}.One);"
        ));
    }

    fn emit_unary(&mut self, name: &str, unary: &UnaryOp) {
        let generic = self.generic_arg(unary.scalar_generic);
        let symbol = unary.symbol;
        let primitive = unary.primitive;

        self.blank();
        self.inline_attr();
        self.line(&format!(
            "    public static {name} operator {symbol}({name} vector) => Vector.{primitive}{generic}(vector);"
        ));
    }

    fn emit_binary(&mut self, name: &str, binary: &BinaryOp) {
        let scalar = self.desc.width.scalar();
        let factory = self.desc.width.factory();
        let generic = self.generic_arg(binary.scalar_generic);
        let symbol = binary.symbol;
        let primitive = binary.primitive;

        self.blank();
        self.inline_attr();
        self.line(&format!(
            "    public static {name} operator {symbol}({name} left, {name} right) => Vector.{primitive}{generic}(left, right);"
        ));
        if binary.has_scalar_variant {
            self.inline_attr();
            self.line(&format!(
                "    public static {name} operator {symbol}({name} left, {scalar} right) => Vector.{primitive}{generic}(left, {factory}.Create(right));"
            ));
            self.inline_attr();
            self.line(&format!(
                "    public static {name} operator {symbol}({scalar} left, {name} right) => Vector.{primitive}{generic}({factory}.Create(left), right);"
            ));
        }
    }

    fn generic_arg(&self, scalar_generic: bool) -> String {
        if scalar_generic {
            format!("<{}>", self.desc.width.scalar())
        } else {
            String::new()
        }
    }
}

//! The operator catalogue.
//!
//! A fixed, ordered table of everything a concrete vector type exposes. The
//! renderer iterates it front to back; an entry flagged with a scalar
//! variant gets two extra overloads synthesized directly after the
//! vector-vector form. The table is the single source of truth for operator
//! coverage - there is no runtime validation, only exhaustive tests.

/// Lane pattern an operator produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultKind {
    /// Same-type vector of numeric lanes.
    Vector,
    /// Same-type vector whose lanes hold a truthy/falsy pattern.
    Mask,
}

/// Conversion operators, derived entirely from the descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conversion {
    /// Implicit widen to the storage register and back.
    Storage,
    /// Implicit widen to/from the dimension-erased companion.
    Erased,
    /// Explicit reinterpret to each of the two sibling dimensions.
    Siblings,
}

/// A unary operator over one vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnaryOp {
    pub symbol: &'static str,
    /// Primitive in the vector-math library, e.g. `Negate`.
    pub primitive: &'static str,
    /// Primitive takes the scalar type as a generic argument (`Not<float>`).
    pub scalar_generic: bool,
}

/// A binary operator over two vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryOp {
    pub symbol: &'static str,
    pub primitive: &'static str,
    pub result: ResultKind,
    /// Synthesize `(vector, scalar)` and `(scalar, vector)` overloads that
    /// broadcast the scalar and call the same primitive.
    pub has_scalar_variant: bool,
    pub scalar_generic: bool,
}

/// One entry of the operator table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorSpec {
    Conversion(Conversion),
    /// `++`: add the per-width one-vector constant.
    Increment,
    /// `--`: subtract the per-width one-vector constant.
    Decrement,
    Unary(UnaryOp),
    Binary(BinaryOp),
}

impl OperatorSpec {
    pub fn has_scalar_variant(&self) -> bool {
        matches!(
            self,
            OperatorSpec::Binary(BinaryOp {
                has_scalar_variant: true,
                ..
            })
        )
    }
}

const fn arith(symbol: &'static str, primitive: &'static str) -> OperatorSpec {
    OperatorSpec::Binary(BinaryOp {
        symbol,
        primitive,
        result: ResultKind::Vector,
        has_scalar_variant: true,
        scalar_generic: false,
    })
}

const fn bitwise(symbol: &'static str, primitive: &'static str) -> OperatorSpec {
    OperatorSpec::Binary(BinaryOp {
        symbol,
        primitive,
        result: ResultKind::Vector,
        has_scalar_variant: true,
        scalar_generic: true,
    })
}

const fn compare(symbol: &'static str, primitive: &'static str) -> OperatorSpec {
    OperatorSpec::Binary(BinaryOp {
        symbol,
        primitive,
        result: ResultKind::Mask,
        has_scalar_variant: true,
        scalar_generic: false,
    })
}

/// The full operator surface of a concrete type, in emission order.
///
/// Ordering matters only for readability of the generated output, but it is
/// fixed so regeneration stays diff-stable.
pub static OPERATORS: &[OperatorSpec] = &[
    OperatorSpec::Conversion(Conversion::Storage),
    OperatorSpec::Conversion(Conversion::Erased),
    OperatorSpec::Conversion(Conversion::Siblings),
    OperatorSpec::Increment,
    OperatorSpec::Decrement,
    arith("+", "Add"),
    arith("-", "Subtract"),
    arith("/", "Divide"),
    arith("%", "Remainder"),
    arith("*", "Multiply"),
    OperatorSpec::Unary(UnaryOp {
        symbol: "-",
        primitive: "Negate",
        scalar_generic: false,
    }),
    bitwise("&", "And"),
    bitwise("|", "Or"),
    bitwise("^", "Xor"),
    OperatorSpec::Unary(UnaryOp {
        symbol: "~",
        primitive: "Not",
        scalar_generic: true,
    }),
    compare("==", "CompareEqual"),
    compare("!=", "CompareNotEqual"),
    compare("<", "CompareLessThan"),
    compare(">", "CompareGreaterThan"),
    compare("<=", "CompareLessThanOrEqual"),
    compare(">=", "CompareGreaterThanOrEqual"),
];

/// A reduction from a comparison-result mask to a single logical value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaskQuery {
    pub name: &'static str,
    /// Takes a lane index (`ElementTrue`/`ElementFalse`).
    pub indexed: bool,
}

/// Mask-reduction queries, concrete types only. The erased companion never
/// receives them.
pub static MASK_QUERIES: &[MaskQuery] = &[
    MaskQuery {
        name: "AllTrue",
        indexed: false,
    },
    MaskQuery {
        name: "AllFalse",
        indexed: false,
    },
    MaskQuery {
        name: "AnyTrue",
        indexed: false,
    },
    MaskQuery {
        name: "AnyFalse",
        indexed: false,
    },
    MaskQuery {
        name: "ElementTrue",
        indexed: true,
    },
    MaskQuery {
        name: "ElementFalse",
        indexed: true,
    },
];

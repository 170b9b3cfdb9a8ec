//! Type identifier parsing and descriptor derivation.
//!
//! An identifier encodes `<family><dimension><width-tag>` (`HwVector3S`) or
//! `<family>Any<width-tag>` (`HwVectorAnyS`) for the dimension-erased
//! companion. Everything else the renderer needs - scalar type, storage
//! register, sibling type names, constant table - is derived from those two
//! trailing characters.

use serde::Serialize;

/// Scalar width of a vector family.
///
/// All types of a given width share one packed-storage register: a 2- or
/// 3-component vector is still stored and operated on as the full-width
/// register, with trailing lanes defined but ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Width {
    /// `float` lanes in a 128-bit register, tag `S`.
    Single,
    /// `double` lanes in a 256-bit register, tag `D`.
    Double,
}

/// Generation order: Single before Double.
pub const WIDTHS: [Width; 2] = [Width::Single, Width::Double];

impl Width {
    pub fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'S' => Some(Width::Single),
            'D' => Some(Width::Double),
            _ => None,
        }
    }

    pub fn tag(self) -> char {
        match self {
            Width::Single => 'S',
            Width::Double => 'D',
        }
    }

    /// Scalar element type.
    pub fn scalar(self) -> &'static str {
        match self {
            Width::Single => "float",
            Width::Double => "double",
        }
    }

    /// Packed-storage register type.
    pub fn storage(self) -> &'static str {
        match self {
            Width::Single => "Vector128<float>",
            Width::Double => "Vector256<double>",
        }
    }

    /// Factory type whose `Create` broadcasts a scalar to all lanes.
    pub fn factory(self) -> &'static str {
        match self {
            Width::Single => "Vector128",
            Width::Double => "Vector256",
        }
    }

    /// Constant table holding the per-width one-vector.
    pub fn constants(self) -> &'static str {
        match self {
            Width::Single => "SingleConstants",
            Width::Double => "DoubleConstants",
        }
    }
}

/// Logical dimension of a concrete vector type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Dim {
    Two,
    Three,
    Four,
}

/// The fixed dimension set, ascending. Sibling order follows this.
pub const DIMS: [Dim; 3] = [Dim::Two, Dim::Three, Dim::Four];

impl Dim {
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '2' => Some(Dim::Two),
            '3' => Some(Dim::Three),
            '4' => Some(Dim::Four),
            _ => None,
        }
    }

    pub fn digit(self) -> char {
        match self {
            Dim::Two => '2',
            Dim::Three => '3',
            Dim::Four => '4',
        }
    }

    /// Number of live lanes.
    pub fn lanes(self) -> usize {
        match self {
            Dim::Two => 2,
            Dim::Three => 3,
            Dim::Four => 4,
        }
    }
}

/// Which rendering mode a descriptor gets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Shape {
    /// Full operator surface plus explicit casts to the two siblings.
    Concrete { dim: Dim, siblings: [String; 2] },
    /// Conversion target only: storage field, constructor, storage bridge.
    Erased,
}

/// Malformed identifier. Fatal: every downstream derivation depends on the
/// width tag and dimension digit, so there is no sensible recovery.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeriveError {
    #[error("identifier too short: {0:?}")]
    TooShort(String),

    #[error("unknown width tag {tag:?} in identifier {ident:?}")]
    UnknownWidth { ident: String, tag: char },

    #[error("unknown dimension {digit:?} in identifier {ident:?}")]
    UnknownDimension { ident: String, digit: char },
}

/// Every derived fact the renderer needs for one type, computed once from
/// an identifier and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    /// The full type name, e.g. `HwVector3S`.
    pub name: String,
    /// Identifier prefix shared by the whole family, e.g. `HwVector`.
    pub family: String,
    pub width: Width,
    /// Name of the dimension-erased companion, e.g. `HwVectorAnyS`.
    pub any_name: String,
    pub shape: Shape,
}

impl Descriptor {
    /// Derive a descriptor from a type identifier.
    ///
    /// The last character selects the width; the `Any` suffix selects the
    /// erased shape, otherwise the second-to-last character selects the
    /// dimension.
    pub fn derive(ident: &str) -> Result<Self, DeriveError> {
        let tag = ident
            .chars()
            .next_back()
            .ok_or_else(|| DeriveError::TooShort(ident.to_string()))?;
        let width = Width::from_tag(tag).ok_or_else(|| DeriveError::UnknownWidth {
            ident: ident.to_string(),
            tag,
        })?;

        let stem = &ident[..ident.len() - tag.len_utf8()];

        if let Some(family) = stem.strip_suffix("Any") {
            return Ok(Descriptor {
                name: ident.to_string(),
                family: family.to_string(),
                width,
                any_name: ident.to_string(),
                shape: Shape::Erased,
            });
        }

        let digit = stem
            .chars()
            .next_back()
            .ok_or_else(|| DeriveError::TooShort(ident.to_string()))?;
        let dim = Dim::from_digit(digit).ok_or_else(|| DeriveError::UnknownDimension {
            ident: ident.to_string(),
            digit,
        })?;

        let family = &stem[..stem.len() - digit.len_utf8()];
        let sibling = |d: Dim| format!("{family}{}{tag}", d.digit());
        // {2,3,4} minus the own dimension, ascending
        let siblings = match dim {
            Dim::Two => [sibling(Dim::Three), sibling(Dim::Four)],
            Dim::Three => [sibling(Dim::Two), sibling(Dim::Four)],
            Dim::Four => [sibling(Dim::Two), sibling(Dim::Three)],
        };

        Ok(Descriptor {
            name: ident.to_string(),
            family: family.to_string(),
            width,
            any_name: format!("{family}Any{tag}"),
            shape: Shape::Concrete { dim, siblings },
        })
    }

    pub fn is_erased(&self) -> bool {
        matches!(self.shape, Shape::Erased)
    }

    pub fn dim(&self) -> Option<Dim> {
        match self.shape {
            Shape::Concrete { dim, .. } => Some(dim),
            Shape::Erased => None,
        }
    }

    /// Interpolated debug-display body for concrete shapes:
    /// `<{Value.GetElement(0)}, {Value.GetElement(1)}, ...>` over the live
    /// lanes. Display only, never used for equality or hashing.
    pub fn debug_string(&self) -> Option<String> {
        let dim = self.dim()?;
        let fields: Vec<String> = (0..dim.lanes())
            .map(|i| format!("{{Value.GetElement({i})}}"))
            .collect();
        Some(format!("<{}>", fields.join(", ")))
    }
}

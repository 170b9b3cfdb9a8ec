use crate::descriptor::{DIMS, Descriptor, DeriveError, Dim, Shape, WIDTHS, Width};

fn concrete_idents() -> Vec<String> {
    let mut idents = Vec::new();
    for width in WIDTHS {
        for dim in DIMS {
            idents.push(format!("HwVector{}{}", dim.digit(), width.tag()));
        }
    }
    idents
}

#[test]
fn derives_all_concrete_identifiers() {
    for ident in concrete_idents() {
        let desc = Descriptor::derive(&ident).unwrap();
        assert_eq!(desc.name, ident);
        assert_eq!(desc.family, "HwVector");
        assert!(!desc.is_erased());
    }
}

#[test]
fn siblings_are_the_other_two_dimensions() {
    for ident in concrete_idents() {
        let desc = Descriptor::derive(&ident).unwrap();
        let Shape::Concrete { dim, siblings } = &desc.shape else {
            panic!("{ident} should be concrete");
        };

        let mut expected: Vec<String> = DIMS
            .iter()
            .filter(|d| *d != dim)
            .map(|d| format!("HwVector{}{}", d.digit(), desc.width.tag()))
            .collect();
        expected.sort();
        assert_eq!(siblings.as_slice(), expected.as_slice());

        // Never the type's own dimension, always width-preserving
        for sibling in siblings {
            assert_ne!(sibling, &ident);
            assert!(sibling.ends_with(desc.width.tag()));
        }
    }
}

#[test]
fn sibling_order_is_ascending() {
    let desc = Descriptor::derive("HwVector3S").unwrap();
    let Shape::Concrete { siblings, .. } = &desc.shape else {
        panic!();
    };
    assert_eq!(siblings, &["HwVector2S".to_string(), "HwVector4S".to_string()]);

    let desc = Descriptor::derive("HwVector2D").unwrap();
    let Shape::Concrete { siblings, .. } = &desc.shape else {
        panic!();
    };
    assert_eq!(siblings, &["HwVector3D".to_string(), "HwVector4D".to_string()]);
}

#[test]
fn erased_companion_preserves_width() {
    for ident in concrete_idents() {
        let desc = Descriptor::derive(&ident).unwrap();
        let any = Descriptor::derive(&desc.any_name).unwrap();
        assert!(any.is_erased());
        assert_eq!(any.width, desc.width);
        assert_eq!(any.family, desc.family);
    }
}

#[test]
fn derives_erased_identifiers() {
    let desc = Descriptor::derive("HwVectorAnyS").unwrap();
    assert_eq!(desc.shape, Shape::Erased);
    assert_eq!(desc.width, Width::Single);
    assert_eq!(desc.family, "HwVector");
    assert_eq!(desc.any_name, "HwVectorAnyS");
    assert!(desc.dim().is_none());
    assert!(desc.debug_string().is_none());

    let desc = Descriptor::derive("HwVectorAnyD").unwrap();
    assert_eq!(desc.width, Width::Double);
}

#[test]
fn storage_is_shared_per_width() {
    // 2- and 3-component types reuse the full-width register
    for dim in DIMS {
        let ident = format!("HwVector{}S", dim.digit());
        let desc = Descriptor::derive(&ident).unwrap();
        assert_eq!(desc.width.storage(), "Vector128<float>");
        assert_eq!(desc.width.factory(), "Vector128");
        assert_eq!(desc.width.scalar(), "float");
        assert_eq!(desc.width.constants(), "SingleConstants");
    }
    let desc = Descriptor::derive("HwVector2D").unwrap();
    assert_eq!(desc.width.storage(), "Vector256<double>");
    assert_eq!(desc.width.constants(), "DoubleConstants");
}

#[test]
fn debug_string_covers_live_lanes() {
    let desc = Descriptor::derive("HwVector2S").unwrap();
    assert_eq!(
        desc.debug_string().unwrap(),
        "<{Value.GetElement(0)}, {Value.GetElement(1)}>"
    );

    let desc = Descriptor::derive("HwVector4D").unwrap();
    assert_eq!(
        desc.debug_string().unwrap(),
        "<{Value.GetElement(0)}, {Value.GetElement(1)}, {Value.GetElement(2)}, {Value.GetElement(3)}>"
    );
}

#[test]
fn rejects_unknown_width_tag() {
    let err = Descriptor::derive("HwVector3X").unwrap_err();
    assert_eq!(
        err,
        DeriveError::UnknownWidth {
            ident: "HwVector3X".to_string(),
            tag: 'X',
        }
    );
}

#[test]
fn rejects_unknown_dimension() {
    let err = Descriptor::derive("HwVector5S").unwrap_err();
    assert_eq!(
        err,
        DeriveError::UnknownDimension {
            ident: "HwVector5S".to_string(),
            digit: '5',
        }
    );

    assert!(matches!(
        Descriptor::derive("HwVectorS"),
        Err(DeriveError::UnknownDimension { digit: 'r', .. })
    ));
}

#[test]
fn rejects_truncated_identifiers() {
    assert_eq!(
        Descriptor::derive(""),
        Err(DeriveError::TooShort(String::new()))
    );
    assert_eq!(
        Descriptor::derive("S"),
        Err(DeriveError::TooShort("S".to_string()))
    );
}

#[test]
fn derivation_is_deterministic() {
    let a = Descriptor::derive("HwVector3D").unwrap();
    let b = Descriptor::derive("HwVector3D").unwrap();
    assert_eq!(a, b);
}

#[test]
fn dim_lanes_and_digits() {
    assert_eq!(Dim::Two.lanes(), 2);
    assert_eq!(Dim::Four.digit(), '4');
    assert_eq!(Dim::from_digit('3'), Some(Dim::Three));
    assert_eq!(Dim::from_digit('9'), None);
    assert_eq!(Width::from_tag('D'), Some(Width::Double));
    assert_eq!(Width::from_tag('d'), None);
}

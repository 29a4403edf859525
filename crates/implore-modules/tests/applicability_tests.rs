//! Applicability integration tests

mod common;

use common::mocks::{counting_view, image, molecule, result};
use implore_modules::{ModuleFactory, ModuleInput, ModuleKind, ResultPayload};
use rstest::rstest;

#[test]
fn test_molecule_never_applies_to_data() {
    let factory = ModuleFactory::new();
    let (_, view) = counting_view();
    for components in [1, 3] {
        let source = image(components);
        assert!(!factory.module_applicable(
            ModuleKind::Molecule,
            Some(ModuleInput::Data(&source)),
            Some(&view)
        ));
    }
}

#[test]
fn test_molecule_applies_to_molecule_source() {
    let factory = ModuleFactory::new();
    let source = molecule();
    let (_, view) = counting_view();

    assert!(factory.module_applicable(
        ModuleKind::Molecule,
        Some(ModuleInput::Molecule(&source)),
        Some(&view)
    ));
    assert!(!factory.module_applicable(ModuleKind::Molecule, None, Some(&view)));
    assert!(!factory.module_applicable(
        ModuleKind::Molecule,
        Some(ModuleInput::Molecule(&source)),
        None
    ));
}

#[rstest]
#[case(ModuleKind::Contour, false)]
#[case(ModuleKind::Volume, false)]
#[case(ModuleKind::Threshold, false)]
#[case(ModuleKind::Outline, true)]
#[case(ModuleKind::Slice, true)]
#[case(ModuleKind::OrthogonalSlice, true)]
#[case(ModuleKind::Ruler, true)]
#[case(ModuleKind::ScaleCube, true)]
#[case(ModuleKind::Molecule, false)]
fn test_multi_component_exclusion(#[case] kind: ModuleKind, #[case] expected: bool) {
    let factory = ModuleFactory::new();
    let source = image(3);
    let (_, view) = counting_view();
    assert_eq!(
        factory.module_applicable(kind, Some(ModuleInput::Data(&source)), Some(&view)),
        expected
    );
}

#[rstest]
fn test_scalar_data_applies_to_all_data_modules(
    #[values(
        ModuleKind::Contour,
        ModuleKind::Volume,
        ModuleKind::Threshold,
        ModuleKind::Outline,
        ModuleKind::Slice,
        ModuleKind::OrthogonalSlice,
        ModuleKind::Ruler,
        ModuleKind::ScaleCube
    )]
    kind: ModuleKind,
) {
    let factory = ModuleFactory::new();
    let source = image(1);
    let (_, view) = counting_view();
    assert!(factory.module_applicable(kind, Some(ModuleInput::Data(&source)), Some(&view)));
}

#[test]
fn test_missing_endpoints_never_applicable() {
    let factory = ModuleFactory::new();
    let data = image(1);
    let atoms = molecule();
    let (_, view) = counting_view();

    for kind in ModuleKind::ALL {
        assert!(!factory.module_applicable(kind, None, Some(&view)));
        assert!(!factory.module_applicable(kind, Some(ModuleInput::Data(&data)), None));
        assert!(!factory.module_applicable(kind, Some(ModuleInput::Molecule(&atoms)), None));
        assert!(!factory.module_applicable(kind, None, None));
    }
}

#[test]
fn test_applicable_modules_for_multi_component_data() {
    let factory = ModuleFactory::new();
    let source = image(3);
    let (_, view) = counting_view();

    assert_eq!(
        factory.applicable_modules(Some(ModuleInput::Data(&source)), Some(&view)),
        vec![
            ModuleKind::OrthogonalSlice,
            ModuleKind::Outline,
            ModuleKind::Ruler,
            ModuleKind::ScaleCube,
            ModuleKind::Slice,
        ]
    );
}

#[test]
fn test_applicable_modules_for_molecule() {
    let factory = ModuleFactory::new();
    let source = molecule();
    let (_, view) = counting_view();
    assert_eq!(
        factory.applicable_modules(Some(ModuleInput::Molecule(&source)), Some(&view)),
        vec![ModuleKind::Molecule]
    );
}

#[test]
fn test_operator_result_applicability() {
    let factory = ModuleFactory::new();
    let (_, view) = counting_view();

    let scalar = result(ResultPayload::Image { components: 1 });
    assert!(factory.module_applicable(
        ModuleKind::Volume,
        Some(ModuleInput::Result(&scalar)),
        Some(&view)
    ));

    let vector = result(ResultPayload::Image { components: 2 });
    assert!(!factory.module_applicable(
        ModuleKind::Volume,
        Some(ModuleInput::Result(&vector)),
        Some(&view)
    ));

    let atoms = result(ResultPayload::Molecule);
    assert_eq!(
        factory.applicable_modules(Some(ModuleInput::Result(&atoms)), Some(&view)),
        vec![ModuleKind::Molecule]
    );

    let empty = result(ResultPayload::Empty);
    assert!(factory
        .applicable_modules(Some(ModuleInput::Result(&empty)), Some(&view))
        .is_empty());
}

#[test]
fn test_applicable_by_name() {
    let factory = ModuleFactory::new();
    let source = image(1);
    let (_, view) = counting_view();
    let input = Some(ModuleInput::Data(&source));

    assert!(factory.module_applicable_by_name("Scale Cube", input, Some(&view)));
    assert!(!factory.module_applicable_by_name("Molecule", input, Some(&view)));
    assert!(!factory.module_applicable_by_name("Nonexistent", input, Some(&view)));
}

//! Registry-wide properties checked against the built-in catalogue.

use std::thread;

use blockshape_core::{
    BUILTIN, FALLBACK_NAME, IndeterminateValueError, RegistryError, ShapeFlag, ShapeFlags,
    ShapeRecord, ShapeRegistry, TriState, names,
};

use crate::common::{UNKNOWN_OPCODES, builtin, record};

#[test]
fn every_record_is_found_by_name_and_opcode() {
    let registry = builtin();
    assert_eq!(registry.entries().len(), BUILTIN.len());
    for (name, shape) in registry.entries() {
        assert_eq!(registry.by_name(name).unwrap(), shape, "by_name({name})");
        assert_eq!(registry.by_opcode(shape.opcode()), shape, "by_opcode({name})");
    }
}

#[test]
fn unknown_opcodes_get_the_fallback() {
    let registry = builtin();
    let fallback = registry.by_name(FALLBACK_NAME).unwrap();
    for opcode in UNKNOWN_OPCODES {
        assert!(!registry.contains_opcode(opcode));
        assert_eq!(registry.by_opcode(opcode), fallback, "by_opcode({opcode:?})");
    }
}

#[test]
fn attachable_matches_cap_and_reporter_when_determinate() {
    let registry = builtin();
    for shape in registry.all() {
        let (Some(cap), Some(reporter)) =
            (shape.is_cap().to_option(), shape.is_reporter().to_option())
        else {
            continue;
        };
        assert_eq!(shape.attachable(), Ok(!cap && !reporter), "{}", shape.opcode());
    }
}

#[test]
fn indeterminate_cap_always_fails_attachable() {
    let registry = builtin();
    let mut checked = 0;
    for shape in registry.all().filter(|s| s.is_cap().is_indeterminate()) {
        assert_eq!(
            shape.attachable(),
            Err(IndeterminateValueError::Flag {
                flag: ShapeFlag::Cap
            })
        );
        checked += 1;
    }
    assert_eq!(checked, 1);
}

#[test]
fn catalogue_scenarios() {
    let registry = builtin();

    let forever = registry.by_name(names::CONTROL_FOREVER).unwrap();
    assert_eq!(forever.is_c_mouth(), TriState::True);
    assert_eq!(forever.attachable(), Ok(false));

    let move_steps = registry.by_opcode("motion_movesteps");
    assert_eq!(move_steps.attachable(), Ok(true));

    let stop = registry.by_opcode("control_stop");
    assert!(stop.attachable().is_err());

    let unknown = registry.by_opcode("nonexistent_extension_block");
    assert_eq!(unknown.is_hat(), TriState::True);
    assert_eq!(unknown.is_cap(), TriState::True);
    assert_eq!(unknown.attachable(), Ok(false));

    let gt = registry.by_name(names::OPERATOR_GT).unwrap();
    assert_eq!(gt.is_boolean(), TriState::True);
    assert_eq!(gt.is_reporter(), TriState::True);

    let menu = registry.by_opcode("looks_costume");
    assert_eq!(menu.is_menu(), TriState::True);
    assert_eq!(menu.attachable(), Ok(false));

    let hardware = registry.by_name(names::EV3_BEEP).unwrap();
    assert!(hardware.flags().entries().all(|(_, v)| v == TriState::False));
    assert_eq!(hardware.attachable(), Ok(true));
}

#[test]
fn iteration_is_stable() {
    let registry = builtin();
    let first: Vec<&str> = registry.all().map(ShapeRecord::opcode).collect();
    let second: Vec<&str> = registry.all().map(ShapeRecord::opcode).collect();
    assert_eq!(first.len(), second.len());
    assert_eq!(first, second);

    let declared: Vec<&str> = BUILTIN.iter().map(|entry| entry.opcode()).collect();
    assert_eq!(first, declared);
}

#[test]
fn duplicate_opcode_leaves_first_record() {
    let mut builder = ShapeRegistry::builtin_builder(false).unwrap();
    let err = builder
        .register("MY_FOREVER", record("control_forever", ShapeFlags::NONE.stack()))
        .unwrap_err();
    assert_eq!(
        err,
        RegistryError::DuplicateOpcode {
            opcode: "control_forever".to_string(),
            existing: names::CONTROL_FOREVER.to_string(),
        }
    );

    let registry = builder.build().unwrap();
    assert_eq!(registry.len(), BUILTIN.len());
    assert_eq!(registry.by_opcode("control_forever").is_cap(), TriState::True);
    assert!(matches!(
        registry.by_name("MY_FOREVER"),
        Err(RegistryError::UnknownShapeName { .. })
    ));
}

#[test]
fn concurrent_readers_share_one_registry() {
    let registry = builtin();
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for shape in &registry {
                    assert_eq!(registry.by_opcode(shape.opcode()), shape);
                }
            });
        }
    });
}

#[test]
fn process_registry_is_the_builtin_catalogue() {
    let global = blockshape_core::registry();
    assert_eq!(global.len(), BUILTIN.len());
    assert_eq!(global.fallback().opcode(), "red_hat_block");
}

#[test]
fn categories_group_in_declaration_order() {
    let registry = builtin();
    let categories = registry.categories();
    assert_eq!(categories.first(), Some(&"motion"));
    assert_eq!(categories.last(), Some(&"red"));

    let looks: Vec<&str> = registry
        .in_category("looks")
        .map(ShapeRecord::opcode)
        .collect();
    assert_eq!(looks.first(), Some(&"looks_sayforsecs"));
    assert!(looks.iter().all(|opcode| opcode.starts_with("looks_")));
}

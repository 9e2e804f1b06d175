//! Shape records and tri-state values as seen by registry consumers.

use blockshape_core::{IndeterminateValueError, ShapeFlag, ShapeFlags, ShapeRecord, TriState};
use blockshape_types::ShapeError;

use crate::common::record;

#[test]
fn tristate_collapse() {
    assert_eq!(TriState::True.as_bool(), Ok(true));
    assert_eq!(TriState::False.as_bool(), Ok(false));
    assert_eq!(
        TriState::Indeterminate.as_bool(),
        Err(IndeterminateValueError::Value)
    );
}

#[test]
fn documented_scenarios() {
    let forever = record(
        "control_forever",
        ShapeFlags::NONE.c_mouth().stack().cap(),
    );
    assert_eq!(forever.attachable(), Ok(false));

    let move_steps = record("motion_movesteps", ShapeFlags::NONE.stack());
    assert_eq!(move_steps.attachable(), Ok(true));

    let stop = record(
        "control_stop",
        ShapeFlags::NONE.stack().with_cap(TriState::Indeterminate),
    );
    let err = stop.attachable().unwrap_err();
    assert_eq!(err.flag(), Some(ShapeFlag::Cap));
    assert!(err.to_string().contains("cap"));
}

#[test]
fn callers_can_branch_on_indeterminate() {
    let shapes = [
        record("motion_movesteps", ShapeFlags::NONE.stack()),
        record(
            "control_stop",
            ShapeFlags::NONE.stack().with_cap(TriState::Indeterminate),
        ),
        record("operator_add", ShapeFlags::NONE.reporter()),
    ];
    let verdicts: Vec<Option<bool>> = shapes
        .iter()
        .map(|shape| shape.attachable().ok())
        .collect();
    assert_eq!(verdicts, [Some(true), None, Some(false)]);
}

#[test]
fn flags_are_read_back_unchanged() {
    let shape = record(
        "sensing_touchingobject",
        ShapeFlags::NONE.reporter().boolean(),
    );
    for flag in ShapeFlag::ALL {
        let expected = matches!(flag, ShapeFlag::Reporter | ShapeFlag::Boolean);
        assert_eq!(shape.flag(flag), TriState::from(expected), "{flag}");
        assert_eq!(shape.require(flag), Ok(expected), "{flag}");
    }
}

#[test]
fn empty_opcode_is_not_a_shape() {
    assert!(matches!(
        ShapeRecord::new("", ShapeFlags::NONE),
        Err(ShapeError::EmptyOpcode)
    ));
}

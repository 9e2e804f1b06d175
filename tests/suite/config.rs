//! Config files feeding extra shapes into the registry.

use blockshape_config::{BlockshapeConfig, ConfigError, EntryMode};
use blockshape_core::{BUILTIN, RegistryError, TriState, names};
use tempfile::tempdir;

use crate::common::write_config;

#[test]
fn configured_extension_shapes_are_registered_after_builtins() {
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
        [[shapes]]
        name = "LMSTEMPO_WHENTEMPO"
        opcode = "lmsTempo_whenTempo"
        hat = true

        [[shapes]]
        name = "LMSTEMPO_STOPALL"
        opcode = "lmsTempo_stopAll"
        stack = true
        cap = "indeterminate"
        "#,
    );

    let config = BlockshapeConfig::load_from(&path).unwrap();
    assert_eq!(config.shapes.len(), 2);
    assert!(config.shapes.iter().all(|entry| entry.mode() == EntryMode::Add));

    let registry = config.build_registry().unwrap();
    assert_eq!(registry.len(), BUILTIN.len() + 2);
    assert!(registry.contains_opcode("lmsTempo_whenTempo"));
    assert_eq!(registry.by_opcode("lmsTempo_whenTempo").attachable(), Ok(true));
    assert!(registry.by_opcode("lmsTempo_stopAll").attachable().is_err());
    assert_eq!(registry.categories().last(), Some(&"lmsTempo"));
}

#[test]
fn replacement_changes_shape_in_place() {
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
        [[shapes]]
        name = "CONTROL_STOP"
        opcode = "control_stop"
        stack = true
        cap = true
        replace = true
        "#,
    );

    let registry = BlockshapeConfig::load_from(&path)
        .unwrap()
        .build_registry()
        .unwrap();
    assert_eq!(registry.len(), BUILTIN.len());

    let stop = registry.by_name(names::CONTROL_STOP).unwrap();
    assert_eq!(stop.is_cap(), TriState::True);
    assert_eq!(stop.attachable(), Ok(false));
}

#[test]
fn replacing_unknown_name_fails() {
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        "[[shapes]]\nname = \"NOT_THERE\"\nopcode = \"x_y\"\nreplace = true\n",
    );
    let config = BlockshapeConfig::load_from(&path).unwrap();
    assert!(matches!(
        config.build_registry(),
        Err(RegistryError::UnknownShapeName { .. })
    ));
}

#[test]
fn duplicate_name_in_config_fails() {
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        "[[shapes]]\nname = \"PEN_CLEAR\"\nopcode = \"myext_clear\"\n",
    );
    let config = BlockshapeConfig::load_from(&path).unwrap();
    assert!(matches!(
        config.build_registry(),
        Err(RegistryError::DuplicateName { .. })
    ));
}

#[test]
fn bad_flag_value_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = write_config(
        dir.path(),
        "[[shapes]]\nname = \"X\"\nopcode = \"x_y\"\ncap = \"sometimes\"\n",
    );
    let err = BlockshapeConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), path);
}

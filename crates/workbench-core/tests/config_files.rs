use workbench_core::{Catalog, GridSpec, LookupError, WorkbenchConfigError, WorkbenchSpec};

#[test]
fn builtin_config_survives_disk_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("workbench.json");

    let spec = WorkbenchSpec::builtin();
    spec.write_json(&path).expect("write config");

    let loaded = WorkbenchSpec::load_json(&path).expect("load config");
    assert_eq!(loaded, spec);

    let catalog = Catalog::load_json(&path).expect("catalog");
    assert_eq!(catalog.recipe_of(3).expect("recipe").name(), "Мотыга");
    assert_eq!(catalog.layout_of(8).expect("cell").col, 2);
}

#[test]
fn invalid_constants_in_file_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.json");

    let mut spec = WorkbenchSpec::builtin();
    spec.hover_height = -0.1;
    spec.write_json(&path).expect("write config");

    assert!(matches!(
        Catalog::load_json(&path),
        Err(WorkbenchConfigError::Catalog(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(matches!(
        Catalog::load_json(dir.path().join("nope.json")),
        Err(WorkbenchConfigError::Io(_))
    ));
}

#[test]
fn larger_grid_extends_cell_range() {
    let mut spec = WorkbenchSpec::builtin();
    spec.grid = GridSpec { rows: 4, cols: 4 };
    let catalog = Catalog::new(spec).expect("catalog");
    assert_eq!(catalog.cell_count(), 16);
    assert!(catalog.contains_cell(15));
    assert_eq!(catalog.layout_of(16), Err(LookupError::UnknownCell(16)));
}

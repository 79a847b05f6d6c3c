use atomspace_core::{init_logging, AtomSpace, AtomSpaceError};
use std::path::Path;

fn read_logs(dir: &Path) -> String {
    log::logger().flush();
    let mut contents = String::new();
    for entry in std::fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_file() {
            contents.push_str(&std::fs::read_to_string(path).unwrap());
        }
    }
    contents
}

#[test]
fn creation_outcomes_are_logged_at_debug_level() {
    let dir = tempfile::tempdir().unwrap();
    init_logging("debug", dir.path().to_str().unwrap()).unwrap();

    let mut space = AtomSpace::with_default_global();
    space.create_organization("global", "acme").unwrap();
    let err = space.create_organization("global", "acme").unwrap_err();
    assert!(matches!(err, AtomSpaceError::DuplicateName { .. }));
    assert!(matches!(
        space.create_project("global", "acme", "a/b"),
        Err(AtomSpaceError::InvalidName { .. })
    ));
    assert!(space.create_global("global").is_err());

    let logs = read_logs(dir.path());
    assert!(
        logs.contains("event=atom_created module=atomspace status=ok kind=organization path=global/acme"),
        "success not logged: {logs}"
    );
    assert!(
        logs.contains("status=error kind=organization name=acme error=duplicate organization name `acme` under `global`"),
        "duplicate rejection not logged: {logs}"
    );
    assert!(
        logs.contains("status=error kind=project name=a/b"),
        "invalid name rejection not logged: {logs}"
    );
    assert!(
        logs.contains("status=error kind=global name=global"),
        "duplicate root rejection not logged: {logs}"
    );
}

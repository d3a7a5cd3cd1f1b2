// Source scan: each layer may only reach downward.

const REPOSITORY_SRC: &str = include_str!("../src/repository/mod.rs");
const USECASE_SRC: &str = include_str!("../src/usecase/mod.rs");
const CONTROLLER_SRC: &str = include_str!("../src/controller/mod.rs");

fn use_lines(src: &str) -> Vec<&str> {
    src.lines()
        .map(str::trim_start)
        .filter(|line| line.starts_with("use crate::"))
        .collect()
}

#[test]
fn test_repository_does_not_reach_upward() {
    for line in use_lines(REPOSITORY_SRC) {
        assert!(!line.contains("usecase"), "repository imports {line}");
        assert!(!line.contains("controller"), "repository imports {line}");
        assert!(!line.contains("app"), "repository imports {line}");
    }
    assert!(!REPOSITORY_SRC.contains("Usecase"));
    assert!(!REPOSITORY_SRC.contains("Controller"));
}

#[test]
fn test_usecase_does_not_reach_upward() {
    for line in use_lines(USECASE_SRC) {
        assert!(!line.contains("controller"), "usecase imports {line}");
        assert!(!line.contains("crate::app"), "usecase imports {line}");
    }
    assert!(!USECASE_SRC.contains("Controller"));
}

#[test]
fn test_layers_name_no_concrete_type_below() {
    assert!(!USECASE_SRC.contains("NoopRepository"));
    assert!(!CONTROLLER_SRC.contains("NoopRepository"));
    assert!(!CONTROLLER_SRC.contains("DelegatingUsecase"));
    assert!(!CONTROLLER_SRC.contains("crate::repository"));
}

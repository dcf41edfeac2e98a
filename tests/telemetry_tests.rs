use materx_explorer::telemetry::{init_default_tracing, init_tracing};

#[test]
fn tracing_installs_once_when_enabled() {
    let first = init_tracing("not a [valid directive");
    let second = init_default_tracing();

    assert_eq!(first, cfg!(feature = "telemetry"));
    assert!(!second);
}

//! The built-in demos as the runner sees them

use tour_demos as _;
use tour_kit::RegistryBuilder;

#[test]
fn test_demos_register_in_run_order() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("demo names are unique")
        .build();

    let names: Vec<_> = registry.demos().map(|info| info.name).collect();
    assert_eq!(names, ["args", "iteration", "closures"]);
}

#[test]
fn test_full_output() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut lines = Vec::new();
    for info in registry.demos() {
        let run = registry.run(info.name).unwrap();
        assert!(run.is_ok(), "{} failed: {:?}", info.name, run.result);
        lines.extend(run.transcript.into_lines());
    }

    let expected = [
        // args
        "1", "2", "3", "4", "5", "6", "1", "2", "3", "4", "5", "6",
        // iteration
        "1", "2", "3", "1", "2", "3",
        // closures
        "2",
        "3",
        "<h1>Hello, Joe!</h1>",
        "<h1>Hello, Joe!</h1>",
        "<h1><h1>Hello, Joe!</h1></h1>",
    ];
    assert_eq!(lines, expected);
}

#[test]
fn test_tag_filter() {
    let registry = RegistryBuilder::new()
        .register_demo_plugins(|plugin| plugin.tags.contains(&"functions"))
        .unwrap()
        .build();

    let names: Vec<_> = registry.demos().map(|info| info.name).collect();
    assert_eq!(names, ["args", "closures"]);
}

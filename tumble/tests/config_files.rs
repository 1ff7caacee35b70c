use tumble::investigation::diagnostics::DiagnosticsMode;
use tumble::{RunConfig, Simulation};

#[test]
fn test_bundled_run_files_are_valid() {
    let files = [
        ("intermediate_axis.ron", include_str!("../../runs/intermediate_axis.ron")),
        ("box.ron", include_str!("../../runs/box.ron")),
    ];
    for (name, source) in files {
        let config = RunConfig::from_ron(source).unwrap_or_else(|e| panic!("{name}: {e}"));
        let sim = Simulation::new(config).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert!(sim.expected_records() > 1, "{name}");
    }

    let config = RunConfig::from_ron(files[0].1).unwrap();
    assert_eq!(config.diagnostics, DiagnosticsMode::IntermediateAxisFlip);
    assert_eq!(config.store_every, 200);
}

//! Shader Tests - WGSL Validation
//!
//! Parses and validates the terrain shader with naga so shader breakage
//! shows up in `cargo test` instead of at first launch.

#[test]
fn test_terrain_shader_parses_and_validates() {
    let source = include_str!("../src/shaders/terrain.wgsl");

    let module = naga::front::wgsl::parse_str(source).expect("terrain.wgsl should parse");

    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::default(),
    );
    validator
        .validate(&module)
        .expect("terrain.wgsl should validate");

    // Both entry points the pipeline expects must exist.
    let entry_names: Vec<_> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
    assert!(entry_names.contains(&"vs_main"));
    assert!(entry_names.contains(&"fs_main"));
}

//! Integration tests composing and synthesizing the full blueprint.

use stackform_blueprint::{backend_group, root_stack};
use stackform_compose::synth;

#[test]
fn full_stack_synthesizes_to_json() {
    let composed = root_stack().compose().expect("compose");
    let json = synth::to_json_string(&composed).expect("synthesize");

    assert!(json.contains("\"tareas-table\""));
    assert!(json.contains("TareasAPI"));
    assert!(json.contains("davidhidalgo.live"));
    // The imported code bucket is referenced but never materialized.
    assert!(json.contains("${code-bucket.name}"));
    assert!(!json.contains("dhg-primer-reto-lambdas"));
}

#[test]
fn backend_routes_integrate_their_functions() {
    let composed = backend_group().compose().expect("compose");
    let doc = synth::document(&composed).expect("document");

    let route = doc
        .resources
        .iter()
        .find(|r| r.name == "tarea-patch")
        .expect("route");
    let uri = route.properties["integration_uri"]
        .as_str()
        .expect("uri string");
    assert!(uri.contains("${patch-tarea.arn}"), "got: {uri}");
}

#[test]
fn function_environment_carries_the_table_name() {
    let composed = backend_group().compose().expect("compose");
    let doc = synth::document(&composed).expect("document");

    for name in ["get-tareas", "get-tarea", "post-tarea", "patch-tarea", "delete-tarea"] {
        let function = doc.resources.iter().find(|r| r.name == name).expect(name);
        assert_eq!(
            function.properties["environment"]["TABLE_NAME"], "tareas",
            "function {name}"
        );
    }
}

#[test]
fn flatten_lists_every_declaration_once() {
    let stack = root_stack();
    let flattened = stack.flatten();
    let mut names: Vec<&str> = flattened.iter().map(|r| r.name().as_str()).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total, "logical names must be unique");
}

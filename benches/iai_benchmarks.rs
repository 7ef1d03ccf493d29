use iai_callgrind::{
    EventKind, FlamegraphConfig, LibraryBenchmarkConfig, RegressionConfig, Tool, ValgrindTool,
    library_benchmark, library_benchmark_group, main as iai_main,
};
use routrie::RadixTree;
use std::hint::black_box;

fn setup_large_tree_for_lookups() -> RadixTree<usize> {
    let mut tree = RadixTree::new();
    let size = 1_000;
    for i in 0..size {
        tree.insert(&format!("/static/item/{}", i), i, &["GET"]).unwrap();
        tree.insert(&format!("/param/user{}/:id", i), i, &["GET"]).unwrap();
        tree.insert(&format!("/wildcard/files{}/docs/*path", i), i, &["GET"])
            .unwrap();
    }
    tree
}

fn setup_api_style_tree() -> RadixTree<&'static str> {
    let mut tree = RadixTree::new();
    tree.insert("/api/v1/users", "list_users", &["GET"]).unwrap();
    tree.insert("/api/v1/users", "create_user", &["POST"]).unwrap();
    tree.insert("/api/v1/users/:userId", "get_user", &["GET"]).unwrap();
    tree.insert("/api/v1/users/:userId", "update_user", &["PUT"]).unwrap();
    tree.insert("/api/v1/users/:userId", "delete_user", &["DELETE"])
        .unwrap();
    tree.insert(
        "/api/v1/users/:userId/posts/:postId",
        "get_user_post",
        &["GET"],
    )
    .unwrap();
    tree.insert("/api/v1/files/*filePath", "serve_file", &["GET"]).unwrap();
    tree.insert_middleware("/api/v1", "require_auth", &["GET", "POST", "PUT", "DELETE"])
        .unwrap();
    tree
}

// --- Benchmark Functions ---

#[library_benchmark]
pub fn bench_lookup_static_last_iai_fn() {
    let tree = setup_large_tree_for_lookups();
    black_box(tree.get("/static/item/999", "GET"));
}

#[library_benchmark]
pub fn bench_lookup_param_last_iai_fn() {
    let tree = setup_large_tree_for_lookups();
    black_box(tree.get("/param/user999/somevalue", "GET"));
}

#[library_benchmark]
pub fn bench_lookup_wildcard_last_iai_fn() {
    let tree = setup_large_tree_for_lookups();
    black_box(tree.get("/wildcard/files999/docs/a/b/c.txt", "GET"));
}

#[library_benchmark]
pub fn bench_api_get_user_post_iai_fn() {
    let tree = setup_api_style_tree();
    black_box(tree.get("/api/v1/users/user123abc/posts/post789xyz", "GET"));
}

#[library_benchmark]
pub fn bench_api_serve_file_wildcard_iai_fn() {
    let tree = setup_api_style_tree();
    black_box(tree.get("/api/v1/files/docs/report.pdf", "GET"));
}

#[library_benchmark]
pub fn bench_api_method_not_allowed_iai_fn() {
    let tree = setup_api_style_tree();
    black_box(tree.get("/api/v1/users/user123abc", "PATCH"));
}

#[library_benchmark]
pub fn bench_methods_for_iai_fn() {
    let tree = setup_api_style_tree();
    black_box(tree.methods_for("/api/v1/users/user123abc"));
}

#[library_benchmark]
pub fn bench_add_many_routes_iai_fn() {
    let mut tree = RadixTree::new();
    let num_routes_to_add = 500;
    for i in 0..num_routes_to_add {
        tree.insert(&format!("/static/item/{}", i), i, &["GET"]).unwrap();
        if i % 10 == 0 {
            tree.insert(&format!("/param/user{}/:id", i), i, &["GET"]).unwrap();
        }
    }
    black_box(tree);
}

library_benchmark_group!(
    name = all_iai_benchmarks;
    benchmarks =
        bench_lookup_static_last_iai_fn,
        bench_lookup_param_last_iai_fn,
        bench_lookup_wildcard_last_iai_fn,
        bench_api_get_user_post_iai_fn,
        bench_api_serve_file_wildcard_iai_fn,
        bench_api_method_not_allowed_iai_fn,
        bench_methods_for_iai_fn,
        bench_add_many_routes_iai_fn
);

iai_main!(
    config = LibraryBenchmarkConfig::default()
    .tool(Tool::new(ValgrindTool::DHAT))
    .tool(Tool::new(ValgrindTool::Massif))
    .tool(Tool::new(ValgrindTool::BBV))
    .tool(Tool::new(ValgrindTool::Memcheck))
    .tool(Tool::new(ValgrindTool::Helgrind))
    .tool(Tool::new(ValgrindTool::DRD))
    .flamegraph(FlamegraphConfig::default())
    .regression(
        RegressionConfig::default()
        .limits([(EventKind::Ir, 5.0)])
    );
    library_benchmark_groups = all_iai_benchmarks
);

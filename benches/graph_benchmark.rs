use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graphkit::{
    dfs, find_eulerian_circuit, find_strongly_connected_components, topological_sort,
    topological_sort_dfs, Graph,
};

fn layered_dag(layers: usize, width: usize) -> Graph<usize> {
    let mut graph = Graph::directed();
    for layer in 0..layers - 1 {
        for i in 0..width {
            let u = layer * width + i;
            for j in 0..width {
                graph.add_edge(u, (layer + 1) * width + j);
            }
        }
    }
    graph
}

fn bench_dfs(c: &mut Criterion) {
    let size = 1000;
    let mut chain = Graph::directed();
    for i in 0..size - 1 {
        chain.add_edge(i, i + 1);
    }
    let dag = layered_dag(20, 20);

    c.bench_function("dfs_chain_1000", |b| b.iter(|| black_box(dfs(&chain))));
    c.bench_function("dfs_layered_dag", |b| b.iter(|| black_box(dfs(&dag))));
}

fn bench_topological(c: &mut Criterion) {
    let dag = layered_dag(20, 20);

    c.bench_function("topological_sort_kahn", |b| {
        b.iter(|| black_box(topological_sort(&dag)))
    });
    c.bench_function("topological_sort_dfs", |b| {
        b.iter(|| black_box(topological_sort_dfs(&dag)))
    });
}

fn bench_scc(c: &mut Criterion) {
    // 100 rings of 10 vertices, each ring linked to the next.
    let mut graph = Graph::directed();
    for ring in 0..100 {
        let base = ring * 10;
        for i in 0..10 {
            graph.add_edge(base + i, base + (i + 1) % 10);
        }
        if ring > 0 {
            graph.add_edge(base - 10, base);
        }
    }

    c.bench_function("kosaraju_rings", |b| {
        b.iter(|| black_box(find_strongly_connected_components(&graph)))
    });
}

fn bench_eulerian(c: &mut Criterion) {
    // Complete digraph on 30 vertices: in-degree equals out-degree everywhere.
    let mut graph = Graph::directed();
    for u in 0..30 {
        for v in 0..30 {
            if u != v {
                graph.add_edge(u, v);
            }
        }
    }

    c.bench_function("eulerian_complete_30", |b| {
        b.iter(|| black_box(find_eulerian_circuit(&graph)))
    });
}

criterion_group!(benches, bench_dfs, bench_topological, bench_scc, bench_eulerian);
criterion_main!(benches);

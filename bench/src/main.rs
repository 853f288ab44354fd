use prim_mst_core::{compute_mst, query_path, total_weight, unreached_nodes, GraphStore, Weight};
use std::collections::VecDeque;
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mode = args.get(1).map(|s| s.as_str()).unwrap_or("all");
    let node_count: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100_000);

    if mode == "help" || mode == "--help" {
        println!("Usage: prim-mst-bench [mode] [node_count]");
        println!();
        println!("Modes:");
        println!("  all         Run all generators and benchmark each (default)");
        println!("  lsystem     Fractal branching tree (deep paths, no cycles)");
        println!("  scalefree   Preferential attachment via edge sampling (hub-and-spoke)");
        println!("  smallworld  Watts-Strogatz ring lattice + shortcuts");
        println!("  random      Erdos-Renyi uniform random edges (may be disconnected)");
        println!("  barbell     Two dense clusters connected by a thin bridge");
        println!("  dla         Diffusion-limited aggregation (organic branching)");
        println!();
        println!("Default node_count: 100000");
        return;
    }

    if node_count < 20 {
        eprintln!("node_count must be at least 20");
        return;
    }

    println!("prim-mst-bench");
    println!("==============");
    println!();

    let generators: Vec<(&str, fn(u64) -> GraphStore)> = match mode {
        "lsystem" => vec![("L-system tree", gen_lsystem)],
        "scalefree" => vec![("Scale-free (edge sampling)", gen_scale_free)],
        "smallworld" => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        "random" => vec![("Erdos-Renyi random", gen_random)],
        "barbell" => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        "dla" => vec![("DLA (organic branching)", gen_dla)],
        "all" => vec![
            ("L-system tree", gen_lsystem as fn(u64) -> GraphStore),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
            ("DLA (organic branching)", gen_dla),
        ],
        _ => {
            eprintln!("Unknown mode: {}. Use --help for options.", mode);
            return;
        }
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

fn run_benchmark(name: &str, generator: fn(u64) -> GraphStore, node_count: u64) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let mut graph = generator(node_count);
    println!(
        "Generated in {:.2}s: {} nodes, {} edges",
        t.elapsed().as_secs_f64(),
        graph.node_count(),
        graph.edge_count(),
    );

    let root = node(0);
    let t = Instant::now();
    let mst = compute_mst(&graph, &root);
    let mst_time = t.elapsed();
    let unreached = unreached_nodes(&graph, &root, &mst).len();
    println!(
        "MST from {}: {} edges, weight {}, {} unreached, {:.1}ms",
        root,
        mst.len(),
        total_weight(&mst),
        unreached,
        mst_time.as_secs_f64() * 1000.0
    );

    let far = node(graph.node_count() as u64 - 1);
    let t = Instant::now();
    let report = query_path(&root, &far, &mst);
    let elapsed = t.elapsed();
    match report {
        Some(r) => println!(
            "MST path {} -> {}: {} hops, cost {} in {:.1}ms",
            root,
            far,
            r.path.len() - 1,
            r.cost,
            elapsed.as_secs_f64() * 1000.0
        ),
        None => println!(
            "MST path {} -> {}: no path ({:.1}ms)",
            root,
            far,
            elapsed.as_secs_f64() * 1000.0
        ),
    }

    // One mutate-and-recompute cycle, as an interactive session would do.
    let victim = node(graph.node_count() as u64 / 2);
    let t = Instant::now();
    graph.remove_node(&victim);
    let remove_time = t.elapsed();
    let t = Instant::now();
    let mst = compute_mst(&graph, &root);
    println!(
        "remove {} in {:.1}ms, recompute {} edges in {:.1}ms",
        victim,
        remove_time.as_secs_f64() * 1000.0,
        mst.len(),
        t.elapsed().as_secs_f64() * 1000.0
    );
    println!();
}

// ---------------------------------------------------------------------------
// Generators: all O(n) or O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
    fn weight(&mut self) -> Weight {
        self.next(100) as Weight + 1
    }
}

fn node(id: u64) -> String {
    format!("n{}", id)
}

/// L-system fractal tree: deep branching with self-similar structure.
///
/// Each node spawns 3 children. The graph is already a tree, so the MST is
/// the whole edge set and paths follow the branching.
fn gen_lsystem(node_count: u64) -> GraphStore {
    let mut graph = GraphStore::with_capacity(node_count as usize);
    let mut rng = FastRng::new(42);

    let branching = 3u64;
    graph.add_node(node(0));

    let mut next_id: u64 = 1;
    let mut frontier: Vec<u64> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                let child = next_id;
                next_id += 1;
                graph.add_edge(node(parent), node(child), rng.weight());
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    graph
}

/// Scale-free via edge-list sampling (O(edges), not O(n²)).
///
/// Preferential attachment by picking a random existing edge and connecting
/// to one of its endpoints. Nodes with more edges are more likely to be picked.
fn gen_scale_free(node_count: u64) -> GraphStore {
    let edges_per_node = 5u64;
    let mut graph = GraphStore::with_capacity(node_count as usize);
    let mut rng = FastRng::new(12345);

    let mut edge_endpoints: Vec<u64> = Vec::with_capacity((node_count * edges_per_node * 2) as usize);

    // Seed: small clique
    let seed = 5u64;
    for i in 0..seed {
        for j in (i + 1)..seed {
            graph.add_edge(node(i), node(j), rng.weight());
            edge_endpoints.push(i);
            edge_endpoints.push(j);
        }
    }

    for new_node in seed..node_count {
        let attach = edges_per_node.min(new_node);
        for _ in 0..attach {
            let idx = rng.next(edge_endpoints.len() as u64) as usize;
            let target = edge_endpoints[idx];
            if target != new_node {
                graph.add_edge(node(new_node), node(target), rng.weight());
                edge_endpoints.push(new_node);
                edge_endpoints.push(target);
            }
        }
    }

    graph
}

/// Small-world (Watts-Strogatz): ring lattice + random rewiring.
fn gen_small_world(node_count: u64) -> GraphStore {
    let k = 5u64; // neighbors on each side
    let p = 0.05f64; // rewire probability
    let mut graph = GraphStore::with_capacity(node_count as usize);
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = (i + j) % node_count;
            let target = if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                if rewired != i {
                    rewired
                } else {
                    neighbor
                }
            } else {
                neighbor
            };
            graph.add_edge(node(i), node(target), rng.weight());
        }
    }

    graph
}

/// Erdos-Renyi: uniform random edges, ~3 per node.
///
/// Sparse enough that some nodes stay isolated, which exercises the
/// partial-tree path.
fn gen_random(node_count: u64) -> GraphStore {
    let target_edges = node_count * 3;
    let mut graph = GraphStore::with_capacity(node_count as usize);
    let mut rng = FastRng::new(54321);

    for i in 0..node_count {
        graph.add_node(node(i));
    }

    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            graph.add_edge(node(from), node(to), rng.weight());
        }
    }

    graph
}

/// Barbell: two dense clusters connected by a single thin bridge.
///
/// Bridge edges are heavy, so Prim drains one cluster before crossing.
fn gen_barbell(node_count: u64) -> GraphStore {
    let bridge_len = 10u64;
    let cluster_size = (node_count - bridge_len) / 2;
    let mut graph = GraphStore::with_capacity(node_count as usize);
    let mut rng = FastRng::new(99999);

    let mut cluster = |graph: &mut GraphStore, start: u64| {
        for i in 0..cluster_size {
            graph.add_edge(node(start + i), node(start + (i + 1) % cluster_size), rng.weight());
            for _ in 0..10u64.min(cluster_size - 1) {
                let target = rng.next(cluster_size);
                if target != i {
                    graph.add_edge(node(start + i), node(start + target), rng.weight());
                }
            }
        }
    };

    cluster(&mut graph, 0);

    let bridge_start = cluster_size;
    for i in 0..bridge_len {
        let id = bridge_start + i;
        graph.add_edge(node(id - 1), node(id), 1_000);
    }

    let b_start = bridge_start + bridge_len;
    graph.add_edge(node(b_start - 1), node(b_start), 1_000);
    cluster(&mut graph, b_start);

    graph
}

/// DLA (Diffusion-Limited Aggregation): organic branching growth.
///
/// Each new node attaches to a random recent "surface" node, with occasional
/// long-range second edges that create cycles for Prim to break.
fn gen_dla(node_count: u64) -> GraphStore {
    let mut graph = GraphStore::with_capacity(node_count as usize);
    let mut rng = FastRng::new(77777);

    graph.add_node(node(0));

    let mut surface: VecDeque<u64> = VecDeque::with_capacity(10001);
    surface.push_back(0);
    let surface_max = 10000usize;

    for new_node in 1..node_count {
        let attach_to = surface[rng.next(surface.len() as u64) as usize];
        graph.add_edge(node(new_node), node(attach_to), rng.weight());

        // 10% chance of a second connection (creates loops / shortcuts)
        if rng.next(10) == 0 && new_node > 1 {
            let other = rng.next(new_node);
            if other != attach_to {
                graph.add_edge(node(new_node), node(other), rng.weight());
            }
        }

        surface.push_back(new_node);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    graph
}

//! DBSCAN on a simple 2D dataset.

use densa::Dbscan;

fn main() {
    // Three well-separated clusters in 2D, plus one straggler.
    let data: Vec<[f64; 2]> = vec![
        // Cluster A (near origin)
        [0.0, 0.0],
        [0.1, 0.2],
        [0.2, 0.1],
        [-0.1, 0.1],
        // Cluster B (near (5, 5))
        [5.0, 5.0],
        [5.1, 4.9],
        [4.9, 5.1],
        [5.2, 5.2],
        // Cluster C (near (10, 0))
        [10.0, 0.0],
        [10.1, 0.1],
        [9.9, -0.1],
        [10.2, 0.2],
        // Straggler
        [7.5, -4.0],
    ];

    let dbscan = match Dbscan::new(1.0, 2) {
        Ok(dbscan) => dbscan,
        Err(err) => {
            eprintln!("bad parameters: {err}");
            return;
        }
    };

    let set = dbscan.cluster_set(&data);
    println!("=== DBSCAN (eps=1.0, min_pts=2) ===");
    for (label, cluster) in set.iter().enumerate() {
        println!("cluster {} ({} points)", label, cluster.len());
        for (idx, p) in cluster.indices().iter().zip(cluster) {
            println!("  point {:2} ({:5.1}, {:5.1})", idx, p[0], p[1]);
        }
    }
    for &idx in set.noise() {
        let p = data[idx];
        println!("NOISE   point {:2} ({:5.1}, {:5.1})", idx, p[0], p[1]);
    }
}

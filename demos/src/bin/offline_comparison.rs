// demos/src/bin/offline_comparison.rs
//
// Runs the join strategies over synthetic data of growing size, so the
// difference between O(P·C) and O(P+C) is visible without network access.
//
// Functions demonstrated:
// - `compare_strategies()`: time every strategy over identical input
// - `KeyedObject::first_wins()`: the normalized keyed-object variant
// - `first_divergence()`: locate where two outputs disagree
//
// Run this demo with:
//   cargo run --bin offline_comparison
//   (from the demos directory)

use postjoin_rs::prelude::*;
use postjoin_rs::first_divergence;
use tracing::info;

fn main() {
    setup_logger();
    info!("Offline Join Strategy Comparison");

    demo_duplicate_keys();

    for post_count in [100, 1_000, 5_000] {
        demo_scaling(post_count, 5);
    }
}

fn build_dataset(post_count: u64, per_post: u64) -> (Vec<Post<()>>, Vec<Comment<()>>) {
    let posts = (1..=post_count).map(Post::new).collect();
    let comments = (1..=post_count)
        .flat_map(|post_id| {
            (0..per_post).map(move |n| Comment::new(post_id, format!("comment {n} on {post_id}")))
        })
        .collect();
    (posts, comments)
}

fn demo_duplicate_keys() {
    info!("\n=== Duplicate Post Ids ===");

    let posts: Vec<Post<()>> = vec![Post::new(1), Post::new(2)];
    let comments: Vec<Comment<()>> = vec![Comment::new(1, "a"), Comment::new(1, "b")];

    let linear = LinearScan.join(&posts, &comments);
    let keyed = KeyedObject::new().join(&posts, &comments);
    let normalized = KeyedObject::first_wins().join(&posts, &comments);

    info!("linear-scan:             {:?}", linear[0].comment);
    info!("keyed-object:            {:?}", keyed[0].comment);
    info!("keyed-object first-wins: {:?}", normalized[0].comment);
    info!(
        "keyed-object diverges at index {:?}, first-wins at {:?}",
        first_divergence(&linear, &keyed),
        first_divergence(&linear, &normalized)
    );
}

fn demo_scaling(post_count: u64, per_post: u64) {
    info!(
        "\n=== {} posts, {} comments ===",
        post_count,
        post_count * per_post
    );

    let (posts, comments) = build_dataset(post_count, per_post);
    let sink = RecordingTimingSink::new();
    let outcomes = compare_strategies(&posts, &comments, &sink);
    let report = ComparisonReport::from_outcomes(&outcomes);

    for timing in sink.timings() {
        info!("{timing}");
    }
    if let Some(fastest) = report.fastest() {
        info!("Fastest: {}", fastest);
    }
}

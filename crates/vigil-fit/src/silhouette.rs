//! Cluster-quality evaluation for a finished fit.

use std::collections::HashMap;

use vigil_core::ClusterLabel;

/// Mean silhouette coefficient over all non-noise points.
///
/// Noise points are excluded before scoring, the same way the offline
/// evaluation treats them. Returns `None` when fewer than two clusters
/// remain — the score is undefined there. Singleton clusters contribute
/// zero for their lone member.
pub fn silhouette_score(rows: &[Vec<f32>], labels: &[ClusterLabel]) -> Option<f32> {
    debug_assert_eq!(rows.len(), labels.len());

    // Group non-noise point indices by cluster.
    let mut clusters: HashMap<ClusterLabel, Vec<usize>> = HashMap::new();
    for (i, &label) in labels.iter().enumerate() {
        if !label.is_noise() {
            clusters.entry(label).or_default().push(i);
        }
    }
    if clusters.len() < 2 {
        return None;
    }

    let mut total = 0.0f32;
    let mut count = 0usize;

    for (&label, members) in &clusters {
        for &i in members {
            if members.len() == 1 {
                count += 1;
                continue; // lone member scores zero
            }

            // a: mean distance to the rest of the own cluster.
            let a = mean_distance(rows, i, members);

            // b: smallest mean distance to any other cluster.
            let b = clusters
                .iter()
                .filter(|(&other, _)| other != label)
                .map(|(_, others)| mean_distance(rows, i, others))
                .fold(f32::INFINITY, f32::min);

            let denom = a.max(b);
            if denom > 0.0 {
                total += (b - a) / denom;
            }
            count += 1;
        }
    }

    Some(total / count as f32)
}

fn mean_distance(rows: &[Vec<f32>], from: usize, members: &[usize]) -> f32 {
    let (sum, n) = members
        .iter()
        .filter(|&&j| j != from)
        .fold((0.0f32, 0usize), |(sum, n), &j| {
            (sum + euclidean(&rows[from], &rows[j]), n + 1)
        });
    if n == 0 {
        0.0
    } else {
        sum / n as f32
    }
}

fn euclidean(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f32>()
        .sqrt()
}

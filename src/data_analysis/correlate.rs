// src/data_analysis/correlate.rs

use crate::data_input::telemetry_event::TelemetryEvent;

/// An anchor event paired with the target event emitted closest to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignedPair {
    pub anchor: TelemetryEvent,
    pub target: TelemetryEvent,
}

impl AlignedPair {
    pub fn time_offset(&self) -> f64 {
        (self.target.timestamp - self.anchor.timestamp).abs()
    }

    /// Scatter point (anchor valueA, target valueA).
    pub fn values_a(&self) -> (f64, f64) {
        (self.anchor.value_a, self.target.value_a)
    }
}

/// Aligns two independently sampled streams by nearest timestamp.
///
/// Both slices must be sorted ascending by timestamp. Each anchor is matched
/// to its nearest target (earlier target on a tie) when the gap is within
/// `tolerance`; anchors without such a target are dropped. Matching is
/// one-to-one: a target claimed by several anchors stays with the closest one
/// (earliest anchor on a tie) and the others are dropped, so the result is
/// never larger than either input. Output follows anchor order.
pub fn align_nearest(
    anchors: &[TelemetryEvent],
    targets: &[TelemetryEvent],
    tolerance: f64,
) -> Vec<AlignedPair> {
    if anchors.is_empty() || targets.is_empty() || !(tolerance >= 0.0) {
        return Vec::new();
    }
    debug_assert!(targets.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

    // claims[target_index] = (anchor_index, gap)
    let mut claims: Vec<Option<(usize, f64)>> = vec![None; targets.len()];

    for (anchor_index, anchor) in anchors.iter().enumerate() {
        let Some((target_index, gap)) = nearest_target(targets, anchor.timestamp) else {
            continue;
        };
        if gap > tolerance {
            continue;
        }
        match claims[target_index] {
            Some((_, claimed_gap)) if claimed_gap <= gap => {}
            _ => claims[target_index] = Some((anchor_index, gap)),
        }
    }

    let mut matched: Vec<(usize, usize)> = claims
        .iter()
        .enumerate()
        .filter_map(|(target_index, claim)| claim.map(|(anchor_index, _)| (anchor_index, target_index)))
        .collect();
    matched.sort_unstable();

    matched
        .into_iter()
        .map(|(anchor_index, target_index)| AlignedPair {
            anchor: anchors[anchor_index],
            target: targets[target_index],
        })
        .collect()
}

fn nearest_target(targets: &[TelemetryEvent], timestamp: f64) -> Option<(usize, f64)> {
    let after = targets.partition_point(|t| t.timestamp < timestamp);
    let before = after.checked_sub(1);

    let gap_to = |index: usize| (targets[index].timestamp - timestamp).abs();
    match (before, (after < targets.len()).then_some(after)) {
        (Some(b), Some(a)) => {
            if gap_to(b) <= gap_to(a) {
                Some((b, gap_to(b)))
            } else {
                Some((a, gap_to(a)))
            }
        }
        (Some(b), None) => Some((b, gap_to(b))),
        (None, Some(a)) => Some((a, gap_to(a))),
        (None, None) => None,
    }
}

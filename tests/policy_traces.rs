//! Reference traces for every policy.
//!
//! Expected snapshots were worked out by hand step by step and cover the
//! classic textbook sequences.

use pagesim::simulation::{simulate, Policy};

const TEXTBOOK: [u32; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];
const SILBERSCHATZ: [u32; 13] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];

fn run(policy: Policy, sequence: &[u32], capacity: usize) -> (Vec<Vec<u32>>, Vec<bool>) {
    simulate(policy, sequence, capacity).into_parts()
}

fn count(faults: &[bool]) -> usize {
    faults.iter().filter(|f| **f).count()
}

// ============================================================================
// LRU
// ============================================================================

#[test]
fn test_lru_recency_refresh() {
    let (frames, faults) = run(Policy::Lru, &[1, 2, 3, 1, 2, 4], 3);

    assert_eq!(faults, vec![true, true, true, false, false, true]);
    assert_eq!(frames[4], vec![3, 1, 2]);
    assert_eq!(frames[5], vec![1, 2, 4]);
}

#[test]
fn test_lru_silberschatz() {
    let (frames, faults) = run(Policy::Lru, &SILBERSCHATZ, 3);

    assert_eq!(
        frames,
        vec![
            vec![7],
            vec![7, 0],
            vec![7, 0, 1],
            vec![0, 1, 2],
            vec![1, 2, 0],
            vec![2, 0, 3],
            vec![2, 3, 0],
            vec![3, 0, 4],
            vec![0, 4, 2],
            vec![4, 2, 3],
            vec![2, 3, 0],
            vec![2, 0, 3],
            vec![0, 3, 2],
        ]
    );
    assert_eq!(count(&faults), 9);
}

#[test]
fn test_lru_textbook_capacity_four() {
    let (frames, faults) = run(Policy::Lru, &TEXTBOOK, 4);

    assert_eq!(
        faults,
        vec![true, true, true, true, false, false, true, false, false, true, true, true]
    );
    assert_eq!(frames.last().unwrap(), &vec![2, 3, 4, 5]);
}

// ============================================================================
// MRU
// ============================================================================

#[test]
fn test_mru_textbook_capacity_three() {
    let (frames, faults) = run(Policy::Mru, &TEXTBOOK, 3);

    assert_eq!(
        frames,
        vec![
            vec![1],
            vec![1, 2],
            vec![1, 2, 3],
            vec![1, 2, 4],
            vec![1, 2, 4],
            vec![1, 2, 4],
            vec![1, 4, 5],
            vec![1, 4, 5],
            vec![4, 5, 2],
            vec![4, 5, 3],
            vec![4, 5, 3],
            vec![4, 5, 3],
        ]
    );
    assert_eq!(count(&faults), 7);
}

#[test]
fn test_mru_silberschatz() {
    let (frames, faults) = run(Policy::Mru, &SILBERSCHATZ, 3);

    assert_eq!(frames[6], vec![7, 2, 0]);
    assert_eq!(frames.last().unwrap(), &vec![7, 4, 2]);
    assert_eq!(count(&faults), 11);
}

// ============================================================================
// FIFO
// ============================================================================

#[test]
fn test_fifo_silberschatz() {
    let (frames, faults) = run(Policy::Fifo, &SILBERSCHATZ, 3);

    assert_eq!(
        faults,
        vec![true, true, true, true, false, true, true, true, true, true, true, false, false]
    );
    assert_eq!(frames.last().unwrap(), &vec![2, 3, 0]);
}

#[test]
fn test_fifo_belady_anomaly() {
    let (_, three) = run(Policy::Fifo, &TEXTBOOK, 3);
    let (_, four) = run(Policy::Fifo, &TEXTBOOK, 4);

    // More frames, more faults
    assert_eq!(count(&three), 9);
    assert_eq!(count(&four), 10);
}

#[test]
fn test_lru_has_no_belady_anomaly_on_textbook() {
    let (_, three) = run(Policy::Lru, &TEXTBOOK, 3);
    let (_, four) = run(Policy::Lru, &TEXTBOOK, 4);
    assert!(count(&four) <= count(&three));
}

// ============================================================================
// Optimal
// ============================================================================

#[test]
fn test_optimal_textbook_capacity_four() {
    let (frames, faults) = run(Policy::Optimal, &TEXTBOOK, 4);

    assert_eq!(
        frames,
        vec![
            vec![1],
            vec![1, 2],
            vec![1, 2, 3],
            vec![1, 2, 3, 4],
            vec![1, 2, 3, 4],
            vec![1, 2, 3, 4],
            vec![1, 2, 3, 5],
            vec![1, 2, 3, 5],
            vec![1, 2, 3, 5],
            vec![1, 2, 3, 5],
            vec![2, 3, 5, 4],
            vec![2, 3, 5, 4],
        ]
    );
    assert_eq!(count(&faults), 6);
}

#[test]
fn test_optimal_textbook_capacity_three() {
    let (frames, faults) = run(Policy::Optimal, &TEXTBOOK, 3);

    assert_eq!(count(&faults), 7);
    assert_eq!(frames[9], vec![2, 5, 3]);
}

#[test]
fn test_optimal_silberschatz() {
    let (_, faults) = run(Policy::Optimal, &SILBERSCHATZ, 3);
    assert_eq!(count(&faults), 7);
}

// ============================================================================
// Shared edge cases
// ============================================================================

#[test]
fn test_capacity_one() {
    for policy in Policy::ALL {
        let (frames, faults) = run(policy, &[1, 1, 2, 2, 1], 1);
        assert_eq!(faults, vec![true, false, true, false, true], "{policy}");
        assert_eq!(frames, vec![vec![1], vec![1], vec![2], vec![2], vec![1]], "{policy}");
    }
}

#[test]
fn test_capacity_zero_retains_nothing() {
    for policy in Policy::ALL {
        let (frames, faults) = run(policy, &[3, 3, 3], 0);
        assert_eq!(faults, vec![true; 3], "{policy}");
        assert!(frames.iter().all(Vec::is_empty), "{policy}");
    }
}

#[test]
fn test_capacity_larger_than_distinct_pages() {
    for policy in Policy::ALL {
        let (frames, faults) = run(policy, &SILBERSCHATZ, 10);
        // Only compulsory misses: 7, 0, 1, 2, 3, 4
        assert_eq!(count(&faults), 6, "{policy}");
        assert_eq!(frames.last().unwrap().len(), 6, "{policy}");
    }
}

#[test]
fn test_string_pages() {
    let sequence = ["home", "about", "home", "blog"];
    let (frames, faults) = simulate(Policy::Lru, &sequence, 2).into_parts();

    assert_eq!(faults, vec![true, true, false, true]);
    assert_eq!(frames.last().unwrap(), &vec!["home", "blog"]);
}

/*!
 * Transcript format and line accounting
 */

use pretty_assertions::assert_eq;
use std::collections::HashMap;
use sync_race::{RaceConfig, RaceHarness, StrategyKind};

enum Line {
    Emission { thread_id: usize, strategy: String, ch: char },
    Summary { thread_id: usize, elapsed_ms: f64 },
}

fn parse(line: &str) -> Line {
    let rest = line.strip_prefix("Thread ").expect("line starts with Thread");
    let (id, rest) = rest.split_once(' ').expect("thread id");
    let thread_id: usize = id.parse().expect("numeric thread id");

    if let Some(rest) = rest.strip_prefix("finished race in ") {
        let elapsed = rest
            .strip_suffix(" milliseconds.")
            .expect("summary suffix");
        return Line::Summary {
            thread_id,
            elapsed_ms: elapsed.parse().expect("numeric elapsed"),
        };
    }

    let rest = rest.strip_prefix('(').expect("strategy label");
    let (strategy, ch) = rest.split_once("): ").expect("label terminator");
    let mut chars = ch.chars();
    let ch = chars.next().expect("one character");
    assert!(chars.next().is_none(), "more than one character in {line:?}");

    Line::Emission {
        thread_id,
        strategy: strategy.to_string(),
        ch,
    }
}

fn transcript(kind: StrategyKind) -> String {
    let harness = RaceHarness::new(RaceConfig::default(), Vec::new()).unwrap();
    harness.run(kind).unwrap();
    String::from_utf8(harness.into_writer()).unwrap()
}

#[test]
fn test_mutex_end_to_end() {
    let text = transcript(StrategyKind::Mutex);

    let mut emissions: HashMap<usize, usize> = HashMap::new();
    let mut summaries: HashMap<usize, usize> = HashMap::new();

    for line in text.lines() {
        match parse(line) {
            Line::Emission {
                thread_id,
                strategy,
                ch,
            } => {
                assert_eq!(strategy, "Mutex");
                assert!((' '..='~').contains(&ch));
                *emissions.entry(thread_id).or_default() += 1;
            }
            Line::Summary {
                thread_id,
                elapsed_ms,
            } => {
                assert!(elapsed_ms >= 0.0);
                // A racer reports only after its last emission
                assert_eq!(emissions.get(&thread_id), Some(&5));
                *summaries.entry(thread_id).or_default() += 1;
            }
        }
    }

    assert_eq!(emissions.values().sum::<usize>(), 15);
    assert_eq!(summaries.values().sum::<usize>(), 3);
    for thread_id in 1..=3 {
        assert_eq!(emissions[&thread_id], 5);
        assert_eq!(summaries[&thread_id], 1);
    }
}

#[test]
fn test_labels_per_strategy() {
    for kind in StrategyKind::ALL {
        let text = transcript(kind);
        let labels: Vec<_> = text
            .lines()
            .filter_map(|line| match parse(line) {
                Line::Emission { strategy, .. } => Some(strategy),
                Line::Summary { .. } => None,
            })
            .collect();

        assert_eq!(labels.len(), 15);
        assert!(labels.iter().all(|label| label == kind.name()));
    }
}

#[test]
fn test_full_run_line_count() {
    let harness = RaceHarness::new(RaceConfig::default(), Vec::new()).unwrap();
    harness.run_all().unwrap();
    // (15 emissions + 3 summaries) per strategy
    assert_eq!(harness.output().lines_written(), 7 * 18);

    let text = String::from_utf8(harness.into_writer()).unwrap();
    assert_eq!(text.lines().count(), 7 * 18);
}

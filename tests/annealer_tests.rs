use pfcrack::config::ScheduleParams;
use pfcrack::error::PfError;
use pfcrack::key::Key;
use pfcrack::optimizer::{metropolis_accept, Annealer, NullSink, ProgressSink};
use pfcrack::scorer::QuadgramModel;
use std::collections::HashMap;
use std::sync::Arc;

fn tiny_model() -> Arc<QuadgramModel> {
    let counts: HashMap<String, u64> = [
        ("THEQ", 5000u64),
        ("TION", 4000),
        ("HERE", 3000),
        ("ATTA", 2000),
        ("MENT", 1000),
    ]
    .iter()
    .map(|&(q, c)| (q.to_string(), c))
    .collect();
    Arc::new(QuadgramModel::build(&counts).unwrap())
}

fn small_params() -> ScheduleParams {
    ScheduleParams {
        temp_start: 30.0,
        temp_step: 10.0,
        inner_iters: 200,
    }
}

// --- ACCEPTANCE RULE ---

#[test]
fn test_strict_improvement_never_consults_randomness() {
    let mut drawn = false;
    let accepted = metropolis_accept(0.001, 10.0, || {
        drawn = true;
        0.999
    });
    assert!(accepted);
    assert!(!drawn, "randomness consulted on a strict improvement");
}

#[test]
fn test_worsening_move_uses_metropolis_probability() {
    // exp(-1/1) ~= 0.3679
    assert!(metropolis_accept(-1.0, 1.0, || 0.1));
    assert!(!metropolis_accept(-1.0, 1.0, || 0.9));
}

#[test]
fn test_equal_fitness_move_is_always_accepted() {
    // exp(0/T) = 1 and draws are in [0, 1)
    assert!(metropolis_accept(0.0, 5.0, || 0.999_999));
}

#[test]
fn test_acceptance_probability_shrinks_with_temperature() {
    // The same worsening move passes at high temperature and fails cold
    let draw = 0.5;
    assert!(metropolis_accept(-10.0, 100.0, || draw));
    assert!(!metropolis_accept(-10.0, 1.0, || draw));
}

// --- CONSTRUCTION ---

#[test]
fn test_rejects_non_positive_start_temperature() {
    let mut params = small_params();
    params.temp_start = 0.0;
    let err = Annealer::new(tiny_model(), b"ABCD".to_vec(), params, Some(1)).unwrap_err();
    assert!(matches!(err, PfError::Config(_)));
}

#[test]
fn test_rejects_non_positive_temperature_step() {
    let mut params = small_params();
    params.temp_step = -1.0;
    let err = Annealer::new(tiny_model(), b"ABCD".to_vec(), params, Some(1)).unwrap_err();
    assert!(matches!(err, PfError::Config(_)));
}

#[test]
fn test_rejects_zero_inner_iterations() {
    let mut params = small_params();
    params.inner_iters = 0;
    let err = Annealer::new(tiny_model(), b"ABCD".to_vec(), params, Some(1)).unwrap_err();
    assert!(matches!(err, PfError::Config(_)));
}

// --- SEARCH ---

struct RecordingSink {
    accepts: Vec<(f64, usize)>,
}

impl ProgressSink for RecordingSink {
    fn on_accept(&mut self, fitness: f64, remaining: usize, key: &Key, plaintext: &str) {
        assert_eq!(key.to_string().len(), 25);
        assert_eq!(plaintext.len() % 2, 0);
        self.accepts.push((fitness, remaining));
    }
}

#[test]
fn test_search_completes_and_reports_best() {
    let ciphertext = b"QPWOEIRUTYALSKDHFGMZNXBCVQPWOEIRUTYALSKD".to_vec();
    let mut annealer =
        Annealer::new(tiny_model(), ciphertext.clone(), small_params(), Some(99)).unwrap();

    let mut sink = RecordingSink {
        accepts: Vec::new(),
    };
    let outcome = annealer.run(&mut sink).unwrap();

    assert_eq!(outcome.plaintext.len(), ciphertext.len());
    assert_eq!(outcome.key.to_string().len(), 25);

    // First notification is the initial state, with a full level ahead
    assert!(!sink.accepts.is_empty());
    assert_eq!(sink.accepts[0].1, 200);

    // Best never falls below the initial fitness
    let initial_fitness = sink.accepts[0].0;
    assert!(outcome.fitness >= initial_fitness);

    // Reported fitness is the max over all accepted states
    let max_accepted = sink
        .accepts
        .iter()
        .map(|&(f, _)| f)
        .fold(f64::NEG_INFINITY, f64::max);
    assert!((outcome.fitness - max_accepted).abs() < 1e-9);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let ciphertext = b"QPWOEIRUTYALSKDHFGMZNXBCVQPWOEIRUTYALSKD".to_vec();

    let run = |seed| {
        let mut annealer =
            Annealer::new(tiny_model(), ciphertext.clone(), small_params(), Some(seed)).unwrap();
        annealer.run(&mut NullSink).unwrap()
    };

    let a = run(1234);
    let b = run(1234);
    assert_eq!(a.key, b.key);
    assert_eq!(a.plaintext, b.plaintext);
    assert_eq!(a.fitness, b.fitness);
}

#[test]
fn test_short_ciphertext_search() {
    // Two symbols: every candidate scores 0.0 (below one window), the
    // schedule still runs to completion
    let mut annealer =
        Annealer::new(tiny_model(), b"AB".to_vec(), small_params(), Some(5)).unwrap();
    let outcome = annealer.run(&mut NullSink).unwrap();
    assert_eq!(outcome.fitness, 0.0);
    assert_eq!(outcome.plaintext.len(), 2);
}

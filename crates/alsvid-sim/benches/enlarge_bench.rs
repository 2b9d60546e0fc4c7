//! Benchmarks for symbolic operator enlargement
//!
//! Run with: cargo bench -p alsvid-sim

use alsvid_ir::{CircuitDescription, OperationDescription};
use alsvid_sim::{Backend, StatevectorSimulator, cnot_matrix, enlarge_single, enlarge_two};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

/// Benchmark single-qubit tensor embedding across system sizes.
fn bench_enlarge_single(c: &mut Criterion) {
    let mut group = c.benchmark_group("enlarge_single");
    let hadamard = alsvid_sim::resolve(&alsvid_ir::StandardGate::H)
        .expect("fixed gate")
        .target;

    for num_qubits in &[2usize, 4, 6] {
        group.bench_with_input(
            BenchmarkId::new("hadamard", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| enlarge_single(black_box(&hadamard), black_box(0), black_box(n)));
            },
        );
    }

    group.finish();
}

/// Benchmark the index-mapped two-qubit embedding, the dominant cost of
/// the unitary path.
fn bench_enlarge_two(c: &mut Criterion) {
    let mut group = c.benchmark_group("enlarge_two");
    let cnot = cnot_matrix();

    for num_qubits in &[2usize, 4, 6] {
        group.bench_with_input(
            BenchmarkId::new("cnot", num_qubits),
            num_qubits,
            |b, &n| {
                b.iter(|| {
                    enlarge_two(black_box(&cnot), black_box(0), black_box(1), black_box(n))
                        .expect("distinct positions")
                });
            },
        );
    }

    group.finish();
}

/// Benchmark a full GHZ statevector run end to end.
fn bench_statevector_ghz(c: &mut Criterion) {
    let mut group = c.benchmark_group("statevector_ghz");

    for num_qubits in &[2u32, 4, 6] {
        let mut operations = vec![OperationDescription::new("h", [0])];
        for i in 0..num_qubits - 1 {
            operations.push(OperationDescription::new("cx", [i, i + 1]));
        }
        let circuit = CircuitDescription {
            name: format!("ghz_{num_qubits}"),
            num_qubits: *num_qubits,
            operations,
        };
        let simulator = StatevectorSimulator::new();

        group.bench_with_input(BenchmarkId::new("run", num_qubits), &circuit, |b, description| {
            b.iter(|| simulator.run_circuit(black_box(description), 1));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_enlarge_single,
    bench_enlarge_two,
    bench_statevector_ghz
);
criterion_main!(benches);

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fairsplit_calculator::{Adjustments, ParticipantId, ParticipantInput, allocate};

fn create_participants(count: u64) -> Vec<ParticipantInput> {
    (0..count)
        .map(|i| {
            let amount = format!("{}.{}", 10 + i * 7 % 90, i % 100);
            ParticipantInput::new(ParticipantId(i + 1), format!("Participant {i}"), amount)
        })
        .collect()
}

fn bench_allocate(c: &mut Criterion) {
    let adjustments = Adjustments::new("35", "12.5");

    for count in [2, 12, 50] {
        let participants = create_participants(count);
        c.bench_function(&format!("allocate_{count}_participants"), |b| {
            b.iter(|| allocate(black_box(&participants), black_box(&adjustments)))
        });
    }
}

criterion_group!(benches, bench_allocate);
criterion_main!(benches);

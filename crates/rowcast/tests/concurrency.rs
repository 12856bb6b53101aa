use std::sync::Barrier;
use std::thread;

use rowcast::{map::binding_resolutions, map_rows, row, FromRow, Row};

#[derive(Debug, Default, PartialEq, FromRow)]
struct Sample {
    sample_id: i64,
    name: String,
    note: Option<String>,
}

fn rows(n: i64) -> Vec<Row> {
    (0..n)
        .map(|i| {
            row![
                "SAMPLE_ID" => i,
                "name" => format!("sample {i}"),
                "note" => None::<String>,
            ]
        })
        .collect()
}

// First use of a type may race: every thread that misses builds its own
// bindings, the first insert wins, and the losers are discarded without
// affecting output. This test owns the whole binary so the process-wide
// resolution counter is not shared with unrelated targets.
#[test]
fn concurrent_first_use_converges() {
    const THREADS: usize = 8;

    let barrier = Barrier::new(THREADS);

    let outputs: Vec<Vec<Sample>> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    map_rows::<Sample, _>(rows(20))
                        .unwrap()
                        .collect::<Result<Vec<_>, _>>()
                        .unwrap()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    for output in &outputs[1..] {
        assert_eq!(output, &outputs[0]);
    }
    assert_eq!(outputs[0].len(), 20);
    assert_eq!(outputs[0][7].sample_id, 7);
    assert_eq!(outputs[0][7].name, "sample 7");

    // Converged: the winning bindings serve every later mapping, so the
    // resolution counter no longer moves.
    let settled = binding_resolutions();

    let again: Vec<Sample> = map_rows(rows(20))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(again, outputs[0]);
    assert_eq!(binding_resolutions(), settled);
}

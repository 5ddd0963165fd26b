use crate::helpers::{run, EnvGuard};
use holdem_engine::logger::HandRecord;
use serial_test::serial;

fn stacks(stdout: &str) -> Vec<u64> {
    stdout
        .lines()
        .filter(|l| l.starts_with("Seat "))
        .map(|l| {
            l.split_whitespace()
                .nth(2)
                .and_then(|n| n.parse().ok())
                .unwrap()
        })
        .collect()
}

#[test]
#[serial]
fn chips_are_conserved_over_a_session() {
    let _env = EnvGuard::apply(&[("HOLDEM_BUY_IN", "150")]);
    let res = run(&["sim", "--hands", "200", "--seed", "8", "--seats", "5"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let stacks = stacks(&res.stdout);
    assert_eq!(stacks.len(), 5);
    assert_eq!(stacks.iter().sum::<u64>(), 750);
}

#[test]
#[serial]
fn session_stops_when_one_player_has_everything() {
    let _env = EnvGuard::apply(&[("HOLDEM_BUY_IN", "4")]);
    let res = run(&["sim", "--hands", "500", "--seed", "1", "--seats", "2"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stderr.contains("WARNING: only 1 seat has chips left"), "{}", res.stderr);
    let stacks = stacks(&res.stdout);
    assert!(stacks.contains(&8) && stacks.contains(&0), "{:?}", stacks);
}

#[test]
#[serial]
fn hand_history_round_trips_through_serde() {
    let _env = EnvGuard::apply(&[]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    let path_str = path.to_str().unwrap();
    let res = run(&["sim", "--hands", "25", "--seed", "4", "--output", path_str]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);

    let text = std::fs::read_to_string(&path).unwrap();
    let records: Vec<HandRecord> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 25);
    for (i, rec) in records.iter().enumerate() {
        assert_eq!(rec.seed, Some(4 + i as u64));
        assert!(rec.hand_id.ends_with(&format!("-{:06}", i + 1)));
        let awarded: u32 = rec
            .results
            .iter()
            .flat_map(|r| r.winners.iter().map(|w| w.share))
            .sum();
        let pots: u32 = rec.results.iter().map(|r| r.pot.size()).sum();
        assert_eq!(awarded, pots);
    }
}

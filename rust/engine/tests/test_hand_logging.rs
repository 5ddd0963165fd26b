use std::fs;
use std::path::PathBuf;

use holdem_engine::dealer::{ForcedBets, Street};
use holdem_engine::logger::{ActionRecord, HandLogger, HandRecord};
use holdem_engine::player::PlayerAction;
use holdem_engine::table::{Table, TableConfig};

fn tmp_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("target");
    p.push(format!("{}_{}.jsonl", name, std::process::id()));
    p
}

fn played_hand() -> HandRecord {
    let config = TableConfig {
        num_seats: 3,
        forced_bets: ForcedBets::blinds(5, 10),
        seed: Some(2024),
    };
    let mut table = Table::from_config(&config).unwrap();
    for seat in 0..3 {
        table.sit_down(seat, 100).unwrap();
    }
    table.start_hand().unwrap();
    table.action_taken(PlayerAction::Raise(30)).unwrap();
    table.action_taken(PlayerAction::Fold).unwrap();
    table.action_taken(PlayerAction::Fold).unwrap();
    table.end_betting_round().unwrap();
    table.showdown().unwrap();
    table.last_hand().cloned().unwrap()
}

#[test]
fn table_records_the_hand() {
    let rec = played_hand();
    assert_eq!(rec.seed, Some(2024));
    assert_eq!(rec.button, 0);
    assert_eq!(
        rec.actions,
        vec![
            ActionRecord {
                seat: 0,
                street: Street::Preflop,
                action: PlayerAction::Raise(30)
            },
            ActionRecord {
                seat: 1,
                street: Street::Preflop,
                action: PlayerAction::Fold
            },
            ActionRecord {
                seat: 2,
                street: Street::Preflop,
                action: PlayerAction::Fold
            },
        ]
    );
    assert!(rec.board.is_empty());
    assert_eq!(rec.results.len(), 1);
    assert_eq!(rec.results[0].winners[0].seat, 0);
    assert_eq!(rec.results[0].winners[0].share, 45);
    assert!(rec.hand_id.ends_with("-000001"));
}

#[test]
fn writes_jsonl_with_lf_only() {
    let path = tmp_path("handlog");
    let mut logger = HandLogger::create(&path).expect("create logger");
    logger.write(&played_hand()).expect("write");
    logger.write(&played_hand()).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text.lines().count(), 2);
    let _ = fs::remove_file(&path);
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let path = tmp_path("handlog_ts");
    let mut logger = HandLogger::create(&path).expect("create logger");
    let mut rec = played_hand();
    logger.write(&rec).expect("write");
    rec.ts = Some("2025-01-02T03:04:05Z".to_string());
    logger.write(&rec).expect("write");

    let text = fs::read_to_string(&path).expect("read file");
    let lines: Vec<HandRecord> = text
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid record"))
        .collect();
    assert!(lines[0].ts.is_some());
    assert_eq!(lines[1].ts.as_deref(), Some("2025-01-02T03:04:05Z"));
    assert_eq!(lines[1].results, rec.results);
    let _ = fs::remove_file(&path);
}

#[test]
fn sequential_ids_increment() {
    let mut logger = HandLogger::with_seq_for_test("20251231");
    assert_eq!(logger.next_id(), "20251231-000001");
    assert_eq!(logger.next_id(), "20251231-000002");
}

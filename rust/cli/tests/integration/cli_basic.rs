use crate::helpers::{run, EnvGuard};
use serial_test::serial;

#[test]
fn version_prints_to_stdout() {
    let res = run(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.starts_with("holdem "), "{}", res.stdout);
}

#[test]
fn missing_subcommand_is_an_error() {
    let res = run(&[]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Usage: holdem <command> [options]"));
}

#[test]
fn eval_ranks_seven_cards() {
    let res = run(&["eval", "7c", "7d", "7h", "Kd", "Ks", "2c", "3d"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(res.stdout, "Hand: full house\nCards: Kd Ks 7c 7d 7h\n");
}

#[test]
fn eval_finds_the_wheel() {
    let res = run(&["eval", "Ah 2d 3c 4s 5h 9d Jc"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.starts_with("Hand: straight\n"));
}

#[test]
fn eval_rejects_unknown_cards() {
    let res = run(&["eval", "Ah", "Kh", "Qh", "Jh", "Zz"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Invalid card: Zz"), "{}", res.stderr);
}

#[test]
#[serial]
fn deal_is_reproducible_across_runs() {
    let _env = EnvGuard::apply(&[]);
    let first = run(&["deal", "--seed", "2024", "--seats", "6"]);
    let second = run(&["deal", "--seed", "2024", "--seats", "6"]);
    assert_eq!(first.exit_code, 0, "stderr={}", first.stderr);
    assert_eq!(first.stdout, second.stdout);
    let seat_lines = first.stdout.lines().filter(|l| l.starts_with("Seat ")).count();
    assert_eq!(seat_lines, 6);
}

#[test]
#[serial]
fn deal_never_repeats_a_card() {
    let _env = EnvGuard::apply(&[]);
    let res = run(&["deal", "--seed", "77", "--seats", "23"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let mut cards: Vec<&str> = res
        .stdout
        .lines()
        .filter(|l| l.starts_with("Seat ") || l.starts_with("Board: "))
        .flat_map(|l| l.split(": ").nth(1).unwrap_or("").split_whitespace())
        .collect();
    assert_eq!(cards.len(), 23 * 2 + 5);
    cards.sort_unstable();
    cards.dedup();
    assert_eq!(cards.len(), 51);
}

use crate::helpers::{run, EnvGuard};
use serde_json::Value;
use serial_test::serial;
use std::io::Write;

fn cfg_json() -> Value {
    let res = run(&["cfg"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    serde_json::from_str(&res.stdout).unwrap()
}

#[test]
#[serial]
fn defaults_are_reported_as_default() {
    let _env = EnvGuard::apply(&[]);
    let json = cfg_json();
    assert_eq!(json["buy_in"]["value"], 200);
    assert_eq!(json["buy_in"]["source"], "default");
    assert_eq!(json["small_blind"]["value"], 1);
    assert_eq!(json["big_blind"]["value"], 2);
}

#[test]
#[serial]
fn env_wins_over_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seed = 5\nbuy_in = 500\nante = 1").unwrap();
    let path = file.path().to_str().unwrap().to_string();
    let _env = EnvGuard::apply(&[("HOLDEM_CONFIG", path.as_str()), ("HOLDEM_SEED", "11")]);

    let json = cfg_json();
    assert_eq!(json["seed"]["value"], 11);
    assert_eq!(json["seed"]["source"], "env");
    assert_eq!(json["buy_in"]["value"], 500);
    assert_eq!(json["buy_in"]["source"], "file");
    assert_eq!(json["ante"]["source"], "file");
    assert_eq!(json["seats"]["source"], "default");
}

#[test]
#[serial]
fn flags_win_over_env() {
    let _env = EnvGuard::apply(&[("HOLDEM_SEATS", "9"), ("HOLDEM_SEED", "1")]);
    let res = run(&["deal", "--seed", "3", "--seats", "2"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.starts_with("Seed: 3\n"));
    assert_eq!(res.stdout.lines().filter(|l| l.starts_with("Seat ")).count(), 2);
}

#[test]
#[serial]
fn broken_config_file_fails_every_command() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "seats = \"lots\"").unwrap();
    let path = file.path().to_str().unwrap().to_string();
    let _env = EnvGuard::apply(&[("HOLDEM_CONFIG", path.as_str())]);

    let commands: [&[&str]; 3] = [&["cfg"], &["deal", "--seed", "1"], &["sim", "--hands", "1"]];
    for args in commands {
        let res = run(args);
        assert_eq!(res.exit_code, 2, "{:?}", args);
        assert!(
            res.stderr.starts_with("Error: Configuration error: cannot parse config file"),
            "{}",
            res.stderr
        );
    }
}

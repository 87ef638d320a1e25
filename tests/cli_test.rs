use std::io::Write;
use std::process::{Command, Stdio};

fn run_demo(args: &[&str], stdin: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_battleship-demo"))
        .args(args)
        .env("BATTLESHIP_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start demo binary");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().expect("demo binary did not finish")
}

#[test]
fn demo_binary_text_smoke() {
    let output = run_demo(&[], "2 2\n2 2\n1 1\nquit\n");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["Hit at 2, 2!", "Already fired at this cell!", "Miss at 1, 1!"]
    );
}

#[test]
fn demo_binary_json_smoke() {
    let output = run_demo(&["--format", "json", "--rows", "3", "--cols", "3", "--ship-row", "0", "--ship-col", "0", "--vertical"], "1 1\n4 1\n");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("invalid json"))
        .collect();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["event"], "hit");
    assert_eq!(events[1]["event"], "out_of_bounds");
}

#[test]
fn demo_binary_rejects_bad_placement() {
    let output = run_demo(&["--ship-col", "5"], "");
    assert!(!output.status.success());
}

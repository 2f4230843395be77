use std::process::Command;

#[test]
fn simulate_prints_json() {
    let output = Command::new(env!("CARGO_BIN_EXE_broadside"))
        .args(["simulate", "--seed", "1", "--games", "3"])
        .output()
        .expect("failed to run broadside binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("invalid json"))
        .collect();
    assert_eq!(lines.len(), 4);
    for game in &lines[..3] {
        assert_eq!(game["status"], "Won");
        let guesses = game["guesses"].as_u64().unwrap();
        assert!((17..=100).contains(&guesses));
    }
    assert_eq!(lines[3]["won"], 3);
}

#[test]
fn layout_prints_placements() {
    let output = Command::new(env!("CARGO_BIN_EXE_broadside"))
        .args(["layout", "--seed", "5"])
        .output()
        .expect("failed to run broadside binary");
    assert!(output.status.success());
    let v: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("invalid json");
    assert_eq!(v.as_array().map(|a| a.len()), Some(5));
}

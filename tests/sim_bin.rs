use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "5"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["puzzles"], 5);
    assert_eq!(v["placed"], 25);
    assert!(v["recovered"].as_u64().unwrap() >= 25 - v["diagonal"].as_u64().unwrap());
    assert!(v["failures"].as_array().unwrap().is_empty());
}

use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_isobattle"))
        .args(["sim", "--seed", "1"])
        .env("ISOBATTLE_LOG", "off")
        .output()
        .expect("failed to run isobattle binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["mode"], "gameover");
    assert!(v["winner"].is_string());
}

#[test]
fn pick_binary_reports_cell() {
    let output = Command::new(env!("CARGO_BIN_EXE_isobattle"))
        .args(["pick", "--board", "player", "--x", "5", "--y", "5"])
        .env("ISOBATTLE_LOG", "off")
        .output()
        .expect("failed to run isobattle binary");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "none");
}

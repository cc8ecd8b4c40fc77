use assert_cmd::Command;

pub fn moodjour_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodjour").unwrap();
    cmd.env_remove("MOODJOUR_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd.env("MOODJOUR_INSIGHT_DELAY_MS", "0");
    cmd
}

#[allow(dead_code)]
pub fn init_journal(path: &std::path::Path) {
    moodjour_cmd().arg("init").arg(path).assert().success();
}

use assert_cmd::Command;

pub fn daysplit_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daysplit").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

use assert_cmd::Command;

pub fn datetag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("datetag").unwrap();
    cmd.env_remove("DATETAG_FORMAT");
    cmd.env_remove("DATETAG_TIMEZONE");
    cmd.env_remove("RUST_LOG");
    cmd
}

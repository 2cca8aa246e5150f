use assert_cmd::Command;

pub fn rolo_cmd() -> Command {
    let mut cmd = Command::cargo_bin("rolo").unwrap();
    cmd.env_remove("ROLO_BOOK");
    cmd
}

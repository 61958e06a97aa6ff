use assert_cmd::Command;

pub fn fieldtag_cmd() -> Command {
    let mut cmd = Command::cargo_bin("fieldtag").unwrap();
    cmd.env_remove("FIELDTAG_CONFIG");
    cmd.env_remove("FIELDTAG_LOG");
    cmd
}

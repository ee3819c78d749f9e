use assert_cmd::prelude::*;
use std::ffi::OsStr;
use std::process::Command;

/// `astro react`, with proxy settings removed so requests reach the local server.
pub fn binary() -> Command {
    let mut cmd = Command::cargo_bin("astro").unwrap();
    for var in [
        "http_proxy",
        "HTTP_PROXY",
        "https_proxy",
        "HTTPS_PROXY",
        "all_proxy",
        "ALL_PROXY",
    ] {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd.arg("react");
    cmd
}

pub trait ArgBuilder {
    fn arg_dir(&mut self, directory: impl AsRef<OsStr>) -> &mut Self;
    fn arg_config(&mut self, file: impl AsRef<OsStr>) -> &mut Self;
    fn arg_noinstall(&mut self) -> &mut Self;
    fn arg_yarn(&mut self) -> &mut Self;
    fn arg_npm(&mut self) -> &mut Self;
}

impl ArgBuilder for Command {
    fn arg_dir(&mut self, directory: impl AsRef<OsStr>) -> &mut Self {
        self.arg(directory)
    }

    fn arg_config(&mut self, file: impl AsRef<OsStr>) -> &mut Self {
        self.arg("--config").arg(file)
    }

    fn arg_noinstall(&mut self) -> &mut Self {
        self.arg("--noinstall")
    }

    fn arg_yarn(&mut self) -> &mut Self {
        self.arg("--yarn")
    }

    fn arg_npm(&mut self) -> &mut Self {
        self.arg("--npm")
    }
}

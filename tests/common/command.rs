use crate::common::file::{FileSpec, write_file};
use crate::common::redirect_temp_dir;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    redirect_temp_dir();
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn old_source() -> String {
    r#"fn main() {
    let s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();
    for i in 0..10 {
        println!("{}", s);
    }

    println!("Done");
}
"#
    .to_string()
}

#[fixture]
pub fn new_source() -> String {
    r#"fn main() {
    let mut s = String::new();
    std::io::stdin().read_line(&mut s).unwrap();

    println!("Done");
}
"#
    .to_string()
}

/// Workspace holding `old.rs` and `new.rs` written from the source fixtures.
#[fixture]
pub fn diff_workspace(workspace_dir: TempDir, old_source: String, new_source: String) -> TempDir {
    write_file(FileSpec::new(workspace_dir.path().join("old.rs"), old_source));
    write_file(FileSpec::new(workspace_dir.path().join("new.rs"), new_source));

    workspace_dir
}

#[fixture]
pub fn diff_output() -> String {
    r#"  fn main() {
-     let s = String::new();
+     let mut s = String::new();
      std::io::stdin().read_line(&mut s).unwrap();
-     for i in 0..10 {
-         println!("{}", s);
-     }
  
      println!("Done");
  }
"#
    .to_string()
}

pub fn run_toolbelt_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("toolbelt").expect("Failed to find toolbelt binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{TempDir, tempdir};

fn tf_buddy() -> Command {
    Command::cargo_bin("tf-buddy").unwrap()
}

#[test]
fn version_flag() {
    tf_buddy()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_lists_flags() {
    tf_buddy()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run").and(predicate::str::contains("--verbose")));
}

#[test]
fn missing_dependencies_are_all_reported() -> Result<()> {
    let empty = tempdir()?;
    tf_buddy()
        .current_dir(empty.path())
        .env("PATH", empty.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("git").and(predicate::str::contains("terraform")));
    Ok(())
}

/// Temporary git repository plus a fake `terraform` that logs its arguments.
#[cfg(unix)]
struct Sandbox {
    _root: TempDir,
    repo: PathBuf,
    bin: PathBuf,
    log: PathBuf,
}

#[cfg(unix)]
impl Sandbox {
    /// `None` when git is not installed.
    fn new() -> Result<Option<Self>> {
        use std::os::unix::fs::PermissionsExt;

        if which::which("git").is_err() {
            return Ok(None);
        }
        let root = tempdir()?;
        let repo = root.path().join("repo");
        let bin = root.path().join("bin");
        let log = root.path().join("terraform.log");
        fs::create_dir_all(&repo)?;
        fs::create_dir_all(&bin)?;

        let fake = bin.join("terraform");
        fs::write(
            &fake,
            concat!(
                "#!/bin/sh\n",
                "[ -f \"$2\" ] || { echo \"no such file $2\" >&2; exit 1; }\n",
                "case \"$2\" in *bad.tf) echo 'Invalid block' >&2; exit 2;; esac\n",
                "echo \"$@\" >> \"$FAKE_TF_LOG\"\n",
            ),
        )?;
        fs::set_permissions(&fake, fs::Permissions::from_mode(0o755))?;

        let sandbox = Self {
            _root: root,
            repo,
            bin,
            log,
        };
        sandbox.git(&["init", "-q"])?;
        Ok(Some(sandbox))
    }

    fn git(&self, args: &[&str]) -> Result<()> {
        let status = std::process::Command::new("git")
            .args(["-c", "user.name=Test", "-c", "user.email=test@example.com"])
            .args(["-c", "commit.gpgsign=false"])
            .args(args)
            .current_dir(&self.repo)
            .status()?;
        anyhow::ensure!(status.success(), "git {args:?} failed");
        Ok(())
    }

    fn write(&self, rel: &str, contents: &str) -> Result<()> {
        let path = self.repo.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        Ok(())
    }

    fn cmd(&self, cwd: &Path) -> Command {
        let path = std::env::var_os("PATH").unwrap_or_default();
        let mut dirs = vec![self.bin.clone()];
        dirs.extend(std::env::split_paths(&path));
        let mut cmd = tf_buddy();
        cmd.current_dir(cwd)
            .env("PATH", std::env::join_paths(dirs).unwrap())
            .env("FAKE_TF_LOG", &self.log);
        cmd
    }

    fn formatted(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}

#[test]
#[cfg(unix)]
fn formats_staged_modified_and_untracked_files() -> Result<()> {
    let Some(sb) = Sandbox::new()? else {
        return Ok(());
    };
    sb.write("tracked.tf", "a = 1\n")?;
    sb.write("README.md", "docs\n")?;
    sb.git(&["add", "."])?;
    sb.git(&["commit", "-q", "-m", "init"])?;

    sb.write("tracked.tf", "a   = 1\n")?;
    sb.write("staged.tf", "b = 2\n")?;
    sb.git(&["add", "staged.tf"])?;
    sb.write("modules/net/main.tf", "c = 3\n")?;
    sb.write(".gitignore", "ignored.tf\n")?;
    sb.write("ignored.tf", "d = 4\n")?;
    sb.write("README.md", "more docs\n")?;

    sb.cmd(&sb.repo.join("modules"))
        .arg("--verbose")
        .assert()
        .success()
        .stdout(predicate::str::contains("Formatted 3 file(s) successfully"));

    assert_eq!(
        sb.formatted(),
        vec!["fmt staged.tf", "fmt tracked.tf", "fmt modules/net/main.tf"]
    );
    Ok(())
}

#[test]
#[cfg(unix)]
fn dry_run_touches_nothing() -> Result<()> {
    let Some(sb) = Sandbox::new()? else {
        return Ok(());
    };
    sb.write("main.tf", "a   = 1\n")?;

    sb.cmd(&sb.repo)
        .arg("-d")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would format: main.tf"));

    assert!(sb.formatted().is_empty());
    assert_eq!(fs::read_to_string(sb.repo.join("main.tf"))?, "a   = 1\n");
    Ok(())
}

#[test]
#[cfg(unix)]
fn failures_are_aggregated_and_exit_one() -> Result<()> {
    let Some(sb) = Sandbox::new()? else {
        return Ok(());
    };
    sb.write("bad.tf", "resource {\n")?;
    sb.write("good.tf", "a = 1\n")?;

    sb.cmd(&sb.repo)
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("Failed to format 1 file(s):")
                .and(predicate::str::contains("  bad.tf"))
                .and(predicate::str::contains("Invalid block")),
        );

    assert_eq!(sb.formatted(), vec!["fmt good.tf"]);
    Ok(())
}

#[test]
#[cfg(unix)]
fn failure_is_reported_once_by_default() -> Result<()> {
    let Some(sb) = Sandbox::new()? else {
        return Ok(());
    };
    sb.write("bad.tf", "resource {\n")?;

    let output = sb.cmd(&sb.repo).env_remove("RUST_LOG").output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("bad.tf").count(), 2, "{stderr}");
    assert!(!stderr.contains("WARN"), "{stderr}");
    Ok(())
}

#[test]
#[cfg(unix)]
fn staged_file_deleted_from_work_tree_is_skipped() -> Result<()> {
    let Some(sb) = Sandbox::new()? else {
        return Ok(());
    };
    sb.write("gone.tf", "a = 1\n")?;
    sb.git(&["add", "gone.tf"])?;
    fs::remove_file(sb.repo.join("gone.tf"))?;

    sb.cmd(&sb.repo)
        .assert()
        .success()
        .stderr(predicate::str::contains("gone.tf").not());

    assert!(sb.formatted().is_empty());
    Ok(())
}

#[test]
#[cfg(unix)]
fn clean_tree_is_a_quiet_success() -> Result<()> {
    let Some(sb) = Sandbox::new()? else {
        return Ok(());
    };
    sb.write("notes.txt", "hi\n")?;

    sb.cmd(&sb.repo).assert().success().stdout(predicate::str::is_empty());
    assert!(sb.formatted().is_empty());
    Ok(())
}

#[test]
#[cfg(unix)]
fn outside_work_tree_exits_one() -> Result<()> {
    let Some(sb) = Sandbox::new()? else {
        return Ok(());
    };
    let outside = tempdir()?;

    sb.cmd(outside.path())
        .env("GIT_CEILING_DIRECTORIES", outside.path().parent().unwrap_or(outside.path()))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not inside a git working tree"));
    Ok(())
}

//! Shared test helpers: fake Sherlock executables in scratch directories.
//!
//! The scripts are run as `sh <script> ...` through `prefix_args`, so they
//! never need the executable bit.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use watson_config::{Config, SherlockConfig};

/// Behaves like a tiny Sherlock: prints `[*]`, `[+]` and `[-]` lines for
/// every username, writes `<username>.txt` and `args.txt` into the
/// `--folderoutput` folder and emits one line on stderr.
pub const ECHO_SCRIPT: &str = r#"
folder=""
take=0
for a in "$@"; do
  if [ "$take" = 1 ]; then folder="$a"; take=0; fi
  if [ "$a" = "--folderoutput" ]; then take=1; fi
done
if [ -n "$folder" ]; then printf '%s\n' "$@" > "$folder/args.txt"; fi

users=""
while [ $# -gt 0 ]; do
  case "$1" in
    --folderoutput|--timeout|--site|--proxy) shift 2 ;;
    --*) shift ;;
    *) users="$users $1"; shift ;;
  esac
done

for u in $users; do
  printf '[*] Checking username %s on:\n' "$u"
  printf '[+] GitHub: https://github.com/%s\n' "$u"
  printf '[-] MySpace: Not Found!\n'
  if [ -n "$folder" ]; then printf 'https://github.com/%s\n' "$u" > "$folder/$u.txt"; fi
done
printf 'warning: 1 site skipped\n' >&2
"#;

/// Prints one progress line and then hangs.
pub const HANG_SCRIPT: &str = r#"
printf '[*] Checking username %s on:\n' "$1"
exec sleep 30
"#;

/// A fake tool living in its own temporary directory.
pub struct FakeSherlock {
    dir: TempDir,
    script: PathBuf,
}

impl FakeSherlock {
    /// Write `body` as the tool's shell script.
    pub fn new(body: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let script = dir.path().join("sherlock.sh");
        fs::write(&script, body).expect("Failed to write fake sherlock");
        Self { dir, script }
    }

    pub fn echo() -> Self {
        Self::new(ECHO_SCRIPT)
    }

    pub fn hanging() -> Self {
        Self::new(HANG_SCRIPT)
    }

    pub fn results_dir(&self) -> PathBuf {
        self.dir.path().join("results")
    }

    /// Sherlock section pointing at this script.
    pub fn sherlock_config(&self) -> SherlockConfig {
        SherlockConfig {
            executable: "sh".to_string(),
            prefix_args: vec![self.script.to_string_lossy().into_owned()],
            results_dir: self.results_dir(),
            search_timeout_secs: 10,
            no_color: true,
        }
    }

    pub fn config(&self) -> Config {
        Config { sherlock: self.sherlock_config(), ..Config::default() }
    }
}

/// Sherlock section whose executable cannot be launched.
pub fn missing_sherlock_config(results_dir: &Path) -> SherlockConfig {
    SherlockConfig {
        executable: "/nonexistent/watson-test/sherlock".to_string(),
        results_dir: results_dir.to_path_buf(),
        ..SherlockConfig::default()
    }
}

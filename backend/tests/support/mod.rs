#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use tempfile::TempDir;
use timetable::config::DataSettings;
use timetable::services::TimetableService;

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub const SINGLE_ROW_CSV: &str = "\
grade,class,day,period,subject,teacher,room
1,1,Mon,0,Math,A,101
";

/// Apply `changes` to the process environment, run `f`, then put every
/// touched variable back, even if `f` panics.
///
/// `Some(value)` sets a variable and `None` unsets it. Calls are serialized
/// on a global lock because tests share one environment.
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _restore = EnvRestore::apply(changes);
    f()
}

/// Temporary data directory holding `files` as `(name, contents)`.
pub fn data_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).expect("write fixture");
    }
    dir
}

/// Service reading the default file names under `dir`.
pub fn service_in(dir: &Path) -> TimetableService {
    TimetableService::from_settings(&DataSettings::in_dir(dir))
}

/// Previous values of the variables a scope changed.
struct EnvRestore {
    saved: HashMap<String, Option<String>>,
}

impl EnvRestore {
    fn apply(changes: &[(&str, Option<&str>)]) -> Self {
        let mut saved = HashMap::new();
        for (key, value) in changes {
            saved
                .entry(key.to_string())
                .or_insert_with(|| std::env::var(key).ok());
            set_or_remove(key, *value);
        }
        Self { saved }
    }
}

impl Drop for EnvRestore {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain() {
            set_or_remove(&key, value.as_deref());
        }
    }
}

fn set_or_remove(key: &str, value: Option<&str>) {
    match value {
        Some(v) => std::env::set_var(key, v),
        None => std::env::remove_var(key),
    }
}

use std::fs::OpenOptions;
use std::path::Path;

/// Route `log` output to a file so it never lands on the terminal UI.
///
/// `RUST_LOG` wins over `default_level`. Failing to open the file leaves
/// logging disabled.
pub fn init(log_path: &Path, default_level: &str) {
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = match OpenOptions::new().create(true).append(true).open(log_path) {
        Ok(file) => file,
        Err(_) => return,
    };

    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();
}

use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use relwatch_platform::AppPaths;

fn level_for(debug_enabled: bool) -> LevelFilter {
    if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Drop the older half of the log once it grows past `max_log_size`,
/// cutting at a line boundary.
fn trim_to_recent_half(log_path: &Path, max_log_size: u64) -> io::Result<()> {
    if std::fs::metadata(log_path)?.len() <= max_log_size {
        return Ok(());
    }
    let contents = std::fs::read(log_path)?;
    let tail = &contents[contents.len() / 2..];
    let start = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |pos| pos + 1);
    std::fs::write(log_path, &tail[start..])
}

fn open_log_sink(log_path: &Path, max_log_size: u64) -> Option<File> {
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent).ok()?;
    }
    let _ = trim_to_recent_half(log_path, max_log_size);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .ok()
}

/// Warnings go to stderr; everything from `Debug` up goes to the log file
/// when debug logging is enabled.
pub fn init_logging(debug_enabled: bool, max_log_size: u64) {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("relwatch")
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level_for(debug_enabled),
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(file) = AppPaths::new()
        .ok()
        .and_then(|paths| open_log_sink(&paths.log_file(), max_log_size))
    {
        loggers.push(WriteLogger::new(LevelFilter::Debug, config, file));
    }

    let _ = CombinedLogger::init(loggers);
    log::set_max_level(level_for(debug_enabled));
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::{LevelFilter, level_for, open_log_sink, trim_to_recent_half};

    #[test]
    fn sink_creates_missing_data_directory() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let log_path = temp_dir.path().join("relwatch").join("debug.log");

        let mut sink = open_log_sink(&log_path, 1024).expect("sink should open");
        writeln!(sink, "checked https://feed/latest").expect("sink should accept writes");

        let contents = std::fs::read_to_string(&log_path).expect("log file should be readable");
        assert_eq!(contents, "checked https://feed/latest\n");
    }

    #[test]
    fn sink_trims_oversized_log_before_appending() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let log_path = temp_dir.path().join("debug.log");
        let history: String = (1..=8).map(|n| format!("check {n}\n")).collect();
        std::fs::write(&log_path, &history).expect("test log file should be written");

        let mut sink = open_log_sink(&log_path, 16).expect("sink should open");
        writeln!(sink, "check 9").expect("sink should accept writes");

        let contents = std::fs::read_to_string(&log_path).expect("log file should be readable");
        assert!(!contents.contains("check 1\n"));
        assert!(contents.contains("check 8\n"));
        assert!(contents.ends_with("check 9\n"));
        assert!(contents.starts_with("check "));
    }

    #[test]
    fn log_within_limit_is_untouched() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let log_path = temp_dir.path().join("debug.log");
        std::fs::write(&log_path, "one\ntwo\n").expect("test log file should be written");

        trim_to_recent_half(&log_path, 1024).expect("trim should succeed");

        let contents = std::fs::read_to_string(&log_path).expect("log file should be readable");
        assert_eq!(contents, "one\ntwo\n");
    }

    #[test]
    fn missing_log_is_reported_not_created() {
        let temp_dir = tempfile::tempdir().expect("temporary directory should be created");
        let log_path = temp_dir.path().join("debug.log");

        assert!(trim_to_recent_half(&log_path, 0).is_err());
        assert!(!log_path.exists());
    }

    #[test]
    fn debug_flag_selects_level() {
        assert_eq!(level_for(true), LevelFilter::Debug);
        assert_eq!(level_for(false), LevelFilter::Warn);
    }
}

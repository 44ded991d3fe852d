use std::io::Write;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_config_is_default() {
	let config = Config::from_toml_str("").unwrap();
	assert_eq!(config, Config::default());
	assert!(config.echo.history);
	assert_eq!(config.log.level, LogLevel::Warn);
	assert_eq!(config.notify.level, LogLevel::Info);
	assert!(!config.lines.strict);
}

#[test]
fn partial_sections_keep_other_defaults() {
	let config = Config::from_toml_str(
		r#"
[echo]
verbose = true

[notify]
level = "error"
"#,
	)
	.unwrap();
	assert_eq!(
		config.echo,
		EchoConfig {
			history: true,
			verbose: Some(true),
		}
	);
	assert_eq!(config.notify.level, LogLevel::Error);
	assert_eq!(config.log, LogConfig::default());
}

#[test]
fn unknown_keys_are_rejected() {
	let err = Config::from_toml_str("[lines]\nstrictt = true\n").unwrap_err();
	assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn invalid_level_is_rejected() {
	assert!(Config::from_toml_str("[log]\nlevel = \"loud\"\n").is_err());
}

#[test]
fn loads_from_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "[log]\nlevel = \"trace\"\nfile = \"/tmp/moonwalk.log\"\n\n[lines]\nstrict = true").unwrap();

	let config = Config::load(file.path()).unwrap();
	assert_eq!(config.log.level, LogLevel::Trace);
	assert_eq!(config.log.file.as_deref(), Some(Path::new("/tmp/moonwalk.log")));
	assert!(config.lines.strict);
}

#[test]
fn missing_file_reports_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("absent.toml");
	match Config::load(&path) {
		Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
		other => panic!("expected I/O error, got {other:?}"),
	}
	assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
}

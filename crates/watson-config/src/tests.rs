#[cfg(test)]
mod tests {
    use super::super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_local_tool() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
        assert_eq!(config.sherlock.executable, "sherlock");
        assert_eq!(config.sherlock.results_dir, PathBuf::from("results"));
        assert_eq!(config.sherlock.search_timeout(), Some(Duration::from_secs(900)));
        assert!(config.sherlock.no_color);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [sherlock]
            executable = "python3"
            prefix_args = ["-m", "sherlock_project"]
            search_timeout_secs = 0
            "#,
        )
        .unwrap();
        assert_eq!(config.sherlock.executable, "python3");
        assert_eq!(config.sherlock.prefix_args, vec!["-m", "sherlock_project"]);
        assert_eq!(config.sherlock.search_timeout(), None);
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("WATSON_PORT", "8080"),
            ("WATSON_SHERLOCK_BIN", "/opt/sherlock/bin/sherlock"),
            ("WATSON_RESULTS_DIR", "/tmp/watson"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.sherlock.executable, "/opt/sherlock/bin/sherlock");
        assert_eq!(config.sherlock.results_dir, PathBuf::from("/tmp/watson"));
    }

    #[test]
    fn test_bad_port_override_is_rejected() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(|k| (k == "WATSON_PORT").then(|| "http".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_named_config_path() {
        let path = config_path(Ok("/etc/watson/watson.toml".to_string())).unwrap();
        assert_eq!(path, Some(PathBuf::from("/etc/watson/watson.toml")));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_config_env_is_rejected() {
        use std::os::unix::ffi::OsStringExt;
        let raw = std::ffi::OsString::from_vec(vec![b'w', 0xff, b'.', b't']);
        let err = config_path(Err(VarError::NotUnicode(raw))).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.starts_with("WATSON_CONFIG is not valid UTF-8")));
    }

    #[test]
    fn test_from_file_and_validate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("watson.toml");
        std::fs::write(&path, "[sherlock]\nexecutable = \"  \"\n").unwrap();
        let config = Config::from_file(&path).unwrap();
        assert!(config.validate().is_err());
    }
}

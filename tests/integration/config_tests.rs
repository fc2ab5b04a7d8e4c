//! Integration tests for configuration loading and merging.

use std::path::PathBuf;

use cmdbook::book::NameRules;
use cmdbook::config::{
    generate_example_config, load_config_with_user_path, AddConfig, AppearanceConfig, Config,
    GeneralConfig, Theme,
};
use cmdbook::error::exit_code;
use cmdbook::utils::resolve_book_path;

use crate::integration::fixtures::empty_book;

// ==================== Config Defaults ====================

#[test]
fn test_default_config() {
    let config = Config::default();

    assert!(config.general.book.is_none());
    assert!(config.general.shell.is_none());
    assert_eq!(config.max_short_len(), 20);
    assert_eq!(config.theme(), Theme::Default);
    assert_eq!(config.name_rules(), NameRules::default());
}

// ==================== Config Merging ====================

#[test]
fn test_config_merge() {
    let mut base = Config {
        general: GeneralConfig {
            book: Some(PathBuf::from("/base/book.toml")),
            shell: Some("bash".to_string()),
        },
        ..Default::default()
    };

    let overlay = Config {
        general: GeneralConfig {
            book: Some(PathBuf::from("/overlay/book.toml")),
            shell: None,
        },
        add: AddConfig {
            max_short_len: Some(0),
        },
        appearance: AppearanceConfig {
            theme: Some(Theme::None),
        },
    };

    base.merge(overlay);

    // Overlay value should win
    assert_eq!(base.general.book, Some(PathBuf::from("/overlay/book.toml")));
    // Unset overlay values keep the base
    assert_eq!(base.general.shell.as_deref(), Some("bash"));
    assert_eq!(base.name_rules(), NameRules::unlimited());
    assert_eq!(base.theme(), Theme::None);
}

// ==================== Loading ====================

#[test]
fn test_cli_config_overrides_user_config() {
    let book = empty_book();
    let user = book.dir.path().join("user.toml");
    std::fs::write(&user, "[general]\nshell = \"zsh\"\n[add]\nmax_short_len = 5\n").unwrap();
    let cli = book.write_config("[add]\nmax_short_len = 8\n");

    let config = load_config_with_user_path(Some(&cli), Some(&user)).unwrap();

    assert_eq!(config.general.shell.as_deref(), Some("zsh"));
    assert_eq!(config.max_short_len(), 8);
}

#[test]
fn test_cli_config_without_sections_keeps_user_values() {
    let book = empty_book();
    let user = book.dir.path().join("user.toml");
    std::fs::write(
        &user,
        "[add]\nmax_short_len = 0\n\n[appearance]\ntheme = \"none\"\n",
    )
    .unwrap();
    let cli = book.write_config("[general]\nshell = \"bash\"\n");

    let config = load_config_with_user_path(Some(&cli), Some(&user)).unwrap();

    assert_eq!(config.general.shell.as_deref(), Some("bash"));
    assert_eq!(config.max_short_len(), 0);
    assert_eq!(config.name_rules(), NameRules::unlimited());
    assert_eq!(config.theme(), Theme::None);
}

#[test]
fn test_broken_user_config_is_skipped() {
    let book = empty_book();
    let user = book.dir.path().join("user.toml");
    std::fs::write(&user, "[add\nmax_short_len = ").unwrap();

    let config = load_config_with_user_path(None, Some(&user)).unwrap();
    assert_eq!(config.max_short_len(), 20);
}

#[test]
fn test_broken_cli_config_is_an_error() {
    let book = empty_book();
    let cli = book.write_config("[appearance]\ntheme = \"neon\"\n");

    let err = load_config_with_user_path(Some(&cli), None).unwrap_err();
    assert_eq!(err.exit_code(), exit_code::INVALID_CONFIG);
}

#[test]
fn test_missing_cli_config_is_an_error() {
    let book = empty_book();
    let missing = book.dir.path().join("missing.toml");

    assert!(load_config_with_user_path(Some(&missing), None).is_err());
}

#[test]
fn test_example_config_parses() {
    let book = empty_book();
    let path = book.write_config(&generate_example_config());

    let config = load_config_with_user_path(Some(&path), None).unwrap();
    assert_eq!(config.max_short_len(), 20);
}

// ==================== Book Location ====================

#[test]
fn test_book_path_priority() {
    let config = Config {
        general: GeneralConfig {
            book: Some(PathBuf::from("/from/config.toml")),
            shell: None,
        },
        ..Default::default()
    };

    assert_eq!(
        resolve_book_path(Some(PathBuf::from("/from/flag.toml").as_path()), &config),
        Some(PathBuf::from("/from/flag.toml"))
    );
    assert_eq!(
        resolve_book_path(None, &config),
        Some(PathBuf::from("/from/config.toml"))
    );
}

#[test]
fn test_book_path_default_is_in_home() {
    if let Some(home) = dirs::home_dir() {
        assert_eq!(
            resolve_book_path(None, &Config::default()),
            Some(home.join(".cmdbook.toml"))
        );
    }
}

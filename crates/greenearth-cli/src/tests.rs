use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["greenearth"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(!cli.ephemeral);
}

#[test]
fn parses_browse_command() {
    let cli = Cli::try_parse_from(["greenearth", "browse"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Browse)));
}

#[test]
fn parses_plants_without_category() {
    let cli = Cli::try_parse_from(["greenearth", "plants"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Plants { category: None })
    ));
}

#[test]
fn parses_plants_with_category() {
    let cli = Cli::try_parse_from(["greenearth", "plants", "--category", "2"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Plants { category: Some(ref c) }) if c == "2"
    ));
}

#[test]
fn parses_show_command() {
    let cli = Cli::try_parse_from(["greenearth", "show", "101"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Show { ref id }) if id == "101"));
}

#[test]
fn show_requires_an_id() {
    assert!(Cli::try_parse_from(["greenearth", "show"]).is_err());
}

#[test]
fn parses_cart_subcommands() {
    let cli = Cli::try_parse_from(["greenearth", "cart", "show"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Cart {
            command: CartCommands::Show
        })
    ));

    let cli =
        Cli::try_parse_from(["greenearth", "cart", "add", "103"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Cart {
            command: CartCommands::Add { ref id }
        }) if id == "103"
    ));

    let cli = Cli::try_parse_from(["greenearth", "cart", "remove", "103"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Cart {
            command: CartCommands::Remove { .. }
        })
    ));
}

#[test]
fn global_flags_work_after_subcommand() {
    let cli = Cli::try_parse_from([
        "greenearth",
        "categories",
        "--ephemeral",
        "--api-base-url",
        "http://localhost:9999/api",
    ])
    .expect("expected valid cli args");
    assert!(cli.ephemeral);
    assert_eq!(cli.api_base_url.as_deref(), Some("http://localhost:9999/api"));
}

#[test]
fn flags_override_config() {
    let cli = Cli::try_parse_from([
        "greenearth",
        "--api-base-url",
        "http://localhost:9999/api",
        "--data-dir",
        "/tmp/greenearth-test",
    ])
    .expect("expected valid cli args");

    let mut config = AppConfig {
        api_base_url: "https://example.invalid/api".to_owned(),
        data_dir: PathBuf::from("./.greenearth"),
        log_level: "info".to_owned(),
        request_timeout_secs: 30,
        user_agent: "greenearth-test".to_owned(),
        max_retries: 0,
        retry_backoff_base_secs: 1,
        money_locale: greenearth_core::MoneyLocale::default(),
    };
    apply_overrides(&mut config, &cli);
    assert_eq!(config.api_base_url, "http://localhost:9999/api");
    assert_eq!(config.data_dir, PathBuf::from("/tmp/greenearth-test"));
}

#[test]
fn ephemeral_is_refused_for_cart_commands() {
    let cli = Cli::try_parse_from(["greenearth", "--ephemeral", "cart", "add", "101"])
        .expect("expected valid cli args");
    let error = check_flags(&cli).expect_err("ephemeral cart must be refused");
    assert!(error.to_string().contains("--ephemeral"));

    let cli = Cli::try_parse_from(["greenearth", "cart", "show", "--ephemeral"])
        .expect("expected valid cli args");
    assert!(check_flags(&cli).is_err());
}

#[test]
fn ephemeral_is_allowed_for_browsing() {
    let cli = Cli::try_parse_from(["greenearth", "--ephemeral"]).expect("expected valid cli args");
    assert!(check_flags(&cli).is_ok());

    let cli = Cli::try_parse_from(["greenearth", "--ephemeral", "browse"])
        .expect("expected valid cli args");
    assert!(check_flags(&cli).is_ok());

    let cli = Cli::try_parse_from(["greenearth", "cart", "show"]).expect("expected valid cli args");
    assert!(check_flags(&cli).is_ok());
}

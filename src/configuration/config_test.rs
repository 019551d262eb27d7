use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());

    insta::assert_snapshot!(res, @r###"
    # Base URL of the DoLegal API.
    api-url = "http://localhost:8000"

    # Free requests available before an account is required.
    free-requests = 3

    # Time to wait in milliseconds before timing out when doing a health check against the API.
    health-check-timeout = 1000

    # Your account plan. [possible values: free, basic, pro]
    tier = "free"

    # Your user name displayed in all chat bubbles.
    # username = ""
    "###);
}

#[test]
fn it_names_keys_in_kebab_case() {
    assert_eq!(ConfigKey::ApiURL.to_string(), "api-url");
    assert_eq!(ConfigKey::FreeRequests.to_string(), "free-requests");
    assert_eq!(
        ConfigKey::HealthCheckTimeout.to_string(),
        "health-check-timeout"
    );
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec!["dolegal", "-c", "./config.example.toml"])?;
    Config::load(cli::build(), vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::ApiURL), "http://localhost:8000");
    assert_eq!(Config::get(ConfigKey::Tier), "free");
    assert_eq!(Config::get(ConfigKey::FreeRequests), "3");

    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["dolegal", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());

    return Ok(());
}

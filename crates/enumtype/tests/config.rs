use enumtype::{Bootstrap, config::ConfigError, prelude::*, validate::ValidateError};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, EnumKind, Eq, PartialEq)]
#[enum_kind(path = "app::Status")]
enum Status {
    Active,
    Closed,
}

#[derive(Clone, Copy, Debug, EnumKind, Eq, PartialEq)]
#[enum_kind(path = "app::Region")]
enum Region {
    #[enum_value(key = "eu-west")]
    EuWest,
    #[enum_value(key = "us-east")]
    UsEast,
}

const CONFIG: &str = r#"
    separator = ":"

    [enums]
    status = "app::Status"
    region = "app::Region"
"#;

fn catalog() -> EnumCatalog {
    EnumCatalog::new().with::<Status>().with::<Region>()
}

#[test]
fn config_drives_the_codec() {
    let boot = Bootstrap::from_toml(CONFIG, &catalog()).unwrap();

    assert_eq!(
        boot.codec.encode(&EnumValue::from(Region::UsEast)).unwrap(),
        "region:us-east"
    );
    assert!(boot.codec.is_valid("status:closed"));
    assert!(!boot.codec.is_valid("status::closed"));
    assert!(boot.codec.registry().is_sealed());
}

#[test]
fn config_parses_into_a_plain_struct() {
    let config = EnumConfig::from_toml_str(CONFIG).unwrap();

    assert_eq!(config.separator, ":");
    assert_eq!(
        config.enums,
        BTreeMap::from([
            ("region".to_string(), "app::Region".to_string()),
            ("status".to_string(), "app::Status".to_string()),
        ])
    );
}

#[test]
fn duplicate_type_prefixes_fail_on_reverse_lookup() {
    let config = EnumConfig::from_toml_str(
        r#"
        [enums]
        status = "app::Status"
        state = "app::Status"
        "#,
    )
    .unwrap();
    let codec = config.build(&catalog()).unwrap();

    assert!(codec.is_valid("state::active"));
    assert!(codec.encode(&EnumValue::from(Status::Active)).is_err());
}

#[test]
fn unknown_paths_are_reported() {
    let err = EnumConfig::from_toml_str("[enums]\nstatus = \"app::Nope\"")
        .unwrap()
        .build(&catalog())
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "prefix 'status' names unknown enum type 'app::Nope'"
    );
    assert!(matches!(err, ConfigError::UnknownType { .. }));
}

#[test]
fn provider_rules_come_from_the_bootstrap() {
    let boot = Bootstrap::from_toml(CONFIG, &catalog()).unwrap();

    assert_eq!(
        boot.providers.check("enum", "inList", "status:active"),
        Err(ValidateError::UnknownRule {
            provider: "enum".to_string(),
            rule: "inList".to_string(),
        })
    );
}

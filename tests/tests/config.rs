use rowscan::{row, Api, CacheMode, Config, Record, ValueRows};

#[derive(Debug, Default, Record)]
struct Line {
    pub id: i64,
    #[db(nested)]
    pub product: Product,
}

#[derive(Debug, Default, Record)]
struct Product {
    pub sku: String,
}

#[test]
fn api_follows_deserialized_config() {
    let config: Config = serde_json::from_str(
        r#"{
            "cache_mode": "locked",
            "allow_unknown_columns": true,
            "column_separator": "__"
        }"#,
    )
    .unwrap();

    let api = Api::builder().config(config.clone()).build();
    assert_eq!(api.config(), &config);
    assert_eq!(api.config().cache_mode, CacheMode::Locked);
    assert!(!api.config().strict_columns);

    let rows = ValueRows::new(
        ["id", "product__sku", "extra"],
        vec![row![1, "sku-1", "dropped"]],
    );
    let line: Line = api.scan_one(rows).unwrap();

    assert_eq!(line.id, 1);
    assert_eq!(line.product.sku, "sku-1");
}

#[test]
fn builder_setters_override_config() {
    let api = Api::builder()
        .config(Config::default())
        .cache_mode(CacheMode::Disabled)
        .strict_columns(true)
        .build();

    assert_eq!(api.config().cache_mode, CacheMode::Disabled);
    assert!(api.config().strict_columns);
    assert_eq!(api.config().column_separator, ".");
}

#[test]
fn unknown_cache_mode_is_rejected() {
    assert!(serde_json::from_str::<Config>(r#"{ "cache_mode": "sometimes" }"#).is_err());
    assert!("sometimes".parse::<CacheMode>().is_err());
}

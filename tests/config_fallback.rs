use pet_clinic::utils::config::{AppConfig, Persistence};

// Kept in its own test binary so nothing else initialises the global config first.
#[test]
fn test_global_falls_back_to_map_with_environment_overrides() {
    temp_env::with_vars(vec![
        ("PERSISTENCE", Some("mongo")),
        ("DATABASE_URL", None),
        ("DATABASE_NAME", Some("clinic_fallback")),
        ("BIND_ADDRESS", Some("0.0.0.0:9090")),
    ], || {
        let config = AppConfig::global();

        assert_eq!(config.persistence, Persistence::Map);
        assert_eq!(config.database_url, None);
        assert_eq!(config.database_name, "clinic_fallback");
        assert_eq!(config.bind_address, "0.0.0.0:9090");
    });
}

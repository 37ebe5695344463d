use std::path::PathBuf;

use songsheet::presentation::config::{Environment, LlmProvider, Settings};

#[test]
fn given_known_names_when_parsing_environment_then_case_is_ignored() {
    assert_eq!(Environment::try_from("LOCAL".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("test".to_string()), Ok(Environment::Test));
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
}

#[test]
fn given_unknown_name_when_parsing_environment_then_error_lists_choices() {
    let err = Environment::try_from("staging".to_string()).unwrap_err();
    assert!(err.contains("staging"));
    assert!(err.contains("local, test, or prod"));
}

#[test]
fn given_no_settings_file_when_loading_then_defaults_apply() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.llm.provider, LlmProvider::Anthropic);
    assert_eq!(settings.llm.model, "claude-3-haiku-20240307");
    assert_eq!(settings.llm.timeout_secs, 30);
    assert_eq!(settings.worker.queue_capacity, 64);
    assert_eq!(
        settings.storage.snapshot_path,
        PathBuf::from("data/requests.json")
    );
    assert_eq!(settings.storage.uploads_dir, PathBuf::from("uploads"));
    assert_eq!(settings.storage.output_dir, PathBuf::from("output"));
}

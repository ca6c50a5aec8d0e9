use minutemaker::application::ports::TranscriptionError;
use minutemaker::infrastructure::audio::TranscriptionProviderFactory;
use minutemaker::presentation::config::{resolve, TranscriptionOverrides};

#[test]
fn given_unknown_provider_name_when_selecting_then_configuration_error() {
    let overrides = TranscriptionOverrides {
        provider: Some("whizper".to_string()),
        ..Default::default()
    };
    let settings = resolve(&overrides);

    let result = TranscriptionProviderFactory::create(&settings);

    assert!(matches!(
        result,
        Err(TranscriptionError::Configuration(_))
    ));
}

#[test]
fn given_third_party_provider_without_credential_when_selecting_then_configuration_error() {
    std::env::remove_var("WHISPER_API_KEY");
    let overrides = TranscriptionOverrides {
        provider: Some("whisper_api".to_string()),
        ..Default::default()
    };
    let settings = resolve(&overrides);

    let result = TranscriptionProviderFactory::create(&settings);

    assert!(matches!(
        result,
        Err(TranscriptionError::Configuration(_))
    ));
}

#[test]
fn given_third_party_provider_with_credential_in_settings_when_selecting_then_engine_is_built() {
    let overrides = TranscriptionOverrides {
        provider: Some("whisper_api".to_string()),
        api_key: Some("key-123".to_string()),
        ..Default::default()
    };
    let settings = resolve(&overrides);

    let provider = TranscriptionProviderFactory::create(&settings).unwrap();

    assert_eq!(provider.available_models(), vec!["remote-default"]);
}

#[test]
fn given_openai_provider_without_credential_when_selecting_then_configuration_error() {
    std::env::remove_var("OPENAI_API_KEY");
    let overrides = TranscriptionOverrides {
        provider: Some("openai".to_string()),
        ..Default::default()
    };
    let settings = resolve(&overrides);

    let result = TranscriptionProviderFactory::create(&settings);

    assert!(matches!(
        result,
        Err(TranscriptionError::Configuration(_))
    ));
}

#[test]
fn given_local_provider_when_selecting_then_construction_never_touches_the_model() {
    // The model file does not exist; construction must still succeed
    // because loading is deferred to the first transcription.
    let overrides = TranscriptionOverrides {
        provider: Some("local".to_string()),
        model_name: Some("tiny".to_string()),
        ..Default::default()
    };
    let settings = resolve(&overrides);

    let provider = TranscriptionProviderFactory::create(&settings).unwrap();

    assert_eq!(
        provider.available_models(),
        vec!["tiny", "base", "small", "medium", "large", "large-v2", "large-v3"]
    );
}

use speech_properties::{ConnectionError, ConnectionParameters, PropertyCollection, PropertyId};

fn base_properties() -> PropertyCollection {
    let properties = PropertyCollection::new();
    properties
        .set_property(PropertyId::SPEECH_SERVICE_CONNECTION_KEY, "key-123")
        .unwrap();
    properties
        .set_property(PropertyId::SPEECH_SERVICE_CONNECTION_REGION, "westus")
        .unwrap();
    properties
}

#[test]
fn includes_set_connection_properties_by_wire_name() {
    let properties = base_properties();
    properties
        .set_property(PropertyId::SPEECH_SERVICE_CONNECTION_RECO_LANGUAGE, "en-US")
        .unwrap();
    properties
        .set_property(PropertyId::SPEECH_SERVICE_CONNECTION_TRANSLATION_TO_LANGUAGES, "de,fr")
        .unwrap();

    let params = ConnectionParameters::from_properties(&properties).expect("valid parameters");

    assert_eq!(params.get(PropertyId::SPEECH_SERVICE_CONNECTION_KEY), Some("key-123"));
    assert_eq!(params.get(PropertyId::SPEECH_SERVICE_CONNECTION_REGION), Some("westus"));

    let json = params.to_json();
    assert_eq!(json["SPEECH-SubscriptionKey"], "key-123");
    assert_eq!(json["SPEECH-Region"], "westus");
    assert_eq!(json["SPEECH-RecoLanguage"], "en-US");
    assert_eq!(json["TRANSLATION-ToLanguages"], "de,fr");
}

#[test]
fn result_properties_are_not_sent() {
    let properties = base_properties();
    properties
        .set_property(PropertyId::SPEECH_SERVICE_RESPONSE_JSON_RESULT, "{}")
        .unwrap();
    properties
        .set_property(PropertyId::CANCELLATION_DETAILS_REASON, "Error")
        .unwrap();

    let params = ConnectionParameters::from_properties(&properties).unwrap();
    assert_eq!(params.get(PropertyId::SPEECH_SERVICE_RESPONSE_JSON_RESULT), None);
    assert!(params.iter().all(|(name, _)| name != "CancellationDetails_Reason"));
}

#[test]
fn generates_session_id_when_absent() {
    let params = ConnectionParameters::from_properties(&base_properties()).unwrap();
    let session_id = params.session_id();

    assert_eq!(session_id.len(), 32);
    assert!(session_id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert_eq!(params.get(PropertyId::SPEECH_SESSION_ID), Some(session_id));

    let other = ConnectionParameters::from_properties(&base_properties()).unwrap();
    assert_ne!(other.session_id(), session_id);
}

#[test]
fn keeps_caller_supplied_session_id() {
    let properties = base_properties();
    properties
        .set_property(PropertyId::SPEECH_SESSION_ID, "fixed-session")
        .unwrap();
    let params = ConnectionParameters::from_properties(&properties).unwrap();
    assert_eq!(params.session_id(), "fixed-session");
}

#[test]
fn endpoint_can_replace_region_and_token_can_replace_key() {
    let properties = PropertyCollection::new();
    properties
        .set_property(
            PropertyId::SPEECH_SERVICE_CONNECTION_ENDPOINT,
            "wss://example.invalid/speech",
        )
        .unwrap();
    properties
        .set_property(PropertyId::SPEECH_SERVICE_AUTHORIZATION_TOKEN, "token")
        .unwrap();

    let params = ConnectionParameters::from_properties(&properties).unwrap();
    assert_eq!(params.get(PropertyId::SPEECH_SERVICE_AUTHORIZATION_TOKEN), Some("token"));
    assert_eq!(params.get(PropertyId::SPEECH_SERVICE_CONNECTION_REGION), None);
}

#[test]
fn missing_location_is_rejected() {
    let properties = PropertyCollection::new();
    properties
        .set_property(PropertyId::SPEECH_SERVICE_CONNECTION_KEY, "key")
        .unwrap();
    let err = ConnectionParameters::from_properties(&properties).unwrap_err();
    assert!(matches!(err, ConnectionError::MissingEndpoint), "{err:?}");
}

#[test]
fn missing_credentials_are_rejected() {
    let properties = PropertyCollection::new();
    properties
        .set_property(PropertyId::SPEECH_SERVICE_CONNECTION_REGION, "westus")
        .unwrap();
    // 空文字列は未設定扱い
    properties
        .set_property(PropertyId::SPEECH_SERVICE_CONNECTION_KEY, "")
        .unwrap();
    let err = ConnectionParameters::from_properties(&properties).unwrap_err();
    assert!(matches!(err, ConnectionError::MissingCredentials), "{err:?}");
}

#[test]
fn unknown_recognition_mode_is_rejected() {
    let properties = base_properties();
    properties
        .set_property(PropertyId::SPEECH_SERVICE_CONNECTION_RECO_MODE, "interactive")
        .unwrap();
    match ConnectionParameters::from_properties(&properties) {
        Err(ConnectionError::InvalidRecoMode { value }) => assert_eq!(value, "interactive"),
        other => panic!("expected invalid reco mode, got {other:?}"),
    }

    properties
        .set_property(PropertyId::SPEECH_SERVICE_CONNECTION_RECO_MODE, "DICTATION")
        .unwrap();
    let params = ConnectionParameters::from_properties(&properties).unwrap();
    assert_eq!(params.get(PropertyId::SPEECH_SERVICE_CONNECTION_RECO_MODE), Some("DICTATION"));
}

#[test]
fn entries_are_sorted_by_name() {
    let properties = base_properties();
    properties
        .set_property(PropertyId::SPEECH_SERVICE_CONNECTION_INTENT_REGION, "eastus")
        .unwrap();
    let params = ConnectionParameters::from_properties(&properties).unwrap();
    let names: Vec<&str> = params.iter().map(|(name, _)| name).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
    assert_eq!(params.len(), 4);
}

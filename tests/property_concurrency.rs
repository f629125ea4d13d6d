use std::sync::Arc;

use futures::future::join_all;

use speech_properties::{resolve, PropertyCollection, PropertyError, PropertyId};

fn mixed_ids() -> Vec<PropertyId> {
    let mut ids: Vec<PropertyId> = PropertyId::KNOWN.to_vec();
    ids.extend([-1, 0, 1006, 7000, 31337].map(PropertyId::from_raw));
    ids
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_resolution_matches_sequential_results() {
    let ids = mixed_ids();
    let expected: Vec<Result<&'static str, PropertyError>> =
        ids.iter().map(|id| resolve(*id)).collect();

    let tasks = (0..16).map(|worker| {
        let ids = ids.clone();
        tokio::spawn(async move {
            // ワーカごとに順序をずらして呼び出す
            let mut ordered = ids.clone();
            ordered.rotate_left(worker % ids.len());
            let results: Vec<_> = ordered.iter().map(|id| (*id, resolve(*id))).collect();
            results
        })
    });

    for joined in join_all(tasks).await {
        let results = joined.expect("task panicked");
        for (id, result) in results {
            let index = ids.iter().position(|candidate| *candidate == id).unwrap();
            assert_eq!(result, expected[index], "mismatch for {id}");
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_collection_accepts_concurrent_writers() {
    let properties = Arc::new(PropertyCollection::new());

    let tasks = (0..8).map(|worker| {
        let properties = properties.clone();
        tokio::spawn(async move {
            let valid = properties.set_property(
                PropertyId::SPEECH_SERVICE_CONNECTION_RECO_LANGUAGE,
                format!("lang-{worker}"),
            );
            let invalid = properties.set_property(PropertyId::from_raw(-worker), "ignored");
            (valid, invalid)
        })
    });

    for joined in join_all(tasks).await {
        let (valid, invalid) = joined.expect("task panicked");
        assert!(valid.is_ok());
        assert!(invalid.is_err());
    }

    assert_eq!(properties.len(), 1);
    let language = properties
        .get_property(PropertyId::SPEECH_SERVICE_CONNECTION_RECO_LANGUAGE)
        .expect("known id")
        .expect("value set");
    assert!(language.starts_with("lang-"));
}

use catalog_hub::{convert, HubClient, HubConfig, HubError, MetadataSource, RepoReference};
use catalog_types::{Engine, Task};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HubClient {
    HubClient::new(HubConfig::default().with_endpoint(server.uri())).unwrap()
}

#[tokio::test]
async fn fetches_model_info() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/models/BAAI/bge-m3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "BAAI/bge-m3",
            "pipeline_tag": "sentence-similarity",
            "siblings": [{ "rfilename": "model.safetensors", "size": 2271145830u64 }],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let reference = RepoReference::parse("https://huggingface.co/BAAI/bge-m3").unwrap();
    let meta = client.model_info(&reference).await.unwrap();

    assert_eq!(meta.pipeline_tag.as_deref(), Some("sentence-similarity"));
    assert_eq!(meta.siblings[0].rfilename, "model.safetensors");
    assert_eq!(meta.siblings[0].size, Some(2271145830));
}

#[tokio::test]
async fn non_success_status_is_fetch_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/models/nobody/nothing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let reference = RepoReference {
        owner: "nobody".into(),
        repo: "nothing".into(),
    };
    let err = client.model_info(&reference).await.unwrap_err();

    match &err {
        HubError::FetchFailed { status, reason } => {
            assert_eq!(*status, 404);
            assert_eq!(reason, "Not Found");
        }
        other => panic!("expected FetchFailed, got {other:?}"),
    }
    assert_eq!(err.to_string(), "HF API request failed: 404 Not Found");
}

#[tokio::test]
async fn sends_bearer_token_when_configured() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/models/meta-llama/Llama-3-8B"))
        .and(header("authorization", "Bearer hf_secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pipeline_tag": "text-generation",
            "siblings": [],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = HubConfig::default().with_endpoint(server.uri());
    config.token = Some("hf_secret".into());
    let client = HubClient::new(config).unwrap();

    let reference = RepoReference::parse("https://huggingface.co/meta-llama/Llama-3-8B").unwrap();
    let meta = client.model_info(&reference).await.unwrap();
    assert!(meta.siblings.is_empty());
}

#[tokio::test]
async fn converts_against_mirror_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/models/meta-llama/Llama-3-8B"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "pipeline_tag": "text-generation",
            "siblings": [
                { "rfilename": "model-00001-of-00002.safetensors", "size": 1 },
                { "rfilename": "README.md", "size": 2 },
            ],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let host = client.config().host().unwrap();
    let url = format!("{}/meta-llama/Llama-3-8B", server.uri());

    let doc = convert(&client, &url, &host).await.unwrap();
    assert_eq!(doc.spec.model.task, Task::TextGeneration);
    assert_eq!(doc.spec.engine.engine, Engine::Vllm);
    assert_eq!(doc.spec.model.file, "model-00001-of-00002.safetensors");
}

#[tokio::test]
async fn garbage_body_is_a_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/models/a/b"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let reference = RepoReference {
        owner: "a".into(),
        repo: "b".into(),
    };
    let err = client.model_info(&reference).await.unwrap_err();
    assert!(matches!(err, HubError::Request(_)), "{err:?}");
}

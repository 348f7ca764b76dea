#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{ body_json, method, path };
    use wiremock::{ Mock, MockServer, ResponseTemplate };

    use crate::errors::CaseGenError;
    use crate::implementations::config::GeneratorConfig;
    use crate::implementations::ollama_client::OllamaGenerator;
    use crate::traits::text_generator::TextGenerator;

    fn client_for(server: &MockServer) -> OllamaGenerator {
        let mut config = GeneratorConfig::default();
        config.llm_api.api_endpoint = Some(format!("{}/api/generate", server.uri()));
        config.llm_api.timeout_secs = Some(5);
        OllamaGenerator::new(&config).expect("failed to create client")
    }

    #[tokio::test]
    async fn test_generate_returns_response_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_json(json!({"model": "mistral", "prompt": "Write tests", "stream": false})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(
                    json!({"model": "mistral", "response": "[{\"id\":\"TC-001\"}]", "done": true})
                )
            )
            .expect(1)
            .mount(&server).await;

        let text = client_for(&server).generate("Write tests", "mistral").await.unwrap();
        assert_eq!(text, "[{\"id\":\"TC-001\"}]");
    }

    #[tokio::test]
    async fn test_generate_without_response_field_returns_whole_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"done": true})))
            .mount(&server).await;

        let text = client_for(&server).generate("p", "m").await.unwrap();
        assert_eq!(serde_json::from_str::<serde_json::Value>(&text).unwrap(), json!({"done": true}));
    }

    #[tokio::test]
    async fn test_generate_error_status_is_backend_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("model 'nope' not found"))
            .mount(&server).await;

        let err = client_for(&server).generate("p", "nope").await.unwrap_err();
        match err {
            CaseGenError::BackendError(msg) => {
                assert!(msg.starts_with("Error calling Ollama: "), "{}", msg);
                assert!(msg.contains("404"), "{}", msg);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_non_json_body_is_backend_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
            .mount(&server).await;

        let err = client_for(&server).generate("p", "m").await.unwrap_err();
        assert!(matches!(err, CaseGenError::BackendError(_)));
    }

    #[tokio::test]
    async fn test_generate_unreachable_server_is_backend_error() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        drop(server);

        let err = client.generate("p", "m").await.unwrap_err();
        assert!(err.to_string().starts_with("Error calling Ollama: "));
    }
}

//! Integration tests: token service over the simulated SMS transport

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ot_core::{
    DeliveryError, GenerationError, MessageSender, RandomTokenGenerator, Token, TokenGenerator,
    TokenService, TokenServiceConfig,
};
use ot_infra::sms::SimulatedSmsSender;
use ot_infra::initialize;
use ot_shared::config::AppConfig;

// Generator pinned to a known token
struct FixedGenerator(&'static str);

#[async_trait]
impl TokenGenerator for FixedGenerator {
    async fn generate(&self) -> Result<Token, GenerationError> {
        Token::parse(self.0)
    }
}

// Records what reaches the transport, then forwards to the simulated sender
struct SpySender {
    inner: SimulatedSmsSender,
    seen: Mutex<Vec<(String, String)>>,
}

#[async_trait]
impl MessageSender for SpySender {
    async fn send_sms(&self, payload: &str, destination: &str) -> Result<String, DeliveryError> {
        self.seen
            .lock()
            .unwrap()
            .push((payload.to_string(), destination.to_string()));
        self.inner.send_sms(payload, destination).await
    }
}

#[tokio::test]
async fn test_sends_stubbed_token() {
    let service = TokenService::new(
        Arc::new(FixedGenerator("123456")),
        Arc::new(SimulatedSmsSender::new()),
        TokenServiceConfig::default(),
    );

    let confirmation = service.send("21999999999").await.unwrap();

    assert_eq!(confirmation, "O SMS [123456] foi enviado para 21999999999");
}

#[tokio::test]
async fn test_transport_receives_generated_token() {
    let sender = Arc::new(SpySender {
        inner: SimulatedSmsSender::new(),
        seen: Mutex::new(Vec::new()),
    });
    let service = TokenService::new(
        Arc::new(RandomTokenGenerator::default()),
        sender.clone(),
        TokenServiceConfig::default(),
    );

    service.send("21999999999").await.unwrap();

    let seen = sender.seen.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    let (token, destination) = &seen[0];
    assert_eq!(token.len(), 6);
    assert!(token.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(destination, "21999999999");
    assert_eq!(sender.inner.get_message_count(), 1);
}

#[tokio::test]
async fn test_generates_and_sends_from_config() {
    let services = initialize(&AppConfig::default()).unwrap();

    let confirmation = services.token_service.send("21999999999").await.unwrap();

    assert!(confirmation.starts_with("O SMS ["));
    assert!(confirmation.ends_with("] foi enviado para 21999999999"));
}

#[tokio::test]
async fn test_failing_transport_from_config() {
    let mut config = AppConfig::default();
    config.sms.simulate_failure = true;
    let services = initialize(&config).unwrap();

    let err = services.token_service.send("21999999999").await.unwrap_err();

    assert!(matches!(
        err,
        ot_core::DomainError::Delivery(DeliveryError::Unavailable { .. })
    ));
}

//! Unit tests for the token service

use std::sync::Arc;
use std::time::Duration;

use crate::errors::{DeliveryError, DomainError, GenerationError};
use crate::services::token::{
    MessageSender, RandomTokenGenerator, TokenService, TokenServiceConfig,
};

use super::mocks::{new_call_log, MockMessageSender, MockTokenGenerator};

fn is_six_digits(value: &str) -> bool {
    value.len() == 6 && value.chars().all(|c| c.is_ascii_digit())
}

#[tokio::test]
async fn test_send_returns_confirmation_for_stubbed_token() {
    let log = new_call_log();
    let generator = Arc::new(MockTokenGenerator::returning("123456", log.clone()));
    let sender = Arc::new(MockMessageSender::new(log.clone()));
    let service = TokenService::new(generator, sender, TokenServiceConfig::default());

    let confirmation = service.send("21999999999").await.unwrap();

    assert_eq!(confirmation, "O SMS [123456] foi enviado para 21999999999");
}

#[tokio::test]
async fn test_send_calls_generate_then_send_once() {
    let log = new_call_log();
    let generator = Arc::new(MockTokenGenerator::returning("123456", log.clone()));
    let sender = Arc::new(MockMessageSender::new(log.clone()));
    let service = TokenService::new(generator, sender.clone(), TokenServiceConfig::default());

    service.send("219999999999").await.unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["generate", "send_sms"]);
    assert_eq!(sender.call_count(), 1);
}

#[tokio::test]
async fn test_sender_receives_generated_token_and_destination() {
    let log = new_call_log();
    let generator = Arc::new(MockTokenGenerator::returning("654321", log.clone()));
    let sender = Arc::new(MockMessageSender::new(log));
    let service = TokenService::new(generator, sender.clone(), TokenServiceConfig::default());

    service.send("21999999999").await.unwrap();

    assert_eq!(
        sender.sent_messages(),
        vec![("654321".to_string(), "21999999999".to_string())]
    );
}

#[tokio::test]
async fn test_real_generator_feeds_sender_six_digits() {
    let log = new_call_log();
    let sender = Arc::new(MockMessageSender::new(log));
    let service = TokenService::new(
        Arc::new(RandomTokenGenerator::default()),
        sender.clone(),
        TokenServiceConfig::default(),
    );

    let confirmation = service.send("21999999999").await.unwrap();

    let (token, destination) = sender.sent_messages().remove(0);
    assert!(is_six_digits(&token), "unexpected token {token}");
    assert_eq!(destination, "21999999999");
    assert_eq!(
        confirmation,
        format!("O SMS [{}] foi enviado para 21999999999", token)
    );
}

#[tokio::test]
async fn test_each_send_calls_the_generator() {
    let log = new_call_log();
    let sender = Arc::new(MockMessageSender::new(log.clone()));
    let generator = Arc::new(MockTokenGenerator::returning("111111", log.clone()));
    let service = TokenService::new(generator, sender.clone(), TokenServiceConfig::default());

    service.send("21999999999").await.unwrap();
    service.send("21888888888").await.unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec!["generate", "send_sms", "generate", "send_sms"]
    );
    assert_eq!(sender.call_count(), 2);
}

#[tokio::test]
async fn test_generation_failure_skips_sender() {
    let log = new_call_log();
    let error = GenerationError::RandomSource {
        message: "no entropy".to_string(),
    };
    let generator = Arc::new(MockTokenGenerator::failing(error.clone(), log.clone()));
    let sender = Arc::new(MockMessageSender::new(log.clone()));
    let service = TokenService::new(generator, sender.clone(), TokenServiceConfig::default());

    let result = service.send("21999999999").await;

    assert_eq!(result.unwrap_err(), DomainError::Generation(error));
    assert_eq!(sender.call_count(), 0);
    assert_eq!(*log.lock().unwrap(), vec!["generate"]);
}

#[tokio::test]
async fn test_delivery_failure_is_propagated() {
    let log = new_call_log();
    let error = DeliveryError::Rejected {
        message: "carrier refused".to_string(),
    };
    let generator = Arc::new(MockTokenGenerator::returning("123456", log.clone()));
    let sender = Arc::new(MockMessageSender::failing(error.clone(), log));
    let service = TokenService::new(generator, sender.clone(), TokenServiceConfig::default());

    let result = service.send("21999999999").await;

    assert_eq!(result.unwrap_err(), DomainError::Delivery(error));
    // No retry after a failed delivery
    assert_eq!(sender.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_slow_sender_times_out() {
    let log = new_call_log();
    let generator = Arc::new(MockTokenGenerator::returning("123456", log.clone()));
    let sender = Arc::new(MockMessageSender::slow(Duration::from_secs(60), log));
    let config = TokenServiceConfig {
        send_timeout: Duration::from_secs(5),
    };
    let service = TokenService::new(generator, sender, config);

    let result = service.send("21999999999").await;

    assert_eq!(
        result.unwrap_err(),
        DomainError::Delivery(DeliveryError::Timeout { millis: 5_000 })
    );
}

#[tokio::test(start_paused = true)]
async fn test_sub_second_timeout_keeps_its_precision() {
    let log = new_call_log();
    let generator = Arc::new(MockTokenGenerator::returning("123456", log.clone()));
    let sender = Arc::new(MockMessageSender::slow(Duration::from_secs(2), log));
    let config = TokenServiceConfig {
        send_timeout: Duration::from_millis(500),
    };
    let service = TokenService::new(generator, sender, config);

    let error = service.send("21999999999").await.unwrap_err();

    assert_eq!(error, DomainError::Delivery(DeliveryError::Timeout { millis: 500 }));
    assert_eq!(error.to_string(), "SMS delivery timed out after 500 ms");
}

#[tokio::test(start_paused = true)]
async fn test_sender_within_timeout_succeeds() {
    let log = new_call_log();
    let generator = Arc::new(MockTokenGenerator::returning("123456", log.clone()));
    let sender = Arc::new(MockMessageSender::slow(Duration::from_secs(1), log));
    let service = TokenService::new(generator, sender, TokenServiceConfig::default());

    let confirmation = service.send("21999999999").await.unwrap();

    assert_eq!(confirmation, "O SMS [123456] foi enviado para 21999999999");
}

#[tokio::test]
async fn test_service_accepts_trait_objects() {
    let log = new_call_log();
    let sender: Arc<dyn MessageSender> = Arc::new(MockMessageSender::new(log.clone()));
    let generator: Arc<dyn crate::services::token::TokenGenerator> =
        Arc::new(MockTokenGenerator::returning("123456", log));
    let service = TokenService::new(generator, sender, TokenServiceConfig::default());

    assert!(service.send("21999999999").await.is_ok());
    assert_eq!(service.config().send_timeout, Duration::from_secs(30));
}

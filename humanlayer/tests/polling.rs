//! Poll-loop behavior: pending records, deadlines, cancellation, and
//! contract violations.

use async_trait::async_trait;
use humanlayer::{HumanLayer, HumanLayerConfig, HumanLayerError, NoSleep, Sleeper, TokioSleeper};
use humanlayer_core::test_utils::{ScriptedBackend, ScriptedStore};
use humanlayer_core::{ContactRecord, ContactSpec, ContactStatus, DurationMs, StoreError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

const ID: &str = "generated-id";

fn pending() -> ContactRecord {
    ContactRecord::new(ID, ID, ContactSpec::new("approve?"))
}

fn answered(response: &str) -> ContactRecord {
    pending().with_status(ContactStatus::responded(response))
}

fn scripted() -> (HumanLayer, Arc<ScriptedStore>) {
    let backend = ScriptedBackend::new();
    let store = backend.store();
    let hl = HumanLayer::new(Arc::new(backend)).genid(|_| ID.to_string());
    (hl, store)
}

/// Records every requested sleep without waiting.
#[derive(Default, Clone)]
struct CountingSleeper {
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

#[async_trait]
impl Sleeper for CountingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().unwrap().push(duration);
    }
}

#[tokio::test]
async fn resolved_on_first_get_means_one_add_one_get_no_sleep() {
    let (hl, store) = scripted();
    let sleeper = CountingSleeper::default();
    let hl = hl.sleeper(sleeper.clone());
    store.get_returns(answered("magenta"));

    assert_eq!(hl.request_contact("approve?", None).await.unwrap(), "magenta");
    assert_eq!(store.added().len(), 1);
    assert_eq!(store.gets().len(), 1);
    assert!(sleeper.sleeps.lock().unwrap().is_empty());
}

#[test]
fn config_builder_replaces_configuration() {
    let (hl, _store) = scripted();
    assert_eq!(hl.configuration(), &HumanLayerConfig::default());

    let config = HumanLayerConfig::default()
        .poll_interval(DurationMs::from_millis(250))
        .timeout(DurationMs::from_secs(30));
    let hl = hl.config(config.clone());
    assert_eq!(hl.configuration(), &config);
    assert_eq!(hl.configuration().poll_interval.to_std(), Duration::from_millis(250));
}

#[tokio::test]
async fn polls_until_status_appears() {
    let (hl, store) = scripted();
    let sleeper = CountingSleeper::default();
    let hl = hl
        .sleeper(sleeper.clone())
        .config(HumanLayerConfig::default().poll_interval(DurationMs::from_millis(250)));
    store.push_get(Ok(pending()));
    store.push_get(Ok(pending()));
    store.get_returns(answered("approved"));

    assert_eq!(hl.request_contact("approve?", None).await.unwrap(), "approved");
    assert_eq!(store.added().len(), 1);
    assert_eq!(store.gets().len(), 3);
    assert_eq!(
        *sleeper.sleeps.lock().unwrap(),
        vec![Duration::from_millis(250); 2]
    );
}

#[tokio::test]
async fn store_error_mid_poll_is_not_retried() {
    let (hl, store) = scripted();
    let hl = hl.sleeper(NoSleep);
    store.push_get(Ok(pending()));
    store.push_get(Err(StoreError::Unavailable("connection reset".into())));
    store.get_returns(answered("too late"));

    let err = hl.request_contact("approve?", None).await.unwrap_err();
    assert!(matches!(err, HumanLayerError::Store(StoreError::Unavailable(_))));
    assert_eq!(store.gets().len(), 2);
}

#[tokio::test]
async fn status_with_both_fields_is_contract_violation() {
    let (hl, store) = scripted();
    let hl = hl.sleeper(NoSleep);
    store.get_returns(pending().with_status(ContactStatus {
        response: Some("yes".into()),
        error: Some("no".into()),
    }));

    let err = hl.request_contact("approve?", None).await.unwrap_err();
    assert!(matches!(err, HumanLayerError::ContractViolation(_)));
    assert_eq!(store.gets().len(), 1);
}

#[tokio::test]
async fn empty_status_is_contract_violation_not_a_hang() {
    let (hl, store) = scripted();
    let hl = hl.sleeper(NoSleep);
    store.get_returns(pending().with_status(ContactStatus::default()));

    let err = hl.request_contact("approve?", None).await.unwrap_err();
    assert!(matches!(err, HumanLayerError::ContractViolation(_)));
}

#[tokio::test]
async fn record_for_another_call_is_contract_violation() {
    let (hl, store) = scripted();
    let hl = hl.sleeper(NoSleep);
    store.get_returns(
        ContactRecord::new("other", "other", ContactSpec::new("approve?"))
            .with_status(ContactStatus::responded("yes")),
    );

    let err = hl.request_contact("approve?", None).await.unwrap_err();
    assert!(matches!(err, HumanLayerError::ContractViolation(msg) if msg.contains("other")));
}

#[tokio::test(start_paused = true)]
async fn times_out_while_pending() {
    let (hl, store) = scripted();
    let hl = hl.sleeper(TokioSleeper).config(
        HumanLayerConfig::default()
            .poll_interval(DurationMs::from_secs(3))
            .timeout(DurationMs::from_secs(10)),
    );
    store.get_returns(pending());

    let start = tokio::time::Instant::now();
    let err = hl.request_contact("approve?", None).await.unwrap_err();
    assert!(matches!(err, HumanLayerError::Timeout(t) if t == DurationMs::from_secs(10)));

    // Polls at 0s, 3s, 6s, 9s, then a clamped 1s wait to the deadline.
    assert_eq!(store.gets().len(), 5);
    assert_eq!(start.elapsed(), Duration::from_secs(10));
}

#[tokio::test(start_paused = true)]
async fn answer_before_deadline_wins() {
    let (hl, store) = scripted();
    let hl = hl.sleeper(TokioSleeper).config(
        HumanLayerConfig::default()
            .poll_interval(DurationMs::from_secs(1))
            .timeout(DurationMs::from_secs(10)),
    );
    store.push_get(Ok(pending()));
    store.get_returns(answered("ok"));

    assert_eq!(hl.request_contact("approve?", None).await.unwrap(), "ok");
}

#[tokio::test]
async fn cancelled_before_first_poll() {
    let (hl, store) = scripted();
    let hl = hl.sleeper(NoSleep);
    store.get_returns(answered("ignored"));
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = hl
        .request_contact_with_cancel("approve?", None, &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, HumanLayerError::Cancelled));
    // The record was created; only the wait was abandoned.
    assert_eq!(store.added().len(), 1);
    assert!(store.gets().is_empty());
}

#[tokio::test(start_paused = true)]
async fn cancel_interrupts_sleep() {
    let (hl, store) = scripted();
    let hl = hl
        .sleeper(TokioSleeper)
        .config(HumanLayerConfig::default().poll_interval(DurationMs::from_secs(3600)));
    store.get_returns(pending());

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(5)).await;
        trigger.cancel();
    });

    let start = tokio::time::Instant::now();
    let err = hl
        .human_as_tool(None)
        .call_with_cancel("approve?", &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, HumanLayerError::Cancelled));
    assert_eq!(store.gets().len(), 1);
    assert!(start.elapsed() < Duration::from_secs(3600));
}

#[tokio::test]
async fn concurrent_requests_get_their_own_ids() {
    let backend = Arc::new(humanlayer_store_memory::MemoryBackend::new());
    let contacts = backend.contact_store();
    let counter = Arc::new(AtomicUsize::new(0));
    let ids = Arc::clone(&counter);
    let hl = HumanLayer::new(backend)
        .genid(move |prefix| format!("{prefix}-{}", ids.fetch_add(1, Ordering::SeqCst)))
        .sleeper(TokioSleeper)
        .config(HumanLayerConfig::default().poll_interval(DurationMs::from_millis(5)));

    let a = tokio::spawn({
        let hl = hl.clone();
        async move { hl.request_contact("first?", None).await }
    });
    let b = tokio::spawn({
        let hl = hl.clone();
        async move { hl.request_contact("second?", None).await }
    });

    // Answer each pending record with its own question echoed back.
    let mut answered = 0;
    while answered < 2 {
        for record in contacts.pending().await {
            let reply = format!("re: {}", record.spec.msg);
            contacts
                .respond(&record.call_id, ContactStatus::responded(reply))
                .await
                .unwrap();
            answered += 1;
        }
        tokio::time::sleep(Duration::from_millis(1)).await;
    }

    assert_eq!(a.await.unwrap().unwrap(), "re: first?");
    assert_eq!(b.await.unwrap().unwrap(), "re: second?");
    assert_eq!(counter.load(Ordering::SeqCst), 2);
}

use serial_test::serial;
use std::sync::{Arc, Mutex};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{layer::Context, Layer, Registry};

/// Custom Layer to collect emitted event messages.
struct EventCollector {
    events: Arc<Mutex<Vec<String>>>,
}

impl<S> Layer<S> for EventCollector
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        self.events.lock().unwrap().push(format!("{:?}", event));
    }
}

fn cli_with(inputs: &[(&str, &str)]) -> s3_upload_action::Cli {
    s3_upload_action::Cli {
        command: s3_upload_action::Commands::Run {
            inputs: inputs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            env_file: None,
        },
    }
}

#[tokio::test]
#[serial]
async fn successful_run_emits_action_complete() {
    std::env::remove_var("INPUT_MY-INPUT-2");
    std::env::remove_var("INPUT_MY_INPUT_2");
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = Registry::default().with(EventCollector {
        events: events.clone(),
    });
    let _guard = tracing::subscriber::set_default(subscriber);

    let result =
        s3_upload_action::run(cli_with(&[("my-input", "bucket-x"), ("dist-folder", "build")]))
            .await;
    assert!(result.is_ok(), "run failed: {:?}", result.err());

    let event_msgs = events.lock().unwrap();
    assert!(
        event_msgs.iter().any(|msg| msg.contains("Action complete")),
        "Expected an 'Action complete' event, got: {:?}",
        event_msgs
    );
}

#[tokio::test]
#[serial]
async fn failed_run_emits_action_failed() {
    std::env::remove_var("INPUT_MY-INPUT");
    std::env::remove_var("INPUT_MY_INPUT");
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = Registry::default().with(EventCollector {
        events: events.clone(),
    });
    let _guard = tracing::subscriber::set_default(subscriber);

    let err = s3_upload_action::run(cli_with(&[("dist-folder", "build")]))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Input required and not supplied: my-input");

    let event_msgs = events.lock().unwrap();
    assert!(
        event_msgs.iter().any(|msg| msg.contains("Action failed")),
        "Expected an 'Action failed' event, got: {:?}",
        event_msgs
    );
}

//! # Error Reporting
//!
//! Structured `tracing` emission for an error chain. This crate never installs
//! a subscriber; applications decide where events go.
//!
//! Client-side kinds (validation, not found, permission, business) are
//! emitted at `WARN`; every other error, managed or not, at `ERROR`.

use std::error::Error as StdError;

use tracing::{event, Level};

use crate::chain::{chain, find_managed};

/// Emit one structured event describing `err` and its chain
pub fn report(err: &(dyn StdError + 'static)) {
    let chain_len = chain(err).count();

    let Some(managed) = find_managed(err) else {
        event!(Level::ERROR, error = %err, chain_len, "unmanaged error");
        return;
    };

    let kind = managed.kind().as_str();
    let code = managed.code().unwrap_or_default();
    let status_code = managed.effective_status_code().unwrap_or_default();
    let retryable = managed.is_retryable();
    let context = managed.context();

    if managed.kind().is_client_side() {
        event!(
            Level::WARN,
            error = %err,
            kind,
            code,
            status_code,
            retryable,
            context = %context,
            chain_len,
            "managed error"
        );
    } else {
        event!(
            Level::ERROR,
            error = %err,
            kind,
            code,
            status_code,
            retryable,
            context = %context,
            chain_len,
            "managed error"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{wrap, ErrorKind, ManagedError};
    use std::collections::BTreeMap;
    use std::fmt;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Debug)]
    struct CapturedEvent {
        level: Level,
        fields: BTreeMap<String, String>,
    }

    #[derive(Default)]
    struct FieldRecorder(BTreeMap<String, String>);

    impl Visit for FieldRecorder {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_string(), format!("{:?}", value));
        }
    }

    #[derive(Clone, Default)]
    struct CaptureLayer(Arc<Mutex<Vec<CapturedEvent>>>);

    impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            let mut recorder = FieldRecorder::default();
            event.record(&mut recorder);
            self.0.lock().unwrap().push(CapturedEvent {
                level: *event.metadata().level(),
                fields: recorder.0,
            });
        }
    }

    /// Run `report` under a scoped subscriber and return the single event it emitted
    fn capture(err: &(dyn StdError + 'static)) -> CapturedEvent {
        let layer = CaptureLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        tracing::subscriber::with_default(subscriber, || report(err));

        let mut events = layer.0.lock().unwrap();
        assert_eq!(events.len(), 1, "expected exactly one event: {:?}", events);
        events.remove(0)
    }

    #[test]
    fn test_client_side_kind_reported_at_warn() {
        let err = ManagedError::coded(ErrorKind::VALIDATION, "invalid_email", "bad email")
            .with_context("field", "email");
        let event = capture(&err);

        assert_eq!(event.level, Level::WARN);
        assert_eq!(event.fields["kind"], "validation");
        assert_eq!(event.fields["code"], "invalid_email");
        assert_eq!(event.fields["status_code"], "400");
        assert_eq!(event.fields["retryable"], "false");
        assert_eq!(event.fields["context"], "field=email");
        assert_eq!(event.fields["chain_len"], "1");
        assert_eq!(event.fields["error"], "[validation:invalid_email] bad email");
        assert_eq!(event.fields["message"], "managed error");
    }

    #[test]
    fn test_server_side_kind_reported_at_error() {
        let err = ManagedError::from_cause(ErrorKind::SYSTEM, "save failed", "disk full").retryable();
        let event = capture(&err);

        assert_eq!(event.level, Level::ERROR);
        assert_eq!(event.fields["kind"], "system");
        assert_eq!(event.fields["code"], "");
        assert_eq!(event.fields["status_code"], "500");
        assert_eq!(event.fields["retryable"], "true");
        assert_eq!(event.fields["chain_len"], "2");
    }

    #[test]
    fn test_wrapped_managed_error_uses_inner_kind() {
        let err = wrap(ManagedError::new(ErrorKind::NOT_FOUND, "no such user"), "lookup failed");
        let event = capture(&err);

        assert_eq!(event.level, Level::WARN);
        assert_eq!(event.fields["kind"], "not_found");
        assert_eq!(event.fields["chain_len"], "2");
        assert_eq!(event.fields["error"], "lookup failed: [not_found] no such user");
    }

    #[test]
    fn test_unmanaged_error_reported_at_error() {
        let err = wrap(io::Error::new(io::ErrorKind::Other, "boom"), "outer");
        let event = capture(&err);

        assert_eq!(event.level, Level::ERROR);
        assert_eq!(event.fields["error"], "outer: boom");
        assert_eq!(event.fields["chain_len"], "2");
        assert_eq!(event.fields["message"], "unmanaged error");
        assert!(!event.fields.contains_key("kind"));
        assert!(!event.fields.contains_key("retryable"));
    }
}

//! Shared test utilities used across spanwood crates.

pub mod tracing {
    //! In-memory capture of closed spans and events so tests can assert on
    //! the instrumentation emitted by graph operations.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    type Fields = HashMap<String, String>;

    /// Layer recording every closed span and every event it observes.
    ///
    /// Clones share storage: hand one to a subscriber, inspect the other.
    ///
    /// # Examples
    /// ```
    /// use spanwood_test_support::tracing::RecordingLayer;
    /// use tracing_subscriber::layer::SubscriberExt;
    ///
    /// let layer = RecordingLayer::default();
    /// let subscriber = tracing_subscriber::registry().with(layer.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     tracing::info_span!("core.demo", vertices = 4).in_scope(|| {});
    /// });
    /// let span = layer.span_named("core.demo").expect("span must be recorded");
    /// assert_eq!(span.field("vertices"), Some("4"));
    /// ```
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        closed: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl RecordingLayer {
        /// Returns the first closed span called `name`.
        #[must_use]
        pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
            guard(&self.closed)
                .iter()
                .find(|span| span.name == name)
                .cloned()
        }

        /// Returns the emitted events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            guard(&self.events).clone()
        }

        /// Returns `true` when an event at `level` carried `message`.
        #[must_use]
        pub fn has_event(&self, level: Level, message: &str) -> bool {
            guard(&self.events).iter().any(|event| {
                event.level == level
                    && event.fields.get("message").map(String::as_str) == Some(message)
            })
        }
    }

    fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A closed span: its name plus every field recorded on it.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct SpanRecord {
        name: String,
        fields: Fields,
    }

    impl SpanRecord {
        /// Returns the rendered value of `field`, whether it was set at
        /// creation or later through `Span::record`.
        #[must_use]
        pub fn field(&self, field: &str) -> Option<&str> {
            self.fields.get(field).map(String::as_str)
        }
    }

    /// An emitted event.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct EventRecord {
        /// Event level.
        pub level: Level,
        fields: Fields,
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(id) {
                let mut record = SpanRecord {
                    name: attrs.metadata().name().to_owned(),
                    fields: Fields::new(),
                };
                attrs.record(&mut Collect(&mut record.fields));
                span.extensions_mut().insert(record);
            }
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(id) {
                if let Some(record) = span.extensions_mut().get_mut::<SpanRecord>() {
                    values.record(&mut Collect(&mut record.fields));
                }
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let record = ctx
                .span(&id)
                .and_then(|span| span.extensions_mut().remove::<SpanRecord>());
            if let Some(record) = record {
                guard(&self.closed).push(record);
            }
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = Fields::new();
            event.record(&mut Collect(&mut fields));
            guard(&self.events).push(EventRecord {
                level: *event.metadata().level(),
                fields,
            });
        }
    }

    /// Stores strings verbatim and everything else through `Debug`.
    struct Collect<'a>(&'a mut Fields);

    impl Visit for Collect<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.insert(field.name().to_owned(), format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_owned(), value.to_owned());
        }
    }
}

pub mod ci;

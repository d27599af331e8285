//! Logging and span timing.
//!
//! When the `tracing` feature is enabled, the crate logs through the
//! `tracing` facade and this module offers a subscriber layer that totals
//! the wall time spent inside each named span.  When it is disabled, the
//! logging macros used inside the crate compile to nothing.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing_subscriber::{
        Layer, Registry, filter::LevelFilter, fmt, layer::Context, layer::SubscriberExt,
        registry::LookupSpan, util::SubscriberInitExt,
    };

    thread_local! {
        static SPAN_TIMINGS: RefCell<BTreeMap<&'static str, (Duration, usize)>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(
            &self,
            _attrs: &tracing::span::Attributes<'_>,
            id: &tracing::Id,
            ctx: Context<'_, S>,
        ) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: tracing::Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(&id) {
                let name = span.metadata().name();
                if let Some(start) = span.extensions().get::<Instant>() {
                    let elapsed = start.elapsed();
                    SPAN_TIMINGS.with(|totals| {
                        let mut totals = totals.borrow_mut();
                        let entry = totals.entry(name).or_insert((Duration::ZERO, 0));
                        entry.0 += elapsed;
                        entry.1 += 1;
                    });
                }
            }
        }
    }

    /// Installs the global subscriber: the timing layer plus a formatter
    /// that writes warnings and errors to the test output.  Safe to call
    /// more than once.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = Registry::default()
                .with(TimingLayer)
                .with(
                    fmt::layer()
                        .with_test_writer()
                        .with_filter(LevelFilter::WARN),
                )
                .try_init();
        });
    }

    /// Clears the span timings recorded on the current thread.
    pub fn reset_span_timings() {
        init_tracing();
        SPAN_TIMINGS.with(|totals| totals.borrow_mut().clear());
    }

    /// Gets `(span name, total time, number of closes)` for every span closed
    /// on the current thread since the last reset, slowest first.
    pub fn span_timings() -> Vec<(&'static str, Duration, usize)> {
        let mut entries: Vec<_> = SPAN_TIMINGS.with(|totals| {
            totals
                .borrow()
                .iter()
                .map(|(&name, &(duration, count))| (name, duration, count))
                .collect()
        });
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }

    #[doc(hidden)]
    pub fn dump_span_timings() {
        eprintln!("span timings (desc):");
        for (name, duration, count) in span_timings() {
            eprintln!("  {name}: {duration:?} ({count}x)");
        }
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::time::Duration;

    pub fn init_tracing() {}

    pub fn reset_span_timings() {}

    /// Always empty: nothing is timed without the `tracing` feature.
    pub fn span_timings() -> Vec<(&'static str, Duration, usize)> {
        Vec::new()
    }

    #[doc(hidden)]
    pub fn dump_span_timings() {}

    macro_rules! trace {
        ($($arg:tt)*) => {{}};
    }

    macro_rules! debug {
        ($($arg:tt)*) => {{}};
    }

    macro_rules! error {
        ($($arg:tt)*) => {{}};
    }

    macro_rules! info_span {
        ($($arg:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub(crate) use debug;
    pub(crate) use error;
    pub(crate) use info_span;
    pub(crate) use trace;

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::{dump_span_timings, init_tracing, reset_span_timings, span_timings};
#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, error, info_span, trace};

#[cfg(not(feature = "tracing"))]
pub use disabled::{dump_span_timings, init_tracing, reset_span_timings, span_timings};
#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{NoOpSpan, debug, error, info_span, trace};

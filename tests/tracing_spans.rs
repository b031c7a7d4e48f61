use std::sync::{Arc, Mutex};

use quadfind::samples::trimmed_square;
use quadfind::{find_quadrilateral, FindQuadrilateral};
use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

/// Records the name of every span opened while installed.
#[derive(Clone, Default)]
struct SpanNames(Arc<Mutex<Vec<String>>>);

impl SpanNames {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock().unwrap_or_else(std::sync::PoisonError::into_inner))
    }
}

impl<S: Subscriber> Layer<S> for SpanNames {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(attrs.metadata().name().to_owned());
    }
}

#[test]
fn both_entry_points_open_the_search_span() {
    let names = SpanNames::default();
    let subscriber = tracing_subscriber::registry().with(names.clone());
    let segments = trimmed_square(10.0, 1.0);

    tracing::subscriber::with_default(subscriber, || {
        assert!(find_quadrilateral(&segments).is_some());
        assert_eq!(names.take(), ["search"]);

        let found = FindQuadrilateral::new(&segments).execute();
        assert!(matches!(found, Ok(Some(_))));
        assert_eq!(names.take(), ["search"]);
    });
}

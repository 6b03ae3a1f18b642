//! Content-area state machine with fetch supersession.
//!
//! Navigations can overlap: the user may click a second document before the
//! first fetch lands. Each `begin` hands out a generation ticket and only
//! the newest ticket's completion is applied, so a stale response can never
//! overwrite the document the user actually navigated to.

/// What the content area is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading {
        path: String,
    },
    Loaded {
        path: String,
        text: String,
    },
    Failed {
        path: String,
        message: String,
    },
}

/// Identifies one fetch started by `begin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Result of a finished fetch, as reported by the embedding.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Text(String),
    Error(String),
}

#[derive(Debug, Default)]
pub struct ContentLoader {
    generation: u64,
    state: LoadState,
}

impl ContentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Start a navigation. Always refetches; nothing is cached across
    /// navigations.
    pub fn begin(&mut self, path: &str) -> FetchTicket {
        self.generation += 1;
        self.state = LoadState::Loading {
            path: path.to_string(),
        };
        FetchTicket(self.generation)
    }

    /// Apply a fetch result. Returns false (and leaves the state untouched)
    /// when the ticket has been superseded by a newer `begin`.
    pub fn complete(&mut self, ticket: FetchTicket, outcome: FetchOutcome) -> bool {
        if ticket.0 != self.generation {
            log::debug!("dropping superseded fetch result (ticket {})", ticket.0);
            return false;
        }
        let path = match &self.state {
            LoadState::Loading { path } => path.clone(),
            // A completion for the current ticket implies a Loading state;
            // anything else means the embedding misused the API.
            other => {
                log::warn!("fetch completion in unexpected state {other:?}");
                return false;
            }
        };
        self.state = match outcome {
            FetchOutcome::Text(text) => LoadState::Loaded { path, text },
            FetchOutcome::Error(message) => LoadState::Failed { path, message },
        };
        true
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn begin_then_complete_loads_the_document() {
        let mut loader = ContentLoader::new();
        let ticket = loader.begin("a.md");
        assert_eq!(
            loader.state(),
            &LoadState::Loading {
                path: "a.md".to_string()
            }
        );

        assert!(loader.complete(ticket, FetchOutcome::Text("# a".to_string())));
        assert_eq!(
            loader.state(),
            &LoadState::Loaded {
                path: "a.md".to_string(),
                text: "# a".to_string()
            }
        );
    }

    #[test]
    fn stale_completion_is_dropped_after_a_newer_navigation() {
        let mut loader = ContentLoader::new();
        let first = loader.begin("slow.md");
        let second = loader.begin("fast.md");

        // The slow fetch lands after the user already navigated away.
        assert!(!loader.complete(first, FetchOutcome::Text("stale".to_string())));
        assert_eq!(
            loader.state(),
            &LoadState::Loading {
                path: "fast.md".to_string()
            }
        );

        assert!(loader.complete(second, FetchOutcome::Text("fresh".to_string())));
        assert_eq!(
            loader.state(),
            &LoadState::Loaded {
                path: "fast.md".to_string(),
                text: "fresh".to_string()
            }
        );
    }

    #[test]
    fn stale_error_cannot_clobber_a_newer_navigation() {
        let mut loader = ContentLoader::new();
        let first = loader.begin("a.md");
        let _second = loader.begin("b.md");

        assert!(!loader.complete(first, FetchOutcome::Error("HTTP 500".to_string())));
        assert_eq!(
            loader.state(),
            &LoadState::Loading {
                path: "b.md".to_string()
            }
        );
    }

    #[test]
    fn failed_fetch_reports_the_message() {
        let mut loader = ContentLoader::new();
        let ticket = loader.begin("gone.md");
        assert!(loader.complete(
            ticket,
            FetchOutcome::Error("Failed to load document: HTTP status 404".to_string())
        ));
        match loader.state() {
            LoadState::Failed { path, message } => {
                assert_eq!(path, "gone.md");
                assert!(message.contains("404"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn renavigation_always_refetches() {
        let mut loader = ContentLoader::new();
        let first = loader.begin("a.md");
        loader.complete(first, FetchOutcome::Text("# a".to_string()));

        // Navigating to the same path again issues a fresh ticket.
        let second = loader.begin("a.md");
        assert!(loader.is_current(second));
        assert!(!loader.is_current(first));
        assert_eq!(
            loader.state(),
            &LoadState::Loading {
                path: "a.md".to_string()
            }
        );
    }
}

use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::country::Country;
use crate::usecase::ports::source::FetchError;

/// Lifecycle of the one startup fetch. Starts at `Loading` and transitions
/// exactly once; there is no refetch trigger, so `Ready` and `Failed` are
/// terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Ready(Vec<Country>),
    Failed(FetchError),
}

pub struct AppState {
    pub fetch: Signal<FetchState>,
    pub search: Signal<String>,
    pub page: Signal<usize>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            fetch: use_signal(|| FetchState::Loading),
            search: use_signal(String::new),
            page: use_signal(|| 1_usize),
            status: use_signal(|| "Loading countries...".to_string()),
        }
    }
}

//! Request/response bodies recorded for a single log entry.

pub mod aggregate;
pub mod fetch;
pub mod payload;
pub mod view;

pub use aggregate::{
    CleanupLogContentRequest, CleanupLogContentResponse, CreateLogContentRequest, LogContentDto,
};
pub use fetch::{
    fetch_target, resolve_response, Completion, FetchTrigger, LoadFailure, LoadState,
    RequestSequence, TriggerAction,
};
pub use payload::{display_text, is_present, parse_content, ContentData, ParsedContent};
pub use view::{content_view, ContentView};

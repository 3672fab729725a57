//! Integration tests for the interactive app
//!
//! - Submitting from the input pane, with the request running in the background
//! - Ordering of overlapping responses under each render policy
//! - The status banner for every failure kind
//! - Rendering the screen with a test backend

mod app_flow {
    mod common;
    mod test_actions;
    mod test_keys;
    mod test_rendering;
}

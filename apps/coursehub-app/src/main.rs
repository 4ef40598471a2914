//! # CourseHub Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (file, then `COURSEHUB_*` environment)
//! 3. Create the single cart store
//! 4. Fetch the catalog for the home screen
//!
//! The actual setup is in lib.rs for better testability.

#[tokio::main]
async fn main() {
    coursehub_app::run().await;
}

// Start of file: /src/utils/mod.rs

/*
    * Re-exports for all utility modules like the global layer error handler,
    * the standard API envelope, translations, HTML views, etc.
*/

pub mod api_response;
pub mod error_handler;
pub mod json;
pub mod lang;
pub mod views;

// End of file: /src/utils/mod.rs

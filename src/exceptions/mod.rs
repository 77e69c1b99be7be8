// Start of file: /src/exceptions/mod.rs

/*
    * Centralized exception handling: classification, reporting and
    * rendering of every failure that escapes a handler.
*/

pub mod exception;
pub mod flash;
pub mod handler;
pub mod middleware;
pub mod render;
pub mod report;
pub mod request;

pub use exception::{AppException, ExceptionKind, ValidationErrors};
pub use flash::FlashBag;
pub use handler::{ExceptionHandler, RenderOptions};
pub use render::{Flash, Rendered};
pub use report::{ReportPolicy, Reporter, TracingReporter};
pub use request::RequestMeta;

// End of file: /src/exceptions/mod.rs

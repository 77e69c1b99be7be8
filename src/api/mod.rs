// Start of file: /src/api/mod.rs

/*
    * HTTP endpoints: diagnostics under /test and the demo asset API under /api.
*/

pub mod assets;
pub mod middleware;

// End of file: /src/api/mod.rs

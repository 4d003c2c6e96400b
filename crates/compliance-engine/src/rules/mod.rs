//! Rule checks, grouped by what they inspect
//!
//! Every check is a pure function of the document text. Checks never look
//! at each other's output, so they can run in any order; the engine runs
//! them in reporting order.

pub mod metadata;
pub mod placeholders;
pub mod procedure;
pub mod references;
pub mod signatures;
pub mod structure;

//! Library side of the mdvault binary: vault discovery, tag filtering, write-back and
//! the parallel runner. The markdown work itself lives in mdvault-engine.

pub mod diff;
pub mod runner;
pub mod vault;

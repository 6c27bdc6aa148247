//! gloss: Glossary Manager
//!
//! A categorized glossary of programming terms with search, autocomplete, and
//! popularity tracking.
//!
//! gloss keeps a term collection in memory, seeded from a built-in French
//! programming glossary or a user-supplied JSON file. Terms carry definitions,
//! phonetics, usage examples and context notes; detail lookups record
//! popularity so frequently consulted terms surface first.

#![warn(missing_docs)]

pub mod cli;

// Resume screening: keyword scoring over a fixed taxonomy, then rule-based role matching.
// Text extraction sits in front of the core; report building sits behind it.

pub mod extractor;
pub mod handlers;
pub mod keyword_scorer;
pub mod report;
pub mod roles;
pub mod taxonomy;

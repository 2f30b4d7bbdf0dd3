// Test module organization
pub mod test_alias;
pub mod test_filter;
pub mod test_skip;

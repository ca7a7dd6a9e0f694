/// Photo intake pipeline
///
/// This module takes a file the user offered (dropped or browsed) through
/// the acceptance policy and into its transport-ready form:
/// - Acceptance policy over type and size (validate.rs)
/// - Preview and upload encoding (encode.rs)

pub mod encode;
pub mod validate;

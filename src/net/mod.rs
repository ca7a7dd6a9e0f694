/// Outbound HTTP
///
/// Everything that leaves the machine goes through here. Today that is a
/// single concern: submitting a photo to the remote classifier (predict.rs).

pub mod predict;

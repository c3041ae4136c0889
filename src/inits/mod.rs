pub(crate) mod firstk;
pub(crate) mod precomputed;

//! Math helpers missing in `stylus_sdk`.
pub(crate) mod storage;

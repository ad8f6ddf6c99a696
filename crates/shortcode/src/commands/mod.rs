//! CLI command implementations.

pub(crate) mod expand;
pub(crate) mod tags;

pub(crate) use expand::ExpandArgs;
pub(crate) use tags::TagsArgs;

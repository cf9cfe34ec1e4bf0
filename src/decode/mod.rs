pub(crate) mod directive;

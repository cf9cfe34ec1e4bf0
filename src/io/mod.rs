pub(crate) mod image_io;
pub(crate) mod report;

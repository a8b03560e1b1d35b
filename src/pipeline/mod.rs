// Analysis pipeline: normalize -> measure -> score -> model -> summarize.
//
// `analyze` handles a single text; `table` runs the same report once per
// text column of a dataset.

pub mod analyze;
pub mod table;

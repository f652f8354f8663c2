pub mod resolver;

pub use resolver::{
    is_suggested_extension, load_source, select_source, FileStatus, InputError, ResolvedSource,
    SourceSelection, TranslationInputs, SUGGESTED_EXTENSIONS,
};

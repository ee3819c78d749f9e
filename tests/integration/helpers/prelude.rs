pub use assert_cmd::prelude::*;
pub use indoc::indoc;
pub use predicates::prelude::*;

pub use crate::helpers::arg_builder::{binary, ArgBuilder};
pub use crate::helpers::file_server::{kit_files, StarterServer};
pub use crate::helpers::project_builder::tempdir;

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        test_setup_with_favorites_tables, test_setup_with_tables, TestBuilder, TestContext,
        TestError,
    };
}

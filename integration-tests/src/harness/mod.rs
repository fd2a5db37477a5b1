mod fixtures;
pub mod tracing;

pub use fixtures::{fixture_path, open_fixture, read_fixture};
pub use tracing::{CapturedEvent, init_test_tracing};

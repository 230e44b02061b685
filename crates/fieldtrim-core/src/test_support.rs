use fieldtrim_derive::Trimmable;
use tracing_subscriber::EnvFilter;

///
/// FakeUser
///

#[derive(Clone, Debug, Default, PartialEq, Eq, Trimmable)]
pub(crate) struct FakeUser {
    pub(crate) id: u64,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) nickname: Option<String>,
    pub(crate) tags: Vec<String>,
}

impl FakeUser {
    pub(crate) fn new(id: u64, first_name: &str, last_name: &str) -> Self {
        Self {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            ..Self::default()
        }
    }
}

///
/// Numbers
///

#[derive(Clone, Debug, PartialEq, Trimmable)]
pub(crate) struct Numbers {
    pub(crate) count: u32,
    pub(crate) ratio: f64,
}

///
/// Empty
///

#[allow(dead_code)]
#[derive(Trimmable)]
pub(crate) struct Empty {}

/// Route tracing output through the test harness; `RUST_LOG` picks the level.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

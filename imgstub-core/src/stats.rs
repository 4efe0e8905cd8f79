use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Stats {
    pub created: u64,
    pub existed: u64,
    pub errored: u64,
}

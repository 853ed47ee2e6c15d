use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Root {
    pub(in crate::tidal) user_id: u64,
}

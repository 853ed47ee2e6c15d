use serde::Deserialize;

#[derive(Deserialize)]
pub struct Root {
    pub(in crate::tidal) uuid: String,
    pub(in crate::tidal) title: String,
}

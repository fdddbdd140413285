use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db::Record;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Client {
    #[serde(default)]
    pub id: String,

    #[schema(example = "Acme Trading Ltd.")]
    pub name: String,

    #[serde(default)]
    #[schema(format = "email", nullable = true)]
    pub email: Option<String>,

    #[serde(default)]
    #[schema(nullable = true)]
    pub phone: Option<String>,

    #[serde(default)]
    #[schema(nullable = true)]
    pub address: Option<String>,
}

impl Record for Client {
    const COLLECTION: &'static str = "clients";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

use crate::roster::Person;
use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Flattened view of a record: the nested address city is resolved so the
/// `--json` schema is uniform across source shapes.
#[derive(Serialize, Clone)]
pub struct PersonView {
    pub id: u64,
    pub name: String,
    pub age: Option<u32>,
    pub city: Option<String>,
}

impl From<&Person> for PersonView {
    fn from(p: &Person) -> Self {
        PersonView {
            id: p.id,
            name: p.name.clone(),
            age: p.age,
            city: p.city().map(|c| c.to_string()),
        }
    }
}

#[derive(Serialize)]
pub struct EveryReport {
    pub check: String,
    pub holds: bool,
    pub total: usize,
}

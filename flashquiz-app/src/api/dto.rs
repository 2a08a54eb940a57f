use flashquiz_core::DeckValue;
use serde::{Deserialize, Serialize};

// POST bodies arrive as raw `serde_json::Value` and fields are looked up by
// name, so anything that is not an object reads as missing fields.

#[derive(Deserialize)]
pub struct LoadQuery {
    pub name: Option<String>,
}

#[derive(Serialize)]
pub struct SaveOut<'a> {
    pub name: &'a str,
    pub value: &'a DeckValue,
}

#[derive(Serialize)]
pub struct ScoreOut<'a> {
    pub value: &'a str,
}

#[derive(Serialize, Deserialize)]
pub struct LoadResp {
    pub value: DeckValue,
}

#[derive(Serialize, Deserialize)]
pub struct KeysResp {
    pub keys: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct MsgResp {
    pub msg: String,
}

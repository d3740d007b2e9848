use serde::{Deserialize, Serialize};

pub const SCHEMA_V2_1_0: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";

/// Postman collection, v2.1.0 shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Collection {
    pub info: Info,
    pub item: Vec<Item>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Info {
    pub name: String,
    pub schema: String,
    #[serde(rename = "_postman_id")]
    pub postman_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub request: Request,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    pub header: Vec<Header>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    pub url: Url,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_owned(),
            value: value.to_owned(),
        }
    }
}

/// Raw body; `raw` holds the payload as JSON text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Body {
    pub mode: String,
    pub raw: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Url {
    pub raw: String,
    pub host: Vec<String>,
    pub path: Vec<String>,
}

impl Url {
    /// Builds a url under `host`, e.g. `{{base_url}}/api/lessons`.
    pub fn templated(host: &str, path: &[&str]) -> Self {
        let path: Vec<String> = path.iter().map(|s| s.to_string()).collect();
        Self {
            raw: format!("{}/{}", host, path.join("/")),
            host: vec![host.to_owned()],
            path,
        }
    }
}

// Request payloads. Field order here is the order in the rendered body.

#[derive(Serialize, Deserialize, Debug)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct NewLesson {
    pub title: String,
    pub content: String,
    pub level: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewQuiz {
    pub lesson_id: String,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    pub quiz_id: String,
    pub answers: Vec<QuizAnswer>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct QuizAnswer {
    pub question: String,
    pub answer: String,
}

use crate::types::{
    Body, Collection, Credentials, Header, Info, Item, Method, NewLesson, NewQuiz, QuizAnswer,
    QuizQuestion, QuizSubmission, Request, Url, SCHEMA_V2_1_0,
};
use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

pub const COLLECTION_NAME: &str = "LanguageExchange API - Lessons & Quizzes";
pub const ID_PREFIX: &str = "language-exchange-";

const BASE_URL: &str = "{{base_url}}";
const BEARER_TOKEN: &str = "Bearer {{token}}";

/// Builds the lessons & quizzes collection. `generated_at` only feeds `_postman_id`.
pub fn build(generated_at: NaiveDateTime) -> Result<Collection> {
    let item = vec![
        post(
            "Login (Get Token)",
            &["api", "auth", "login"],
            false,
            &Credentials {
                email: "test@example.com".to_string(),
                password: "yourpassword".to_string(),
            },
        )?,
        post(
            "Create Lesson",
            &["api", "lessons"],
            true,
            &NewLesson {
                title: "Spanish Basics".to_string(),
                content: "Hola means Hello. Gracias means Thank you.".to_string(),
                level: "Beginner".to_string(),
            },
        )?,
        get("Get All Lessons", &["api", "lessons"]),
        post(
            "Create Quiz",
            &["api", "quizzes"],
            true,
            &NewQuiz {
                lesson_id: "{{lessonId}}".to_string(),
                questions: vec![
                    question(
                        "What does 'Hola' mean?",
                        &["Goodbye", "Hello", "Please", "Thanks"],
                        "Hello",
                    ),
                    question(
                        "What does 'Gracias' mean?",
                        &["Sorry", "Thank you", "Yes", "No"],
                        "Thank you",
                    ),
                ],
            },
        )?,
        post(
            "Submit Quiz",
            &["api", "quizzes", "submit"],
            true,
            &QuizSubmission {
                quiz_id: "{{quizId}}".to_string(),
                answers: vec![
                    answer("What does 'Hola' mean?", "Hello"),
                    answer("What does 'Gracias' mean?", "Thank you"),
                ],
            },
        )?,
        get("Get Quiz Progress", &["api", "quizzes", "progress"]),
    ];
    log::debug!("built {} request items", item.len());

    Ok(Collection {
        info: Info {
            name: COLLECTION_NAME.to_string(),
            schema: SCHEMA_V2_1_0.to_string(),
            postman_id: format!("{}{}", ID_PREFIX, isoformat(generated_at)),
        },
        item,
    })
}

/// `YYYY-MM-DDTHH:MM:SS[.ffffff]`, microseconds only when non-zero.
fn isoformat(t: NaiveDateTime) -> String {
    if t.nanosecond() / 1_000 == 0 {
        t.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        t.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

fn post<T: Serialize>(name: &str, path: &[&str], authorized: bool, payload: &T) -> Result<Item> {
    let raw = serde_json::to_string_pretty(payload)
        .with_context(|| format!("Failed to render body of request: {}", name))?;
    let mut header = vec![Header::new("Content-Type", "application/json")];
    if authorized {
        header.push(Header::new("Authorization", BEARER_TOKEN));
    }
    Ok(Item {
        name: name.to_string(),
        request: Request {
            method: Method::Post,
            header,
            body: Some(Body {
                mode: "raw".to_string(),
                raw,
            }),
            url: Url::templated(BASE_URL, path),
        },
    })
}

fn get(name: &str, path: &[&str]) -> Item {
    Item {
        name: name.to_string(),
        request: Request {
            method: Method::Get,
            header: vec![Header::new("Authorization", BEARER_TOKEN)],
            body: None,
            url: Url::templated(BASE_URL, path),
        },
    }
}

fn question(question: &str, options: &[&str], correct: &str) -> QuizQuestion {
    QuizQuestion {
        question: question.to_string(),
        options: options.iter().map(|s| s.to_string()).collect(),
        correct_answer: correct.to_string(),
    }
}

fn answer(question: &str, answer: &str) -> QuizAnswer {
    QuizAnswer {
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::collections::HashSet;

    fn at(micro: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_micro_opt(14, 5, 7, micro)
            .unwrap()
    }

    #[test]
    fn items_in_order() {
        let c = build(at(0)).unwrap();
        let names: Vec<&str> = c.item.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Login (Get Token)",
                "Create Lesson",
                "Get All Lessons",
                "Create Quiz",
                "Submit Quiz",
                "Get Quiz Progress",
            ]
        );
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn top_level_keys() {
        let v = serde_json::to_value(build(at(0)).unwrap()).unwrap();
        let mut keys: Vec<&String> = v.as_object().unwrap().keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["info", "item"]);
        assert_eq!(v["info"]["name"], COLLECTION_NAME);
        assert_eq!(v["info"]["schema"], SCHEMA_V2_1_0);
    }

    #[test]
    fn postman_id_carries_timestamp() {
        assert_eq!(
            build(at(0)).unwrap().info.postman_id,
            "language-exchange-2024-03-09T14:05:07"
        );
        assert_eq!(
            build(at(42)).unwrap().info.postman_id,
            "language-exchange-2024-03-09T14:05:07.000042"
        );
        assert_ne!(
            build(at(1)).unwrap().info.postman_id,
            build(at(2)).unwrap().info.postman_id
        );
    }

    #[test]
    fn bodies_only_on_post_and_parse_as_json() {
        for item in build(at(0)).unwrap().item {
            match item.request.method {
                Method::Post => {
                    let body = item.request.body.expect("post without body");
                    assert_eq!(body.mode, "raw");
                    assert!(serde_json::from_str::<Value>(&body.raw).is_ok(), "{}", item.name);
                }
                Method::Get => assert!(item.request.body.is_none()),
            }
        }
    }

    #[test]
    fn bodies_are_indented_and_ordered() {
        let c = build(at(0)).unwrap();
        let login = c.item[0].request.body.as_ref().unwrap();
        assert_eq!(
            login.raw,
            "{\n  \"email\": \"test@example.com\",\n  \"password\": \"yourpassword\"\n}"
        );
        let quiz: Value = serde_json::from_str(&c.item[3].request.body.as_ref().unwrap().raw).unwrap();
        assert_eq!(quiz["lessonId"], "{{lessonId}}");
        assert_eq!(quiz["questions"][1]["correctAnswer"], "Thank you");
        let submit: Value = serde_json::from_str(&c.item[4].request.body.as_ref().unwrap().raw).unwrap();
        assert_eq!(
            submit,
            json!({
                "quizId": "{{quizId}}",
                "answers": [
                    {"question": "What does 'Hola' mean?", "answer": "Hello"},
                    {"question": "What does 'Gracias' mean?", "answer": "Thank you"}
                ]
            })
        );
    }

    #[test]
    fn authorization_headers() {
        let c = build(at(0)).unwrap();
        for item in &c.item {
            let auth = item
                .request
                .header
                .iter()
                .find(|h| h.key == "Authorization")
                .map(|h| h.value.as_str());
            if item.name == "Login (Get Token)" {
                assert_eq!(auth, None);
            } else {
                assert_eq!(auth, Some("Bearer {{token}}"), "{}", item.name);
            }
            if item.request.method == Method::Post {
                assert_eq!(item.request.header[0], Header::new("Content-Type", "application/json"));
            }
        }
    }

    #[test]
    fn urls_use_base_url() {
        let c = build(at(0)).unwrap();
        let raws: Vec<&str> = c.item.iter().map(|i| i.request.url.raw.as_str()).collect();
        assert_eq!(
            raws,
            vec![
                "{{base_url}}/api/auth/login",
                "{{base_url}}/api/lessons",
                "{{base_url}}/api/lessons",
                "{{base_url}}/api/quizzes",
                "{{base_url}}/api/quizzes/submit",
                "{{base_url}}/api/quizzes/progress",
            ]
        );
        assert!(c.item.iter().all(|i| i.request.url.host == vec!["{{base_url}}"]));
    }
}

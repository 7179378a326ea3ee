// End to end in memory tests for the REST surface.
//
// Drives the full router the binary serves, one request at a time, against a fresh
// in-memory catalog per test.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use quizzes::shell::http::router;
use quizzes::shell::state::AppState;

struct Client {
    app: Router,
}

impl Client {
    fn new() -> Self {
        Self {
            app: router(AppState::in_memory()),
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    async fn json(&self, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn create_quiz(&self, title: &str, synopsis: &str) -> i64 {
        let (status, body) = self
            .json(
                "POST",
                "/quiz/create",
                json!({ "quizTitle": title, "quizSynopsis": synopsis }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["quizId"].as_i64().unwrap()
    }

    async fn add_question(&self, quiz_id: i64, text: &str, kind: &str, answers: Value) -> i64 {
        let (status, body) = self
            .json(
                "POST",
                "/question/add",
                json!({
                    "quizId": quiz_id,
                    "questionString": text,
                    "questionType": kind,
                    "answers": answers,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        body["questionId"].as_i64().unwrap()
    }
}

fn single_answers() -> Value {
    json!([
        { "isCorrect": true, "answerString": "correct ans" },
        { "isCorrect": false, "answerString": "wrong ans" },
    ])
}

#[tokio::test]
async fn root_answers_with_a_message() {
    let (status, body) = Client::new().get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn created_quizzes_show_up_in_details_and_list() {
    let client = Client::new();
    let first = client.create_quiz("first", "valid").await;
    let second = client.create_quiz("second", "valid").await;

    let (status, details) = client.get(&format!("/quiz/details?quizId={first}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        details,
        json!({ "quizId": first, "quizTitle": "first", "quizSynopsis": "valid", "questions": [] })
    );

    let (_, list) = client.get("/quizzes/list").await;
    assert_eq!(
        list,
        json!([
            { "quizId": first, "quizTitle": "first" },
            { "quizId": second, "quizTitle": "second" },
        ])
    );
}

#[tokio::test]
async fn editing_a_quiz_keeps_its_place_in_the_list() {
    let client = Client::new();
    let first = client.create_quiz("first", "valid").await;
    let second = client.create_quiz("second", "valid").await;

    let (status, body) = client
        .json(
            "PUT",
            "/quiz/edit",
            json!({ "quizId": first, "quizTitle": "edit", "quizSynopsis": "edit" }),
        )
        .await;
    assert_eq!((status, body), (StatusCode::OK, json!({})));

    let (_, list) = client.get("/quizzes/list").await;
    assert_eq!(
        list,
        json!([
            { "quizId": first, "quizTitle": "edit" },
            { "quizId": second, "quizTitle": "second" },
        ])
    );
}

#[tokio::test]
async fn removing_a_quiz_cascades_to_its_questions() {
    let client = Client::new();
    let quiz_id = client.create_quiz("first", "valid").await;
    let question_id = client
        .add_question(quiz_id, "question1", "single", single_answers())
        .await;

    let (status, _) = client.delete(&format!("/quiz/remove?quizId={quiz_id}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = client.get(&format!("/quiz/details?quizId={quiz_id}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "quizId does not refer to a valid quiz");

    let (status, body) = client
        .delete(&format!("/question/remove?questionId={question_id}"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "questionId does not refer to a valid question");

    let (_, list) = client.get("/quizzes/list").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn question_edits_replace_content_in_place() {
    let client = Client::new();
    client.create_quiz("beforeFirst", "valid").await;
    let quiz_id = client.create_quiz("first", "valid").await;
    let question1 = client
        .add_question(quiz_id, "question1", "multiple", single_answers())
        .await;
    let question2 = client
        .add_question(quiz_id, "question2", "single", single_answers())
        .await;
    let edit_answers = json!([
        { "isCorrect": true, "answerString": "edit" },
        { "isCorrect": false, "answerString": "edit2" },
    ]);

    for kind in ["single", "multiple"] {
        let (status, body) = client
            .json(
                "POST",
                "/question/edit",
                json!({
                    "questionId": question1,
                    "questionString": "edit",
                    "questionType": kind,
                    "answers": edit_answers,
                }),
            )
            .await;
        assert_eq!((status, body), (StatusCode::OK, json!({})));
    }

    let (_, details) = client.get(&format!("/quiz/details?quizId={quiz_id}")).await;
    assert_eq!(
        details["questions"],
        json!([
            {
                "questionId": question1,
                "questionString": "edit",
                "questionType": "multiple",
                "answers": edit_answers,
            },
            {
                "questionId": question2,
                "questionString": "question2",
                "questionType": "single",
                "answers": single_answers(),
            },
        ])
    );
}

#[tokio::test]
async fn removing_a_question_leaves_its_siblings() {
    let client = Client::new();
    let quiz_id = client.create_quiz("first", "valid").await;
    let kept = client
        .add_question(quiz_id, "questionfirst", "single", single_answers())
        .await;
    let removed = client
        .add_question(quiz_id, "question1", "single", single_answers())
        .await;

    let (status, body) = client
        .delete(&format!("/question/remove?questionId={removed}"))
        .await;
    assert_eq!((status, body), (StatusCode::OK, json!({})));

    let (_, details) = client.get(&format!("/quiz/details?quizId={quiz_id}")).await;
    let ids: Vec<i64> = details["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["questionId"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![kept]);
}

#[tokio::test]
async fn clear_resets_every_sequence() {
    let client = Client::new();
    let quiz_id = client.create_quiz("first", "valid").await;
    client
        .add_question(quiz_id, "question1", "single", single_answers())
        .await;
    client.create_quiz("second", "valid").await;

    let (status, body) = client.delete("/clear").await;
    assert_eq!((status, body), (StatusCode::OK, json!({})));

    let (_, list) = client.get("/quizzes/list").await;
    assert_eq!(list, json!([]));
    let quiz_id = client.create_quiz("again", "valid").await;
    let question_id = client
        .add_question(quiz_id, "question1", "single", single_answers())
        .await;
    assert_eq!((quiz_id, question_id), (0, 0));
}

#[tokio::test]
async fn graphql_endpoint_shares_the_catalog() {
    let client = Client::new();
    let quiz_id = client.create_quiz("first", "valid").await;

    let (status, body) = client
        .json(
            "POST",
            "/gql",
            json!({ "query": "{ quizzes { quizId quizTitle } }" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({ "quizzes": [{ "quizId": quiz_id, "quizTitle": "first" }] })
    );
}

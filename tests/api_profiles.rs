//! Integration tests per gli endpoint dei profili
//!
//! Test per:
//! - GET/POST /profile/ (lista, ricerca, registrazione)
//! - GET/PUT/PATCH/DELETE /profile/{profile_id}/

mod common;

#[cfg(test)]
mod profile_tests {
    use super::common::*;
    use axum::http::{StatusCode, header};
    use serde_json::{Value, json};

    // ============================================================
    // Test per POST /profile/ - create_profile
    // ============================================================

    #[tokio::test]
    async fn test_create_profile_hides_password() {
        let (_state, server) = setup().await;

        let response = server
            .post("/profile/")
            .json(&json!({
                "email": "anna@example.com",
                "name": "Anna",
                "password": "Password123"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["email"], "anna@example.com");
        assert_eq!(body["name"], "Anna");
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn test_create_profile_normalizes_email_domain() {
        let (_state, server) = setup().await;

        let response = server
            .post("/profile/")
            .json(&json!({
                "email": "Anna@EXAMPLE.COM",
                "name": "  Anna  ",
                "password": "Password123"
            }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["email"], "Anna@example.com");
        assert_eq!(body["name"], "Anna");
    }

    #[tokio::test]
    async fn test_create_profile_duplicate_email() {
        let (_state, server) = setup().await;
        register_profile(&server, "anna@example.com", "Anna", "Password123").await;

        let response = server
            .post("/profile/")
            .json(&json!({
                "email": "anna@example.com",
                "name": "Altra Anna",
                "password": "Password123"
            }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(
            body["fields"]["email"][0],
            "user profile with this email already exists."
        );
    }

    #[tokio::test]
    async fn test_create_profile_field_errors() {
        let (_state, server) = setup().await;

        let response = server
            .post("/profile/")
            .json(&json!({ "email": "non-una-email", "name": "" }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["fields"]["email"][0], "Enter a valid email address.");
        assert_eq!(body["fields"]["name"][0], "This field may not be blank.");
        assert_eq!(body["fields"]["password"][0], "This field is required.");
    }

    // ============================================================
    // Test per GET /profile/ - list_profiles
    // ============================================================

    #[tokio::test]
    async fn test_create_profile_wrong_type_is_bad_request() {
        let (_state, server) = setup().await;

        let response = server
            .post("/profile/")
            .json(&json!({ "email": 1, "name": "Anna", "password": "Password123" }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["fields"]["email"][0], "Incorrect type.");
    }

    #[tokio::test]
    async fn test_list_profiles_is_public() {
        let (_state, server) = setup().await;
        register_profile(&server, "anna@example.com", "Anna", "Password123").await;
        register_profile(&server, "luca@example.com", "Luca", "Password123").await;

        let response = server.get("/profile/").await;

        response.assert_status_ok();
        let body: Value = response.json();
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["Anna", "Luca"]);
    }

    #[tokio::test]
    async fn test_search_profiles_by_name_or_email() {
        let (_state, server) = setup().await;
        register_profile(&server, "mario.rossi@example.com", "Mario Rossi", "Password123").await;
        register_profile(&server, "giulia@posta.it", "Giulia Bianchi", "Password123").await;
        register_profile(&server, "mario.verdi@posta.it", "Mario Verdi", "Password123").await;

        let by_name = server
            .get("/profile/")
            .add_query_param("search", "mario")
            .await
            .json::<Value>();
        assert_eq!(by_name.as_array().unwrap().len(), 2);

        let by_email = server
            .get("/profile/")
            .add_query_param("search", "posta.it")
            .await
            .json::<Value>();
        assert_eq!(by_email.as_array().unwrap().len(), 2);

        let both_terms = server
            .get("/profile/")
            .add_query_param("search", "mario posta")
            .await
            .json::<Value>();
        let both_terms = both_terms.as_array().unwrap();
        assert_eq!(both_terms.len(), 1);
        assert_eq!(both_terms[0]["name"], "Mario Verdi");
    }

    // ============================================================
    // Test per GET /profile/{profile_id}/ - get_profile
    // ============================================================

    #[tokio::test]
    async fn test_get_profile_by_id() {
        let (_state, server) = setup().await;
        let id = register_profile(&server, "anna@example.com", "Anna", "Password123").await;

        let response = server.get(&format!("/profile/{}/", id)).await;

        response.assert_status_ok();
        response.assert_json(&json!({ "id": id, "email": "anna@example.com", "name": "Anna" }));
    }

    #[tokio::test]
    async fn test_get_missing_profile_is_not_found() {
        let (_state, server) = setup().await;

        let response = server.get("/profile/999/").await;

        response.assert_status_not_found();
    }

    // ============================================================
    // Test per PUT/PATCH/DELETE - permesso UpdateOwnProfile
    // ============================================================

    #[tokio::test]
    async fn test_anonymous_update_is_unauthorized() {
        let (_state, server) = setup().await;
        let id = register_profile(&server, "anna@example.com", "Anna", "Password123").await;

        let response = server
            .patch(&format!("/profile/{}/", id))
            .json(&json!({ "name": "Hacker" }))
            .await;

        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_anonymous_update_with_unreadable_body_is_unauthorized() {
        let (_state, server) = setup().await;
        let id = register_profile(&server, "anna@example.com", "Anna", "Password123").await;
        let path = format!("/profile/{}/", id);

        server
            .put(&path)
            .json(&json!({ "email": 1 }))
            .await
            .assert_status_unauthorized();

        server
            .put(&path)
            .text("email=hacker@example.com")
            .await
            .assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_own_update_with_wrong_type_is_bad_request() {
        let (_state, server) = setup().await;
        let (anna, token) = signed_up(&server, "anna@example.com", "Anna").await;

        let response = server
            .patch(&format!("/profile/{}/", anna))
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({ "name": ["Anna"] }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["error"], "Invalid request body");
        assert_eq!(body["fields"]["name"][0], "Incorrect type.");
    }

    #[tokio::test]
    async fn test_update_other_profile_is_forbidden() {
        let (_state, server) = setup().await;
        let (anna, _) = signed_up(&server, "anna@example.com", "Anna").await;
        let (_luca, luca_token) = signed_up(&server, "luca@example.com", "Luca").await;

        let response = server
            .put(&format!("/profile/{}/", anna))
            .add_header(header::AUTHORIZATION, bearer(&luca_token))
            .json(&json!({
                "email": "anna@example.com",
                "name": "Non Anna",
                "password": "Password123"
            }))
            .await;

        response.assert_status_forbidden();

        let unchanged = server.get(&format!("/profile/{}/", anna)).await.json::<Value>();
        assert_eq!(unchanged["name"], "Anna");
    }

    #[tokio::test]
    async fn test_delete_other_profile_is_forbidden() {
        let (_state, server) = setup().await;
        let (anna, _) = signed_up(&server, "anna@example.com", "Anna").await;
        let (_luca, luca_token) = signed_up(&server, "luca@example.com", "Luca").await;

        let response = server
            .delete(&format!("/profile/{}/", anna))
            .add_header(header::AUTHORIZATION, bearer(&luca_token))
            .await;

        response.assert_status_forbidden();
        server
            .get(&format!("/profile/{}/", anna))
            .await
            .assert_status_ok();
    }

    #[tokio::test]
    async fn test_update_missing_profile_is_not_found() {
        let (_state, server) = setup().await;

        let response = server
            .patch("/profile/999/")
            .json(&json!({ "name": "Nessuno" }))
            .await;

        response.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_put_own_profile_replaces_fields_and_password() {
        let (_state, server) = setup().await;
        let (anna, token) = signed_up(&server, "anna@example.com", "Anna").await;

        let response = server
            .put(&format!("/profile/{}/", anna))
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({
                "email": "anna.maria@example.com",
                "name": "Anna Maria",
                "password": "NuovaPassword1"
            }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "id": anna,
            "email": "anna.maria@example.com",
            "name": "Anna Maria"
        }));

        // la vecchia password non funziona più, la nuova sì
        server
            .post("/login/")
            .json(&json!({ "username": "anna.maria@example.com", "password": "Password123" }))
            .await
            .assert_status_bad_request();
        login(&server, "anna.maria@example.com", "NuovaPassword1").await;
    }

    #[tokio::test]
    async fn test_put_requires_every_field() {
        let (_state, server) = setup().await;
        let (anna, token) = signed_up(&server, "anna@example.com", "Anna").await;

        let response = server
            .put(&format!("/profile/{}/", anna))
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({ "name": "Solo nome" }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(body["fields"]["email"][0], "This field is required.");
        assert_eq!(body["fields"]["password"][0], "This field is required.");
    }

    #[tokio::test]
    async fn test_patch_own_profile_changes_only_given_fields() {
        let (_state, server) = setup().await;
        let (anna, token) = signed_up(&server, "anna@example.com", "Anna").await;

        let response = server
            .patch(&format!("/profile/{}/", anna))
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({ "name": "Annina" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["name"], "Annina");
        assert_eq!(body["email"], "anna@example.com");

        // password invariata
        login(&server, "anna@example.com", "Password123").await;
    }

    #[tokio::test]
    async fn test_patch_to_taken_email_is_rejected() {
        let (_state, server) = setup().await;
        let (anna, token) = signed_up(&server, "anna@example.com", "Anna").await;
        register_profile(&server, "luca@example.com", "Luca", "Password123").await;

        let response = server
            .patch(&format!("/profile/{}/", anna))
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({ "email": "luca@example.com" }))
            .await;

        response.assert_status_bad_request();
        let body: Value = response.json();
        assert_eq!(
            body["fields"]["email"][0],
            "user profile with this email already exists."
        );
    }

    #[tokio::test]
    async fn test_patch_keeping_own_email_is_allowed() {
        let (_state, server) = setup().await;
        let (anna, token) = signed_up(&server, "anna@example.com", "Anna").await;

        let response = server
            .patch(&format!("/profile/{}/", anna))
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({ "email": "anna@example.com", "name": "Anna B." }))
            .await;

        response.assert_status_ok();
    }

    #[tokio::test]
    async fn test_delete_own_profile_removes_feed_items() {
        let (state, server) = setup().await;
        let (anna, token) = signed_up(&server, "anna@example.com", "Anna").await;

        server
            .post("/feed/")
            .add_header(header::AUTHORIZATION, bearer(&token))
            .json(&json!({ "status_text": "Ultimo stato" }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .delete(&format!("/profile/{}/", anna))
            .add_header(header::AUTHORIZATION, bearer(&token))
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
        server
            .get(&format!("/profile/{}/", anna))
            .await
            .assert_status_not_found();

        let remaining = state.feed.find_many_by_profile_id(&anna).await.unwrap();
        assert!(remaining.is_empty());
    }
}

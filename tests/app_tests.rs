mod common;

use common::{PASSWORD, location};
use reqwest::StatusCode;

const CLIENT_ID: &str = "SELECT id FROM clients WHERE lastname = ?";
const PROJECT_ID: &str = "SELECT id FROM projects WHERE name = ?";
const TASK_ID: &str = "SELECT id FROM tasks WHERE name = ?";

// ── Health ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_ok() {
    let app = common::spawn_app().await;

    let resp = app.browser().get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["x-frame-options"], "DENY");
    assert_eq!(resp.text().await.unwrap(), "ok");
}

// ── Registration & Auth ─────────────────────────────────────────

#[tokio::test]
async fn register_normalises_identity_and_logs_in() {
    let app = common::spawn_app().await;
    let browser = app.browser();

    let resp = browser
        .register("dupont", "jEAN", "Jean@Example.com", PASSWORD, PASSWORD)
        .await;
    assert_eq!(location(&resp), "/dashboard");

    let page = browser.page("/dashboard").await;
    assert!(page.contains("Jean DUPONT"));

    let email: String = sqlx::query_scalar("SELECT email FROM users")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(email, "jean@example.com");

    let sent = app.mailer.sent.lock().unwrap().clone();
    assert_eq!(
        sent,
        vec![("jean@example.com".to_string(), "Bienvenue sur HackDesk".to_string())]
    );
}

#[tokio::test]
async fn register_rejects_password_mismatch() {
    let app = common::spawn_app().await;
    let browser = app.browser();

    let resp = browser
        .register("Dupont", "Jean", "jean@example.com", PASSWORD, "autre-chose")
        .await;
    assert_eq!(location(&resp), "/register");

    let page = browser.follow(resp).await;
    assert!(page.contains("ne correspondent pas"));
    assert_eq!(app.count("SELECT COUNT(*) FROM users").await, 0);
    assert!(app.mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn register_rejects_blank_fields() {
    let app = common::spawn_app().await;
    let browser = app.browser();

    let resp = browser
        .register("   ", "Jean", "jean@example.com", PASSWORD, PASSWORD)
        .await;
    let page = browser.follow(resp).await;
    assert!(page.contains("Le nom est obligatoire."));
    assert_eq!(app.count("SELECT COUNT(*) FROM users").await, 0);
}

#[tokio::test]
async fn register_rejects_duplicate_email_in_any_case() {
    let app = common::spawn_app().await;
    app.signed_up("Dupont", "Jean", "jean@example.com").await;

    let other = app.browser();
    let resp = other
        .register("Martin", "Paul", "JEAN@example.com", PASSWORD, PASSWORD)
        .await;
    assert_eq!(location(&resp), "/register");

    let page = other.follow(resp).await;
    assert!(page.contains("Un compte existe déjà avec cette adresse email"));
    assert_eq!(app.count("SELECT COUNT(*) FROM users").await, 1);
}

#[tokio::test]
async fn login_checks_email_then_password() {
    let app = common::spawn_app().await;
    app.signed_up("Dupont", "Jean", "jean@example.com").await;
    let browser = app.browser();

    let resp = browser.login("nobody@example.com", PASSWORD).await;
    assert_eq!(location(&resp), "/");
    assert!(browser.follow(resp).await.contains("Cet email est inconnu."));

    let resp = browser.login("jean@example.com", "mauvais").await;
    assert_eq!(location(&resp), "/");
    assert!(browser.follow(resp).await.contains("Mot de passe incorrect"));

    let resp = browser.login("JEAN@example.com", PASSWORD).await;
    assert_eq!(location(&resp), "/dashboard");
    assert!(browser.follow(resp).await.contains("Tableau de bord"));
}

#[tokio::test]
async fn flash_is_shown_once() {
    let app = common::spawn_app().await;
    let browser = app.browser();

    let resp = browser.login("nobody@example.com", PASSWORD).await;
    assert!(browser.follow(resp).await.contains("Cet email est inconnu."));
    assert!(!browser.page("/").await.contains("Cet email est inconnu."));
}

#[tokio::test]
async fn pages_require_a_session() {
    let app = common::spawn_app().await;
    let browser = app.browser();

    for path in ["/dashboard", "/clients", "/projects", "/tasks", "/profile", "/view-project/1"] {
        let resp = browser.get(path).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location(&resp), "/", "{path}");
    }

    let resp = browser.add_client("Dupont").await;
    assert_eq!(location(&resp), "/");
    assert_eq!(app.count("SELECT COUNT(*) FROM clients").await, 0);
}

#[tokio::test]
async fn login_page_sends_logged_in_users_to_dashboard() {
    let app = common::spawn_app().await;
    let browser = app.signed_up("Dupont", "Jean", "jean@example.com").await;

    let resp = browser.get("/").await;
    assert_eq!(location(&resp), "/dashboard");
}

#[tokio::test]
async fn logout_ends_the_session() {
    let app = common::spawn_app().await;
    let browser = app.signed_up("Dupont", "Jean", "jean@example.com").await;
    assert_eq!(app.count("SELECT COUNT(*) FROM sessions").await, 1);

    let resp = browser.get("/logout").await;
    assert_eq!(location(&resp), "/");
    assert_eq!(app.count("SELECT COUNT(*) FROM sessions").await, 0);

    let resp = browser.get("/dashboard").await;
    assert_eq!(location(&resp), "/");
}

#[tokio::test]
async fn expired_session_is_rejected_and_removed() {
    let app = common::spawn_app().await;
    let browser = app.signed_up("Dupont", "Jean", "jean@example.com").await;

    sqlx::query("UPDATE sessions SET expires_at = '2000-01-01T00:00:00Z'")
        .execute(&app.pool)
        .await
        .unwrap();

    let resp = browser.get("/dashboard").await;
    assert_eq!(location(&resp), "/");
    assert_eq!(app.count("SELECT COUNT(*) FROM sessions").await, 0);
}

#[tokio::test]
async fn reset_password_requires_matching_identity() {
    let app = common::spawn_app().await;
    app.signed_up("Dupont", "Jean", "jean@example.com").await;
    let browser = app.browser();

    let resp = browser
        .post(
            "/reinitialisation-password",
            &[
                ("lastname", "Martin"),
                ("firstname", "Jean"),
                ("email", "jean@example.com"),
                ("password", "nouveau-secret"),
                ("confirmation", "nouveau-secret"),
            ],
        )
        .await;
    assert_eq!(location(&resp), "/reinitialisation-password");
    assert!(browser.follow(resp).await.contains("Aucun compte ne correspond"));

    let resp = browser.login("jean@example.com", PASSWORD).await;
    assert_eq!(location(&resp), "/dashboard");
}

#[tokio::test]
async fn reset_password_replaces_the_password() {
    let app = common::spawn_app().await;
    app.signed_up("Dupont", "Jean", "jean@example.com").await;
    let browser = app.browser();

    let resp = browser
        .post(
            "/reinitialisation-password",
            &[
                ("lastname", "dupont"),
                ("firstname", "jean"),
                ("email", "JEAN@example.com"),
                ("password", "nouveau-secret"),
                ("confirmation", "nouveau-secret"),
            ],
        )
        .await;
    assert_eq!(location(&resp), "/dashboard");
    assert!(browser.follow(resp).await.contains("Le mot de passe a bien été modifié."));

    let subjects: Vec<String> = app
        .mailer
        .sent
        .lock()
        .unwrap()
        .iter()
        .map(|(_, subject)| subject.clone())
        .collect();
    assert!(subjects.contains(&"Réinitialisation de votre mot de passe".to_string()));

    let fresh = app.browser();
    let resp = fresh.login("jean@example.com", PASSWORD).await;
    assert_eq!(location(&resp), "/");
    let resp = fresh.login("jean@example.com", "nouveau-secret").await;
    assert_eq!(location(&resp), "/dashboard");
}

#[tokio::test]
async fn reset_password_logs_out_other_browsers() {
    let app = common::spawn_app().await;
    let earlier = app.signed_up("Dupont", "Jean", "jean@example.com").await;
    assert_eq!(earlier.get("/dashboard").await.status(), StatusCode::OK);

    let resetter = app.browser();
    let resp = resetter
        .post(
            "/reinitialisation-password",
            &[
                ("lastname", "Dupont"),
                ("firstname", "Jean"),
                ("email", "jean@example.com"),
                ("password", "nouveau-secret"),
                ("confirmation", "nouveau-secret"),
            ],
        )
        .await;
    assert_eq!(location(&resp), "/dashboard");

    let resp = earlier.get("/dashboard").await;
    assert_eq!(location(&resp), "/");
    assert_eq!(app.count("SELECT COUNT(*) FROM sessions").await, 1);
    assert_eq!(resetter.get("/dashboard").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_purges_expired_sessions() {
    let app = common::spawn_app().await;
    app.signed_up("Dupont", "Jean", "jean@example.com").await;
    sqlx::query("UPDATE sessions SET expires_at = '2000-01-01T00:00:00Z'")
        .execute(&app.pool)
        .await
        .unwrap();

    let resp = app.browser().login("jean@example.com", PASSWORD).await;
    assert_eq!(location(&resp), "/dashboard");
    assert_eq!(app.count("SELECT COUNT(*) FROM sessions").await, 1);
    assert_eq!(
        app.count("SELECT COUNT(*) FROM sessions WHERE expires_at < '2001-01-01'").await,
        0
    );
}

// ── Profile & account ───────────────────────────────────────────

#[tokio::test]
async fn profile_update_saves_and_rejects_taken_email() {
    let app = common::spawn_app().await;
    app.signed_up("Martin", "Paul", "paul@example.com").await;
    let browser = app.signed_up("Dupont", "Jean", "jean@example.com").await;

    let resp = browser
        .post(
            "/profile",
            &[("lastname", "durand"), ("firstname", "jeanne"), ("email", "jeanne@example.com")],
        )
        .await;
    assert_eq!(location(&resp), "/profile");
    let page = browser.follow(resp).await;
    assert!(page.contains("Les modifications ont bien été sauvegardées."));
    assert!(page.contains("Jeanne DURAND"));

    let resp = browser
        .post(
            "/profile",
            &[("lastname", "Durand"), ("firstname", "Jeanne"), ("email", "Paul@Example.com")],
        )
        .await;
    let page = browser.follow(resp).await;
    assert!(page.contains("Un compte existe déjà avec cette adresse email"));
    assert_eq!(
        app.count("SELECT COUNT(*) FROM users WHERE email = 'jeanne@example.com'").await,
        1
    );
}

#[tokio::test]
async fn deleting_the_account_removes_everything() {
    let app = common::spawn_app().await;
    let other = app.signed_up("Martin", "Paul", "paul@example.com").await;
    other.add_client("Autre").await;

    let browser = app.signed_up("Dupont", "Jean", "jean@example.com").await;
    browser.add_client("Client").await;
    let client_id = app.id_of(CLIENT_ID, "CLIENT").await;
    browser.add_project("Boutique", "En cours", "40", client_id).await;
    let project_id = app.id_of(PROJECT_ID, "Boutique").await;
    browser.add_task("Maquette", "2", project_id).await;

    // A plain visit does not delete anything.
    let resp = browser.get("/delete-account").await;
    assert_eq!(location(&resp), "/profile");
    assert_eq!(app.count("SELECT COUNT(*) FROM users").await, 2);

    let resp = browser.post("/delete-account", &[]).await;
    assert_eq!(location(&resp), "/");
    assert!(browser.follow(resp).await.contains("Compte supprimé avec succès."));

    assert_eq!(app.count("SELECT COUNT(*) FROM users").await, 1);
    assert_eq!(app.count("SELECT COUNT(*) FROM clients").await, 1);
    assert_eq!(app.count("SELECT COUNT(*) FROM projects").await, 0);
    assert_eq!(app.count("SELECT COUNT(*) FROM tasks").await, 0);

    let resp = browser.get("/dashboard").await;
    assert_eq!(location(&resp), "/");
}

// ── Clients ─────────────────────────────────────────────────────

#[tokio::test]
async fn client_crud() {
    let app = common::spawn_app().await;
    let browser = app.signed_up("Dupont", "Jean", "jean@example.com").await;

    let resp = browser.add_client("lefebvre").await;
    assert_eq!(location(&resp), "/clients");
    let page = browser.follow(resp).await;
    assert!(page.contains("LEFEBVRE Jean"));
    assert!(page.contains("contact@acme.fr"));

    let id = app.id_of(CLIENT_ID, "LEFEBVRE").await;
    assert!(browser.page(&format!("/view-client/{id}")).await.contains("0601020304"));

    // Missing phone number: back to the edit form, nothing saved.
    let edit = format!("/edit-client/{id}");
    let resp = browser
        .post(&edit, &[("lastname", "Lefebvre"), ("firstname", "Marc"), ("email", "m@acme.fr")])
        .await;
    assert_eq!(location(&resp), edit);
    assert!(browser.follow(resp).await.contains("Le numéro de téléphone est obligatoire."));

    let resp = browser
        .post(
            &edit,
            &[
                ("lastname", "Lefebvre"),
                ("firstname", "marc"),
                ("phone_number", "0700000000"),
                ("email", "m@acme.fr"),
                ("city", "Lyon"),
            ],
        )
        .await;
    assert_eq!(location(&resp), "/clients");
    let page = browser.follow(resp).await;
    assert!(page.contains("Les modifications ont bien été sauvegardées."));
    assert!(page.contains("LEFEBVRE Marc"));

    let resp = browser.post(&format!("/delete-client/{id}"), &[]).await;
    assert_eq!(location(&resp), "/clients");
    assert!(browser.follow(resp).await.contains("Client supprimé avec succès."));
    assert_eq!(app.count("SELECT COUNT(*) FROM clients").await, 0);
}

#[tokio::test]
async fn get_on_delete_route_only_redirects() {
    let app = common::spawn_app().await;
    let browser = app.signed_up("Dupont", "Jean", "jean@example.com").await;
    browser.add_client("Client").await;
    let id = app.id_of(CLIENT_ID, "CLIENT").await;

    let resp = browser.get(&format!("/delete-client/{id}")).await;
    assert_eq!(location(&resp), "/clients");
    assert_eq!(app.count("SELECT COUNT(*) FROM clients").await, 1);
}

#[tokio::test]
async fn deleting_a_client_cascades_to_projects_and_tasks() {
    let app = common::spawn_app().await;
    let browser = app.signed_up("Dupont", "Jean", "jean@example.com").await;

    browser.add_client("Client").await;
    let client_id = app.id_of(CLIENT_ID, "CLIENT").await;
    browser.add_project("Boutique", "En cours", "40", client_id).await;
    browser.add_project("Blog", "Terminé", "30", client_id).await;
    let project_id = app.id_of(PROJECT_ID, "Boutique").await;
    browser.add_task("Maquette", "2", project_id).await;

    browser.post(&format!("/delete-client/{client_id}"), &[]).await;

    assert_eq!(app.count("SELECT COUNT(*) FROM projects").await, 0);
    assert_eq!(app.count("SELECT COUNT(*) FROM tasks").await, 0);
}

#[tokio::test]
async fn malformed_ids_are_treated_as_missing_records() {
    let app = common::spawn_app().await;
    let browser = app.signed_up("Dupont", "Jean", "jean@example.com").await;

    let resp = browser.get("/view-client/abc").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/clients");
    assert!(browser.follow(resp).await.contains("Veuillez réessayer"));

    let resp = browser.get("/edit-project/1x").await;
    assert_eq!(location(&resp), "/projects");
    let resp = browser.post("/delete-task/abc", &[]).await;
    assert_eq!(location(&resp), "/tasks");
    let resp = browser
        .post("/edit-task/abc", &[("name", "Maquette"), ("status", "En cours"), ("time_spent", "1")])
        .await;
    assert_eq!(location(&resp), "/tasks");
}

// ── Projects ────────────────────────────────────────────────────

#[tokio::test]
async fn new_project_gets_placeholders_and_zero_rate() {
    let app = common::spawn_app().await;
    let browser = app.signed_up("Dupont", "Jean", "jean@example.com").await;
    browser.add_client("Client").await;
    let client_id = app.id_of(CLIENT_ID, "CLIENT").await;

    let resp = browser.add_project("Boutique", "En cours", "", client_id).await;
    assert_eq!(location(&resp), "/projects");

    let (url, hosting, rate): (String, String, f64) =
        sqlx::query_as("SELECT url, hosting_server, hourly_rate FROM projects")
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(url, "Aucune");
    assert_eq!(hosting, "Aucun");
    assert_eq!(rate, 0.0);
}

#[tokio::test]
async fn new_project_rejects_negative_rate_and_missing_client() {
    let app = common::spawn_app().await;
    let browser = app.signed_up("Dupont", "Jean", "jean@example.com").await;
    browser.add_client("Client").await;
    let client_id = app.id_of(CLIENT_ID, "CLIENT").await;

    let resp = browser.add_project("Boutique", "En cours", "-5", client_id).await;
    assert_eq!(location(&resp), "/add-a-project");
    assert!(browser.follow(resp).await.contains("Le tarif horaire doit être un nombre positif."));

    let resp = browser.add_project("Boutique", "En cours", "50", 0).await;
    assert_eq!(location(&resp), "/add-a-project");
    assert!(browser.follow(resp).await.contains("Le client est obligatoire."));

    assert_eq!(app.count("SELECT COUNT(*) FROM projects").await, 0);
}

#[tokio::test]
async fn project_view_shows_totals_from_tasks() {
    let app = common::spawn_app().await;
    let browser = app.signed_up("Dupont", "Jean", "jean@example.com").await;
    browser.add_client("Client").await;
    let client_id = app.id_of(CLIENT_ID, "CLIENT").await;
    browser.add_project("Boutique", "En cours", "50", client_id).await;
    let project_id = app.id_of(PROJECT_ID, "Boutique").await;

    let page = browser.page(&format!("/view-project/{project_id}")).await;
    assert!(page.contains("0.00 €"));

    browser.add_task("Maquette", "1,5", project_id).await;
    browser.add_task("Intégration", "2", project_id).await;

    let page = browser.page(&format!("/view-project/{project_id}")).await;
    assert!(page.contains("3.50 h"));
    assert!(page.contains("175.00 €"));
    assert!(page.contains("Maquette"));

    let listing = browser.page("/projects").await;
    assert!(listing.contains("175.00 €"));
    assert!(listing.contains("CLIENT Jean"));
}

#[tokio::test]
async fn project_edit_requires_every_field() {
    let app = common::spawn_app().await;
    let browser = app.signed_up("Dupont", "Jean", "jean@example.com").await;
    browser.add_client("Client").await;
    let client_id = app.id_of(CLIENT_ID, "CLIENT").await;
    browser.add_project("Boutique", "En cours", "50", client_id).await;
    let id = app.id_of(PROJECT_ID, "Boutique").await;
    let edit = format!("/edit-project/{id}");
    let client = client_id.to_string();

    let resp = browser
        .post(
            &edit,
            &[
                ("name", "Boutique"),
                ("description", "Site"),
                ("url", ""),
                ("hosting_server", "OVH"),
                ("status", "Terminé"),
                ("hourly_rate", "60"),
                ("client", &client),
            ],
        )
        .await;
    assert_eq!(location(&resp), edit);
    assert!(browser.follow(resp).await.contains("URL est obligatoire."));

    let resp = browser
        .post(
            &edit,
            &[
                ("name", "Boutique"),
                ("description", "Site"),
                ("url", "https://boutique.fr"),
                ("hosting_server", "OVH"),
                ("status", "Terminé"),
                ("hourly_rate", "60"),
                ("client", &client),
            ],
        )
        .await;
    assert_eq!(location(&resp), edit);
    let page = browser.follow(resp).await;
    assert!(page.contains("Les modifications ont bien été sauvegardées."));
    assert!(page.contains("boutique.fr"));

    let status: String = sqlx::query_scalar("SELECT status FROM projects")
        .fetch_one(&app.pool)
        .await
        .unwrap();
    assert_eq!(status, "Terminé");
}

#[tokio::test]
async fn deleting_a_project_cascades_to_tasks() {
    let app = common::spawn_app().await;
    let browser = app.signed_up("Dupont", "Jean", "jean@example.com").await;
    browser.add_client("Client").await;
    let client_id = app.id_of(CLIENT_ID, "CLIENT").await;
    browser.add_project("Boutique", "En cours", "50", client_id).await;
    let id = app.id_of(PROJECT_ID, "Boutique").await;
    browser.add_task("Maquette", "1", id).await;

    let resp = browser.post(&format!("/delete-project/{id}"), &[]).await;
    assert_eq!(location(&resp), "/projects");
    assert!(browser.follow(resp).await.contains("Projet supprimé avec succès."));
    assert_eq!(app.count("SELECT COUNT(*) FROM tasks").await, 0);
    assert_eq!(app.count("SELECT COUNT(*) FROM clients").await, 1);
}

// ── Tasks ───────────────────────────────────────────────────────

#[tokio::test]
async fn task_crud() {
    let app = common::spawn_app().await;
    let browser = app.signed_up("Dupont", "Jean", "jean@example.com").await;
    browser.add_client("Client").await;
    let client_id = app.id_of(CLIENT_ID, "CLIENT").await;
    browser.add_project("Boutique", "En cours", "50", client_id).await;
    let project_id = app.id_of(PROJECT_ID, "Boutique").await;

    let resp = browser.add_task("Maquette", "", project_id).await;
    assert_eq!(location(&resp), "/tasks");
    let page = browser.follow(resp).await;
    assert!(page.contains("Maquette"));
    assert!(page.contains("Boutique"));

    let resp = browser.add_task("Sans projet", "1", 0).await;
    assert_eq!(location(&resp), "/add-a-task");
    assert!(browser.follow(resp).await.contains("Le projet est obligatoire."));

    let id = app.id_of(TASK_ID, "Maquette").await;
    let edit = format!("/edit-task/{id}");
    let resp = browser
        .post(&edit, &[("name", "Maquette"), ("status", "Terminé"), ("time_spent", "")])
        .await;
    assert_eq!(location(&resp), edit);
    assert!(browser.follow(resp).await.contains("Le temps passé est obligatoire."));

    let resp = browser
        .post(&edit, &[("name", "Maquette v2"), ("status", "Terminé"), ("time_spent", "4")])
        .await;
    assert_eq!(location(&resp), "/tasks");
    assert!(browser.follow(resp).await.contains("Maquette v2"));

    let resp = browser.post(&format!("/delete-task/{id}"), &[]).await;
    assert_eq!(location(&resp), "/tasks");
    assert!(browser.follow(resp).await.contains("Tâche supprimée avec succès."));
    assert_eq!(app.count("SELECT COUNT(*) FROM tasks").await, 0);
}

// ── Dashboard ───────────────────────────────────────────────────

#[tokio::test]
async fn dashboard_counts_only_own_records() {
    let app = common::spawn_app().await;
    let other = app.signed_up("Martin", "Paul", "paul@example.com").await;
    other.add_client("Autre").await;

    let browser = app.signed_up("Dupont", "Jean", "jean@example.com").await;
    browser.add_client("Premier").await;
    browser.add_client("Second").await;
    let client_id = app.id_of(CLIENT_ID, "PREMIER").await;
    browser.add_project("Boutique", "En cours", "50", client_id).await;
    browser.add_project("Blog", "En cours", "50", client_id).await;
    browser.add_project("Vitrine", "Terminé", "50", client_id).await;

    let page = browser.page("/dashboard").await;
    assert!(page.contains(r#"id="total-projects">3<"#));
    assert!(page.contains(r#"id="in-progress-projects">2<"#));
    assert!(page.contains(r#"id="done-projects">1<"#));
    assert!(page.contains(r#"id="total-clients">2<"#));
}

// ── Isolation between users ─────────────────────────────────────

#[tokio::test]
async fn users_cannot_touch_each_others_records() {
    let app = common::spawn_app().await;
    let owner = app.signed_up("Dupont", "Jean", "jean@example.com").await;
    owner.add_client("Client").await;
    let client_id = app.id_of(CLIENT_ID, "CLIENT").await;
    owner.add_project("Boutique", "En cours", "50", client_id).await;
    let project_id = app.id_of(PROJECT_ID, "Boutique").await;
    owner.add_task("Maquette", "1", project_id).await;
    let task_id = app.id_of(TASK_ID, "Maquette").await;

    let intruder = app.signed_up("Martin", "Paul", "paul@example.com").await;

    let resp = intruder.get(&format!("/view-client/{client_id}")).await;
    assert_eq!(location(&resp), "/clients");
    let resp = intruder.get(&format!("/view-project/{project_id}")).await;
    assert_eq!(location(&resp), "/projects");
    let resp = intruder.get(&format!("/edit-task/{task_id}")).await;
    assert_eq!(location(&resp), "/tasks");

    assert!(!intruder.page("/clients").await.contains("CLIENT Jean"));
    assert!(!intruder.page("/projects").await.contains("Boutique"));
    assert!(!intruder.page("/tasks").await.contains("Maquette"));

    // Attaching records to someone else's client or project is refused.
    let resp = intruder.add_project("Pirate", "En cours", "10", client_id).await;
    assert_eq!(location(&resp), "/add-a-project");
    let resp = intruder.add_task("Pirate", "1", project_id).await;
    assert_eq!(location(&resp), "/add-a-task");

    intruder.post(&format!("/delete-task/{task_id}"), &[]).await;
    intruder.post(&format!("/delete-project/{project_id}"), &[]).await;
    let resp = intruder.post(&format!("/delete-client/{client_id}"), &[]).await;
    assert!(intruder.follow(resp).await.contains("Veuillez réessayer"));

    assert_eq!(app.count("SELECT COUNT(*) FROM clients").await, 1);
    assert_eq!(app.count("SELECT COUNT(*) FROM projects").await, 1);
    assert_eq!(app.count("SELECT COUNT(*) FROM tasks").await, 1);
}

use once_cell::sync::Lazy;
use reqwest::Response;
use sqlx::{migrate, Connection, Executor, PgConnection, PgPool};
use uuid::Uuid;

use nss_portal::{
    config::{get_configuration, DatabaseSettings},
    domain::{
        event::{Event, NewEventBody},
        media_item::{MediaItem, NewMediaItemBody},
        newsletter::{NewNewsletterBody, Newsletter},
        professor::{NewProfessorBody, Professor},
        subscriber::Subscriber,
        subscriber_email::SubscriberEmail,
        team_member::{NewTeamMemberBody, TeamMember},
        validation::validate_insert,
    },
    services::{listings, newsletters, subscriptions},
    startup::{get_connection_db_pool, Application},
    telemetry::{get_subscriber, init_subscriber},
};

// Logs stay quiet unless TEST_LOG is set, e.g. `TEST_LOG=true cargo test | bunyan`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = String::from("info");
    let subscriber_name = String::from("test");

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn_app() -> TestApp {
        Lazy::force(&TRACING);

        let mut config = get_configuration().expect("Missing configuration file.");
        // Port 0 lets the OS pick a free port, so tests can run in parallel.
        config.set_app_port(0);

        let db_pool = create_isolated_database(&mut config.database).await;

        let application = Application::build(config)
            .await
            .expect("Failed to build application.");

        let address = format!("http://127.0.0.1:{}", application.get_port());

        tokio::spawn(application.run_until_stop());

        TestApp {
            address,
            db_pool,
            api_client: reqwest::Client::new(),
        }
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> Response {
        self.api_client
            .post(&format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, path: &str) -> Response {
        self.api_client
            .get(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_subscribe(&self, body: &serde_json::Value) -> Response {
        self.post_json("/newsletter/subscribe", body).await
    }

    pub async fn post_unsubscribe(&self, body: &serde_json::Value) -> Response {
        self.post_json("/newsletter/unsubscribe", body).await
    }

    pub async fn get_newsletters(&self, category: Option<&str>) -> Vec<serde_json::Value> {
        let path = match category {
            Some(category) => format!("/newsletters?category={}", category),
            None => String::from("/newsletters"),
        };

        self.get(&path)
            .await
            .error_for_status()
            .expect("Listing newsletters failed.")
            .json()
            .await
            .expect("Response was not a JSON list.")
    }

    pub async fn find_subscriber(&self, email: &str) -> Option<Subscriber> {
        let email = SubscriberEmail::parse(email.to_string()).unwrap();

        subscriptions::find_subscriber_by_email(&self.db_pool, &email)
            .await
            .expect("Failed to fetch subscriber.")
    }

    pub async fn count_subscribers(&self) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM newsletter_subscribers")
            .fetch_one(&self.db_pool)
            .await
            .expect("Failed to count subscribers.")
    }

    pub async fn seed_newsletter(&self, body: serde_json::Value) -> Newsletter {
        let new_newsletter = validate_insert::<NewNewsletterBody>(body).unwrap();

        newsletters::insert_newsletter(&self.db_pool, &new_newsletter)
            .await
            .expect("Failed to seed newsletter.")
    }

    pub async fn seed_event(&self, body: serde_json::Value) -> Event {
        let new_event = validate_insert::<NewEventBody>(body).unwrap();

        listings::insert_event(&self.db_pool, &new_event)
            .await
            .expect("Failed to seed event.")
    }

    pub async fn seed_team_member(&self, body: serde_json::Value) -> TeamMember {
        let new_member = validate_insert::<NewTeamMemberBody>(body).unwrap();

        listings::insert_team_member(&self.db_pool, &new_member)
            .await
            .expect("Failed to seed team member.")
    }

    pub async fn seed_professor(&self, body: serde_json::Value) -> Professor {
        let new_professor = validate_insert::<NewProfessorBody>(body).unwrap();

        listings::insert_professor(&self.db_pool, &new_professor)
            .await
            .expect("Failed to seed professor.")
    }

    pub async fn seed_media_item(&self, body: serde_json::Value) -> MediaItem {
        let new_item = validate_insert::<NewMediaItemBody>(body).unwrap();

        listings::insert_media_item(&self.db_pool, &new_item)
            .await
            .expect("Failed to seed media item.")
    }
}

/// Every test gets its own freshly migrated database.
async fn create_isolated_database(db_config: &mut DatabaseSettings) -> PgPool {
    let db_name = format!("nss_test_{}", Uuid::new_v4().simple());

    let mut server = PgConnection::connect_with(&db_config.get_server_options())
        .await
        .expect("Failed to reach the Postgres server.");
    server
        .execute(&*format!(r#"CREATE DATABASE "{}";"#, db_name))
        .await
        .expect("Failed to create the test database.");
    server.close().await.expect("Failed to close connection.");

    db_config.set_name(db_name);

    let db_pool = get_connection_db_pool(db_config);

    migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run migrations.");

    db_pool
}

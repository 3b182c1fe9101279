use campus_auth::modules::auth::model::RegisterRequest;
use campus_auth::modules::auth::registration::{RegistrationStrategy, Role};
use campus_auth::modules::users::store::UserStore;
use campus_auth::router::init_router;
use campus_auth::state::init_app_state;
use campus_auth::utils::password::PasswordHasher;
use dotenvy::dotenv;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    // Check if this is a CLI command
    if args.len() > 1 && args[1] == "create-admin" {
        handle_create_admin(args).await;
        return;
    }

    // Normal server startup
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // axum logs rejections from built-in extractors with the `axum::rejection`
                // target, at `TRACE` level. `axum::rejection=trace` enables showing those events
                format!(
                    "{}=debug,tower_http=debug,axum::rejection=trace",
                    env!("CARGO_CRATE_NAME")
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = init_app_state().await;
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    println!("🚀 Server running on http://localhost:3000");
    println!("📚 Swagger UI available at http://localhost:3000/swagger-ui");
    println!("📖 Scalar UI available at http://localhost:3000/scalar");
    axum::serve(listener, app).await.unwrap();
}

/// Bootstrap the first administrator; the admin signup route itself
/// requires an admin token.
async fn handle_create_admin(args: Vec<String>) {
    if args.len() != 6 {
        eprintln!(
            "Usage: {} create-admin <username> <password> <full_name> <nip>",
            args[0]
        );
        std::process::exit(1);
    }

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let candidate = RegisterRequest {
        username: Some(args[2].clone()),
        password: Some(args[3].clone()),
        full_name: Some(args[4].clone()),
        identifier: Some(args[5].clone()),
    };

    let users = UserStore::new(pool);
    let hasher = PasswordHasher::default();

    match RegistrationStrategy::for_role(Role::Admin)
        .register(&users, &hasher, &candidate)
        .await
    {
        Ok(receipt) => {
            println!("✅ Administrator created successfully!");
            println!("   Username: {}", receipt.username);
        }
        Err(e) => {
            eprintln!("❌ Error creating administrator: {}", e);
            std::process::exit(1);
        }
    }
}

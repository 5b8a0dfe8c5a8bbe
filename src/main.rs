use dotenvy::dotenv;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use lectio::config::database::init_db_pool;
use lectio::modules::accounts::model::{NewAccount, Role};
use lectio::router::init_router;
use lectio::state::init_app_state;
use lectio::store::AccountRepo;
use lectio::store::postgres::PgStore;
use lectio::utils::password::hash_password;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let args: Vec<String> = std::env::args().collect();

    // The first admin account cannot be created through the role-gated API.
    if args.len() > 1 && args[1] == "create-admin" {
        handle_create_admin(args).await;
        return;
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
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

async fn handle_create_admin(args: Vec<String>) {
    if args.len() != 4 {
        eprintln!("Usage: {} create-admin <login> <password>", args[0]);
        std::process::exit(1);
    }

    let login = &args[2];
    let password = &args[3];

    let store = PgStore::new(init_db_pool().await);

    match create_admin(&store, login, password).await {
        Ok(()) => {
            println!("✅ Admin account created!");
            println!("   Login: {}", login);
        }
        Err(e) => {
            eprintln!("❌ Error creating admin account: {}", e);
            std::process::exit(1);
        }
    }
}

async fn create_admin(store: &PgStore, login: &str, password: &str) -> anyhow::Result<()> {
    if store.find_account_by_login(login).await.map_err(|e| e.error)?.is_some() {
        anyhow::bail!("an account already exists with the login {}", login);
    }

    let hashed = hash_password(password).map_err(|e| e.error)?;

    store
        .insert_account(NewAccount {
            login: login.to_string(),
            password: hashed,
            role: Role::Admin,
        })
        .await
        .map_err(|e| e.error)?;

    Ok(())
}

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

mod constants;
mod handlers;
mod middleware;
mod routes;
mod types;
mod utils;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    // Database connection
    let database_url = constants::config::get_database_url()
        .expect("DATABASE_URL environment variable is required");

    let db: DatabaseConnection = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    // Apply pending schema migrations in order before serving traffic
    Migrator::up(&db, None)
        .await
        .expect("Failed to apply database migrations");

    let server_address = constants::config::get_server_address();
    println!("🚀 Starting Employee Management API server...");
    println!("📊 Database connected and migrations applied");
    println!("🌐 Server will be available at http://{}", server_address);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(db.clone()))
            .service(routes::api::configure_routes())
    })
    .bind(&server_address)?
    .run()
    .await
}

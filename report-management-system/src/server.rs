use std::sync::Arc;

use actix_easy_multipart::MultipartFormConfig;
use actix_web::web;
use colored::Colorize;
use tokio::task::JoinHandle;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::api;
use crate::infrastructure::config::build_config;
use crate::infrastructure::ServiceProvider;

pub fn run() {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(async_run());
}

pub async fn async_run() {
    let config = match build_config() {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .try_init()
    {
        return eprintln!("{}: {}", "Cannot build logger".red(), e);
    }

    let service_provider = match ServiceProvider::build(config).await {
        Ok(x) => Arc::new(x),
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build Service Provider".red(), e);
        }
    };

    let tasks = service_provider.background_services();
    let handles = tasks
        .into_iter()
        .map(|x| {
            tokio::spawn(async move {
                let task = x.clone();
                task.run().await
            })
        })
        .collect::<Vec<JoinHandle<()>>>();

    tokio::select! {
        _ = initialize_web_host(service_provider) => {

        }
        _ = tokio::signal::ctrl_c() => {
            info!("Stoping Services (ctrl-c handling).");
            for handle in handles {
                handle.abort()
            }
            std::process::exit(0);
        }
    }
}

pub async fn initialize_web_host(sp: Arc<ServiceProvider>) {
    let bind_address = sp.config.host.bind_address.clone();
    let bind_port = sp.config.host.bind_port;

    match actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .max_age(86400);

        actix_web::App::new()
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(cors)
            .app_data(MultipartFormConfig::default().total_limit(100 * 1024 * 1024))
            .app_data(actix_web::web::Data::from(sp.clone()))
            .service(
                web::scope("")
                    .service(api::reports::create_report)
                    .service(api::reports::list_reports)
                    .service(api::reports::get_report)
                    .service(api::reports::edit_report)
                    .service(api::reports::delete_report)
                    .service(api::reports::download_pdf)
                    .service(api::photos::upload_photos)
                    .service(api::photos::delete_photo)
                    .service(api::schedules::list_schedules)
                    .service(api::schedules::get_schedule)
                    .service(api::schedules::create_schedule)
                    .service(api::schedules::edit_schedule)
                    .service(api::schedules::delete_schedule)
                    .service(api::notifications::notification_status)
                    .service(api::notifications::trigger_notification_check)
                    .service(api::notifications::send_test_mail)
                    .service(api::admin::export_data)
                    .service(api::admin::import_data),
            )
    })
    .bind((bind_address, bind_port))
    .unwrap()
    .disable_signals()
    .run()
    .await
    {
        Ok(_) => info!("Web server stopped successfully."),
        Err(e) => error!("Web server into erorr: {}", e),
    }
}

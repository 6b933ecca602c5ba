mod telemetry;

use followup_api::Application;
use followup_infra::{run_migration, setup_context};
use telemetry::{get_subscriber, init_subscriber};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("followup_server".into(), "info".into());
    init_subscriber(subscriber);

    run_migration().await?;
    let context = setup_context().await?;

    let app = Application::new(context).await?;
    app.start().await?;
    Ok(())
}

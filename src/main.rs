use layered_app::app::{self, DEFAULT_MODEL_ID};
use layered_app::utils::logger;
use layered_app::{Config, Context, Model};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let ctx = Context::background();

    let config = Config::new();
    logger::init_logger(&config);

    let controller = app::wire();

    // A failure is logged inside run_once; the process still exits 0.
    let _ = app::run_once(&ctx, &controller, Model::new(DEFAULT_MODEL_ID)).await;
}

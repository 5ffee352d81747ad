use loanrisk::{
    arguments::{is_retrain_enabled, patterns, print_debug_info, print_help},
    engine::PredictionEngine,
    logger::{self, LogTag},
    model::artifact,
    webserver::{self, state::AppState},
};
use std::sync::Arc;

/// Main entry point for the LoanRisk service
///
/// Handles:
/// - Special modes (--retrain, --help)
/// - Default mode: load-or-train the model, then serve predictions
#[tokio::main]
async fn main() {
    // Ensure all directories exist BEFORE logger initialization
    // (Logger needs the logs directory to create log files)
    if let Err(e) = loanrisk::paths::ensure_all_directories() {
        eprintln!("❌ Failed to create required directories: {}", e);
        std::process::exit(1);
    }

    // Initialize logger system (now safe to create log files)
    logger::init();

    // Check for help request first (before any other processing)
    if patterns::is_help_requested() {
        print_help();
        std::process::exit(0);
    }

    logger::info(LogTag::System, "🚀 LoanRisk service starting up...");

    // Print debug information if any debug modes are enabled
    print_debug_info();

    let artifact_path = loanrisk::paths::get_model_artifact_path();

    // =========================================================================
    // SPECIAL MODES (execute and exit)
    // =========================================================================

    // Retrain mode - refresh the model artifact and exit
    if is_retrain_enabled() {
        logger::info(LogTag::System, "🔄 Retrain mode enabled");

        match artifact::train_and_save(&artifact_path) {
            Ok(model) => {
                logger::info(
                    LogTag::System,
                    &format!(
                        "✅ Model {} retrained and saved to {}",
                        model.version(),
                        artifact_path.display()
                    ),
                );
                logger::flush();
                std::process::exit(0);
            }
            Err(e) => {
                logger::error(LogTag::System, &format!("❌ Retrain failed: {}", e));
                logger::flush();
                std::process::exit(1);
            }
        }
    }

    // =========================================================================
    // MAIN SERVICE EXECUTION
    // =========================================================================

    let model = match artifact::load_or_train(&artifact_path) {
        Ok(model) => model,
        Err(e) => {
            logger::error(LogTag::System, &format!("❌ Model unavailable: {}", e));
            logger::flush();
            std::process::exit(1);
        }
    };

    let engine = match PredictionEngine::new(model) {
        Ok(engine) => engine,
        Err(e) => {
            logger::error(
                LogTag::System,
                &format!("❌ Failed to build prediction engine: {}", e),
            );
            logger::flush();
            std::process::exit(1);
        }
    };

    // Explicit immutable context, shared read-only by all requests
    let state = Arc::new(AppState::new(Arc::new(engine)));

    if let Err(e) = ctrlc::set_handler(|| {
        webserver::shutdown();
    }) {
        logger::warning(
            LogTag::System,
            &format!("⚠️ Failed to install ctrl-c handler: {}", e),
        );
    }

    match webserver::start_server(state).await {
        Ok(_) => {
            logger::info(LogTag::System, "✅ LoanRisk service stopped");
        }
        Err(e) => {
            logger::error(LogTag::System, &format!("❌ LoanRisk service failed: {}", e));
            logger::flush();
            std::process::exit(1);
        }
    }

    logger::flush();
}

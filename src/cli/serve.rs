use crate::{api::ApiState, config, error, info, server};

/// Runs the local JSON API until interrupted.
pub async fn serve(addr: Option<String>) {
    let missing = config::missing_vars(config::API_REQUIRED_VARS);
    if !missing.is_empty() {
        error!("Missing configuration: {}", missing.join(", "));
    }

    let addr = addr.unwrap_or_else(config::api_server_addr);
    let state = ApiState {
        source: config::analysis_source(),
    };

    match &state.source {
        Some(settings) => info!("Analysis source: {}", settings.url),
        None => info!("No analysis source configured, missing audio features will be synthetic."),
    }
    info!("Listening on http://{}", addr);

    if let Err(e) = server::serve_api(&addr, state).await {
        error!("Server failed: {}", e);
    }
}

use crate::application::http::analysis::router::AnalysisApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EcoScan API"
    ),
    nest(
        (path = "/api", api = AnalysisApiDoc),
    )
)]
pub struct ApiDoc;

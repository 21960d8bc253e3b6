use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers::advertisement;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(advertisement::create_advertisement))
        .routes(routes!(
            advertisement::get_advertisement,
            advertisement::update_advertisement,
            advertisement::delete_advertisement
        ))
}

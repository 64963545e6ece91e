use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        dashboard::{self, DASHBOARD_TAG},
        health::{self, HEALTH_TAG},
        reservation::{self, RESERVATION_TAG},
        room::{self, ROOM_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Hotel Desk API", description = "Room reservations and front-desk operations"),
    tags(
        (name = HEALTH_TAG, description = "Service liveness"),
        (name = ROOM_TAG, description = "Room catalogue and availability search"),
        (name = RESERVATION_TAG, description = "Reservation lifecycle"),
        (name = DASHBOARD_TAG, description = "Front-desk views of the current day")
    )
)]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document through Swagger UI at
/// `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .routes(routes!(room::get_rooms))
        .routes(routes!(room::get_room))
        .routes(routes!(room::search_available_rooms))
        .routes(routes!(reservation::create_reservation))
        .routes(routes!(
            reservation::get_reservation,
            reservation::update_reservation,
            reservation::cancel_reservation
        ))
        .routes(routes!(reservation::check_in))
        .routes(routes!(reservation::check_out))
        .routes(routes!(dashboard::arrivals_today))
        .routes(routes!(dashboard::departures_today))
        .routes(routes!(dashboard::occupancy))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}

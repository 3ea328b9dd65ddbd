use employee_application::EmployeeGatewayService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub gateway_service: EmployeeGatewayService,
}

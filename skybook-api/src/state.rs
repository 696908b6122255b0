use std::sync::Arc;

use skybook_core::{BookingEngine, FlightRegistry, UserStore};

use crate::password::PasswordService;
use crate::token::TokenService;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub registry: Arc<FlightRegistry>,
    pub engine: Arc<BookingEngine>,
    pub tokens: Arc<TokenService>,
    pub passwords: Arc<PasswordService>,
}
